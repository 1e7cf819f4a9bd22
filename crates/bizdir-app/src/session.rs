// Rust guideline compliant 2026-02-09

//! Interactive browse session.
//!
//! A session binds a loaded store to the browse state machine and a view
//! cache. Front ends feed it [`SessionCommand`]s parsed from user input and
//! render whatever it returns.

use crate::browse::{parse_facet, DirectoryPage};
use crate::detail::{lookup, DetailOutcome};
use crate::error::{AppError, Result};
use bizdir_core::{
    BrowseAction, BrowseState, Effect, ListingStore, PageMarker, Route, ViewCache,
};
use serde::Serialize;
use std::sync::Arc;

/// A command entered in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// A browse state transition.
    Browse(BrowseAction),
    /// Show the detail view of a listing.
    Show(String),
    /// Navigate by route path.
    Open(String),
    /// Redisplay the current page.
    Refresh,
    /// List the available commands.
    Help,
    /// End the session.
    Quit,
}

/// Help text for interactive sessions.
pub const SESSION_HELP: &str = "\
Commands:
  search TEXT           Set the search text (empty clears it)
  category|city|neighborhood|area|state VALUE
                        Select a filter value (empty clears it)
  clear [FILTER]        Clear one filter, or everything
  page N                Go to page N
  next | prev           Go to the next or previous page
  show ID               Show a business
  open PATH             Open a route such as / or /business/ID
  list                  Show the current page again
  help                  Show this help
  quit                  Leave the session";

impl SessionCommand {
    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is unknown or its argument is invalid.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let argument = || (!rest.is_empty()).then(|| rest.to_string());

        match verb.to_lowercase().as_str() {
            "" | "list" | "ls" => Ok(SessionCommand::Refresh),
            "search" | "s" => Ok(SessionCommand::Browse(BrowseAction::SetSearch(
                rest.to_string(),
            ))),
            "category" | "city" | "location" | "neighborhood" | "area" | "state" => {
                let facet = parse_facet(verb)?;
                Ok(SessionCommand::Browse(BrowseAction::SetFilter(facet, argument())))
            }
            "clear" => match argument() {
                Some(name) => Ok(SessionCommand::Browse(BrowseAction::ClearFilter(
                    parse_facet(&name)?,
                ))),
                None => Ok(SessionCommand::Browse(BrowseAction::ClearAll)),
            },
            "page" | "p" => {
                let page = rest.parse::<usize>().map_err(|_| {
                    AppError::InvalidInput(format!("Invalid page number: {}", rest))
                })?;
                Ok(SessionCommand::Browse(BrowseAction::GoToPage(
                    PageMarker::Page(page),
                )))
            }
            "next" | "n" => Ok(SessionCommand::Browse(BrowseAction::NextPage)),
            "prev" | "previous" => Ok(SessionCommand::Browse(BrowseAction::PreviousPage)),
            "show" => argument()
                .map(SessionCommand::Show)
                .ok_or_else(|| AppError::InvalidInput("show needs a business ID".to_string())),
            "open" => argument()
                .map(SessionCommand::Open)
                .ok_or_else(|| AppError::InvalidInput("open needs a path".to_string())),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(AppError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for a list of commands.",
                other
            ))),
        }
    }
}

/// Where a navigation ended up.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "destination", rename_all = "snake_case")]
pub enum Destination {
    /// The directory page.
    Directory(DirectoryPage),
    /// A detail lookup.
    Detail(DetailOutcome),
}

/// Interactive browse session over one loaded store.
#[derive(Debug)]
pub struct BrowseSession {
    store: ListingStore,
    title: String,
    state: BrowseState,
    cache: ViewCache,
}

impl BrowseSession {
    /// Starts a session on page 1 with nothing selected.
    #[must_use]
    pub fn new(store: ListingStore, title: impl Into<String>) -> Self {
        Self::with_state(store, title, BrowseState::default())
    }

    /// Starts a session from an existing state.
    #[must_use]
    pub fn with_state(store: ListingStore, title: impl Into<String>, state: BrowseState) -> Self {
        Self {
            store,
            title: title.into(),
            state,
            cache: ViewCache::new(),
        }
    }

    /// Returns the current browse state.
    #[must_use]
    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Returns the session's store.
    #[must_use]
    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    /// Returns the view cache, for diagnostics.
    #[must_use]
    pub fn cache(&self) -> &ViewCache {
        &self.cache
    }

    /// Returns the current directory page.
    pub fn page(&mut self) -> DirectoryPage {
        let view = self.current_view();
        DirectoryPage::new(&self.title, &self.state, &view)
    }

    fn current_view(&mut self) -> Arc<bizdir_core::DirectoryView> {
        self.cache.get_or_derive(&self.store, &self.state)
    }

    /// Applies a browse action against the current page count.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not allowed in the current state;
    /// the state is unchanged in that case.
    pub fn apply(&mut self, action: BrowseAction) -> Result<Effect> {
        let total_pages = self.current_view().total_pages;
        let effect = self.state.apply(action, total_pages)?;
        tracing::debug!(page = self.state.page, ?effect, "browse action applied");
        Ok(effect)
    }

    /// Looks up a listing for the detail view.
    #[must_use]
    pub fn show(&self, id: &str) -> DetailOutcome {
        lookup(&self.store, id)
    }

    /// Navigates by route path.
    ///
    /// The directory route keeps the current selections.
    ///
    /// # Errors
    ///
    /// Returns an error if the path matches no view.
    pub fn open(&mut self, path: &str) -> Result<Destination> {
        match Route::parse(path)? {
            Route::Directory => Ok(Destination::Directory(self.page())),
            Route::Detail(id) => Ok(Destination::Detail(self.show(&id))),
        }
    }
}
