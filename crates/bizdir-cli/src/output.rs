// Rust guideline compliant 2026-02-06

//! Output formatting module for the bizdir CLI.
//!
//! This module renders directory pages, detail views and facet lists in
//! the three output formats (JSON, table, plain text).

use crate::terminal::{paint, wrap_text};
use bizdir_app::browse::{CLEAR_ALL_LABEL, EMPTY_MESSAGE, EMPTY_TITLE};
use bizdir_app::detail::{SectionKind, StarRow};
use bizdir_app::{
    AppError, DetailOutcome, DetailView, DirectoryPage, ErrorEnvelope, NotFoundView,
    SuccessEnvelope,
};
use bizdir_core::{Facet, Facets, OutputFormat, PageMarker, PageNavigation, Route};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

/// Output formatter trait.
///
/// Defines the interface for rendering directory data in different output
/// formats.
pub trait OutputFormatter {
    /// Formats a directory page.
    fn format_page(&self, page: &DirectoryPage) -> String;

    /// Formats the outcome of a detail lookup.
    fn format_detail(&self, outcome: &DetailOutcome) -> String;

    /// Formats the facet value lists.
    fn format_facets(&self, facets: &Facets) -> String;

    /// Formats a short status message, such as the result of `init`.
    fn format_status(&self, message: &str) -> String;

    /// Formats an application error.
    fn format_app_error(&self, error: &AppError) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Wraps results in the standard success and error envelopes.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_page(&self, page: &DirectoryPage) -> String {
        Self::render(&SuccessEnvelope::for_route(&Route::Directory, page))
    }

    fn format_detail(&self, outcome: &DetailOutcome) -> String {
        let id = match outcome {
            DetailOutcome::Found(view) => &view.listing.id,
            DetailOutcome::NotFound(view) => &view.id,
        };
        Self::render(&SuccessEnvelope::for_route(
            &Route::Detail(id.clone()),
            outcome,
        ))
    }

    fn format_facets(&self, facets: &Facets) -> String {
        Self::render(&SuccessEnvelope::new(facets))
    }

    fn format_status(&self, message: &str) -> String {
        Self::render(&SuccessEnvelope::new(json!({ "message": message })))
    }

    fn format_app_error(&self, error: &AppError) -> String {
        Self::render(&json!({
            "status": "error",
            "error": ErrorEnvelope::from_error(error),
        }))
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "status": "error", "error": { "message": error } }).to_string()
    }
}

/// Table output formatter.
///
/// Formats directory data as human-readable tables with optional colors.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn heading(&self, text: &str) -> String {
        paint(text, Color::Cyan, true, self.use_color)
    }

    fn format_not_found(&self, view: &NotFoundView) -> String {
        format!(
            "{}\nNo business with ID '{}'.\n{}: {}\n",
            paint(view.title, Color::Red, true, self.use_color),
            view.id,
            view.action,
            view.action_route
        )
    }

    fn format_found(&self, view: &DetailView) -> String {
        let listing = &view.listing;
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.heading(&listing.name)));
        output.push_str(&format!("{}\n", listing.category));
        output.push_str(&format!(
            "{}\n",
            rating_line(view.stars, listing.rating, listing.review_count)
        ));

        if !view.links.is_empty() {
            output.push('\n');
            if let Some(phone) = &view.links.phone {
                output.push_str(&format!("Call Now:        {}\n", phone));
            }
            if let Some(map) = &view.links.map {
                output.push_str(&format!("Get Directions:  {}\n", map));
            }
            if let Some(website) = &view.links.website {
                output.push_str(&format!("Visit Website:   {}\n", website));
            }
        }

        output.push_str(&format!("\n{}\n", self.heading("Contact & Location")));
        if let Some(address) = &listing.address {
            output.push_str(&format!("  Address:       {}\n", wrap_text(address, 17)));
        }
        output.push_str(&format!("  City:          {}\n", listing.city));
        output.push_str(&format!("  Area:          {}\n", listing.neighborhood));
        output.push_str(&format!("  State:         {}\n", listing.state));
        if let Some(phone) = &listing.phone {
            output.push_str(&format!("  Phone:         {}\n", phone));
        }

        if !view.hours.is_empty() {
            output.push_str(&format!("\n{}\n", self.heading("Opening Hours")));
            let mut builder = Builder::default();
            builder.push_record(vec!["Day", "Hours"]);
            for row in &view.hours {
                let hours = if row.closed {
                    paint(&row.hours, Color::Red, false, self.use_color)
                } else {
                    row.hours.clone()
                };
                builder.push_record(vec![row.day.clone(), hours]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            output.push_str(&format!("{}\n", table));
        }

        if !view.sections.is_empty() {
            output.push_str(&format!("\n{}\n", self.heading("Services & Amenities")));
            for section in &view.sections {
                output.push_str(&format!("  {} {}\n", section_icon(section.kind), section.name));
                for row in &section.rows {
                    let color = if row.available { Color::Green } else { Color::Red };
                    output.push_str(&format!(
                        "    {}: {}\n",
                        row.label,
                        paint(row.status(), color, false, self.use_color)
                    ));
                }
            }
        }

        output
    }
}

impl OutputFormatter for TableFormatter {
    fn format_page(&self, page: &DirectoryPage) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.heading(&page.title)));
        output.push_str(&format!("{}\n", page.summary));

        if !page.chips.is_empty() {
            let labels: Vec<&str> = page.chips.iter().map(|c| c.label.as_str()).collect();
            output.push_str(&format!(
                "Filters ({}): {}\n",
                page.view.active_filters,
                labels.join(" | ")
            ));
        }

        if page.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{}\n",
                paint(EMPTY_TITLE, Color::Yellow, true, self.use_color)
            ));
            output.push_str(&format!("{}\n", wrap_text(EMPTY_MESSAGE, 0)));
            output.push_str(&format!(
                "{}: run 'bizdir list' without filters, or 'clear' in explore\n",
                CLEAR_ALL_LABEL
            ));
            return output;
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Name", "Category", "Location", "Rating", "Reviews", "ID"]);
        for card in &page.cards {
            builder.push_record(vec![
                card.name.clone(),
                card.category.clone(),
                card.location.clone(),
                card.rating
                    .map(|r| format!("{:.1}", r))
                    .unwrap_or_else(|| "-".to_string()),
                card.reviews.clone(),
                card.id.clone(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        output.push_str(&format!("{}\n", table));

        if page.view.navigation.is_visible() {
            output.push_str(&format!("{}\n", navigation_line(&page.view.navigation)));
        }

        output
    }

    fn format_detail(&self, outcome: &DetailOutcome) -> String {
        match outcome {
            DetailOutcome::Found(view) => self.format_found(view),
            DetailOutcome::NotFound(view) => self.format_not_found(view),
        }
    }

    fn format_facets(&self, facets: &Facets) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Filter", "Count", "Values"]);
        for facet in Facet::ALL {
            let values = facets.values(facet);
            builder.push_record(vec![
                facet.heading().to_string(),
                values.len().to_string(),
                values.join(", "),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_status(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_app_error(&self, error: &AppError) -> String {
        self.format_error(&error.to_string())
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", paint("Error:", Color::Red, true, self.use_color), error)
    }
}

/// Plain text output formatter.
///
/// One record per line, tab separated, without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_page(&self, page: &DirectoryPage) -> String {
        let mut output = format!("{}\n", page.summary);

        if page.is_empty() {
            output.push_str(&format!("{}\n{}\n", EMPTY_TITLE, EMPTY_MESSAGE));
            return output;
        }

        for card in &page.cards {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                card.id,
                card.name,
                card.category,
                card.location,
                card.rating.map(|r| format!("{:.1}", r)).unwrap_or_default()
            ));
        }
        if page.view.navigation.is_visible() {
            output.push_str(&format!("{}\n", navigation_line(&page.view.navigation)));
        }
        output
    }

    fn format_detail(&self, outcome: &DetailOutcome) -> String {
        let view = match outcome {
            DetailOutcome::Found(view) => view,
            DetailOutcome::NotFound(view) => {
                return format!("{}\n{}\t{}\n", view.title, view.action, view.action_route);
            }
        };

        let listing = &view.listing;
        let mut output = String::new();
        output.push_str(&format!("{}\n{}\n{}\n", listing.id, listing.name, listing.category));
        output.push_str(&format!(
            "{}\t{}\t{}\n",
            listing.city, listing.neighborhood, listing.state
        ));
        for link in [&view.links.phone, &view.links.map, &view.links.website]
            .into_iter()
            .flatten()
        {
            output.push_str(&format!("{}\n", link));
        }
        for row in &view.hours {
            output.push_str(&format!("{}\t{}\n", row.day, row.hours));
        }
        for section in &view.sections {
            for row in &section.rows {
                output.push_str(&format!("{}\t{}\t{}\n", section.name, row.label, row.status()));
            }
        }
        output
    }

    fn format_facets(&self, facets: &Facets) -> String {
        let mut output = String::new();
        for facet in Facet::ALL {
            for value in facets.values(facet) {
                output.push_str(&format!("{}\t{}\n", facet.as_str(), value));
            }
        }
        output
    }

    fn format_status(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_app_error(&self, error: &AppError) -> String {
        self.format_error(&error.to_string())
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

fn rating_line(stars: Option<StarRow>, rating: Option<f64>, review_count: u64) -> String {
    match (stars, rating) {
        (Some(stars), Some(rating)) => {
            let filled = usize::from(stars.filled);
            let empty = usize::from(stars.total).saturating_sub(filled);
            format!(
                "{}{} {:.1} ({} reviews)",
                "★".repeat(filled),
                "☆".repeat(empty),
                rating,
                review_count
            )
        }
        _ => format!("No rating ({} reviews)", review_count),
    }
}

fn section_icon(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Payment => "[$]",
        SectionKind::Accessibility => "[♿]",
        SectionKind::Other => "[*]",
    }
}

/// Renders the page navigation, e.g. `« Prev  1 … 4 [5] 6 … 12  Next »`.
pub fn navigation_line(navigation: &PageNavigation) -> String {
    let mut parts = Vec::new();
    if navigation.has_previous {
        parts.push("« Prev".to_string());
    }
    for marker in &navigation.markers {
        parts.push(match marker {
            PageMarker::Page(n) if *n == navigation.current => format!("[{}]", n),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        });
    }
    if navigation.has_next {
        parts.push("Next »".to_string());
    }
    parts.join("  ")
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
