use std::fmt::Write;

use weather_core::Page;

pub const ERROR_TEXT: &str = "Location not found. Try \"City\", \"City, State\" or \"City, Country\".";

/// Draw the page as terminal text.
pub fn render(page: &Page) -> String {
    let mut out = String::new();

    if page.is_error_visible() {
        let _ = writeln!(out, "! {ERROR_TEXT}");
    }

    let fields = &page.fields;
    if !fields.is_empty() {
        let _ = writeln!(out, "{}", fields.condition);
        let _ = writeln!(out, "{}", fields.location);
        let _ = writeln!(out, "{}\u{00b0}F", fields.degrees);
        let _ = writeln!(out, "{}", fields.feels_like);
        let _ = writeln!(out, "{}", fields.wind_mph);
        let _ = writeln!(out, "{}", fields.humidity);
    }

    out
}
