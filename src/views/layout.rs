//! Shared document shell and fragments.

use std::collections::BTreeMap;

/// Escape text interpolated into HTML.
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap page content in the shared document shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Render flashed validation errors as a list; empty string when none.
pub fn error_list(errors: &BTreeMap<String, Vec<String>>) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for messages in errors.values() {
        for message in messages {
            items.push_str(&format!("<li>{}</li>", escape(message)));
        }
    }
    format!("<ul class=\"errors\">{}</ul>\n", items)
}

/// Render a one-shot status message; empty string when none.
pub fn status_line(status: Option<&str>) -> String {
    match status {
        Some(status) => format!("<p class=\"status\">{}</p>\n", escape(status)),
        None => String::new(),
    }
}

/// Minimal error page; carries the status and message only, never
/// resource data.
pub fn error_page(status: u16, message: &str) -> String {
    page(
        &status.to_string(),
        &format!("<h1>{}</h1>\n<p>{}</p>", status, escape(message)),
    )
}
