//! Plain-text rendering of results and sidebar listings.
//!
//! Pure display code: truncation and column layout only, no logic.

use restbench_application::SidebarGroup;
use restbench_domain::{BulkReport, Collection, ResultRow};

/// Longest body excerpt shown in a result row.
const BODY_EXCERPT: usize = 30;
/// Longest response excerpt shown in a result row.
const RESPONSE_EXCERPT: usize = 48;

/// Prints result rows as a table.
pub fn print_results(rows: &[ResultRow]) {
    println!(
        "{:<12} {:<7} {:<40} {:<30} {:>6} {:>8}  {}",
        "Testcase", "Method", "Endpoint", "Body", "Status", "Time", "Response"
    );
    for row in rows {
        println!(
            "{:<12} {:<7} {:<40} {:<30} {:>6} {:>8}  {}",
            row.testcase_id.as_deref().unwrap_or("-"),
            row.method,
            truncate(&row.url, 40),
            truncate(&row.body, BODY_EXCERPT),
            row.status_code
                .map_or_else(|| "-".to_string(), |code| code.to_string()),
            row.response_time_ms
                .map_or_else(|| "-".to_string(), |ms| format!("{ms}ms")),
            row.response_body
                .as_deref()
                .map_or_else(|| "no response".to_string(), |body| truncate(
                    body,
                    RESPONSE_EXCERPT
                )),
        );
    }
}

/// Prints a bulk report: aggregate counts, then the per-row table.
pub fn print_report(report: &BulkReport) {
    println!(
        "{} passed, {} failed ({} total)",
        report.success_count,
        report.failure_count,
        report.total()
    );
    if !report.details.is_empty() {
        print_results(&report.details);
    }
}

/// Prints history entries grouped by folder.
pub fn print_sidebar(groups: &[SidebarGroup<'_>]) {
    for group in groups {
        match group.collection {
            Some(collection) => println!(
                "{} ({}) [{}]",
                collection.name,
                collection.id,
                collection.auth.ui_label()
            ),
            None => {
                if group.records.is_empty() {
                    continue;
                }
                println!("(unclassified)");
            }
        }
        for record in &group.records {
            println!(
                "  {:<12} {:<7} {}",
                record.api_id.as_deref().unwrap_or("-"),
                record.method,
                record.url
            );
        }
    }
}

/// Prints the collection listing.
pub fn print_collections(collections: &[Collection]) {
    for collection in collections {
        println!(
            "{:<12} {:<24} {}",
            collection.id,
            collection.name,
            collection.auth.ui_label()
        );
    }
}

/// Cuts the text down to `max` characters, character-boundary safe.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("abc", 30), "abc");
    }

    #[test]
    fn test_truncate_cuts_at_limit() {
        let long = "x".repeat(40);
        assert_eq!(truncate(&long, 30).len(), 30);
    }

    #[test]
    fn test_truncate_is_char_boundary_safe() {
        assert_eq!(truncate("테스트케이스", 3), "테스트");
    }
}
