//! Plain-text rendering for the command line host.

use crate::iconify::{IconId, SearchResult};
use crate::interactive::domain::grouping::group_icons;
use crate::interactive::domain::models::{CollectionGroup, FetchMode};
use crate::interactive::ui::snapshot::{FetchStatus, Snapshot};
use colored::Colorize;

fn icon_line(id: &str, selected: bool, use_color: bool) -> String {
    match (selected, use_color) {
        (true, true) => format!("  {} {}", "*".bright_green(), id.bright_green().bold()),
        (true, false) => format!("  * {id}"),
        (false, _) => format!("    {id}"),
    }
}

fn is_selected(selection: &[IconId], id: &str) -> bool {
    selection.iter().any(|s| s.as_str() == id)
}

/// One header per collection followed by its icons, selected ones starred.
pub fn format_groups(groups: &[CollectionGroup], selection: &[IconId], use_color: bool) -> String {
    let mut out = Vec::new();
    for group in groups {
        let count = format!("{} icon{}", group.icons.len(), plural(group.icons.len()));
        let header = if use_color {
            format!(
                "{} ({}) - {}",
                group.name.bright_yellow(),
                group.prefix.bright_blue(),
                count.dimmed()
            )
        } else {
            format!("{} ({}) - {}", group.name, group.prefix, count)
        };
        out.push(header);
        for id in &group.icons {
            out.push(icon_line(id, is_selected(selection, id), use_color));
        }
    }
    out.join("\n")
}

pub fn format_icons(icons: &[String], selection: &[IconId], use_color: bool) -> String {
    icons
        .iter()
        .map(|id| icon_line(id, is_selected(selection, id), use_color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Grouped view of a one-shot search followed by a count footer.
pub fn format_search_result(result: &SearchResult, use_color: bool) -> String {
    if result.icons.is_empty() {
        return "No icons found.".to_string();
    }

    let groups = group_icons(Some(result), &[]);
    let footer = format!(
        "(Showing {} of {} icons)",
        result.icons.len(),
        result.total
    );
    let footer = if use_color {
        footer.dimmed().to_string()
    } else {
        footer
    };
    format!("{}\n\n{}", format_groups(&groups, &[], use_color), footer)
}

/// Renders whatever the session currently shows for its debounced query.
pub fn format_snapshot(snapshot: &Snapshot, use_color: bool) -> String {
    if snapshot.debounced_query.trim().is_empty() {
        return "Type a query to search icons.".to_string();
    }

    let body = match (&snapshot.status, snapshot.mode) {
        (FetchStatus::Error(e), _) => {
            let message = format!("Search failed: {e}");
            return if use_color {
                message.red().to_string()
            } else {
                message
            };
        }
        (FetchStatus::Loading | FetchStatus::Idle, _) => return "Searching...".to_string(),
        (FetchStatus::Success(_), FetchMode::All) => {
            format_groups(&snapshot.groups, &snapshot.selection, use_color)
        }
        (FetchStatus::Success(_), FetchMode::Paginated) => {
            format_icons(&snapshot.icons, &snapshot.selection, use_color)
        }
    };

    if body.is_empty() {
        return format!("No icons found for \"{}\".", snapshot.debounced_query);
    }
    if snapshot.has_next_page {
        format!("{body}\n(more results available, type :more)")
    } else {
        body
    }
}

/// One id per line.
pub fn format_selection(selection: &[IconId]) -> String {
    selection
        .iter()
        .map(IconId::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
