//! Pure derivations from `(result, selection)` to what the host renders.

use super::models::CollectionGroup;
use crate::iconify::{IconId, SearchResult, collection_prefix};
use std::collections::{HashMap, HashSet};

/// Drops repeated identifiers, keeping the first occurrence of each.
pub fn dedupe<'a>(icons: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    icons
        .into_iter()
        .filter(|icon| seen.insert(*icon))
        .map(str::to_string)
        .collect()
}

/// Puts selected icons that are missing from `icons` in front of it, in
/// selection order, so a selection never vanishes when the results change.
/// Returns the prefixes of the pinned icons.
fn pin_selection(icons: &mut Vec<String>, selection: &[IconId]) -> Vec<String> {
    let missing: Vec<&IconId> = {
        let present: HashSet<&str> = icons.iter().map(String::as_str).collect();
        selection
            .iter()
            .filter(|id| !present.contains(id.as_str()))
            .collect()
    };

    let prefixes = missing.iter().map(|id| id.prefix().to_string()).collect();
    icons.splice(0..0, missing.iter().map(|id| id.as_str().to_string()));
    prefixes
}

/// Icons of `result` grouped by collection, with missing selected icons pinned
/// to the front.
pub fn group_icons(result: Option<&SearchResult>, selection: &[IconId]) -> Vec<CollectionGroup> {
    let mut icons = match result {
        Some(result) => dedupe(result.icons.iter().map(String::as_str)),
        None => Vec::new(),
    };

    let mut names: HashMap<String, String> = result
        .map(|result| {
            result
                .collections
                .iter()
                .map(|(prefix, info)| {
                    let name = info.name.clone().unwrap_or_else(|| prefix.clone());
                    (prefix.clone(), name)
                })
                .collect()
        })
        .unwrap_or_default();

    for prefix in pin_selection(&mut icons, selection) {
        names.entry(prefix.clone()).or_insert(prefix);
    }

    let mut groups: Vec<CollectionGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for icon in icons {
        let prefix = collection_prefix(&icon).to_string();
        let slot = *index.entry(prefix.clone()).or_insert_with(|| {
            let name = names.get(&prefix).cloned().unwrap_or_else(|| prefix.clone());
            groups.push(CollectionGroup {
                prefix: prefix.clone(),
                name,
                icons: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].icons.push(icon);
    }

    groups
}

/// Flat icon list over all fetched pages. The follow-up page is a superset of
/// the first, so concatenating and deduplicating keeps first-page order.
pub fn merge_pages<'a>(
    pages: impl IntoIterator<Item = &'a SearchResult>,
    selection: &[IconId],
) -> Vec<String> {
    let mut icons = dedupe(
        pages
            .into_iter()
            .flat_map(|page| page.icons.iter().map(String::as_str)),
    );
    pin_selection(&mut icons, selection);
    icons
}
