#[cfg(test)]
mod tests {
    use super::super::grouping::*;
    use crate::iconify::{CollectionInfo, IconId, SearchResult};
    use std::collections::{BTreeMap, HashMap};

    fn result(icons: &[&str], collections: &[(&str, &str)]) -> SearchResult {
        SearchResult {
            icons: icons.iter().map(|s| s.to_string()).collect(),
            total: icons.len() as u32,
            limit: 999,
            start: 0,
            collections: collections
                .iter()
                .map(|(prefix, name)| (prefix.to_string(), CollectionInfo::named(*name)))
                .collect::<HashMap<_, _>>(),
            request: BTreeMap::new(),
        }
    }

    fn ids(raw: &[&str]) -> Vec<IconId> {
        raw.iter().map(|s| IconId::parse(*s).unwrap()).collect()
    }

    fn prefixes(groups: &[crate::interactive::domain::models::CollectionGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.prefix.as_str()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let icons = dedupe(["a:1", "b:1", "a:1", "c:1", "b:1"]);
        assert_eq!(icons, vec!["a:1", "b:1", "c:1"]);
    }

    #[test]
    fn test_no_result_no_selection_is_empty() {
        assert!(group_icons(None, &[]).is_empty());
    }

    #[test]
    fn test_groups_partition_in_first_occurrence_order() {
        let data = result(
            &["mdi:home", "lucide:house", "mdi:search", "fa:home", "lucide:search", "mdi:home"],
            &[("mdi", "Material Design Icons"), ("lucide", "Lucide")],
        );

        let groups = group_icons(Some(&data), &[]);

        assert_eq!(prefixes(&groups), vec!["mdi", "lucide", "fa"]);
        assert_eq!(groups[0].name, "Material Design Icons");
        assert_eq!(groups[0].icons, vec!["mdi:home", "mdi:search"]);
        assert_eq!(groups[1].icons, vec!["lucide:house", "lucide:search"]);
        // No metadata: name falls back to the prefix
        assert_eq!(groups[2].name, "fa");

        let total: usize = groups.iter().map(|g| g.icons.len()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_missing_selection_is_pinned_first() {
        let data = result(&["a:1", "a:2"], &[("a", "Alpha")]);

        let groups = group_icons(Some(&data), &ids(&["b:9"]));

        assert_eq!(prefixes(&groups), vec!["b", "a"]);
        assert_eq!(groups[0].name, "b");
        assert_eq!(groups[0].icons, vec!["b:9"]);
        assert_eq!(groups[1].icons, vec!["a:1", "a:2"]);
    }

    #[test]
    fn test_present_selection_is_not_moved() {
        let data = result(&["a:1", "b:2", "a:3"], &[]);

        let groups = group_icons(Some(&data), &ids(&["b:2"]));

        assert_eq!(prefixes(&groups), vec!["a", "b"]);
        assert_eq!(groups[1].icons, vec!["b:2"]);
    }

    #[test]
    fn test_pinned_icon_joins_existing_collection() {
        let data = result(&["a:1", "b:1"], &[("a", "Alpha"), ("b", "Beta")]);

        let groups = group_icons(Some(&data), &ids(&["b:7"]));

        // b:7 goes in front, so "b" now appears first
        assert_eq!(prefixes(&groups), vec!["b", "a"]);
        assert_eq!(groups[0].name, "Beta");
        assert_eq!(groups[0].icons, vec!["b:7", "b:1"]);
    }

    #[test]
    fn test_multiple_pinned_icons_keep_selection_order() {
        let data = result(&["a:1"], &[]);

        let groups = group_icons(Some(&data), &ids(&["c:1", "b:1", "a:1"]));

        assert_eq!(prefixes(&groups), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_selection_without_result() {
        let groups = group_icons(None, &ids(&["mdi:home"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].prefix, "mdi");
        assert_eq!(groups[0].icons, vec!["mdi:home"]);
    }

    #[test]
    fn test_icons_without_colon_go_to_other() {
        let data = result(&["loose", "mdi:home", "also-loose"], &[]);

        let groups = group_icons(Some(&data), &[]);

        assert_eq!(prefixes(&groups), vec!["other", "mdi"]);
        assert_eq!(groups[0].icons, vec!["loose", "also-loose"]);
    }

    #[test]
    fn test_merge_pages_concatenates_and_dedupes() {
        let first = result(&["a:1", "a:2"], &[]);
        let second = result(&["a:1", "a:2", "a:3", "b:1"], &[]);

        let icons = merge_pages(&[first, second], &[]);

        assert_eq!(icons, vec!["a:1", "a:2", "a:3", "b:1"]);
    }

    #[test]
    fn test_merge_pages_pins_selection() {
        let first = result(&["a:1", "a:2"], &[]);

        assert_eq!(
            merge_pages(std::slice::from_ref(&first), &ids(&["z:9"])),
            vec!["z:9", "a:1", "a:2"]
        );
        assert_eq!(
            merge_pages(std::slice::from_ref(&first), &ids(&["a:2"])),
            vec!["a:1", "a:2"]
        );
        assert_eq!(
            merge_pages(Vec::<&SearchResult>::new(), &ids(&["z:9"])),
            vec!["z:9"]
        );
    }
}
