#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;

    use webhook_console::{cache_entries, filter_cache, Pagination, CACHE_PAGE_SIZE};

    fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, email)| (id.to_string(), email.to_string()))
            .collect()
    }

    #[test]
    fn test_ids_sort_descending_as_strings() {
        let entries = cache_entries(mapping(&[("10", "ten@x.com"), ("5", "five@x.com")]));
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "10"]);
    }

    #[test]
    fn test_search_matches_id_or_email() {
        let entries = cache_entries(mapping(&[
            ("101", "Alice@Example.com"),
            ("202", "bob@example.com"),
            ("303", "carol@test.org"),
        ]));

        let by_id = filter_cache(&entries, "20");
        assert_eq!(by_id.len(), 1);
        assert_eq!(entries[by_id[0]].email, "bob@example.com");

        let by_email = filter_cache(&entries, "ALICE");
        assert_eq!(by_email.len(), 1);
        assert_eq!(entries[by_email[0]].id, "101");

        assert_eq!(filter_cache(&entries, "example").len(), 2);
        assert_eq!(filter_cache(&entries, "").len(), 3);
        assert!(filter_cache(&entries, "nobody").is_empty());
    }

    #[test]
    fn test_empty_cache() {
        let entries = cache_entries(HashMap::new());
        assert!(entries.is_empty());
        let pagination = Pagination::new(CACHE_PAGE_SIZE);
        assert_eq!(pagination.range_label(0), "Showing 0 of 0");
    }

    #[test]
    fn test_cache_pages_of_one_hundred() {
        let pairs: Vec<(String, String)> = (0..250)
            .map(|i| (format!("{:04}", i), format!("user{}@x.com", i)))
            .collect();
        let entries = cache_entries(pairs.into_iter().collect());
        let filtered = filter_cache(&entries, "");

        let mut pagination = Pagination::new(CACHE_PAGE_SIZE);
        assert_eq!(pagination.total_pages(filtered.len()), 3);
        pagination.set_page(3, filtered.len());
        let page = pagination.slice(&filtered);
        assert_eq!(page.len(), 50);
        assert_eq!(entries[page[0]].id, "0049");
        assert_eq!(pagination.range_label(filtered.len()), "Showing 201-250 of 250");
    }
}
