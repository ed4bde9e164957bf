#[cfg(test)]
pub mod tests {
    use webhook_console::report::{render_summary, Format};
    use webhook_console::{DashboardSummary, LogEntry, LogStore};

    fn log(timestamp: &str, event: &str, status: &str) -> LogEntry {
        LogEntry {
            timestamp: timestamp.to_string(),
            event: event.to_string(),
            email: None,
            status: status.to_string(),
            changes: None,
            payload: None,
        }
    }

    #[test]
    fn test_totals_top_events_and_daily_series() {
        let logs = vec![
            log("2024-01-01T10:00:00Z", "a", "success"),
            log("2024-01-02T10:00:00Z", "b", "error"),
        ];
        let summary = DashboardSummary::from_logs(&logs);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            summary.top_events,
            vec![("a".to_string(), 1), ("b".to_string(), 1)]
        );
        assert_eq!(
            summary.daily_counts,
            vec![("2024-01-01".to_string(), 1), ("2024-01-02".to_string(), 1)]
        );
    }

    #[test]
    fn test_failed_counts_every_non_success_status() {
        let logs = vec![
            log("2024-01-01T10:00:00Z", "a", "success"),
            log("2024-01-01T11:00:00Z", "a", "error"),
            log("2024-01-01T12:00:00Z", "a", "skipped"),
            log("2024-01-01T13:00:00Z", "a", ""),
        ];
        let summary = DashboardSummary::from_logs(&logs);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failed, 3);
        assert_eq!(summary.success + summary.failed, summary.total);
    }

    #[test]
    fn test_top_events_limited_to_five_by_count() {
        let mut logs = Vec::new();
        for (event, n) in [("e1", 1), ("e2", 6), ("e3", 3), ("e4", 2), ("e5", 5), ("e6", 4)] {
            for _ in 0..n {
                logs.push(log("2024-03-01T00:00:00Z", event, "success"));
            }
        }
        let summary = DashboardSummary::from_logs(&logs);
        let names: Vec<&str> = summary.top_events.iter().map(|(e, _)| e.as_str()).collect();
        assert_eq!(names, vec!["e2", "e5", "e6", "e3", "e4"]);
        assert_eq!(summary.event_counts.len(), 6);
        assert_eq!(summary.max_event_count(), 6);
    }

    #[test]
    fn test_daily_series_is_sorted_by_date() {
        let logs = vec![
            log("2024-01-03T10:00:00Z", "a", "success"),
            log("2024-01-01T10:00:00Z", "a", "success"),
            log("2024-01-03T23:00:00Z", "a", "success"),
            log("2023-12-31T10:00:00Z", "a", "success"),
        ];
        let summary = DashboardSummary::from_logs(&logs);
        let dates: Vec<&str> = summary.daily_counts.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(dates, vec!["2023-12-31", "2024-01-01", "2024-01-03"]);
        assert_eq!(summary.max_daily_count(), 2);
    }

    #[test]
    fn test_empty_logs() {
        let summary = DashboardSummary::from_logs(&[]);
        assert_eq!(summary, DashboardSummary::default());
        assert_eq!(summary.max_daily_count(), 0);
    }

    #[test]
    fn test_summary_of_sorted_store_matches_raw_logs() {
        let logs = vec![
            log("2024-01-01T10:00:00Z", "a", "success"),
            log("2024-01-02T10:00:00Z", "b", "error"),
            log("2024-01-02T11:00:00Z", "a", "success"),
        ];
        let store = LogStore::new(logs.clone());
        let from_store = DashboardSummary::from_logs(store.entries());
        let from_raw = DashboardSummary::from_logs(&logs);
        assert_eq!(from_store.total, from_raw.total);
        assert_eq!(from_store.daily_counts, from_raw.daily_counts);
    }

    #[test]
    fn test_json_report_round_trips_summary() {
        let logs = vec![
            log("2024-01-01T10:00:00Z", "a", "success"),
            log("2024-01-02T10:00:00Z", "b", "error"),
        ];
        let summary = DashboardSummary::from_logs(&logs);
        let output = render_summary(&summary, Format::Json).unwrap();
        let parsed: DashboardSummary = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_table_report_lists_events_and_days() {
        let logs = vec![
            log("2024-01-01T10:00:00Z", "member_signup", "success"),
            log("2024-01-02T10:00:00Z", "order.purchased", "error"),
        ];
        let summary = DashboardSummary::from_logs(&logs);
        let output = render_summary(&summary, Format::Table).unwrap();
        assert!(output.contains("member_signup"));
        assert!(output.contains("order.purchased"));
        assert!(output.contains("2024-01-02"));
    }
}
