mod common;

#[cfg(test)]
pub mod tests {
    use std::time::Duration;

    use serde_json::json;
    use webhook_console::events::spawn_save_merge_map;
    use webhook_console::{
        AdminClient, ConsoleConfig, ConsoleEvent, MergeMap, MergeMapForm, SaveEvent, SaveStatus,
    };

    use crate::common::{closed_base_url, MockServer, Route};

    fn client(base_url: &str) -> AdminClient {
        AdminClient::new(ConsoleConfig::new(base_url).with_timeout(Duration::from_secs(2)))
    }

    fn sample_map() -> MergeMap {
        serde_json::from_value(json!({
            "MERGE_FIELDS": {"FNAME": "first_name", "LNAME": "last_name"},
            "GBX_PROFILE_FIELDS": {"phone": "PHONE"}
        }))
        .unwrap()
    }

    fn wait_for_save_event(rx: &crossbeam_channel::Receiver<ConsoleEvent>) -> SaveEvent {
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(ConsoleEvent::MergeMapSaved(event)) => event,
            other => panic!("unexpected event: {:?}", other),
        }
    }

    fn wait_for_save(rx: &crossbeam_channel::Receiver<ConsoleEvent>) -> SaveStatus {
        wait_for_save_event(rx).status
    }

    #[test]
    fn test_fetch_merge_map_builds_form() {
        let server = MockServer::start(vec![Route::get(
            "/api/merge-map",
            json!({
                "MERGE_FIELDS": {"FNAME": "first_name"},
                "GBX_PROFILE_FIELDS": {}
            })
            .to_string(),
        )]);

        let map = client(&server.base_url).fetch_merge_map().unwrap();
        let form = MergeMapForm::from_map(map);
        assert_eq!(form.len(), 1);
        assert_eq!(form.fields()[0].name, "MERGE_FIELDS:FNAME");
        assert_eq!(form.fields()[0].value, "first_name");
    }

    #[test]
    fn test_missing_section_defaults_to_empty() {
        let map: MergeMap = serde_json::from_value(json!({"MERGE_FIELDS": {"A": "b"}})).unwrap();
        let form = MergeMapForm::from_map(map);
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_save_posts_trimmed_values() {
        let server = MockServer::start(vec![Route::post("/api/merge-map", 200)]);
        let client = client(&server.base_url);

        let mut form = MergeMapForm::from_map(sample_map());
        assert!(form.set_value("MERGE_FIELDS:FNAME", "  given_name "));
        assert!(!form.set_value("MERGE_FIELDS:MISSING", "x"));

        let (tx, rx) = crossbeam_channel::unbounded();
        spawn_save_merge_map(&client, form.submission(), 1, tx);
        assert_eq!(wait_for_save(&rx), SaveStatus::Saved);

        let posts: Vec<_> = server
            .requests()
            .into_iter()
            .filter(|r| r.method == "POST" && r.url == "/api/merge-map")
            .collect();
        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0].json(),
            json!({
                "MERGE_FIELDS": {"FNAME": "given_name", "LNAME": "last_name"},
                "GBX_PROFILE_FIELDS": {"phone": "PHONE"}
            })
        );
        assert!(posts[0]
            .header("Content-Type")
            .is_some_and(|v| v.contains("application/json")));
    }

    #[test]
    fn test_save_rejected_reports_status() {
        let server = MockServer::start(vec![Route::post("/api/merge-map", 400)]);
        let (tx, rx) = crossbeam_channel::unbounded();
        spawn_save_merge_map(&client(&server.base_url), sample_map(), 1, tx);

        let status = wait_for_save(&rx);
        assert_eq!(status, SaveStatus::Rejected(400));
        assert_eq!(status.label(), "❌ Save failed (400)");
    }

    #[test]
    fn test_save_unreachable_server_fails() {
        let (tx, rx) = crossbeam_channel::unbounded();
        spawn_save_merge_map(&client(&closed_base_url()), sample_map(), 1, tx);

        let status = wait_for_save(&rx);
        assert_eq!(status, SaveStatus::Failed);
        assert_eq!(status.label(), "❌ Failed to save");
    }

    #[test]
    fn test_save_event_carries_form_generation() {
        let server = MockServer::start(vec![Route::post("/api/merge-map", 200)]);
        let (tx, rx) = crossbeam_channel::unbounded();
        spawn_save_merge_map(&client(&server.base_url), sample_map(), 7, tx);

        let event = wait_for_save_event(&rx);
        assert_eq!(
            event,
            SaveEvent {
                generation: 7,
                status: SaveStatus::Saved
            }
        );
    }
}
