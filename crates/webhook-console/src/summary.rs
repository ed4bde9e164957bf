use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::LogEntry;

/// Bar colors, cycled by bar index.
pub const CHART_PALETTE: [(u8, u8, u8); 9] = [
    (0x3B, 0x82, 0xF6),
    (0x10, 0xB9, 0x81),
    (0xF5, 0x9E, 0x0B),
    (0xEF, 0x44, 0x44),
    (0x8B, 0x5C, 0xF6),
    (0xF4, 0x3F, 0x5E),
    (0x0E, 0xA5, 0xE9),
    (0x14, 0xB8, 0xA6),
    (0x63, 0x66, 0xF1),
];

pub const TOP_EVENTS_LIMIT: usize = 5;

pub fn palette_color(index: usize) -> (u8, u8, u8) {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// Aggregates behind the dashboard tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    /// Occurrences per event, in first-seen order.
    pub event_counts: Vec<(String, usize)>,
    /// At most five events by descending count; ties keep first-seen order.
    pub top_events: Vec<(String, usize)>,
    /// Occurrences per `YYYY-MM-DD`, ascending by date string.
    pub daily_counts: Vec<(String, usize)>,
}

impl DashboardSummary {
    pub fn from_logs(logs: &[LogEntry]) -> Self {
        let total = logs.len();
        let success = logs.iter().filter(|log| log.is_success()).count();

        let event_counts = count_in_order(logs.iter().map(|log| log.event.as_str()));

        let mut top_events = event_counts.clone();
        top_events.sort_by(|a, b| b.1.cmp(&a.1));
        top_events.truncate(TOP_EVENTS_LIMIT);

        let mut daily_counts = count_in_order(
            logs.iter()
                .map(|log| date_key(&log.timestamp))
                .filter(|date| !date.is_empty()),
        );
        daily_counts.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            total,
            success,
            failed: total - success,
            event_counts,
            top_events,
            daily_counts,
        }
    }

    pub fn max_event_count(&self) -> usize {
        self.event_counts.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }

    pub fn max_daily_count(&self) -> usize {
        self.daily_counts.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

/// First ten characters of the timestamp string.
fn date_key(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(10) {
        Some((end, _)) => &timestamp[..end],
        None => timestamp,
    }
}

fn count_in_order<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match positions.get(key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_takes_ten_chars() {
        assert_eq!(date_key("2024-01-02T10:00:00Z"), "2024-01-02");
        assert_eq!(date_key("2024-01"), "2024-01");
        assert_eq!(date_key(""), "");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(9));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn test_count_in_order_keeps_first_seen() {
        let counts = count_in_order(["b", "a", "b", "c"].into_iter());
        assert_eq!(
            counts,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 1),
                ("c".to_string(), 1)
            ]
        );
    }
}
