use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::LogEntry;

pub const DATE_FORMAT: &str = "%d-%b-%Y";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Display fields of one log row.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub date: String,
    pub time: String,
    pub event: String,
    pub email: String,
    pub status: String,
    pub success: bool,
    pub details: DetailPanels,
}

impl LogRow {
    /// Builds the row with date and time shown in `tz`. An unparseable
    /// timestamp is shown raw in the date column.
    pub fn new<Tz: TimeZone>(entry: &LogEntry, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let (date, time) = match entry.parsed_timestamp() {
            Some(parsed) => format_date_time(parsed, tz),
            None => (entry.timestamp.clone(), String::new()),
        };
        Self {
            date,
            time,
            event: entry.event.clone(),
            email: entry.email_or_empty().to_string(),
            status: entry.status.clone(),
            success: entry.is_success(),
            details: DetailPanels::from_entry(entry),
        }
    }
}

pub fn format_date_time<Tz: TimeZone>(parsed: DateTime<Utc>, tz: &Tz) -> (String, String)
where
    Tz::Offset: std::fmt::Display,
{
    let local = parsed.with_timezone(tz);
    (
        local.format(DATE_FORMAT).to_string(),
        local.format(TIME_FORMAT).to_string(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    MailchimpError,
    Changes,
    Payload,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::MailchimpError => "Mailchimp Error",
            Panel::Changes => "Changes",
            Panel::Payload => "Payload",
        }
    }
}

/// The optional detail panels of a row. Each is present only when the entry
/// carries the matching data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailPanels {
    pub mailchimp_error: Option<String>,
    pub changes: Option<Map<String, Value>>,
    pub payload: Option<Value>,
}

impl DetailPanels {
    pub fn from_entry(entry: &LogEntry) -> Self {
        Self {
            mailchimp_error: entry.mailchimp_error(),
            changes: entry.other_changes(),
            payload: entry.payload.clone(),
        }
    }

    /// Panels present for this row, in display order.
    pub fn available(&self) -> Vec<Panel> {
        let mut panels = Vec::new();
        if self.mailchimp_error.is_some() {
            panels.push(Panel::MailchimpError);
        }
        if self.changes.is_some() {
            panels.push(Panel::Changes);
        }
        if self.payload.is_some() {
            panels.push(Panel::Payload);
        }
        panels
    }

    pub fn is_empty(&self) -> bool {
        self.available().is_empty()
    }

    /// Body text of `panel`, pretty-printed for JSON panels.
    pub fn body(&self, panel: Panel) -> Option<String> {
        match panel {
            Panel::MailchimpError => self.mailchimp_error.clone(),
            Panel::Changes => self
                .changes
                .as_ref()
                .and_then(|changes| serde_json::to_string_pretty(changes).ok()),
            Panel::Payload => self
                .payload
                .as_ref()
                .and_then(|payload| serde_json::to_string_pretty(payload).ok()),
        }
    }
}

/// Open/closed state of the panels of one opened row. Everything starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelToggles {
    mailchimp_error: bool,
    changes: bool,
    payload: bool,
}

impl PanelToggles {
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::MailchimpError => self.mailchimp_error,
            Panel::Changes => self.changes,
            Panel::Payload => self.payload,
        }
    }

    pub fn toggle(&mut self, panel: Panel) {
        let flag = match panel {
            Panel::MailchimpError => &mut self.mailchimp_error,
            Panel::Changes => &mut self.changes,
            Panel::Payload => &mut self.payload,
        };
        *flag = !*flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_formats_in_given_timezone() {
        let entry: LogEntry = serde_json::from_value(json!({
            "timestamp": "2024-01-02T10:00:00Z",
            "event": "member_signup",
            "status": "success"
        }))
        .unwrap();
        let row = LogRow::new(&entry, &Utc);
        assert_eq!(row.date, "02-Jan-2024");
        assert_eq!(row.time, "10:00:00");
        assert_eq!(row.email, "");
        assert!(row.success);
        assert!(row.details.is_empty());
    }

    #[test]
    fn test_unparseable_timestamp_shown_raw() {
        let entry: LogEntry = serde_json::from_value(json!({
            "timestamp": "not a date",
            "event": "x",
            "status": "error"
        }))
        .unwrap();
        let row = LogRow::new(&entry, &Utc);
        assert_eq!(row.date, "not a date");
        assert_eq!(row.time, "");
        assert!(!row.success);
    }

    #[test]
    fn test_panels_follow_data() {
        let entry: LogEntry = serde_json::from_value(json!({
            "timestamp": "2024-01-02T10:00:00Z",
            "event": "member_updated",
            "status": "error",
            "changes": {"mailchimp_error": "Invalid Resource"},
            "payload": {"event": "member_updated"}
        }))
        .unwrap();
        let panels = DetailPanels::from_entry(&entry);
        assert_eq!(panels.available(), vec![Panel::MailchimpError, Panel::Payload]);
        assert_eq!(
            panels.body(Panel::MailchimpError).as_deref(),
            Some("Invalid Resource")
        );
        assert!(panels.body(Panel::Changes).is_none());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut toggles = PanelToggles::default();
        toggles.toggle(Panel::Payload);
        assert!(toggles.is_open(Panel::Payload));
        assert!(!toggles.is_open(Panel::Changes));
        toggles.toggle(Panel::Payload);
        assert!(!toggles.is_open(Panel::Payload));
    }
}
