use ratatui::style::{Color, Style};
use webhook_console::summary::palette_color;

/// Truncates to `max_len` characters, keeping the head and marking the cut with "..."
pub(crate) fn truncate_message(msg: &str, max_len: usize) -> String {
    if msg.chars().count() <= max_len {
        msg.to_string()
    } else {
        let truncated: String = msg.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

pub(crate) fn status_style(success: bool) -> Style {
    if success {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

/// Bar color for the `index`-th event
pub(crate) fn palette(index: usize) -> Color {
    let (r, g, b) = palette_color(index);
    Color::Rgb(r, g, b)
}

/// Upper axis bound and its tick labels for counts up to `max`.
///
/// Labels are spaced evenly along the axis, so the bound is rounded up to an
/// even number to keep the middle label on an integer.
pub(crate) fn integer_axis(max: usize) -> (usize, Vec<String>) {
    match max {
        0 | 1 => (1, vec!["0".to_string(), "1".to_string()]),
        _ => {
            let bound = max + max % 2;
            (
                bound,
                vec!["0".to_string(), (bound / 2).to_string(), bound.to_string()],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_message_counts_chars() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("subscription.renewed", 10), "subscri...");
        assert_eq!(truncate_message("ééééé", 4), "é...");
    }

    #[test]
    fn test_integer_axis_labels_fall_on_integers() {
        assert_eq!(integer_axis(0), (1, vec!["0".to_string(), "1".to_string()]));
        let (bound, labels) = integer_axis(7);
        assert_eq!(bound, 8);
        assert_eq!(labels, vec!["0", "4", "8"]);
        let (bound, labels) = integer_axis(6);
        assert_eq!(bound, 6);
        assert_eq!(labels, vec!["0", "3", "6"]);
        for max in 2..50 {
            let (bound, _) = integer_axis(max);
            assert!(bound >= max);
            assert_eq!(bound % 2, 0);
        }
    }
}
