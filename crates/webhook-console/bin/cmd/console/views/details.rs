use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};
use webhook_console::rows::{LogRow, Panel, PanelToggles};
use webhook_console::{LogEntry, ReplayStatus};

use crate::cmd::console::widgets::formatters::status_style;

/// Renders a centered popup with the collapsible detail panels of one log row
pub(crate) fn render_detail_popup(
    frame: &mut Frame,
    area: Rect,
    entry: &LogEntry,
    toggles: PanelToggles,
    replay: Option<ReplayStatus>,
) {
    // Center the popup at 80% of screen size
    let popup_width = (area.width as f32 * 0.8) as u16;
    let popup_height = (area.height as f32 * 0.8) as u16;
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width: popup_width,
        height: popup_height,
    };

    let row = LogRow::new(entry, &Local);

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(format!(" {} ", row.event))
        .border_set(border::DOUBLE);
    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            "Date: ".dark_gray(),
            format!("{} {}", row.date, row.time).into(),
        ]),
        Line::from(vec!["Email: ".dark_gray(), row.email.clone().into()]),
        Line::from(vec![
            "Status: ".dark_gray(),
            Span::styled(row.status.clone(), status_style(row.success)),
        ]),
        Line::from(""),
    ];

    let panels = row.details.available();
    if panels.is_empty() {
        lines.push(Line::from("No details recorded for this delivery").dark_gray());
    }

    for panel in panels {
        let open = toggles.is_open(panel);
        let marker = if open { "▼" } else { "▶" };
        let key = match panel {
            Panel::MailchimpError => "e",
            Panel::Changes => "c",
            Panel::Payload => "p",
        };
        let title_style = match panel {
            Panel::MailchimpError => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Yellow),
        }
        .add_modifier(Modifier::BOLD);

        lines.push(Line::from(vec![
            Span::styled(format!("{} {} ", marker, panel.title()), title_style),
            Span::styled(format!("<{}>", key), Style::default().fg(Color::Blue)),
        ]));

        if open {
            if let Some(body) = row.details.body(panel) {
                for body_line in body.lines() {
                    lines.push(Line::from(format!("  {}", body_line)));
                }
            }
        }

        if panel == Panel::Payload {
            let status = match replay {
                Some(ReplayStatus::Pending) => Line::from(vec![
                    "  ↻ Replay ".dark_gray(),
                    Span::styled(
                        ReplayStatus::Pending.label(),
                        Style::default().fg(Color::Yellow),
                    ),
                ]),
                Some(status) => Line::from(vec![
                    "  ↻ Replay ".into(),
                    "<r> ".blue().bold(),
                    status.label().into(),
                ]),
                None => Line::from(vec!["  ↻ Replay ".into(), "<r>".blue().bold()]),
            };
            lines.push(status);
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}
