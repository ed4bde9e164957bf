use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};
use webhook_console::Tab;

use crate::cmd::console::state::InputMode;

/// Context-aware keybindings shown at the bottom of the frame
pub(crate) fn controls_line(
    tab: Tab,
    mode: InputMode,
    detail_open: bool,
    page_input: &str,
) -> Line<'static> {
    match mode {
        InputMode::Search => {
            return Line::from(vec![
                " Type to filter ".into(),
                " | Done ".into(),
                "<enter/esc> ".blue().bold(),
            ])
        }
        InputMode::Edit => {
            return Line::from(vec![
                " Editing value ".into(),
                " | Done ".into(),
                "<enter/esc> ".blue().bold(),
            ])
        }
        InputMode::PageJump => {
            return Line::from(vec![
                " Go to page: ".into(),
                Span::styled(
                    format!("{}_ ", page_input),
                    Style::default().fg(Color::Yellow),
                ),
                " | Jump ".into(),
                "<enter> ".blue().bold(),
                " | Cancel ".into(),
                "<esc> ".blue().bold(),
            ])
        }
        InputMode::Normal => {}
    }

    if detail_open {
        return Line::from(vec![
            " Quit ".into(),
            "<q> ".blue().bold(),
            " | Rows ".into(),
            "<↑↓/jk> ".blue().bold(),
            " | Error ".into(),
            "<e> ".blue().bold(),
            " | Changes ".into(),
            "<c> ".blue().bold(),
            " | Payload ".into(),
            "<p> ".blue().bold(),
            " | Replay ".into(),
            "<r> ".blue().bold(),
            " | Close ".into(),
            "<esc/i> ".blue().bold(),
        ]);
    }

    let mut spans = vec![
        " Quit ".into(),
        "<q> ".blue().bold(),
        " | Tabs ".into(),
        "<tab/1-4> ".blue().bold(),
        " | Reload ".into(),
        "<R> ".blue().bold(),
    ];

    match tab {
        Tab::Dashboard => {}
        Tab::Logs => spans.extend([
            " | ".into(),
            "<↑↓←→/jkhl> ".blue().bold(),
            " | Page ".into(),
            "<home/end/g> ".blue().bold(),
            " | Search ".into(),
            "</> ".blue().bold(),
            " | Status ".into(),
            "<f> ".blue().bold(),
            " | Clear ".into(),
            "<x> ".blue().bold(),
            " | Details ".into(),
            "<i> ".blue().bold(),
            " | Replay ".into(),
            "<r> ".blue().bold(),
        ]),
        Tab::Cache => spans.extend([
            " | ".into(),
            "<↑↓←→/jkhl> ".blue().bold(),
            " | Page ".into(),
            "<home/end/g> ".blue().bold(),
            " | Search ".into(),
            "</> ".blue().bold(),
            " | Clear ".into(),
            "<x> ".blue().bold(),
        ]),
        Tab::MergeMap => spans.extend([
            " | ".into(),
            "<↑↓/jk> ".blue().bold(),
            " | Edit ".into(),
            "<enter> ".blue().bold(),
            " | Save ".into(),
            "<s> ".blue().bold(),
        ]),
    }

    Line::from(spans)
}
