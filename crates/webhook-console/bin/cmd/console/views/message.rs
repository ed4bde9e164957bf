use ratatui::{
    layout::Rect,
    style::Stylize,
    symbols::border,
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::cmd::console::state::LoadState;

/// Renders the placeholder for every state but `Loaded`. Returns false when
/// the data is loaded and the caller should render it.
pub(crate) fn render_load_message<T>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    state: &LoadState<T>,
    empty_message: &str,
    error_message: &str,
) -> bool {
    let lines = match state {
        LoadState::Loaded(_) => return false,
        LoadState::NotLoaded | LoadState::Loading => vec![
            Line::from(""),
            Line::from(format!("Loading {}...", title.to_lowercase()))
                .dark_gray()
                .centered(),
        ],
        LoadState::Empty => vec![
            Line::from(""),
            Line::from(empty_message.to_string()).yellow().centered(),
        ],
        LoadState::Failed(error) => vec![
            Line::from(""),
            Line::from(error_message.to_string()).red().bold().centered(),
            Line::from(""),
            Line::from(error.clone()).red().centered(),
            Line::from(""),
            Line::from("Check the log file for details, then press R to retry")
                .yellow()
                .centered(),
        ],
    };

    let block = Block::bordered()
        .title(format!(" {} ", title))
        .border_set(border::THICK);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
    true
}
