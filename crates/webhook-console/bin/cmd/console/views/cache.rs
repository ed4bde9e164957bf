use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Cell, HighlightSpacing, Paragraph, Row, Table},
    Frame,
};

use crate::cmd::console::state::{CacheView, InputMode};
use crate::cmd::console::views::message::render_load_message;
use crate::cmd::console::widgets::pagination::render_pagination;

/// Renders the email cache viewer
pub(crate) fn render_cache_panel(
    frame: &mut Frame,
    area: Rect,
    view: &mut CacheView,
    input_mode: InputMode,
) {
    if render_load_message(
        frame,
        area,
        "Email Cache",
        &view.state,
        "No cache data available.",
        "Failed to load email cache.",
    ) {
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .split(area);

    let searching = input_mode == InputMode::Search;
    let search = if searching {
        Span::styled(format!("{}_", view.query), Style::default().fg(Color::Yellow))
    } else {
        Span::raw(view.query.clone())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![" Search: ".into(), search])).block(
            Block::bordered()
                .title(" Filter ")
                .border_set(if searching { border::THICK } else { border::PLAIN }),
        ),
        chunks[0],
    );

    let entries = view.state.loaded().map(Vec::as_slice).unwrap_or_default();
    let rows: Vec<Row> = view
        .visible()
        .iter()
        .filter_map(|&index| entries.get(index))
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.id.clone()).style(Style::default().fg(Color::Cyan)),
                Cell::from(entry.email.clone()),
            ])
        })
        .collect();

    let header = Row::new(vec!["Memberful ID", "Email"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let total = view.filtered.len();
    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(20)])
        .header(header)
        .block(
            Block::bordered()
                .title(format!(" Email Cache [{} matching] ", total))
                .border_set(border::THICK),
        )
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .bg(Color::DarkGray),
        )
        .highlight_symbol(Text::from(">"))
        .highlight_spacing(HighlightSpacing::Always);

    frame.render_stateful_widget(table, chunks[1], &mut view.table_state);

    if total == 0 {
        frame.render_widget(
            Paragraph::new(Line::from(" No entries match the current search").dark_gray()),
            chunks[2],
        );
        return;
    }

    let pages = view.pagination.total_pages(total);
    let label = view.pagination.range_label(total);
    render_pagination(frame, chunks[2], view.pagination.page(), pages, label);
}
