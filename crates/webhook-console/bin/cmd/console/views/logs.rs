use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Cell, HighlightSpacing, Paragraph, Row, Table},
    Frame,
};
use webhook_console::rows::LogRow;

use crate::cmd::console::state::{InputMode, LogsView};
use crate::cmd::console::views::message::render_load_message;
use crate::cmd::console::widgets::formatters::{status_style, truncate_message};
use crate::cmd::console::widgets::pagination::render_pagination;

/// Renders the filter bar, the current page of logs and the pagination bar
pub(crate) fn render_logs_panel(
    frame: &mut Frame,
    area: Rect,
    view: &mut LogsView,
    input_mode: InputMode,
) {
    if render_load_message(
        frame,
        area,
        "Logs",
        &view.state,
        "No logs found.",
        "Error loading logs.",
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
    let filter_line = Line::from(vec![
        " Search: ".into(),
        if searching {
            Span::styled(
                format!("{}_", view.query),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::raw(view.query.clone())
        },
        "   Status: ".into(),
        Span::styled(
            view.filter.status.label().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let filter_block = Block::bordered()
        .title(" Filter ")
        .border_set(if searching { border::THICK } else { border::PLAIN });
    frame.render_widget(Paragraph::new(filter_line).block(filter_block), chunks[0]);

    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let header = Row::new(vec![
        "Date", "Time", "Event", "Email", "Status", "Details", "Replay",
    ])
    .style(header_style)
    .height(1);

    let event_width = (chunks[1].width as usize / 5).max(12);
    let email_width = (chunks[1].width as usize / 4).max(16);

    let rows: Vec<Row> = view
        .visible()
        .iter()
        .filter_map(|&index| view.entry(index).map(|entry| (index, entry)))
        .map(|(index, entry)| {
            let row = LogRow::new(entry, &Local);
            let details = row
                .details
                .available()
                .iter()
                .map(|panel| panel.title())
                .collect::<Vec<_>>()
                .join(", ");
            let replay = view
                .replays
                .status(view.row_key(index))
                .map(|status| status.label())
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(row.date),
                Cell::from(row.time),
                Cell::from(truncate_message(&row.event, event_width)),
                Cell::from(truncate_message(&row.email, email_width)),
                Cell::from(row.status).style(status_style(row.success).add_modifier(Modifier::BOLD)),
                Cell::from(details).style(Style::default().fg(Color::DarkGray)),
                Cell::from(replay),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Percentage(20),
        Constraint::Percentage(25),
        Constraint::Length(8),
        Constraint::Min(12),
        Constraint::Length(16),
    ];

    let selected_row_style = Style::default()
        .add_modifier(Modifier::REVERSED)
        .bg(Color::DarkGray);

    let total = view.filtered.len();
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::bordered()
                .title(format!(" Logs [{} matching] ", total))
                .border_set(border::THICK),
        )
        .column_spacing(1)
        .row_highlight_style(selected_row_style)
        .highlight_symbol(Text::from(">"))
        .highlight_spacing(HighlightSpacing::Always);

    frame.render_stateful_widget(table, chunks[1], &mut view.table_state);

    if total == 0 {
        frame.render_widget(
            Paragraph::new(Line::from(" No logs match the current filter").dark_gray()),
            chunks[2],
        );
        return;
    }

    let pages = view.pagination.total_pages(total);
    let label = view.pagination.range_label(total);
    render_pagination(frame, chunks[2], view.pagination.page(), pages, label);
}
