use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use webhook_console::{SaveStatus, Section};

use crate::cmd::console::state::{InputMode, MergeMapView};
use crate::cmd::console::views::message::render_load_message;

/// Renders the merge-map form, one input per key grouped by section
pub(crate) fn render_merge_map_panel(
    frame: &mut Frame,
    area: Rect,
    view: &MergeMapView,
    input_mode: InputMode,
) {
    if render_load_message(
        frame,
        area,
        "Merge Map",
        &view.state,
        "Merge map is empty.",
        "Failed to load merge map.",
    ) {
        return;
    }
    let Some(form) = view.state.loaded() else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    let key_width = form
        .fields()
        .iter()
        .map(|field| field.key().chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;
    for section in Section::ALL {
        lines.push(Line::from(section.as_str()).yellow().bold());
        for (i, field) in form.fields().iter().enumerate() {
            if field.section() != Some(section) {
                continue;
            }
            let selected = i == view.selected;
            let editing = selected && input_mode == InputMode::Edit;
            if selected {
                selected_line = lines.len();
            }

            let value_style = if editing {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let value = if editing {
                format!("{}_", field.value)
            } else {
                field.value.clone()
            };

            lines.push(Line::from(vec![
                Span::raw(if selected { "> " } else { "  " }),
                Span::styled(
                    format!("{:<width$}", field.key(), width = key_width),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(format!(" {} ", value), value_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    let block = Block::bordered()
        .title(format!(" Merge Map [{} fields] ", form.len()))
        .border_set(border::THICK);
    let visible_height = block.inner(chunks[0]).height as usize;
    let scroll = selected_line.saturating_sub(visible_height.saturating_sub(1));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0)),
        chunks[0],
    );

    let status = view.save.label();
    let status_span = match view.save {
        SaveStatus::Saved => Span::styled(status, Style::default().fg(Color::Green)),
        SaveStatus::Rejected(_) | SaveStatus::Failed => {
            Span::styled(status, Style::default().fg(Color::Red))
        }
        _ => Span::styled(status, Style::default().fg(Color::Yellow)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![" ".into(), status_span])),
        chunks[1],
    );
}
