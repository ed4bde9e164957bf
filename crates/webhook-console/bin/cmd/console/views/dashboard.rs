use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::{self, border},
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, GraphType, List, ListItem,
        Paragraph,
    },
    Frame,
};
use webhook_console::DashboardSummary;

use crate::cmd::console::state::DashboardView;
use crate::cmd::console::views::message::render_load_message;
use crate::cmd::console::widgets::formatters::{integer_axis, palette, truncate_message};

const LINE_COLOR: Color = Color::Rgb(0x3B, 0x82, 0xF6);

/// Renders stat cards, the top events list and both charts
pub(crate) fn render_dashboard(frame: &mut Frame, area: Rect, view: &DashboardView) {
    if render_load_message(
        frame,
        area,
        "Dashboard",
        &view.state,
        "No logs found.",
        "Failed to load dashboard data.",
    ) {
        return;
    }
    let Some(summary) = view.state.loaded() else {
        return;
    };

    let rows = Layout::vertical([
        Constraint::Length(5),
        Constraint::Percentage(50),
        Constraint::Min(8),
    ])
    .split(area);

    render_stat_cards(frame, rows[0], summary);

    let middle =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).split(rows[1]);
    render_event_chart(frame, middle[0], summary);
    render_top_events(frame, middle[1], summary);

    render_daily_chart(frame, rows[2], summary);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
    let cards = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let stats = [
        ("Total Webhooks", summary.total, Color::Blue),
        ("Successful", summary.success, Color::Green),
        ("Failed", summary.failed, Color::Red),
    ];

    for ((label, value, color), card) in stats.into_iter().zip(cards.iter()) {
        let text = vec![
            Line::from(label).dark_gray().centered(),
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ];
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(color));
        frame.render_widget(Paragraph::new(text).block(block), *card);
    }
}

fn render_event_chart(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
    let count = summary.event_counts.len().max(1) as u16;
    let available = area.width.saturating_sub(2);
    let bar_width = (available / count).saturating_sub(1).clamp(1, 12);

    let bars: Vec<Bar> = summary
        .event_counts
        .iter()
        .enumerate()
        .map(|(i, (event, n))| {
            Bar::default()
                .value(*n as u64)
                .label(Line::from(truncate_message(event, bar_width as usize)))
                .style(Style::default().fg(palette(i)))
                .value_style(Style::default().fg(Color::Black).bg(palette(i)))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::bordered().title(" Webhook Events ").border_set(border::PLAIN))
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_top_events(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
    let name_width = area.width.saturating_sub(10) as usize;
    let items: Vec<ListItem> = summary
        .top_events
        .iter()
        .enumerate()
        .map(|(rank, (event, n))| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", rank + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{:<width$}", truncate_message(event, name_width), width = name_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", n), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::bordered()
            .title(" Top 5 Events ")
            .border_set(border::PLAIN),
    );
    frame.render_widget(list, area);
}

fn render_daily_chart(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
    let points: Vec<(f64, f64)> = summary
        .daily_counts
        .iter()
        .enumerate()
        .map(|(i, (_, n))| (i as f64, *n as f64))
        .collect();

    let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
    let (y_max, y_ticks) = integer_axis(summary.max_daily_count());

    let x_labels: Vec<Span> = match (summary.daily_counts.first(), summary.daily_counts.last()) {
        (Some((first, _)), Some((last, _))) if first != last => {
            vec![Span::raw(first.clone()), Span::raw(last.clone())]
        }
        (Some((only, _)), _) => vec![Span::raw(only.clone())],
        _ => Vec::new(),
    };
    let y_labels: Vec<Span> = y_ticks.into_iter().map(Span::raw).collect();

    let line = Dataset::default()
        .name("Webhooks Per Day")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(LINE_COLOR))
        .data(&points);
    let dots = Dataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(LINE_COLOR))
        .data(&points);

    let chart = Chart::new(vec![line, dots])
        .block(
            Block::bordered()
                .title(" Webhooks Per Day ")
                .border_set(border::PLAIN),
        )
        .legend_position(None)
        .x_axis(
            Axis::default()
                .title("Date")
                .bounds([0.0, x_max])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Webhooks")
                .bounds([0.0, y_max as f64])
                .labels(y_labels)
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
