use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Tabs},
    Frame,
};
use webhook_console::Tab;

/// Renders the tab strip; the active tab is highlighted on every switch
pub(crate) fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab, base_url: &str) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(
            Block::bordered()
                .title(format!(" {} ", base_url))
                .border_set(border::PLAIN),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
