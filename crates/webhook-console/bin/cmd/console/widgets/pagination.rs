use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Pages shown on each side of the current one.
const PAGE_WINDOW: usize = 2;

/// Page numbers to show, `None` standing for a run of skipped pages.
///
/// The first and last page are always present, plus a window around `current`.
pub(crate) fn page_window(current: usize, total: usize) -> Vec<Option<usize>> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let low = current.saturating_sub(PAGE_WINDOW).max(1);
    let high = (current + PAGE_WINDOW).min(total);

    let mut pages = Vec::new();
    if low > 1 {
        pages.push(Some(1));
        if low > 2 {
            pages.push(None);
        }
    }
    pages.extend((low..=high).map(Some));
    if high < total {
        if high + 1 < total {
            pages.push(None);
        }
        pages.push(Some(total));
    }
    pages
}

/// Page numbers around the current page, the current one highlighted
pub(crate) fn pagination_line(current: usize, total: usize) -> Line<'static> {
    let spans: Vec<Span> = page_window(current, total)
        .into_iter()
        .map(|page| match page {
            Some(page) if page == current => Span::styled(
                format!(" {} ", page),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(page) => Span::styled(format!(" {} ", page), Style::default().fg(Color::DarkGray)),
            None => Span::styled(" … ", Style::default().fg(Color::DarkGray)),
        })
        .collect();
    Line::from(spans)
}

/// Renders the page numbers on the first row and the range label on the second
pub(crate) fn render_pagination(
    frame: &mut Frame,
    area: Rect,
    current: usize,
    total: usize,
    label: String,
) {
    let lines = vec![
        pagination_line(current, total),
        Line::from(Span::styled(
            format!(" {}", label),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
