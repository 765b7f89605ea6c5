use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{ACCENT, MUTED, SIGNAL};
use crate::app::App;
use crate::state::Tab;

/// Bottom tab bar. Stores each tab's cell area so clicks can be mapped back.
pub fn draw_nav_bar(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    app.ui.nav_tab_areas.clear();
    for (i, tab) in Tab::ALL.iter().copied().enumerate() {
        let active = app.nav.tab == tab;
        let style = if active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        let border_style = if active { Style::default().fg(SIGNAL) } else { Style::default().fg(MUTED) };
        let label = Line::from(vec![
            Span::styled(format!("F{} ", i + 1), Style::default().fg(MUTED)),
            Span::styled(tab.label().to_uppercase(), style),
        ]);
        f.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::TOP).border_style(border_style)),
            chunks[i],
        );
        app.ui.nav_tab_areas.push((tab, chunks[i]));
    }
}
