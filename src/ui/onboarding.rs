use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{ACCENT, MUTED, SIGNAL};
use crate::banner::get_styled_banner_lines;
use crate::global_prefs::global_prefs;
use crate::screens::OnboardingScreen;

pub fn draw_onboarding(f: &mut Frame, screen: &OnboardingScreen, tick_count: u64, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // top padding
            Constraint::Length(6), // banner
            Constraint::Length(2), // tagline
            Constraint::Length(3), // name input
            Constraint::Length(2), // button
            Constraint::Min(1),    // bottom padding
        ])
        .split(area);

    let banner = get_styled_banner_lines("TURF", area.width, tick_count, ACCENT, global_prefs().banner_glitch_enabled);
    f.render_widget(Paragraph::new(banner).alignment(Alignment::Center), chunks[1]);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "GROWTH WITHOUT BORDERS",
            Style::default().fg(SIGNAL).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );

    let input_area = centered_columns(chunks[3], 40);
    let (text, style) = if screen.name.is_empty() {
        ("What should we call you?".to_string(), Style::default().fg(MUTED))
    } else {
        (format!("{}_", screen.name), Style::default().fg(ACCENT))
    };
    f.render_widget(
        Paragraph::new(text).style(style).block(
            Block::default()
                .title("Your Name")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        ),
        input_area,
    );

    let button_style = if screen.can_enter() {
        Style::default().fg(ratatui::style::Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    f.render_widget(
        Paragraph::new(Span::styled("[ ENTER TURF ]", button_style)).alignment(Alignment::Center),
        chunks[4],
    );
}

fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
