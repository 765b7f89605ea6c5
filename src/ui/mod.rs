//! Main UI module. Lays out the content area, nav bar and help line, then
//! draws whatever is mounted plus the popups on top.

pub mod canvas;
pub mod chat;
pub mod events;
pub mod nav_bar;
pub mod onboarding;
pub mod popups;
pub mod time_format;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::app::App;
use crate::screens::Mounted;
use crate::ui::popups::{draw_connect_popup, draw_notification_popup, draw_quit_confirm_popup};

pub const ACCENT: Color = Color::Rgb(0xFF, 0xB2, 0x3D);
pub const SIGNAL: Color = Color::Rgb(0x7D, 0x00, 0xFE);
pub const ALERT: Color = Color::Rgb(0xFF, 0x3B, 0x3B);
pub const MUTED: Color = Color::DarkGray;

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let show_nav = app.nav.onboarded;
    let chunks = Layout::default()
        .constraints([
            Constraint::Min(0),                                     // Content
            Constraint::Length(if show_nav { 3 } else { 0 }),       // Nav bar
            Constraint::Length(1),                                  // Help line
        ])
        .split(size);

    let tick_count = app.ui.tick_count;
    match &mut app.mounted {
        Mounted::Onboarding(screen) => onboarding::draw_onboarding(f, screen, tick_count, chunks[0]),
        Mounted::EventList(screen) => events::draw_event_list(f, screen, chunks[0]),
        Mounted::AttendeeList(screen) => events::draw_attendee_list(f, screen, chunks[0]),
        Mounted::ChatHub(screen) => chat::draw_chat_hub(f, screen, &app.nav.squads, chunks[0]),
        Mounted::Chat(screen) => chat::draw_chat_room(f, screen, chunks[0]),
        Mounted::CanvasFeed(screen) => canvas::draw_canvas_feed(f, screen, chunks[0]),
        Mounted::CanvasDetail(screen) => canvas::draw_canvas_detail(f, screen, chunks[0]),
    }

    if show_nav {
        nav_bar::draw_nav_bar(f, app, chunks[1]);
    } else {
        app.ui.nav_tab_areas.clear();
    }

    f.render_widget(
        Paragraph::new(Span::styled(help_text(app), Style::default().fg(MUTED))).alignment(Alignment::Center),
        chunks[2],
    );

    if let Some(modal) = &app.connect_modal {
        if let Some((attendee, event)) = app.nav.visible().connect {
            draw_connect_popup(f, modal, attendee, event);
        }
    }
    if let Some(notice) = &app.notifications.current_notification {
        draw_notification_popup(f, &notice.message);
    }
    if app.ui.show_quit_confirm {
        draw_quit_confirm_popup(f, app);
    }
}

fn help_text(app: &App) -> &'static str {
    if app.connect_modal.is_some() {
        return "[Enter] Send Signal | [Esc] Cancel";
    }
    match &app.mounted {
        Mounted::Onboarding(_) => "[Enter] Enter Turf | [Ctrl+C] Quit",
        Mounted::EventList(_) => "[↑↓] Nav | [Enter] Open | [F1-F3] Tabs | [F4] Sound",
        Mounted::AttendeeList(screen) if screen.squad_modal.is_some() => {
            "[Tab] Name/Members | [Space] Pick | [Enter] Initialize | [Esc] Cancel"
        }
        Mounted::AttendeeList(screen) if screen.show_tuner => {
            "[←→] Tune | [Tab] Dial | [t] Hide Tuner | [Enter] Connect | [Esc] Back"
        }
        Mounted::AttendeeList(_) => "[t] Tuner | [s] Squad | [r] Room | [Enter] Connect | [Esc] Back",
        Mounted::ChatHub(_) => "[↑↓] Nav | [Enter] Open | [F1-F3] Tabs",
        Mounted::Chat(_) => "[Enter] Send | [PgUp/PgDn] Scroll | [Esc] Close",
        Mounted::CanvasFeed(_) => "[↑↓] Nav | [l] Like | [Enter] Open",
        Mounted::CanvasDetail(_) => "[Enter] Comment | [Ctrl+L] Like | [Esc] Close",
    }
}
