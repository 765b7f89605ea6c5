pub mod canvas;
pub mod chat;
pub mod events;
pub mod modals;
pub mod navigation;
pub mod onboarding;

use crate::app::App;
use crate::screens::Mounted;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Handle quit confirmation dialog
    if app.ui.show_quit_confirm {
        navigation::handle_quit_confirm_input(key, app);
        return;
    }

    // Handle global shortcuts first
    if navigation::handle_global_shortcuts(key, app) {
        return;
    }

    // Acknowledgements close on any key press
    if app.notifications.current_notification.is_some() {
        app.notifications.clear_notification();
        return;
    }

    let max_len = app.config.max_message_length;
    let intent = if let Some(modal) = app.connect_modal.as_mut() {
        modals::handle_connect_input(key, modal, max_len)
    } else {
        match &mut app.mounted {
            Mounted::Onboarding(screen) => onboarding::handle_onboarding_input(key, screen, max_len),
            Mounted::EventList(screen) => events::handle_event_list_input(key, screen),
            Mounted::AttendeeList(screen) => events::handle_attendee_list_input(key, screen, max_len),
            Mounted::ChatHub(screen) => chat::handle_chat_hub_input(key, screen, &app.nav.squads),
            Mounted::Chat(screen) => chat::handle_chat_room_input(key, screen, &app.sound_manager, max_len),
            Mounted::CanvasFeed(screen) => canvas::handle_canvas_feed_input(key, screen, &app.sound_manager),
            Mounted::CanvasDetail(screen) => canvas::handle_canvas_detail_input(key, screen, &app.sound_manager, max_len),
        }
    };

    if let Some(intent) = intent {
        app.dispatch(intent);
    }
}

/// Mouse input: nav bar clicks and dial drags.
pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.ui.show_quit_confirm {
                return;
            }
            if app.notifications.current_notification.is_some() {
                app.notifications.clear_notification();
                return;
            }
            if app.nav.onboarded {
                if let Some(tab) = app.ui.tab_at(column, row) {
                    navigation::change_tab(app, tab);
                    return;
                }
            }
            if app.connect_modal.is_some() {
                return;
            }
            if let Mounted::AttendeeList(screen) = &mut app.mounted {
                if screen.show_tuner && screen.squad_modal.is_none() {
                    for dial in screen.dials_mut() {
                        if dial.press(column, row) {
                            break;
                        }
                    }
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            if let Mounted::AttendeeList(screen) = &mut app.mounted {
                for dial in screen.dials_mut() {
                    dial.drag_to(column, row);
                }
            }
        }
        MouseEventKind::Up(_) => {
            if let Mounted::AttendeeList(screen) = &mut app.mounted {
                for dial in screen.dials_mut() {
                    dial.release();
                }
            }
        }
        _ => {}
    }
}

/// Shared line editing for text inputs. Returns true when the key was consumed.
pub(crate) fn edit_input(input: &mut String, key: KeyEvent, max_len: usize) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            if input.chars().count() < max_len {
                input.push(c);
            }
            true
        }
        KeyCode::Backspace => {
            input.pop();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn typed(text: &str) -> Vec<KeyEvent> {
        text.chars().map(|c| key(KeyCode::Char(c))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::{ctrl, key, typed};
    use super::*;
    use crate::app::tests::{onboarded_app, test_app};
    use crate::state::{ScreenKey, Tab};
    use crossterm::event::KeyEventState;

    fn press_all(app: &mut App, keys: Vec<KeyEvent>) {
        for k in keys {
            handle_key_event(k, app);
        }
    }

    #[test]
    fn test_edit_input_respects_limit_and_control() {
        let mut input = String::from("ab");
        assert!(edit_input(&mut input, key(KeyCode::Char('c')), 3));
        assert!(edit_input(&mut input, key(KeyCode::Char('d')), 3));
        assert_eq!(input, "abc");
        assert!(!edit_input(&mut input, ctrl('l'), 3));
        assert!(edit_input(&mut input, key(KeyCode::Backspace), 3));
        assert_eq!(input, "ab");
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = test_app();
        let mut k = key(KeyCode::Char('x'));
        k.kind = KeyEventKind::Release;
        k.state = KeyEventState::NONE;
        handle_key_event(k, &mut app);
        match &app.mounted {
            Mounted::Onboarding(screen) => assert!(screen.name.is_empty()),
            _ => panic!("onboarding not mounted"),
        }
    }

    #[test]
    fn test_onboarding_by_keyboard() {
        let mut app = test_app();
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(!app.nav.onboarded);
        press_all(&mut app, typed("kai"));
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(app.nav.onboarded);
        assert_eq!(app.mounted_key(), &ScreenKey::EventList);
    }

    #[test]
    fn test_tabs_ignored_before_onboarding() {
        let mut app = test_app();
        handle_key_event(key(KeyCode::F(2)), &mut app);
        assert_eq!(app.nav.tab, Tab::Events);
    }

    #[test]
    fn test_squad_flow_by_keyboard() {
        let mut app = onboarded_app();
        handle_key_event(key(KeyCode::Enter), &mut app); // KEYNOTE
        handle_key_event(key(KeyCode::Char('s')), &mut app);
        // Enter with nobody selected does nothing
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(app.nav.squads.is_empty());
        handle_key_event(key(KeyCode::Char(' ')), &mut app); // Sanne
        handle_key_event(key(KeyCode::Down), &mut app);
        handle_key_event(key(KeyCode::Char(' ')), &mut app); // Marcus
        handle_key_event(key(KeyCode::Enter), &mut app);

        assert_eq!(app.nav.squads.len(), 1);
        let squad = &app.nav.squads[0];
        assert_eq!(squad.name, "Squad: KEYNOTE");
        assert_eq!(squad.members.len(), 2);
        match &app.mounted {
            Mounted::AttendeeList(screen) => assert!(screen.squad_modal.is_none()),
            _ => panic!("attendee list not mounted"),
        }

        // Acknowledgement eats the next key, then the hub lists the squad.
        handle_key_event(key(KeyCode::Char('x')), &mut app);
        assert!(app.notifications.current_notification.is_none());
        handle_key_event(key(KeyCode::F(2)), &mut app);
        for _ in 0..4 {
            handle_key_event(key(KeyCode::Down), &mut app);
        }
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(matches!(app.mounted_key(), ScreenKey::SquadChat(_)));
    }

    #[test]
    fn test_room_survives_switch_to_chat_tab() {
        let mut app = onboarded_app();
        handle_key_event(key(KeyCode::Enter), &mut app);
        handle_key_event(key(KeyCode::Char('r')), &mut app);
        assert_eq!(app.mounted_key(), &ScreenKey::EventRoom("1".into()));
        press_all(&mut app, typed("on my way"));
        handle_key_event(key(KeyCode::F(2)), &mut app);
        assert_eq!(app.nav.tab, Tab::Chat);
        assert_eq!(app.mounted_key(), &ScreenKey::EventRoom("1".into()));
        match &app.mounted {
            Mounted::Chat(chat) => assert_eq!(chat.input, "on my way"),
            _ => panic!("room not mounted"),
        }
        handle_key_event(key(KeyCode::F(1)), &mut app);
        assert_eq!(app.mounted_key(), &ScreenKey::EventList);
    }

    #[test]
    fn test_connect_modal_takes_keys_first() {
        let mut app = onboarded_app();
        handle_key_event(key(KeyCode::Enter), &mut app);
        handle_key_event(key(KeyCode::Char('c')), &mut app);
        assert!(app.connect_modal.is_some());
        handle_key_event(key(KeyCode::Char('r')), &mut app);
        // 'r' went into the draft, not to "join room"
        assert_eq!(app.mounted_key(), &ScreenKey::AttendeeList("1".into()));
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(app.connect_modal.is_none());
        assert!(app.notifications.current_notification.is_some());
    }

    #[test]
    fn test_ctrl_c_opens_quit_confirm() {
        let mut app = onboarded_app();
        handle_key_event(ctrl('c'), &mut app);
        assert!(app.ui.show_quit_confirm);
        handle_key_event(key(KeyCode::Left), &mut app);
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(app.ui.should_quit);
    }
}
