use super::edit_input;
use crate::screens::attendee_list::AttendeeListScreen;
use crate::screens::squad_modal::SquadModalFocus;
use crate::screens::{EventListScreen, Intent, SquadModal};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_event_list_input(key: KeyEvent, screen: &mut EventListScreen) -> Option<Intent> {
    match key.code {
        KeyCode::Up => screen.move_selection(-1),
        KeyCode::Down => screen.move_selection(1),
        KeyCode::Enter => return screen.selected_event().map(|event| Intent::SelectEvent(event.clone())),
        _ => {}
    }
    None
}

pub fn handle_attendee_list_input(key: KeyEvent, screen: &mut AttendeeListScreen, max_len: usize) -> Option<Intent> {
    if let Some(modal) = screen.squad_modal.as_mut() {
        let (intent, close) = handle_squad_modal_input(key, modal, max_len);
        if close {
            screen.close_squad_modal();
        }
        return intent;
    }

    match key.code {
        KeyCode::Esc => return Some(Intent::BackToEvents),
        KeyCode::Up => screen.move_cursor(-1),
        KeyCode::Down => screen.move_cursor(1),
        KeyCode::Enter | KeyCode::Char('c') => {
            return screen.highlighted().map(|attendee| Intent::Connect(attendee.clone()));
        }
        KeyCode::Char('t') => screen.toggle_tuner(),
        KeyCode::Char('s') => screen.open_squad_modal(),
        KeyCode::Char('r') => return Some(Intent::JoinRoom),
        KeyCode::Tab if screen.show_tuner => screen.cycle_dial_focus(),
        KeyCode::Left if screen.show_tuner => {
            screen.nudge_focused_dial(-1);
            screen.move_cursor(0);
        }
        KeyCode::Right if screen.show_tuner => {
            screen.nudge_focused_dial(1);
            screen.move_cursor(0);
        }
        _ => {}
    }
    None
}

/// Returns the intent to send and whether the form should close.
fn handle_squad_modal_input(key: KeyEvent, modal: &mut SquadModal, max_len: usize) -> (Option<Intent>, bool) {
    match key.code {
        KeyCode::Esc => return (None, true),
        KeyCode::Tab => modal.toggle_focus(),
        KeyCode::Enter => {
            if modal.can_create() {
                let intent = Intent::CreateSquad { name: modal.name.clone(), members: modal.members() };
                return (Some(intent), true);
            }
        }
        _ => match modal.focus {
            SquadModalFocus::Name => {
                edit_input(&mut modal.name, key, max_len);
            }
            SquadModalFocus::Members => match key.code {
                KeyCode::Up => modal.move_cursor(-1),
                KeyCode::Down => modal.move_cursor(1),
                KeyCode::Char(' ') => modal.toggle_highlighted(),
                _ => {}
            },
        },
    }
    (None, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EVENTS;
    use crate::handlers::test_keys::key;
    use crate::state::AppConfig;

    fn screen() -> AttendeeListScreen {
        AttendeeListScreen::new(EVENTS[0].clone(), &AppConfig::default())
    }

    #[test]
    fn test_event_list_enter_selects_highlighted() {
        let mut list = EventListScreen::new();
        handle_event_list_input(key(KeyCode::Down), &mut list);
        let intent = handle_event_list_input(key(KeyCode::Enter), &mut list);
        assert_eq!(intent, Some(Intent::SelectEvent(EVENTS[1].clone())));
    }

    #[test]
    fn test_arrows_only_tune_when_tuner_open() {
        let mut s = screen();
        handle_attendee_list_input(key(KeyCode::Right), &mut s, 500);
        assert_eq!(s.vibe.value(), 50);
        handle_attendee_list_input(key(KeyCode::Char('t')), &mut s, 500);
        handle_attendee_list_input(key(KeyCode::Right), &mut s, 500);
        assert_eq!(s.vibe.value(), 55);
        handle_attendee_list_input(key(KeyCode::Tab), &mut s, 500);
        handle_attendee_list_input(key(KeyCode::Right), &mut s, 500);
        assert_eq!(s.vibe.value(), 55);
        assert_eq!(s.squad_size.value(), 5);
    }

    #[test]
    fn test_squad_form_name_editing_and_escape() {
        let mut s = screen();
        handle_attendee_list_input(key(KeyCode::Char('s')), &mut s, 500);
        handle_attendee_list_input(key(KeyCode::Tab), &mut s, 500);
        handle_attendee_list_input(key(KeyCode::Char('!')), &mut s, 500);
        assert_eq!(s.squad_modal.as_ref().map(|m| m.name.as_str()), Some("Squad: KEYNOTE!"));
        // Keys meant for the list are typed into the name while the form is open.
        assert_eq!(handle_attendee_list_input(key(KeyCode::Char('r')), &mut s, 500), None);
        handle_attendee_list_input(key(KeyCode::Esc), &mut s, 500);
        assert!(s.squad_modal.is_none());
    }

    #[test]
    fn test_escape_goes_back() {
        let mut s = screen();
        assert_eq!(handle_attendee_list_input(key(KeyCode::Esc), &mut s, 500), Some(Intent::BackToEvents));
    }
}
