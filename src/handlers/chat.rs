use super::edit_input;
use crate::model::Squad;
use crate::screens::{ChatHubScreen, ChatRoomScreen, Intent};
use crate::sound::{SoundManager, SoundType};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_chat_hub_input(key: KeyEvent, screen: &mut ChatHubScreen, squads: &[Squad]) -> Option<Intent> {
    match key.code {
        KeyCode::Up => screen.move_cursor(-1, squads),
        KeyCode::Down => screen.move_cursor(1, squads),
        KeyCode::Enter => return screen.open_selected(squads),
        _ => {}
    }
    None
}

pub fn handle_chat_room_input(
    key: KeyEvent,
    screen: &mut ChatRoomScreen,
    sound_manager: &SoundManager,
    max_len: usize,
) -> Option<Intent> {
    match key.code {
        KeyCode::Esc => return Some(screen.close_intent()),
        KeyCode::Enter => {
            if screen.send().is_some() {
                sound_manager.play(SoundType::MessageSent);
            }
        }
        KeyCode::PageUp => screen.scroll_up(5),
        KeyCode::PageDown => screen.scroll_down(5),
        _ => {
            edit_input(&mut screen.input, key, max_len);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DIRECT_MESSAGES, EVENTS};
    use crate::handlers::test_keys::{key, typed};

    #[test]
    fn test_hub_enter_opens_first_room() {
        let mut hub = ChatHubScreen::default();
        let intent = handle_chat_hub_input(key(KeyCode::Enter), &mut hub, &[]);
        assert_eq!(intent, Some(Intent::OpenRoom(EVENTS[0].clone())));
        handle_chat_hub_input(key(KeyCode::Up), &mut hub, &[]);
        let intent = handle_chat_hub_input(key(KeyCode::Enter), &mut hub, &[]);
        assert_eq!(intent, Some(Intent::OpenDm(DIRECT_MESSAGES[1].clone())));
    }

    #[test]
    fn test_room_typing_and_sending() {
        let sounds = SoundManager::silent();
        let mut room = ChatRoomScreen::for_dm(&DIRECT_MESSAGES[0]);
        handle_chat_room_input(key(KeyCode::Enter), &mut room, &sounds, 500);
        assert_eq!(room.messages.len(), 1);
        for k in typed("see you there") {
            handle_chat_room_input(k, &mut room, &sounds, 500);
        }
        handle_chat_room_input(key(KeyCode::Enter), &mut room, &sounds, 500);
        assert_eq!(room.messages.len(), 2);
        assert!(room.input.is_empty());
        assert_eq!(handle_chat_room_input(key(KeyCode::Esc), &mut room, &sounds, 500), Some(Intent::CloseDm));
    }
}
