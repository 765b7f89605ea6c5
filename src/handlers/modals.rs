use super::edit_input;
use crate::screens::{ConnectModal, Intent};
use crossterm::event::{KeyCode, KeyEvent};

/// The connect draft has keyboard focus whenever it is open.
pub fn handle_connect_input(key: KeyEvent, modal: &mut ConnectModal, max_len: usize) -> Option<Intent> {
    match key.code {
        KeyCode::Enter => Some(Intent::SendConnectRequest),
        KeyCode::Esc => Some(Intent::CloseConnect),
        _ => {
            edit_input(&mut modal.message, key, max_len);
            None
        }
    }
}
