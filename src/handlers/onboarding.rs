use super::edit_input;
use crate::screens::{Intent, OnboardingScreen};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_onboarding_input(key: KeyEvent, screen: &mut OnboardingScreen, max_len: usize) -> Option<Intent> {
    match key.code {
        KeyCode::Enter if screen.can_enter() => Some(Intent::CompleteOnboarding),
        _ => {
            edit_input(&mut screen.name, key, max_len);
            None
        }
    }
}
