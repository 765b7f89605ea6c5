use crate::app::App;
use crate::global_prefs::update_global_prefs;
use crate::screens::Intent;
use crate::sound::SoundType;
use crate::state::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

/// Handle global shortcuts that work on every screen
pub fn handle_global_shortcuts(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.open_quit_confirm();
            app.sound_manager.play(SoundType::OpenOverlay);
            true
        }
        KeyCode::F(n @ 1..=3) if app.nav.onboarded => {
            change_tab(app, Tab::ALL[n as usize - 1]);
            true
        }
        KeyCode::F(4) => {
            toggle_sound_effects(app);
            true
        }
        _ => false,
    }
}

/// Tab switches from the nav bar, by key or by click.
pub fn change_tab(app: &mut App, tab: Tab) {
    app.dispatch(Intent::ChangeTab(tab));
}

fn toggle_sound_effects(app: &mut App) {
    match update_global_prefs(&app.prefs_path, |prefs| prefs.sound_effects_enabled = !prefs.sound_effects_enabled) {
        Ok(prefs) => {
            let message = if prefs.sound_effects_enabled { "Sound effects on" } else { "Sound effects off" };
            let timeout = app.config.notification_timeout_ms;
            app.set_notification(message, Some(timeout));
        }
        Err(e) => {
            warn!(error = %e, "could not save preferences");
            app.set_notification(format!("Could not save preferences: {}", e), None);
        }
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Right => {
            app.ui.quit_confirm_selected = if app.ui.quit_confirm_selected == 0 { 1 } else { 0 };
        }
        KeyCode::Enter => {
            app.sound_manager.play(SoundType::CloseOverlay);
            if app.ui.quit_confirm_selected == 0 {
                // Yes - quit the application
                app.ui.quit();
            }
            app.ui.show_quit_confirm = false;
        }
        KeyCode::Esc => {
            app.sound_manager.play(SoundType::CloseOverlay);
            app.ui.show_quit_confirm = false;
        }
        // Ctrl+C again closes the dialog
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.sound_manager.play(SoundType::CloseOverlay);
            app.ui.show_quit_confirm = false;
        }
        _ => {}
    }
}
