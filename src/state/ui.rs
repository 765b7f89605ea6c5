use ratatui::layout::Rect;

use super::Tab;

/// State management for UI-specific state
#[derive(Default)]
pub struct UiState {
    pub should_quit: bool,
    pub tick_count: u64,

    // Quit confirmation
    pub show_quit_confirm: bool,
    pub quit_confirm_selected: usize,

    // Nav bar hit areas from the last frame, for mouse clicks
    pub nav_tab_areas: Vec<(Tab, Rect)>,
}

impl UiState {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }

    pub fn open_quit_confirm(&mut self) {
        self.show_quit_confirm = true;
        // Default to "No"
        self.quit_confirm_selected = 1;
    }

    pub fn tab_at(&self, column: u16, row: u16) -> Option<Tab> {
        self.nav_tab_areas
            .iter()
            .find(|(_, area)| area.contains(ratatui::layout::Position { x: column, y: row }))
            .map(|(tab, _)| *tab)
    }
}
