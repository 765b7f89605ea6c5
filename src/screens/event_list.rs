use crate::catalog::EVENTS;
use crate::model::Event;
use ratatui::widgets::ListState;

pub struct EventListScreen {
    pub list_state: ListState,
}

impl EventListScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = EVENTS.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.list_state.select(Some(next));
    }

    pub fn selected_event(&self) -> Option<&'static Event> {
        self.list_state.selected().and_then(|i| EVENTS.get(i))
    }
}
