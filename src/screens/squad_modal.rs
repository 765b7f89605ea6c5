use crate::catalog::ATTENDEES;
use crate::model::{Attendee, Event};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquadModalFocus {
    Name,
    Members,
}

/// "Assemble squad" form shown above the attendee list.
#[derive(Debug, Clone)]
pub struct SquadModal {
    pub name: String,
    pub selected_ids: HashSet<String>,
    pub cursor: usize,
    pub focus: SquadModalFocus,
}

impl SquadModal {
    pub fn new(event: &Event) -> Self {
        Self {
            name: format!("Squad: {}", event.short_title()),
            selected_ids: HashSet::new(),
            cursor: 0,
            focus: SquadModalFocus::Members,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SquadModalFocus::Name => SquadModalFocus::Members,
            SquadModalFocus::Members => SquadModalFocus::Name,
        };
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = ATTENDEES.len() as isize;
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
    }

    pub fn toggle_highlighted(&mut self) {
        if let Some(attendee) = ATTENDEES.get(self.cursor) {
            self.toggle(&attendee.id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn can_create(&self) -> bool {
        !self.selected_ids.is_empty()
    }

    /// Selected attendees in catalog order.
    pub fn members(&self) -> Vec<Attendee> {
        ATTENDEES
            .iter()
            .filter(|a| self.selected_ids.contains(&a.id))
            .cloned()
            .collect()
    }
}
