use super::squad_modal::SquadModal;
use crate::catalog::ATTENDEES;
use crate::model::{Attendee, Event};
use crate::state::AppConfig;
use crate::widgets::dial::DialControl;
use ratatui::style::Color;

/// Attendees whose vibe score is within `window` of the dial value (exclusive).
pub fn filter_by_vibe<'a>(attendees: &'a [Attendee], dial: u8, window: u8) -> Vec<&'a Attendee> {
    attendees
        .iter()
        .filter(|a| (a.vibe_score as i16 - dial as i16).abs() < window as i16)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialFocus {
    Vibe,
    SquadSize,
}

pub struct AttendeeListScreen {
    pub event: Event,
    pub show_tuner: bool,
    pub vibe: DialControl,
    // Shown next to the vibe dial; it does not filter anything.
    pub squad_size: DialControl,
    pub dial_focus: DialFocus,
    pub cursor: usize,
    pub squad_modal: Option<SquadModal>,
    window: u8,
    step: u8,
}

impl AttendeeListScreen {
    pub fn new(event: Event, config: &AppConfig) -> Self {
        Self {
            event,
            show_tuner: false,
            vibe: DialControl::new("Vibe Check", config.default_vibe, Color::Rgb(0xFF, 0xB2, 0x3D), Color::Rgb(0x7D, 0x00, 0xFE)),
            squad_size: DialControl::new("Squad Size", config.default_squad_size, Color::White, Color::DarkGray),
            dial_focus: DialFocus::Vibe,
            cursor: 0,
            squad_modal: None,
            window: config.vibe_window,
            step: config.dial_step,
        }
    }

    pub fn filtered(&self) -> Vec<&'static Attendee> {
        filter_by_vibe(&ATTENDEES, self.vibe.value(), self.window)
    }

    pub fn highlighted(&self) -> Option<&'static Attendee> {
        let filtered = self.filtered();
        let last = filtered.len().checked_sub(1)?;
        filtered.get(self.cursor.min(last)).copied()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.filtered().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(len - 1) as isize;
        self.cursor = (current + delta).rem_euclid(len as isize) as usize;
    }

    pub fn toggle_tuner(&mut self) {
        self.show_tuner = !self.show_tuner;
        if !self.show_tuner {
            self.vibe.release();
            self.squad_size.release();
        }
    }

    pub fn cycle_dial_focus(&mut self) {
        self.dial_focus = match self.dial_focus {
            DialFocus::Vibe => DialFocus::SquadSize,
            DialFocus::SquadSize => DialFocus::Vibe,
        };
    }

    pub fn nudge_focused_dial(&mut self, direction: i16) {
        let delta = direction * self.step as i16;
        match self.dial_focus {
            DialFocus::Vibe => self.vibe.nudge(delta),
            DialFocus::SquadSize => self.squad_size.nudge(delta),
        }
    }

    pub fn open_squad_modal(&mut self) {
        self.squad_modal = Some(SquadModal::new(&self.event));
    }

    pub fn close_squad_modal(&mut self) {
        self.squad_modal = None;
    }

    pub fn dials_mut(&mut self) -> [&mut DialControl; 2] {
        [&mut self.vibe, &mut self.squad_size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EVENTS;

    fn names(list: &[&Attendee]) -> Vec<String> {
        list.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn test_filter_window_is_strict() {
        let filtered = filter_by_vibe(&ATTENDEES, 50, 40);
        // Marcus (80, diff 30) is in; Kai (10, diff 40) is out.
        assert_eq!(names(&filtered), vec!["Sanne", "Marcus", "Juna"]);
    }

    #[test]
    fn test_filter_at_extremes() {
        assert_eq!(names(&filter_by_vibe(&ATTENDEES, 0, 40)), vec!["Sanne", "Kai"]);
        assert_eq!(names(&filter_by_vibe(&ATTENDEES, 100, 40)), vec!["Marcus", "Luna"]);
    }

    #[test]
    fn test_screen_defaults_to_vibe_fifty() {
        let screen = AttendeeListScreen::new(EVENTS[0].clone(), &AppConfig::default());
        assert_eq!(screen.vibe.value(), 50);
        assert_eq!(screen.squad_size.value(), 0);
        assert!(!screen.show_tuner);
        assert_eq!(screen.filtered().len(), 3);
    }

    #[test]
    fn test_highlight_clamps_when_filter_shrinks() {
        let mut screen = AttendeeListScreen::new(EVENTS[0].clone(), &AppConfig::default());
        screen.move_cursor(2);
        assert_eq!(screen.highlighted().map(|a| a.name.as_str()), Some("Juna"));
        for _ in 0..10 {
            screen.nudge_focused_dial(1);
        }
        // vibe 100 leaves Marcus and Luna
        assert_eq!(screen.highlighted().map(|a| a.name.as_str()), Some("Luna"));
    }

    #[test]
    fn test_squad_size_dial_does_not_filter() {
        let mut screen = AttendeeListScreen::new(EVENTS[0].clone(), &AppConfig::default());
        screen.toggle_tuner();
        screen.cycle_dial_focus();
        screen.nudge_focused_dial(1);
        assert_eq!(screen.squad_size.value(), 5);
        assert_eq!(screen.vibe.value(), 50);
        assert_eq!(screen.filtered().len(), 3);
    }
}
