use crate::model::{Attendee, Event};

/// Draft of a contact request. Sending is acknowledged by the root; the draft
/// text itself goes nowhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectModal {
    pub attendee_id: String,
    pub event_id: String,
    pub message: String,
}

impl ConnectModal {
    pub fn new(attendee: &Attendee, event: &Event) -> Self {
        Self {
            attendee_id: attendee.id.clone(),
            event_id: event.id.clone(),
            message: format!("Hi {}, saw you're going to {}. ", attendee.name, event.title),
        }
    }

    pub fn is_for(&self, attendee: &Attendee, event: &Event) -> bool {
        self.attendee_id == attendee.id && self.event_id == event.id
    }
}
