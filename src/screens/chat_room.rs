use crate::catalog::ROOM_SEED;
use crate::model::{ChatMessage, DirectMessageSummary, Event, Squad};
use crate::ui::time_format::clock_label;
use chrono::Local;
use uuid::Uuid;

use super::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Room,
    Squad,
    Direct,
}

/// Event room, squad chat or direct message thread. The history lives only as
/// long as the screen is open.
#[derive(Debug, Clone)]
pub struct ChatRoomScreen {
    pub kind: ChatKind,
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub scroll_offset: usize,
}

impl ChatRoomScreen {
    pub fn for_event(event: &Event) -> Self {
        Self {
            kind: ChatKind::Room,
            title: event.title.clone(),
            subtitle: format!("{} // {} Online", event.location, event.attendee_count),
            placeholder: "Coordinate plans...".to_string(),
            messages: ROOM_SEED.to_vec(),
            input: String::new(),
            scroll_offset: 0,
        }
    }

    pub fn for_squad(squad: &Squad) -> Self {
        let members: Vec<&str> = squad.members.iter().map(|m| m.name.as_str()).collect();
        Self {
            kind: ChatKind::Squad,
            title: squad.name.clone(),
            subtitle: format!("{} + ME", members.join(", ")),
            placeholder: "Squad comms...".to_string(),
            messages: vec![ChatMessage {
                id: "init".to_string(),
                author: "System".to_string(),
                text: format!("Squad created for {}. Coordinate safely.", squad.event_name),
                timestamp: clock_label(Local::now()),
                is_mine: false,
            }],
            input: String::new(),
            scroll_offset: 0,
        }
    }

    pub fn for_dm(dm: &DirectMessageSummary) -> Self {
        let link = if dm.related_event_id.is_empty() { "Direct Link" } else { "Event Connection" };
        let tag = dm.user.tags.first().map(String::as_str).unwrap_or("");
        Self {
            kind: ChatKind::Direct,
            title: dm.user.name.clone(),
            subtitle: format!("{} • {} // Signal Established via {}", dm.user.role, tag, link),
            placeholder: format!("Message {}...", dm.user.name),
            messages: vec![ChatMessage {
                id: "old1".to_string(),
                author: dm.user.name.clone(),
                text: dm.last_message.clone(),
                timestamp: dm.timestamp.clone(),
                is_mine: false,
            }],
            input: String::new(),
            scroll_offset: 0,
        }
    }

    pub fn close_intent(&self) -> Intent {
        match self.kind {
            ChatKind::Room => Intent::CloseRoom,
            ChatKind::Squad => Intent::CloseSquad,
            ChatKind::Direct => Intent::CloseDm,
        }
    }

    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn send(&mut self) -> Option<&ChatMessage> {
        self.send_at(clock_label(Local::now()))
    }

    /// Appends the input as a message of mine. Blank input is left untouched.
    pub fn send_at(&mut self, timestamp: String) -> Option<&ChatMessage> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage {
            id: Uuid::new_v4().to_string(),
            author: "Me".to_string(),
            text,
            timestamp,
            is_mine: true,
        });
        self.scroll_offset = 0;
        self.messages.last()
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.messages.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}
