use super::Intent;
use crate::catalog::{DIRECT_MESSAGES, EVENTS};
use crate::model::{DirectMessageSummary, Event, Squad};

/// One row of the hub, in display order: rooms, squads, then direct messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HubEntry<'a> {
    Room(&'a Event),
    Squad(&'a Squad),
    Direct(&'a DirectMessageSummary),
}

impl HubEntry<'_> {
    pub fn intent(&self) -> Intent {
        match self {
            HubEntry::Room(event) => Intent::OpenRoom((*event).clone()),
            HubEntry::Squad(squad) => Intent::OpenSquad((*squad).clone()),
            HubEntry::Direct(dm) => Intent::OpenDm((*dm).clone()),
        }
    }
}

pub fn hub_entries(squads: &[Squad]) -> Vec<HubEntry<'_>> {
    EVENTS
        .iter()
        .map(HubEntry::Room)
        .chain(squads.iter().map(HubEntry::Squad))
        .chain(DIRECT_MESSAGES.iter().map(HubEntry::Direct))
        .collect()
}

#[derive(Debug, Default)]
pub struct ChatHubScreen {
    pub cursor: usize,
}

impl ChatHubScreen {
    pub fn move_cursor(&mut self, delta: isize, squads: &[Squad]) {
        let len = hub_entries(squads).len() as isize;
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn open_selected(&self, squads: &[Squad]) -> Option<Intent> {
        hub_entries(squads).get(self.cursor).map(HubEntry::intent)
    }
}
