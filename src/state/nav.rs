//! Root navigation state: which tab is active, what is drilled into, and the
//! squads formed during the session.

use crate::model::{Attendee, DirectMessageSummary, Event, GalleryPost, Squad};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

pub const CONNECT_ACK: &str = "Signal Sent! Check the Chat Hub.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Events,
    Chat,
    Canvas,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Events, Tab::Chat, Tab::Canvas];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Events => "Agenda",
            Tab::Chat => "Signal",
            Tab::Canvas => "Canvas",
        }
    }
}

/// Full-screen views stacked above the tab body. Only one can exist at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Room(Event),
    Squad(Squad),
    DirectMessage(DirectMessageSummary),
    GalleryDetail(GalleryPost),
}

/// The screen currently on display, borrowed from the navigation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Onboarding,
    EventList,
    AttendeeList(&'a Event),
    ChatHub(&'a [Squad]),
    CanvasFeed,
    EventRoom(&'a Event),
    SquadChat(&'a Squad),
    DirectMessage(&'a DirectMessageSummary),
    CanvasDetail(&'a GalleryPost),
}

/// Identity of a mounted screen. A change of key means the previous screen's
/// local state is dropped and the new one starts fresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenKey {
    Onboarding,
    EventList,
    AttendeeList(String),
    ChatHub,
    CanvasFeed,
    EventRoom(String),
    SquadChat(String),
    DirectMessage(String),
    CanvasDetail(String),
}

impl View<'_> {
    pub fn key(&self) -> ScreenKey {
        match self {
            View::Onboarding => ScreenKey::Onboarding,
            View::EventList => ScreenKey::EventList,
            View::AttendeeList(event) => ScreenKey::AttendeeList(event.id.clone()),
            View::ChatHub(_) => ScreenKey::ChatHub,
            View::CanvasFeed => ScreenKey::CanvasFeed,
            View::EventRoom(event) => ScreenKey::EventRoom(event.id.clone()),
            View::SquadChat(squad) => ScreenKey::SquadChat(squad.id.clone()),
            View::DirectMessage(dm) => ScreenKey::DirectMessage(dm.id.clone()),
            View::CanvasDetail(post) => ScreenKey::CanvasDetail(post.id.clone()),
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(
            self,
            View::EventRoom(_) | View::SquadChat(_) | View::DirectMessage(_) | View::CanvasDetail(_)
        )
    }
}

/// What gets drawn: the screen plus the connect modal when it applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visible<'a> {
    pub view: View<'a>,
    pub connect: Option<(&'a Attendee, &'a Event)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub onboarded: bool,
    pub tab: Tab,
    pub selected_event: Option<Event>,
    pub selected_attendee: Option<Attendee>,
    pub overlay: Option<Overlay>,
    pub squads: Vec<Squad>,
    last_squad_stamp: i64,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            onboarded: false,
            tab: Tab::Events,
            selected_event: None,
            selected_attendee: None,
            overlay: None,
            squads: Vec::new(),
            last_squad_stamp: 0,
        }
    }
}

impl NavState {
    pub fn complete_onboarding(&mut self) {
        self.onboarded = true;
    }

    /// Switches tab, clearing the selections listed for the target tab first.
    /// The table is intentionally uneven: moving to `Chat` keeps an open room,
    /// squad or DM, and moving to `Canvas` keeps an open gallery detail as well
    /// as the selected attendee.
    pub fn change_tab(&mut self, tab: Tab) {
        debug!(from = ?self.tab, to = ?tab, "tab change");
        self.tab = tab;
        match tab {
            Tab::Events => {
                // room, DM, squad and post
                self.overlay = None;
            }
            Tab::Chat => {
                self.selected_event = None;
                self.selected_attendee = None;
                if matches!(self.overlay, Some(Overlay::GalleryDetail(_))) {
                    self.overlay = None;
                }
            }
            Tab::Canvas => {
                self.selected_event = None;
                if matches!(
                    self.overlay,
                    Some(Overlay::Room(_) | Overlay::DirectMessage(_) | Overlay::Squad(_))
                ) {
                    self.overlay = None;
                }
            }
        }
    }

    pub fn select_event(&mut self, event: Event) {
        self.selected_event = Some(event);
    }

    pub fn back_to_events(&mut self) {
        self.selected_event = None;
    }

    pub fn connect(&mut self, attendee: Attendee) {
        self.selected_attendee = Some(attendee);
    }

    pub fn close_connect(&mut self) {
        self.selected_attendee = None;
    }

    pub fn send_connect_request(&mut self) -> &'static str {
        if let Some(attendee) = self.selected_attendee.take() {
            info!(attendee = %attendee.name, "connect request sent");
        }
        CONNECT_ACK
    }

    /// Opens the room of the selected event. Nothing happens without one.
    pub fn join_room_from_event(&mut self) {
        if let Some(event) = self.selected_event.clone() {
            self.overlay = Some(Overlay::Room(event));
        }
    }

    pub fn open_room(&mut self, event: Event) {
        self.overlay = Some(Overlay::Room(event));
    }

    pub fn open_dm(&mut self, dm: DirectMessageSummary) {
        self.overlay = Some(Overlay::DirectMessage(dm));
    }

    pub fn open_squad(&mut self, squad: Squad) {
        self.overlay = Some(Overlay::Squad(squad));
    }

    pub fn select_post(&mut self, post: GalleryPost) {
        self.overlay = Some(Overlay::GalleryDetail(post));
    }

    pub fn close_room(&mut self) {
        if matches!(self.overlay, Some(Overlay::Room(_))) {
            self.overlay = None;
        }
    }

    pub fn close_squad(&mut self) {
        if matches!(self.overlay, Some(Overlay::Squad(_))) {
            self.overlay = None;
        }
    }

    pub fn close_dm(&mut self) {
        if matches!(self.overlay, Some(Overlay::DirectMessage(_))) {
            self.overlay = None;
        }
    }

    pub fn close_post(&mut self) {
        if matches!(self.overlay, Some(Overlay::GalleryDetail(_))) {
            self.overlay = None;
        }
    }

    pub fn create_squad(&mut self, name: String, members: Vec<Attendee>) -> Option<&Squad> {
        self.create_squad_at(name, members, Utc::now())
    }

    /// Appends a squad for the selected event. The squad is not opened.
    pub fn create_squad_at(&mut self, name: String, members: Vec<Attendee>, now: DateTime<Utc>) -> Option<&Squad> {
        let event = self.selected_event.as_ref()?;
        // Millisecond stamps, bumped so two squads in the same millisecond stay distinct.
        let stamp = now.timestamp_millis().max(self.last_squad_stamp + 1);
        self.last_squad_stamp = stamp;
        let squad = Squad {
            id: stamp.to_string(),
            name,
            event_id: event.id.clone(),
            event_name: event.title.clone(),
            members,
            created_at: now.to_rfc3339(),
        };
        info!(squad = %squad.name, event = %squad.event_name, members = squad.members.len(), "squad created");
        self.squads.push(squad);
        self.squads.last()
    }

    pub fn visible(&self) -> Visible<'_> {
        let connect = match (&self.selected_attendee, &self.selected_event) {
            (Some(attendee), Some(event)) if self.onboarded => Some((attendee, event)),
            _ => None,
        };
        Visible { view: self.view(), connect }
    }

    pub fn view(&self) -> View<'_> {
        if !self.onboarded {
            return View::Onboarding;
        }
        match &self.overlay {
            Some(Overlay::Room(event)) => View::EventRoom(event),
            Some(Overlay::Squad(squad)) => View::SquadChat(squad),
            Some(Overlay::DirectMessage(dm)) => View::DirectMessage(dm),
            Some(Overlay::GalleryDetail(post)) => View::CanvasDetail(post),
            None => match self.tab {
                Tab::Events => match &self.selected_event {
                    Some(event) => View::AttendeeList(event),
                    None => View::EventList,
                },
                Tab::Chat => View::ChatHub(&self.squads),
                Tab::Canvas => View::CanvasFeed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ATTENDEES, DIRECT_MESSAGES, EVENTS, GALLERY};
    use chrono::TimeZone;

    fn onboarded() -> NavState {
        let mut nav = NavState::default();
        nav.complete_onboarding();
        nav
    }

    #[test]
    fn test_starts_on_onboarding() {
        let nav = NavState::default();
        assert_eq!(nav.view(), View::Onboarding);
        assert_eq!(onboarded().view(), View::EventList);
    }

    #[test]
    fn test_events_tab_clears_dm() {
        let mut nav = onboarded();
        nav.change_tab(Tab::Chat);
        nav.open_dm(DIRECT_MESSAGES[0].clone());
        nav.change_tab(Tab::Events);
        assert_eq!(nav.overlay, None);
        assert_eq!(nav.view(), View::EventList);
    }

    #[test]
    fn test_chat_tab_keeps_room_open() {
        let mut nav = onboarded();
        nav.change_tab(Tab::Chat);
        nav.open_room(EVENTS[1].clone());
        nav.change_tab(Tab::Chat);
        assert_eq!(nav.view(), View::EventRoom(&EVENTS[1]));
    }

    #[test]
    fn test_chat_tab_keeps_squad_and_dm() {
        let mut nav = onboarded();
        nav.select_event(EVENTS[0].clone());
        let squad = nav.create_squad("Crew".into(), vec![ATTENDEES[0].clone()]).cloned().unwrap();
        nav.open_squad(squad.clone());
        nav.change_tab(Tab::Chat);
        assert_eq!(nav.overlay, Some(Overlay::Squad(squad)));

        nav.open_dm(DIRECT_MESSAGES[1].clone());
        nav.change_tab(Tab::Chat);
        assert!(matches!(nav.overlay, Some(Overlay::DirectMessage(_))));
    }

    #[test]
    fn test_chat_tab_clears_event_attendee_and_post() {
        let mut nav = onboarded();
        nav.select_event(EVENTS[0].clone());
        nav.connect(ATTENDEES[1].clone());
        nav.change_tab(Tab::Chat);
        assert_eq!(nav.selected_event, None);
        assert_eq!(nav.selected_attendee, None);

        nav.change_tab(Tab::Canvas);
        nav.select_post(GALLERY[0].clone());
        nav.change_tab(Tab::Chat);
        assert_eq!(nav.overlay, None);
        assert!(matches!(nav.view(), View::ChatHub(_)));
    }

    #[test]
    fn test_canvas_tab_clears_room_dm_squad_and_event() {
        let mut nav = onboarded();
        nav.select_event(EVENTS[2].clone());
        nav.join_room_from_event();
        nav.change_tab(Tab::Canvas);
        assert_eq!(nav.overlay, None);
        assert_eq!(nav.selected_event, None);

        nav.change_tab(Tab::Chat);
        nav.open_dm(DIRECT_MESSAGES[0].clone());
        nav.change_tab(Tab::Canvas);
        assert_eq!(nav.view(), View::CanvasFeed);
    }

    #[test]
    fn test_canvas_tab_keeps_post_and_attendee() {
        let mut nav = onboarded();
        nav.select_event(EVENTS[0].clone());
        nav.connect(ATTENDEES[3].clone());
        nav.change_tab(Tab::Canvas);
        assert_eq!(nav.selected_attendee.as_ref().map(|a| a.id.as_str()), Some("u4"));
        assert!(nav.visible().connect.is_none());

        nav.select_post(GALLERY[1].clone());
        nav.change_tab(Tab::Canvas);
        assert_eq!(nav.view(), View::CanvasDetail(&GALLERY[1]));
    }

    #[test]
    fn test_stale_attendee_reappears_with_next_event() {
        let mut nav = onboarded();
        nav.select_event(EVENTS[0].clone());
        nav.connect(ATTENDEES[3].clone());
        nav.change_tab(Tab::Canvas);
        nav.change_tab(Tab::Events);
        nav.select_event(EVENTS[1].clone());
        let connect = nav.visible().connect.map(|(a, e)| (a.id.as_str(), e.id.as_str()));
        assert_eq!(connect, Some(("u4", "2")));
    }

    #[test]
    fn test_only_one_overlay_at_a_time() {
        let mut nav = onboarded();
        nav.open_room(EVENTS[0].clone());
        nav.open_dm(DIRECT_MESSAGES[0].clone());
        assert_eq!(nav.view(), View::DirectMessage(&DIRECT_MESSAGES[0]));
        assert!(nav.view().is_overlay());
    }

    #[test]
    fn test_close_only_affects_own_kind() {
        let mut nav = onboarded();
        nav.open_room(EVENTS[0].clone());
        nav.close_dm();
        nav.close_squad();
        nav.close_post();
        assert!(matches!(nav.overlay, Some(Overlay::Room(_))));
        nav.close_room();
        assert_eq!(nav.overlay, None);
    }

    #[test]
    fn test_attendee_list_under_selected_event() {
        let mut nav = onboarded();
        nav.select_event(EVENTS[3].clone());
        assert_eq!(nav.view(), View::AttendeeList(&EVENTS[3]));
        nav.join_room_from_event();
        assert_eq!(nav.view(), View::EventRoom(&EVENTS[3]));
        nav.close_room();
        assert_eq!(nav.view(), View::AttendeeList(&EVENTS[3]));
        nav.back_to_events();
        assert_eq!(nav.view(), View::EventList);
    }

    #[test]
    fn test_join_room_without_event_is_noop() {
        let mut nav = onboarded();
        nav.join_room_from_event();
        assert_eq!(nav.overlay, None);
    }

    #[test]
    fn test_connect_modal_needs_event_and_attendee() {
        let mut nav = onboarded();
        nav.connect(ATTENDEES[0].clone());
        assert!(nav.visible().connect.is_none());
        nav.select_event(EVENTS[0].clone());
        assert!(nav.visible().connect.is_some());
        assert_eq!(nav.send_connect_request(), CONNECT_ACK);
        assert!(nav.visible().connect.is_none());
        assert_eq!(nav.selected_event.as_ref().map(|e| e.id.as_str()), Some("1"));
    }

    #[test]
    fn test_create_squad_requires_event() {
        let mut nav = onboarded();
        assert!(nav.create_squad("Lonely".into(), vec![ATTENDEES[0].clone()]).is_none());
        assert!(nav.squads.is_empty());
    }

    #[test]
    fn test_create_squad_appends_unique_ids() {
        let mut nav = onboarded();
        nav.select_event(EVENTS[0].clone());
        let now = Utc.with_ymd_and_hms(2025, 6, 16, 14, 0, 0).unwrap();
        nav.create_squad_at("A".into(), vec![ATTENDEES[0].clone()], now);
        let first = nav.squads[0].clone();
        nav.create_squad_at("A".into(), vec![ATTENDEES[0].clone()], now);

        assert_eq!(nav.squads.len(), 2);
        assert_eq!(nav.squads[0], first);
        assert_ne!(nav.squads[0].id, nav.squads[1].id);
        assert_eq!(nav.squads[1].event_name, "KEYNOTE: AI ETHICS");
        assert_eq!(nav.squads[1].created_at, now.to_rfc3339());
        assert_eq!(nav.overlay, None);
        assert_eq!(nav.view(), View::AttendeeList(&EVENTS[0]));
    }

    #[test]
    fn test_screen_keys_follow_entities() {
        let mut nav = onboarded();
        nav.select_event(EVENTS[0].clone());
        let before = nav.view().key();
        nav.back_to_events();
        nav.select_event(EVENTS[1].clone());
        assert_ne!(before, nav.view().key());
        assert_eq!(nav.view().key(), ScreenKey::AttendeeList("2".into()));
    }
}
