// turf/src/app.rs

use crate::screens::{ConnectModal, Intent, Mounted};
use crate::sound::{SoundManager, SoundType};
use crate::state::{AppConfig, NavState, NotificationState, ScreenKey, UiState};
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct App {
    pub nav: NavState,
    pub ui: UiState,
    pub notifications: NotificationState,
    pub config: AppConfig,
    pub mounted: Mounted,
    mounted_key: ScreenKey,
    pub connect_modal: Option<ConnectModal>,
    pub sound_manager: SoundManager,
    pub prefs_path: PathBuf,
}

impl App {
    pub fn new(sound_manager: SoundManager, config: AppConfig, prefs_path: PathBuf) -> App {
        let nav = NavState::default();
        let view = nav.view();
        let mounted = Mounted::mount(&view, &config);
        let mounted_key = view.key();
        App {
            nav,
            ui: UiState::default(),
            notifications: NotificationState::default(),
            config,
            mounted,
            mounted_key,
            connect_modal: None,
            sound_manager,
            prefs_path,
        }
    }

    pub fn mounted_key(&self) -> &ScreenKey {
        &self.mounted_key
    }

    /// `ms == None` keeps the popup until the next key press.
    pub fn set_notification(&mut self, message: impl Into<String>, ms: Option<u64>) {
        let tick_ms = self.config.tick_rate_ms.max(1);
        let ticks = ms.map(|ms| (ms / tick_ms).max(1));
        self.notifications.set_notification(message, ticks, self.ui.tick_count);
        self.sound_manager.play(SoundType::Notify);
    }

    /// Applies a screen's request to the navigation state, then remounts
    /// whatever became visible.
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatch");
        match intent {
            Intent::CompleteOnboarding => self.nav.complete_onboarding(),
            Intent::ChangeTab(tab) => {
                self.sound_manager.play(SoundType::TabChange);
                self.nav.change_tab(tab);
            }
            Intent::SelectEvent(event) => self.nav.select_event(event),
            Intent::BackToEvents => self.nav.back_to_events(),
            Intent::Connect(attendee) => self.nav.connect(attendee),
            Intent::CloseConnect => self.nav.close_connect(),
            Intent::SendConnectRequest => {
                let ack = self.nav.send_connect_request();
                self.set_notification(ack, None);
            }
            Intent::JoinRoom => {
                self.sound_manager.play(SoundType::OpenOverlay);
                self.nav.join_room_from_event();
            }
            Intent::CreateSquad { name, members } => {
                let ack = self
                    .nav
                    .create_squad(name, members)
                    .map(|squad| format!("Squad \"{}\" Initialized. Check Signal Tab.", squad.name));
                match ack {
                    Some(ack) => self.set_notification(ack, None),
                    None => warn!("squad creation without a selected event"),
                }
            }
            Intent::OpenRoom(event) => {
                self.sound_manager.play(SoundType::OpenOverlay);
                self.nav.open_room(event);
            }
            Intent::OpenDm(dm) => {
                self.sound_manager.play(SoundType::OpenOverlay);
                self.nav.open_dm(dm);
            }
            Intent::OpenSquad(squad) => {
                self.sound_manager.play(SoundType::OpenOverlay);
                self.nav.open_squad(squad);
            }
            Intent::SelectPost(post) => {
                self.sound_manager.play(SoundType::OpenOverlay);
                self.nav.select_post(post);
            }
            Intent::CloseRoom => {
                self.sound_manager.play(SoundType::CloseOverlay);
                self.nav.close_room();
            }
            Intent::CloseSquad => {
                self.sound_manager.play(SoundType::CloseOverlay);
                self.nav.close_squad();
            }
            Intent::CloseDm => {
                self.sound_manager.play(SoundType::CloseOverlay);
                self.nav.close_dm();
            }
            Intent::ClosePost => {
                self.sound_manager.play(SoundType::CloseOverlay);
                self.nav.close_post();
            }
        }
        self.reconcile();
    }

    /// Rebuilds screen-local state when the visible screen changed, and
    /// opens or drops the connect modal to match the navigation state.
    fn reconcile(&mut self) {
        let visible = self.nav.visible();
        let key = visible.view.key();
        if key != self.mounted_key {
            debug!(from = ?self.mounted_key, to = ?key, overlay = visible.view.is_overlay(), "remount");
            self.mounted = Mounted::mount(&visible.view, &self.config);
            self.mounted_key = key;
        }
        match visible.connect {
            Some((attendee, event)) => {
                let current = self.connect_modal.as_ref().is_some_and(|m| m.is_for(attendee, event));
                if !current {
                    self.connect_modal = Some(ConnectModal::new(attendee, event));
                }
            }
            None => self.connect_modal = None,
        }
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
        if self.notifications.should_close_notification(self.ui.tick_count) {
            self.notifications.clear_notification();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::{ATTENDEES, DIRECT_MESSAGES, EVENTS, GALLERY};
    use crate::state::Tab;
    use crate::state::nav::CONNECT_ACK;

    pub(crate) fn test_app() -> App {
        App::new(SoundManager::silent(), AppConfig::default(), std::env::temp_dir().join("turf-test-prefs.json"))
    }

    pub(crate) fn onboarded_app() -> App {
        let mut app = test_app();
        app.dispatch(Intent::CompleteOnboarding);
        app
    }

    #[test]
    fn test_onboarding_then_event_list() {
        let mut app = test_app();
        assert!(matches!(app.mounted, Mounted::Onboarding(_)));
        app.dispatch(Intent::CompleteOnboarding);
        assert!(matches!(app.mounted, Mounted::EventList(_)));
        assert_eq!(app.mounted_key(), &ScreenKey::EventList);
    }

    #[test]
    fn test_attendee_list_state_resets_after_room() {
        let mut app = onboarded_app();
        app.dispatch(Intent::SelectEvent(EVENTS[0].clone()));
        if let Mounted::AttendeeList(screen) = &mut app.mounted {
            screen.toggle_tuner();
            screen.nudge_focused_dial(1);
        } else {
            panic!("attendee list not mounted");
        }
        app.dispatch(Intent::JoinRoom);
        assert!(matches!(app.mounted, Mounted::Chat(_)));
        app.dispatch(Intent::CloseRoom);
        match &app.mounted {
            Mounted::AttendeeList(screen) => {
                assert!(!screen.show_tuner);
                assert_eq!(screen.vibe.value(), 50);
            }
            _ => panic!("attendee list not mounted"),
        }
    }

    #[test]
    fn test_chat_history_is_lost_on_close() {
        let mut app = onboarded_app();
        app.dispatch(Intent::ChangeTab(Tab::Chat));
        app.dispatch(Intent::OpenDm(DIRECT_MESSAGES[0].clone()));
        if let Mounted::Chat(chat) = &mut app.mounted {
            chat.input = "hey".to_string();
            assert!(chat.send().is_some());
            assert_eq!(chat.messages.len(), 2);
        }
        app.dispatch(Intent::CloseDm);
        app.dispatch(Intent::OpenDm(DIRECT_MESSAGES[0].clone()));
        match &app.mounted {
            Mounted::Chat(chat) => assert_eq!(chat.messages.len(), 1),
            _ => panic!("dm not mounted"),
        }
    }

    #[test]
    fn test_feed_likes_reset_after_detail() {
        let mut app = onboarded_app();
        app.dispatch(Intent::ChangeTab(Tab::Canvas));
        let snapshot = match &mut app.mounted {
            Mounted::CanvasFeed(feed) => {
                feed.toggle_like("g1");
                feed.posts[0].clone()
            }
            _ => panic!("feed not mounted"),
        };
        app.dispatch(Intent::SelectPost(snapshot));
        match &app.mounted {
            Mounted::CanvasDetail(detail) => assert_eq!(detail.post.likes, 123),
            _ => panic!("detail not mounted"),
        }
        app.dispatch(Intent::ClosePost);
        match &app.mounted {
            Mounted::CanvasFeed(feed) => assert_eq!(feed.posts[0], GALLERY[0]),
            _ => panic!("feed not mounted"),
        }
    }

    #[test]
    fn test_connect_flow_acknowledges() {
        let mut app = onboarded_app();
        app.dispatch(Intent::SelectEvent(EVENTS[1].clone()));
        app.dispatch(Intent::Connect(ATTENDEES[2].clone()));
        let modal = app.connect_modal.clone().expect("modal open");
        assert_eq!(modal.message, "Hi Juna, saw you're going to STARGATE: LIVE SET. ");

        app.dispatch(Intent::SendConnectRequest);
        assert!(app.connect_modal.is_none());
        let notice = app.notifications.current_notification.clone().expect("ack shown");
        assert_eq!(notice.message, CONNECT_ACK);
        assert_eq!(notice.close_tick, None);
    }

    #[test]
    fn test_connect_modal_keeps_draft_across_tab_body_changes() {
        let mut app = onboarded_app();
        app.dispatch(Intent::SelectEvent(EVENTS[0].clone()));
        app.dispatch(Intent::Connect(ATTENDEES[0].clone()));
        if let Some(modal) = &mut app.connect_modal {
            modal.message.push_str("coffee?");
        }
        app.dispatch(Intent::JoinRoom);
        let modal = app.connect_modal.as_ref().expect("modal still open");
        assert!(modal.message.ends_with("coffee?"));
        app.dispatch(Intent::CloseConnect);
        assert!(app.connect_modal.is_none());
    }

    #[test]
    fn test_create_squad_acknowledges_without_opening() {
        let mut app = onboarded_app();
        app.dispatch(Intent::SelectEvent(EVENTS[0].clone()));
        app.dispatch(Intent::CreateSquad { name: "Squad: KEYNOTE".into(), members: vec![ATTENDEES[1].clone()] });
        assert_eq!(app.nav.squads.len(), 1);
        assert!(matches!(app.mounted, Mounted::AttendeeList(_)));
        let notice = app.notifications.current_notification.clone().expect("ack shown");
        assert_eq!(notice.message, "Squad \"Squad: KEYNOTE\" Initialized. Check Signal Tab.");
    }

    #[test]
    fn test_create_squad_without_event_is_ignored() {
        let mut app = onboarded_app();
        app.dispatch(Intent::CreateSquad { name: "x".into(), members: vec![ATTENDEES[1].clone()] });
        assert!(app.nav.squads.is_empty());
        assert!(app.notifications.current_notification.is_none());
    }

    #[test]
    fn test_notification_timeout_follows_tick_rate() {
        let config = AppConfig { tick_rate_ms: 200, ..AppConfig::default() };
        let mut app = App::new(SoundManager::silent(), config, std::env::temp_dir().join("turf-test-prefs.json"));
        app.set_notification("Sound effects on", Some(1500));
        for _ in 0..6 {
            app.on_tick();
        }
        assert!(app.notifications.current_notification.is_some());
        app.on_tick();
        assert!(app.notifications.current_notification.is_none());
    }

    #[test]
    fn test_timed_notification_closes_on_tick() {
        let mut app = test_app();
        app.set_notification("Sound effects off", Some(100));
        app.on_tick();
        assert!(app.notifications.current_notification.is_some());
        app.on_tick();
        assert!(app.notifications.current_notification.is_none());
    }
}
