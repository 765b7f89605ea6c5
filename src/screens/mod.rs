//! Screen-local state. Each screen is built when it becomes visible and
//! dropped when it stops being visible, so nothing here outlives its screen.

pub mod attendee_list;
pub mod canvas;
pub mod chat_hub;
pub mod chat_room;
pub mod connect_modal;
pub mod event_list;
pub mod onboarding;
pub mod squad_modal;

use crate::model::{Attendee, DirectMessageSummary, Event, GalleryPost, Squad};
use crate::state::{AppConfig, Tab, View};

pub use attendee_list::AttendeeListScreen;
pub use canvas::{CanvasDetailScreen, CanvasFeedScreen};
pub use chat_hub::ChatHubScreen;
pub use chat_room::ChatRoomScreen;
pub use connect_modal::ConnectModal;
pub use event_list::EventListScreen;
pub use onboarding::OnboardingScreen;
pub use squad_modal::SquadModal;

/// Requests a screen sends up to the root. The root owns every cross-screen
/// decision; screens never touch each other's state.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    CompleteOnboarding,
    ChangeTab(Tab),
    SelectEvent(Event),
    BackToEvents,
    Connect(Attendee),
    CloseConnect,
    SendConnectRequest,
    JoinRoom,
    CreateSquad { name: String, members: Vec<Attendee> },
    OpenRoom(Event),
    OpenDm(DirectMessageSummary),
    OpenSquad(Squad),
    SelectPost(GalleryPost),
    CloseRoom,
    CloseSquad,
    CloseDm,
    ClosePost,
}

pub enum Mounted {
    Onboarding(OnboardingScreen),
    EventList(EventListScreen),
    AttendeeList(AttendeeListScreen),
    ChatHub(ChatHubScreen),
    CanvasFeed(CanvasFeedScreen),
    Chat(ChatRoomScreen),
    CanvasDetail(CanvasDetailScreen),
}

impl Mounted {
    pub fn mount(view: &View<'_>, config: &AppConfig) -> Self {
        match view {
            View::Onboarding => Mounted::Onboarding(OnboardingScreen::default()),
            View::EventList => Mounted::EventList(EventListScreen::new()),
            View::AttendeeList(event) => Mounted::AttendeeList(AttendeeListScreen::new((*event).clone(), config)),
            View::ChatHub(_) => Mounted::ChatHub(ChatHubScreen::default()),
            View::CanvasFeed => Mounted::CanvasFeed(CanvasFeedScreen::new()),
            View::EventRoom(event) => Mounted::Chat(ChatRoomScreen::for_event(event)),
            View::SquadChat(squad) => Mounted::Chat(ChatRoomScreen::for_squad(squad)),
            View::DirectMessage(dm) => Mounted::Chat(ChatRoomScreen::for_dm(dm)),
            View::CanvasDetail(post) => Mounted::CanvasDetail(CanvasDetailScreen::new((*post).clone())),
        }
    }
}
