// turf/src/model.rs

use std::fmt;

// --- Data Structures ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Talk,
    Live,
    Night,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventKind::Talk => "Talk",
            EventKind::Live => "Live",
            EventKind::Night => "Night",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub time: String,
    pub location: String,
    pub kind: EventKind,
    pub attendee_count: u32,
}

impl Event {
    /// Title up to the first ':' (the whole title when there is none).
    pub fn short_title(&self) -> &str {
        self.title.split(':').next().unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub tags: Vec<String>,
    /// "Why are you going?"
    pub intent: String,
    pub vibe_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Squad {
    pub id: String,
    pub name: String,
    pub event_id: String,
    pub event_name: String,
    pub members: Vec<Attendee>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub author: String,
    pub text: String,
    pub timestamp: String,
    pub is_mine: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessageSummary {
    pub id: String,
    pub user: Attendee,
    pub last_message: String,
    pub timestamp: String,
    pub related_event_id: String,
    pub unread: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPost {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    // Signed so an unlike from zero can still be undone.
    pub likes: i32,
    pub comments_count: u32,
    pub liked_by_me: bool,
    pub description: String,
    pub comments: Vec<Comment>,
}

impl GalleryPost {
    /// Flips the liked flag and moves the like count by one in the matching direction.
    pub fn toggle_like(&mut self) {
        if self.liked_by_me {
            self.likes -= 1;
        } else {
            self.likes += 1;
        }
        self.liked_by_me = !self.liked_by_me;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(likes: i32, liked: bool) -> GalleryPost {
        GalleryPost {
            id: "g".into(),
            title: "T".into(),
            author: "A".into(),
            image_url: String::new(),
            likes,
            comments_count: 0,
            liked_by_me: liked,
            description: String::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn test_toggle_like_adds_one_when_not_liked() {
        let mut p = post(89, false);
        p.toggle_like();
        assert!(p.liked_by_me);
        assert_eq!(p.likes, 90);
    }

    #[test]
    fn test_toggle_like_twice_restores_state() {
        let mut p = post(124, true);
        p.toggle_like();
        assert!(!p.liked_by_me);
        assert_eq!(p.likes, 123);
        p.toggle_like();
        assert!(p.liked_by_me);
        assert_eq!(p.likes, 124);
    }

    #[test]
    fn test_unlike_from_zero_is_undone_by_like() {
        let mut p = post(0, true);
        p.toggle_like();
        assert_eq!(p.likes, -1);
        p.toggle_like();
        assert!(p.liked_by_me);
        assert_eq!(p.likes, 0);
    }

    #[test]
    fn test_short_title_cuts_at_colon() {
        let event = Event {
            id: "1".into(),
            title: "KEYNOTE: AI ETHICS".into(),
            time: "14:00".into(),
            location: "KOEPEL".into(),
            kind: EventKind::Talk,
            attendee_count: 142,
        };
        assert_eq!(event.short_title(), "KEYNOTE");
    }
}
