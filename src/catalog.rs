// turf/src/catalog.rs
// Seed data for the whole session. Nothing here is ever mutated.

use crate::model::{Attendee, ChatMessage, Comment, DirectMessageSummary, Event, EventKind, GalleryPost};
use once_cell::sync::Lazy;

fn event(id: &str, title: &str, time: &str, location: &str, kind: EventKind, attendee_count: u32) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        kind,
        attendee_count,
    }
}

fn attendee(id: &str, name: &str, role: &str, avatar: &str, tags: &[&str], intent: &str, vibe_score: u8) -> Attendee {
    Attendee {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        intent: intent.to_string(),
        vibe_score,
    }
}

fn seed_message(id: &str, author: &str, text: &str, timestamp: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        author: author.to_string(),
        text: text.to_string(),
        timestamp: timestamp.to_string(),
        is_mine: false,
    }
}

fn comment(id: &str, author: &str, text: &str, timestamp: &str) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.to_string(),
        text: text.to_string(),
        timestamp: timestamp.to_string(),
    }
}

pub static EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    vec![
        event("1", "KEYNOTE: AI ETHICS", "14:00", "KOEPEL", EventKind::Talk, 142),
        event("2", "STARGATE: LIVE SET", "16:30", "PIER 15", EventKind::Live, 89),
        event("3", "ACID CORE NIGHT", "23:00", "MEZZ", EventKind::Night, 312),
        event("4", "DIGITAL ART WALK", "19:00", "CITY CENTRE", EventKind::Live, 56),
    ]
});

pub static ATTENDEES: Lazy<Vec<Attendee>> = Lazy::new(|| {
    vec![
        attendee(
            "u1",
            "Sanne",
            "Creative Coder",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=200",
            &["Generative Art", "Ethics"],
            "Looking for debate partners on AI copyright.",
            20,
        ),
        attendee(
            "u2",
            "Marcus",
            "Producer",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=200",
            &["Modular", "Techno"],
            "Checking the sound system setup.",
            80,
        ),
        attendee(
            "u3",
            "Juna",
            "Designer",
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=200",
            &["UI/UX", "Visuals"],
            "Just here for the visual inspiration.",
            50,
        ),
        attendee(
            "u4",
            "Kai",
            "Developer",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=200",
            &["Web3", "React"],
            "Networking for my startup.",
            10,
        ),
        attendee(
            "u5",
            "Luna",
            "Raver",
            "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?q=80&w=200",
            &["Dance", "Energy"],
            "Front row or go home.",
            100,
        ),
    ]
});

pub static ROOM_SEED: Lazy<Vec<ChatMessage>> = Lazy::new(|| {
    vec![
        seed_message("1", "System", "Welcome to the Event Room. Plan your meetup here.", "13:55"),
        seed_message("2", "Sanne", "Is anyone gathering beforehand?", "13:58"),
        seed_message("3", "Marcus", "I am at the coffee bar near the entrance.", "14:01"),
    ]
});

pub static DIRECT_MESSAGES: Lazy<Vec<DirectMessageSummary>> = Lazy::new(|| {
    vec![
        DirectMessageSummary {
            id: "dm1".to_string(),
            user: ATTENDEES[2].clone(),
            last_message: "Hey! Saw you at the Keynote. That point about...".to_string(),
            timestamp: "14:45".to_string(),
            related_event_id: "1".to_string(),
            unread: true,
        },
        DirectMessageSummary {
            id: "dm2".to_string(),
            user: ATTENDEES[1].clone(),
            last_message: "Are we still meeting at Pier 15?".to_string(),
            timestamp: "12:30".to_string(),
            related_event_id: "2".to_string(),
            unread: false,
        },
    ]
});

pub static GALLERY: Lazy<Vec<GalleryPost>> = Lazy::new(|| {
    vec![
        GalleryPost {
            id: "g1".to_string(),
            title: "NEURAL LANDSCAPES".to_string(),
            author: "Sanne".to_string(),
            image_url: "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?q=80&w=800".to_string(),
            likes: 124,
            comments_count: 12,
            liked_by_me: true,
            description: "A series exploring the latent space between organic growth and digital decay. \
                Generated using a custom GAN model trained on local Breda flora and brutalist architecture."
                .to_string(),
            comments: vec![
                comment("c1", "Marcus", "The texture on this is unreal.", "10m ago"),
                comment("c2", "Juna", "Would look great projected on the Koepel.", "2h ago"),
            ],
        },
        GalleryPost {
            id: "g2".to_string(),
            title: "TURF BY NIGHT (WIP)".to_string(),
            author: "Juna".to_string(),
            image_url: "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=800".to_string(),
            likes: 89,
            comments_count: 4,
            liked_by_me: false,
            description: "Capturing the raw energy of the crowd during the opening night. \
                Long exposure shots mixed with real-time motion tracking."
                .to_string(),
            comments: vec![comment("c3", "Kai", "I think I see myself in the background!", "15m ago")],
        },
        GalleryPost {
            id: "g3".to_string(),
            title: "MODULAR SYNTH SETUP".to_string(),
            author: "Marcus".to_string(),
            image_url: "https://images.unsplash.com/photo-1598653222000-6b7b7a552625?q=80&w=800".to_string(),
            likes: 245,
            comments_count: 34,
            liked_by_me: false,
            description: "My rig for the live set at Pier 15. Eurorack focused on granular synthesis \
                and deep bass textures. Come check it out."
                .to_string(),
            comments: Vec::new(),
        },
    ]
});

pub fn find_event(id: &str) -> Option<&'static Event> {
    EVENTS.iter().find(|e| e.id == id)
}
