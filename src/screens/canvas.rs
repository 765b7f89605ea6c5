use crate::catalog::GALLERY;
use crate::model::{Comment, GalleryPost};
use ratatui::widgets::ListState;
use uuid::Uuid;

pub const JUST_NOW: &str = "Just now";

/// Gallery feed with its own copy of the posts. Likes made here are lost when
/// the feed is left.
pub struct CanvasFeedScreen {
    pub posts: Vec<GalleryPost>,
    pub list_state: ListState,
}

impl CanvasFeedScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { posts: GALLERY.to_vec(), list_state }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.posts.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        self.list_state.select(Some((current + delta).rem_euclid(len as isize) as usize));
    }

    pub fn selected_post(&self) -> Option<&GalleryPost> {
        self.list_state.selected().and_then(|i| self.posts.get(i))
    }

    pub fn toggle_like(&mut self, id: &str) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.toggle_like();
        }
    }

    pub fn toggle_selected_like(&mut self) {
        if let Some(id) = self.selected_post().map(|p| p.id.clone()) {
            self.toggle_like(&id);
        }
    }
}

/// A single post opened from the feed, seeded from the feed's snapshot.
pub struct CanvasDetailScreen {
    pub post: GalleryPost,
    pub comment_input: String,
}

impl CanvasDetailScreen {
    pub fn new(post: GalleryPost) -> Self {
        Self { post, comment_input: String::new() }
    }

    pub fn toggle_like(&mut self) {
        self.post.toggle_like();
    }

    pub fn can_post(&self) -> bool {
        !self.comment_input.trim().is_empty()
    }

    pub fn submit_comment(&mut self) -> Option<&Comment> {
        if !self.can_post() {
            return None;
        }
        let text = std::mem::take(&mut self.comment_input);
        self.post.comments.push(Comment {
            id: Uuid::new_v4().to_string(),
            author: "Me".to_string(),
            text,
            timestamp: JUST_NOW.to_string(),
        });
        self.post.comments.last()
    }
}
