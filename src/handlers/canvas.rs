use super::edit_input;
use crate::screens::{CanvasDetailScreen, CanvasFeedScreen, Intent};
use crate::sound::{SoundManager, SoundType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_canvas_feed_input(key: KeyEvent, screen: &mut CanvasFeedScreen, sound_manager: &SoundManager) -> Option<Intent> {
    match key.code {
        KeyCode::Up => screen.move_selection(-1),
        KeyCode::Down => screen.move_selection(1),
        KeyCode::Enter => return screen.selected_post().map(|post| Intent::SelectPost(post.clone())),
        KeyCode::Char('l') | KeyCode::Char(' ') => {
            screen.toggle_selected_like();
            sound_manager.play(SoundType::Like);
        }
        _ => {}
    }
    None
}

pub fn handle_canvas_detail_input(
    key: KeyEvent,
    screen: &mut CanvasDetailScreen,
    sound_manager: &SoundManager,
    max_len: usize,
) -> Option<Intent> {
    match key.code {
        KeyCode::Esc => return Some(Intent::ClosePost),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            screen.toggle_like();
            sound_manager.play(SoundType::Like);
        }
        KeyCode::Enter => {
            if screen.submit_comment().is_some() {
                sound_manager.play(SoundType::MessageSent);
            }
        }
        _ => {
            edit_input(&mut screen.comment_input, key, max_len);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GALLERY;
    use crate::handlers::test_keys::{ctrl, key, typed};

    #[test]
    fn test_feed_like_and_open() {
        let sounds = SoundManager::silent();
        let mut feed = CanvasFeedScreen::new();
        // g1 starts liked, so the first press is an unlike.
        handle_canvas_feed_input(key(KeyCode::Char('l')), &mut feed, &sounds);
        assert!(!feed.posts[0].liked_by_me);
        assert_eq!(feed.posts[0].likes, GALLERY[0].likes - 1);
        let intent = handle_canvas_feed_input(key(KeyCode::Enter), &mut feed, &sounds);
        assert_eq!(intent, Some(Intent::SelectPost(feed.posts[0].clone())));
    }

    #[test]
    fn test_detail_comment_and_like() {
        let sounds = SoundManager::silent();
        let mut detail = CanvasDetailScreen::new(GALLERY[0].clone());
        let comments_before = detail.post.comments.len();
        for k in typed("love it") {
            handle_canvas_detail_input(k, &mut detail, &sounds, 500);
        }
        handle_canvas_detail_input(key(KeyCode::Enter), &mut detail, &sounds, 500);
        assert_eq!(detail.post.comments.len(), comments_before + 1);
        assert!(detail.comment_input.is_empty());

        let likes = detail.post.likes;
        handle_canvas_detail_input(ctrl('l'), &mut detail, &sounds, 500);
        assert!(!detail.post.liked_by_me);
        assert_eq!(detail.post.likes, likes - 1);
        handle_canvas_detail_input(ctrl('l'), &mut detail, &sounds, 500);
        assert_eq!(detail.post.likes, likes);
        // A plain 'l' is text.
        handle_canvas_detail_input(key(KeyCode::Char('l')), &mut detail, &sounds, 500);
        assert_eq!(detail.comment_input, "l");
    }
}
