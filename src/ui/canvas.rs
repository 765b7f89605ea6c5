use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use super::{ACCENT, ALERT, MUTED, SIGNAL};
use crate::model::GalleryPost;
use crate::screens::{CanvasDetailScreen, CanvasFeedScreen};

fn likes_span(post: &GalleryPost) -> Span<'static> {
    if post.liked_by_me {
        Span::styled(format!("♥ {}", post.likes), Style::default().fg(ALERT).add_modifier(Modifier::BOLD))
    } else {
        Span::styled(format!("♡ {}", post.likes), Style::default().fg(MUTED))
    }
}

pub fn draw_canvas_feed(f: &mut Frame, screen: &mut CanvasFeedScreen, area: Rect) {
    let items: Vec<ListItem> = screen
        .posts
        .iter()
        .map(|post| {
            ListItem::new(vec![
                Line::from(Span::styled(post.title.clone(), Style::default().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(format!("by {}", post.author), Style::default().fg(SIGNAL))),
                Line::from(vec![
                    likes_span(post),
                    Span::styled(format!("   ✎ {}", post.comments_count), Style::default().fg(MUTED)),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" CANVAS ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 30, 30)))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut screen.list_state);
}

pub fn draw_canvas_detail(f: &mut Frame, screen: &CanvasDetailScreen, area: Rect) {
    let post = &screen.post;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // title, author, likes
            Constraint::Min(3),    // description + comments
            Constraint::Length(3), // comment input
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(post.title.clone(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(format!("by {}", post.author), Style::default().fg(SIGNAL))),
            Line::from(vec![
                likes_span(post),
                Span::styled(format!("   {}", post.image_url), Style::default().fg(MUTED)),
            ]),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(MUTED))),
        chunks[0],
    );

    let mut lines = vec![
        Line::from(post.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!("COMMENTS ({})", post.comments.len()),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        )),
    ];
    for comment in &post.comments {
        lines.push(Line::from(vec![
            Span::styled(comment.author.clone(), Style::default().fg(SIGNAL).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", comment.timestamp), Style::default().fg(MUTED)),
        ]));
        lines.push(Line::from(comment.text.clone()));
    }
    // Keep the newest comment in view once the thread outgrows the area.
    let thread = Paragraph::new(lines).wrap(Wrap { trim: true });
    let skip = thread.line_count(chunks[1].width).saturating_sub(chunks[1].height as usize);
    f.render_widget(thread.scroll((skip as u16, 0)), chunks[1]);

    let (text, style) = if screen.comment_input.is_empty() {
        ("Add a comment...".to_string(), Style::default().fg(MUTED))
    } else {
        (format!("{}_", screen.comment_input), Style::default())
    };
    f.render_widget(
        Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded)),
        chunks[2],
    );
}
