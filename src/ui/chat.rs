//! Signal tab: the hub listing and the three chat screens.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::time_format::formed_ago;
use super::{ACCENT, ALERT, MUTED, SIGNAL};
use crate::catalog::find_event;
use crate::model::{ChatMessage, Squad};
use crate::screens::ChatRoomScreen;
use crate::screens::chat_hub::{ChatHubScreen, HubEntry, hub_entries};

fn section_header(title: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
    )))
}

pub fn draw_chat_hub(f: &mut Frame, screen: &ChatHubScreen, squads: &[Squad], area: Rect) {
    let now = chrono::Utc::now();
    let mut items = Vec::new();
    let mut selected_row = None;
    let mut last_section = "";

    for (i, entry) in hub_entries(squads).iter().enumerate() {
        let section = match entry {
            HubEntry::Room(_) => "EVENT ROOMS",
            HubEntry::Squad(_) => "YOUR SQUADS",
            HubEntry::Direct(_) => "DIRECT SIGNAL",
        };
        if section != last_section {
            items.push(section_header(section));
            last_section = section;
        }
        if i == screen.cursor {
            selected_row = Some(items.len());
        }
        let item = match entry {
            HubEntry::Room(event) => ListItem::new(Line::from(vec![
                Span::styled("# ", Style::default().fg(SIGNAL)),
                Span::raw(event.title.clone()),
                Span::styled(format!("  {}", event.location), Style::default().fg(MUTED)),
            ])),
            HubEntry::Squad(squad) => ListItem::new(vec![
                Line::from(vec![
                    Span::styled("◆ ", Style::default().fg(ACCENT)),
                    Span::styled(squad.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} members · {} · formed {}",
                        squad.members.len(),
                        squad.event_name,
                        formed_ago(&squad.created_at, now)
                    ),
                    Style::default().fg(MUTED),
                )),
            ]),
            HubEntry::Direct(dm) => {
                let event_title = find_event(&dm.related_event_id).map_or("Unknown Event", |e| e.title.as_str());
                let mut first = vec![
                    Span::styled(dm.user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", dm.timestamp), Style::default().fg(MUTED)),
                ];
                if dm.unread {
                    first.push(Span::styled("  ●", Style::default().fg(ALERT)));
                }
                ListItem::new(vec![
                    Line::from(first),
                    Line::from(Span::styled(format!("  {}", dm.last_message), Style::default().fg(Color::Gray))),
                    Line::from(Span::styled(format!("  re: {}", event_title), Style::default().fg(SIGNAL))),
                ])
            }
        };
        items.push(item);
    }

    let mut state = ListState::default();
    state.select(selected_row);
    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" SIGNAL ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 30, 30)))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state);
}

fn message_lines(message: &ChatMessage) -> Vec<Line<'static>> {
    let author_style = if message.is_mine {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else if message.author == "System" {
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(SIGNAL).add_modifier(Modifier::BOLD)
    };
    vec![
        Line::from(vec![
            Span::styled(message.author.clone(), author_style),
            Span::styled(format!("  {}", message.timestamp), Style::default().fg(MUTED)),
        ]),
        Line::from(message.text.clone()),
        Line::from(""),
    ]
}

pub fn draw_chat_room(f: &mut Frame, screen: &ChatRoomScreen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(0),    // messages
            Constraint::Length(3), // input
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(screen.title.clone(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(screen.subtitle.clone(), Style::default().fg(MUTED))),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(MUTED))),
        chunks[0],
    );

    // Newest messages sit at the bottom; scroll_offset counts messages hidden below.
    let visible_count = screen.messages.len().saturating_sub(screen.scroll_offset);
    let lines: Vec<Line> = screen.messages[..visible_count].iter().flat_map(message_lines).collect();
    let log = Paragraph::new(lines).wrap(Wrap { trim: false });
    // Side borders only: the text is two columns narrower, the height is unchanged.
    let skip = log
        .line_count(chunks[1].width.saturating_sub(2))
        .saturating_sub(chunks[1].height as usize);
    f.render_widget(
        log.scroll((skip as u16, 0))
            .block(Block::default().borders(Borders::LEFT | Borders::RIGHT).border_style(Style::default().fg(MUTED))),
        chunks[1],
    );

    let (text, style) = if screen.input.is_empty() {
        (screen.placeholder.clone(), Style::default().fg(MUTED))
    } else {
        (format!("{}_", screen.input), Style::default())
    };
    f.render_widget(
        Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded)),
        chunks[2],
    );
}
