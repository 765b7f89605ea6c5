//! Agenda tab: event list, attendee list with the tuner dials, squad form.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::popups::draw_centered_rect;
use super::{ACCENT, MUTED, SIGNAL};
use crate::catalog::{ATTENDEES, EVENTS};
use crate::model::{Attendee, EventKind};
use crate::screens::attendee_list::{AttendeeListScreen, DialFocus};
use crate::screens::squad_modal::SquadModalFocus;
use crate::screens::{EventListScreen, SquadModal};
use crate::widgets::dial::draw_dial;

fn kind_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Talk => ACCENT,
        EventKind::Live => SIGNAL,
        EventKind::Night => Color::Magenta,
    }
}

pub fn draw_event_list(f: &mut Frame, screen: &mut EventListScreen, area: Rect) {
    let items: Vec<ListItem> = EVENTS
        .iter()
        .map(|event| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("[{}] ", event.kind), Style::default().fg(kind_color(event.kind))),
                    Span::styled(event.time.clone(), Style::default().fg(MUTED)),
                ]),
                Line::from(Span::styled(event.title.clone(), Style::default().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(
                    format!("{}  ·  {} going", event.location, event.attendee_count),
                    Style::default().fg(MUTED),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" AGENDA ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 30, 30)))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut screen.list_state);
}

pub fn draw_attendee_list(f: &mut Frame, screen: &mut AttendeeListScreen, area: Rect) {
    let tuner_height = if screen.show_tuner { 12 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // header
            Constraint::Length(tuner_height), // dials
            Constraint::Min(0),               // attendees
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(screen.event.title.clone(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            format!("{} going  ·  {}  ·  {}", screen.event.attendee_count, screen.event.location, screen.event.time),
            Style::default().fg(MUTED),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(MUTED)));
    f.render_widget(header, chunks[0]);

    if screen.show_tuner {
        let dial_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        let focus = screen.dial_focus;
        draw_dial(f, &mut screen.vibe, dial_areas[0], focus == DialFocus::Vibe);
        draw_dial(f, &mut screen.squad_size, dial_areas[1], focus == DialFocus::SquadSize);
    }

    let filtered = screen.filtered();
    if filtered.is_empty() {
        f.render_widget(
            Paragraph::new("No signal found. Adjust Dials.")
                .style(Style::default().fg(MUTED))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded)),
            chunks[2],
        );
    } else {
        let items: Vec<ListItem> = filtered.iter().map(|a| attendee_item(a)).collect();
        let mut state = ListState::default();
        state.select(Some(screen.cursor.min(filtered.len() - 1)));
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" SIGNALS ({}) ", filtered.len()))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .highlight_style(Style::default().bg(Color::Rgb(30, 30, 30)))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[2], &mut state);
    }

    if let Some(modal) = &screen.squad_modal {
        draw_squad_modal(f, modal, area);
    }
}

fn attendee_item(attendee: &Attendee) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(attendee.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", attendee.role), Style::default().fg(MUTED)),
            Span::styled(format!("  ~{}", attendee.vibe_score), Style::default().fg(SIGNAL)),
        ]),
        Line::from(Span::styled(format!("\"{}\"", attendee.intent), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            attendee.tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" "),
            Style::default().fg(ACCENT),
        )),
    ])
}

fn draw_squad_modal(f: &mut Frame, modal: &SquadModal, area: Rect) {
    let popup = draw_centered_rect(area, 70, 70);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" ASSEMBLE SQUAD ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let focused = |focus: SquadModalFocus| {
        if modal.focus == focus { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
    };
    f.render_widget(
        Paragraph::new(modal.name.clone())
            .block(Block::default().title("Name").borders(Borders::ALL).border_style(focused(SquadModalFocus::Name))),
        chunks[0],
    );

    let items: Vec<ListItem> = ATTENDEES
        .iter()
        .map(|a| {
            let mark = if modal.is_selected(&a.id) { "[x] " } else { "[ ] " };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(SIGNAL)),
                Span::raw(a.name.clone()),
                Span::styled(format!("  {}", a.role), Style::default().fg(MUTED)),
            ]))
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(modal.cursor));
    f.render_stateful_widget(
        List::new(items)
            .block(Block::default().title("Members").borders(Borders::ALL).border_style(focused(SquadModalFocus::Members)))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
        chunks[1],
        &mut state,
    );

    let button = if modal.can_create() {
        Span::styled("[ INITIALIZE SQUAD ]", Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("[ SELECT MEMBERS ]", Style::default().fg(MUTED))
    };
    f.render_widget(Paragraph::new(button).alignment(Alignment::Center).wrap(Wrap { trim: true }), chunks[2]);
}
