//! Circular "tuner" dial. Dragging around the centre maps the pointer angle
//! to a value in 0..=100, with 0 at the top and increasing clockwise.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

/// Maps a pointer offset from the dial centre to a dial value.
///
/// `dy` grows downwards, like terminal rows. The angle is taken with `atan2`,
/// rotated so 0° sits at the top, wrapped into `[0, 360)` and scaled linearly.
pub fn value_at(dx: f64, dy: f64) -> u8 {
    let mut angle = dy.atan2(dx).to_degrees() + 90.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    ((angle / 360.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone)]
pub struct DialControl {
    pub label: &'static str,
    pub color_start: Color,
    pub color_end: Color,
    value: u8,
    dragging: bool,
    // Canvas area from the last frame; pointer positions are resolved against it.
    area: Rect,
}

impl DialControl {
    pub fn new(label: &'static str, value: u8, color_start: Color, color_end: Color) -> Self {
        Self {
            label,
            color_start,
            color_end,
            value: value.min(100),
            dragging: false,
            area: Rect::default(),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn nudge(&mut self, delta: i16) {
        self.value = (self.value as i16 + delta).clamp(0, 100) as u8;
    }

    /// Starts a drag when the press lands on the dial. The value only changes on move.
    pub fn press(&mut self, column: u16, row: u16) -> bool {
        if self.area.contains(Position { x: column, y: row }) {
            self.dragging = true;
        }
        self.dragging
    }

    /// Follows the pointer anywhere on screen while a drag is active.
    pub fn drag_to(&mut self, column: u16, row: u16) -> Option<u8> {
        if !self.dragging {
            return None;
        }
        let cx = self.area.x as f64 + self.area.width as f64 / 2.0;
        let cy = self.area.y as f64 + self.area.height as f64 / 2.0;
        let dx = column as f64 + 0.5 - cx;
        // Terminal cells are roughly twice as tall as they are wide.
        let dy = (row as f64 + 0.5 - cy) * 2.0;
        self.value = value_at(dx, dy);
        Some(self.value)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }
}

pub fn draw_dial(f: &mut Frame, dial: &mut DialControl, area: Rect, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // label
            Constraint::Min(3),    // dial face
            Constraint::Length(1), // value
            Constraint::Length(1), // hint
        ])
        .split(area);

    let label_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(
        Paragraph::new(dial.label.to_uppercase()).style(label_style).alignment(Alignment::Center),
        chunks[0],
    );

    // Keep the face roughly round: two columns per row.
    let face_height = chunks[1].height;
    let face_width = (face_height * 2).min(chunks[1].width);
    let face = Rect::new(
        chunks[1].x + (chunks[1].width - face_width) / 2,
        chunks[1].y,
        face_width,
        face_height,
    );
    dial.set_area(face);

    let theta = dial.value as f64 / 100.0 * std::f64::consts::TAU;
    let ring_color = if dial.is_dragging() { dial.color_end } else { dial.color_start };
    let notch_color = dial.color_end;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(move |ctx| {
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius: 1.0, color: ring_color });
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius: 0.6, color: Color::DarkGray });
            ctx.draw(&CanvasLine {
                x1: 0.6 * theta.sin(),
                y1: 0.6 * theta.cos(),
                x2: theta.sin(),
                y2: theta.cos(),
                color: notch_color,
            });
        });
    f.render_widget(canvas, face);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{}%", dial.value),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new("TUNE SIGNAL").style(Style::default().fg(Color::DarkGray)).alignment(Alignment::Center),
        chunks[3],
    );
}
