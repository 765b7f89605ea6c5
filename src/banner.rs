// turf/src/banner.rs

use figlet_rs::FIGfont;
use rand::prelude::*;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

#[derive(Clone)]
struct BufferChar {
    char: char,
    style: Style,
}

/// Figlet rendering of `text`, centred in `width`, with a sprinkle of glitch
/// cells that shift with `tick_count`.
pub fn get_styled_banner_lines(text: &str, width: u16, tick_count: u64, color: Color, glitch: bool) -> Vec<Line<'static>> {
    let figlet_string = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()))
        .unwrap_or_else(|| text.to_string());
    let figlet_lines: Vec<&str> = figlet_string.lines().collect();

    let figlet_width = figlet_lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = (width as usize).max(figlet_width);
    let mut buffer: Vec<Vec<BufferChar>> = vec![
        vec![BufferChar { char: ' ', style: Style::default() }; width];
        figlet_lines.len()
    ];

    let start_x = (width - figlet_width) / 2;
    for (y, line) in figlet_lines.iter().enumerate() {
        for (x, char) in line.chars().enumerate() {
            if let Some(cell) = buffer.get_mut(y).and_then(|row| row.get_mut(start_x + x)) {
                if char != ' ' {
                    cell.char = char;
                    cell.style = Style::default().fg(color);
                }
            }
        }
    }

    if glitch {
        let mut rng = thread_rng();
        for (y, row) in buffer.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let glitch_chance = 0.0005
                    + (tick_count as f64 * 0.01 + (y as f64 * 0.5) + (x as f64 * 0.01)).cos().powi(2) * 0.001;
                if cell.char != ' ' && rng.gen_bool(glitch_chance) {
                    cell.style = cell.style.bg(Color::Black).fg(Color::Rgb(255, 178, 61));
                    if rng.gen_bool(0.5) {
                        cell.char = *['█', '▓', '▒', '░'].choose(&mut rng).unwrap_or(&' ');
                    }
                }
            }
        }
    }

    buffer
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for cell in row {
                if cell.style == current_style {
                    current_text.push(cell.char);
                } else {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(current_text, current_style));
                    }
                    current_style = cell.style;
                    current_text = String::from(cell.char);
                }
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_centered_and_padded() {
        let lines = get_styled_banner_lines("TURF", 60, 0, Color::White, false);
        assert!(!lines.is_empty());
        for line in &lines {
            assert_eq!(line.width(), 60);
        }
    }

    #[test]
    fn test_banner_wider_than_area_is_not_clipped() {
        let lines = get_styled_banner_lines("TURF", 2, 0, Color::White, false);
        assert!(lines.iter().all(|l| l.width() > 2));
    }
}
