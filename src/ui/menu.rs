//! Main menu rendering and pointer hit-testing
//!
//! The hit-test derives from the same layout the renderer uses, so a click
//! row always maps to the destination drawn on it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::app::{App, Navigable};
use crate::ui::components;

const BANNER: &str = "B L A S T   A R E N A";

pub fn render_menu(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let (banner_area, list_area, footer_area) = menu_chunks(area);

    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            BANNER,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, banner_area);

    let highlighted = app.menu().map_or(0, |menu| menu.highlighted());
    let entries: Vec<Line> = app
        .registry()
        .items()
        .iter()
        .enumerate()
        .map(|(index, destination)| {
            let is_highlighted = index == highlighted;
            let marker = if is_highlighted { "> " } else { "  " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    destination.label.clone(),
                    components::entry_style(is_highlighted),
                ),
            ])
        })
        .collect();
    // One destination per row, top-aligned: the hit-test below relies on it.
    frame.render_widget(
        Paragraph::new(entries).alignment(Alignment::Center),
        list_area,
    );

    components::render_navigation_footer(
        frame,
        footer_area,
        "MENU",
        &[("↑/↓", "highlight"), ("click", "select"), ("q", "quit")],
    );
}

/// Maps a pointer position to the destination row it landed on.
///
/// Returns the raw row offset into the list area; rows below the last
/// destination yield an index the selection state rejects.
#[must_use]
pub fn destination_row_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let (_, list_area, _) = menu_chunks(area);
    let inside = column >= list_area.x
        && column < list_area.x + list_area.width
        && row >= list_area.y
        && row < list_area.y + list_area.height;
    if !inside {
        return None;
    }
    Some((row - list_area.y) as usize)
}

fn menu_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Min(0),    // Destination list
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let banner = chunks.first().copied().unwrap_or(area);
    let list = chunks.get(1).copied().unwrap_or(area);
    let footer = chunks.get(2).copied().unwrap_or(area);
    (banner, list, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_rows_map_to_destination_indices() {
        // List starts right below the five banner rows.
        assert_eq!(destination_row_at(AREA, 40, 5), Some(0));
        assert_eq!(destination_row_at(AREA, 40, 6), Some(1));
        assert_eq!(destination_row_at(AREA, 40, 7), Some(2));
    }

    #[test]
    fn test_banner_and_footer_are_dead_zones() {
        assert_eq!(destination_row_at(AREA, 40, 0), None);
        assert_eq!(destination_row_at(AREA, 40, 4), None);
        assert_eq!(destination_row_at(AREA, 40, 22), None);
    }

    #[test]
    fn test_rows_below_the_list_still_index() {
        // Inside the list area but past the last destination: the index is
        // handed on and rejected by the selection state, not clamped here.
        assert_eq!(destination_row_at(AREA, 40, 15), Some(10));
    }
}
