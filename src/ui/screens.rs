//! Game screen placeholders
//!
//! The shell only routes to these screens; what they eventually render is
//! gameplay, which plugs in behind the route table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::app::App;
use crate::router::Screen;
use crate::ui::components;

pub fn render_stage(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Stage body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    if let [header_area, body_area, footer_area] = &chunks[..] {
        components::render_view_header(frame, *header_area, app.screen.title());

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                stage_text(app.screen),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(body, *body_area);

        components::render_navigation_footer(
            frame,
            *footer_area,
            "STAGE",
            &[("Esc", "menu"), ("Ctrl-C", "quit")],
        );
    }
}

fn stage_text(screen: Screen) -> &'static str {
    match screen {
        Screen::FirstLevel => "First level loading dock — gameplay renders here.",
        Screen::Battle => "Battle arena staging — gameplay renders here.",
        Screen::Options => "Options panel — settings render here.",
        Screen::Menu => "",
    }
}
