mod components;
mod menu;
mod screens;

pub use menu::destination_row_at;

use crate::app::App;
use crate::router::Screen;
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Menu => menu::render_menu(frame, app),
        Screen::FirstLevel | Screen::Battle | Screen::Options => {
            screens::render_stage(frame, app);
        }
    }
}
