// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod config;
mod error;
mod router;
mod ui;

use app::App;
use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use router::Screen;
use std::{io, time::Duration};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Load config
    let config = config::Config::load()?;

    // Check for command-line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return handle_cli_args(&args);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_capture {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Build the static navigation surface and enter at the root
    let registry = router::main_menu()?;
    let routes = router::blast_arena_routes();
    let mut app = App::new(registry, routes);
    let res = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    if config.ui.mouse_capture {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn handle_cli_args(args: &[String]) -> Result<()> {
    let cmd = args
        .get(1)
        .ok_or_else(|| color_eyre::eyre::eyre!("No argument provided"))?;
    let program_name = args.first().map_or("blast-arena", String::as_str);

    match cmd.as_str() {
        "--help" | "-h" => print_help(program_name),
        "--version" | "-v" => println!("Blast Arena v{}", env!("CARGO_PKG_VERSION")),
        other => {
            eprintln!("Unknown argument: {}", other);
            eprintln!("Run with --help for usage.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_help(program_name: &str) {
    println!("Blast Arena - terminal game shell");
    println!();
    println!("Usage: {} [--help | --version]", program_name);
    println!();
    println!("Run without arguments to start the game menu.");
    println!("Menu keys: Up/Down highlight, mouse click selects, q quits.");
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &config::Config,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(Duration::from_millis(config.ui.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.should_quit = true;
                        continue;
                    }

                    // Each screen's handler only runs while that screen is
                    // active, so a dismissed menu never sees input.
                    match app.screen {
                        Screen::Menu => handle_menu_keys(app, key.code),
                        Screen::FirstLevel | Screen::Battle | Screen::Options => {
                            handle_stage_keys(app, key.code);
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(app, mouse)?;
                }
                Event::Paste(_) | Event::FocusGained | Event::FocusLost | Event::Resize(_, _) => {}
            }
        }
    }

    Ok(())
}

fn handle_menu_keys(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up => app.highlight_previous(),
        KeyCode::Down => app.highlight_next(),
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        // Enter is not bound to a commit action: pointer click is the only
        // way to commit, it highlights and activates in one gesture.
        KeyCode::Enter
        | KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_stage_keys(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.return_to_menu(),
        KeyCode::Enter
        | KeyCode::Backspace
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: event::MouseEvent) -> Result<()> {
    if app.screen != Screen::Menu {
        return Ok(());
    }

    match mouse.kind {
        event::MouseEventKind::Down(event::MouseButton::Left) => {
            let (width, height) = crossterm::terminal::size()?;
            let area = ratatui::layout::Rect {
                x: 0,
                y: 0,
                width,
                height,
            };
            if let Some(index) = ui::destination_row_at(area, mouse.column, mouse.row) {
                app.pointer_select(index);
            }
        }
        event::MouseEventKind::ScrollUp => app.highlight_previous(),
        event::MouseEventKind::ScrollDown => app.highlight_next(),
        event::MouseEventKind::ScrollLeft
        | event::MouseEventKind::ScrollRight
        | event::MouseEventKind::Down(_)
        | event::MouseEventKind::Up(_)
        | event::MouseEventKind::Drag(_)
        | event::MouseEventKind::Moved => {}
    }
    Ok(())
}
