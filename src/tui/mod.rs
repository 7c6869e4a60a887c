pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(anyhow::Error::from(e));
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
            // Layout is recomputed on the next draw
            Event::Resize => {}
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Navigation (moves the runner while grabbed)
                KeyCode::Char('j') | KeyCode::Down => app.next_row(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

                // Direct moves
                KeyCode::Char('J') => app.move_selected_down(),
                KeyCode::Char('K') => app.move_selected_up(),

                // Grab / drop
                KeyCode::Char(' ') | KeyCode::Enter => app.toggle_grab(),

                // Move to typed place
                KeyCode::Char('m') => app.start_move_input(),

                // Reset to loaded order
                KeyCode::Char('R') => app.reset(),

                // Re-read the results file
                KeyCode::Char('L') => {
                    if let Err(e) = app.reload() {
                        app.show_flash(format!("Failed to reload: {}", e));
                    }
                }

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        app::InputMode::MoveInput => {
            match key.code {
                KeyCode::Enter => app.confirm_move_input(),
                KeyCode::Esc => app.cancel_move_input(),
                KeyCode::Backspace => {
                    app.move_input.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    app.move_input.push(c);
                }
                // Ignore all other keys (don't propagate to Normal mode)
                _ => {}
            }
        }
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
