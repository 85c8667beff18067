pub mod app;
pub mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tallyboard_core::{BoardService, FileSnapshotRepository};

use crate::tui::app::{App, InputMode};

pub fn run(service: BoardService<FileSnapshotRepository>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        // The day monitor rides the event loop: checked every iteration,
        // key pressed or not, so midnight flips the board on its own.
        app.tick();

        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Left | KeyCode::Char('h') => app.move_left(),
                        KeyCode::Right | KeyCode::Char('l') => app.move_right(),
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        KeyCode::Enter | KeyCode::Char('a') => app.open_amount_modal(),
                        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_modal(),
                        KeyCode::Char('c') => app.open_clear_modal(),
                        KeyCode::Tab | KeyCode::Char('t') => app.toggle_sort(),
                        _ => {}
                    },
                    InputMode::EnteringAmount => match key.code {
                        KeyCode::Enter => app.submit_amount(),
                        KeyCode::Esc => app.close_modal(),
                        KeyCode::Char(c) => app.input_char(c),
                        KeyCode::Backspace => app.delete_char(),
                        KeyCode::Left => app.move_cursor_left(),
                        KeyCode::Right => app.move_cursor_right(),
                        _ => {}
                    },
                    InputMode::ConfirmDelete => match key.code {
                        KeyCode::Enter | KeyCode::Char('y') => app.confirm_delete(),
                        KeyCode::Esc | KeyCode::Char('n') => app.close_modal(),
                        KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                        KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
                        _ => {}
                    },
                    InputMode::ConfirmClear => match key.code {
                        KeyCode::Enter | KeyCode::Char('y') => app.confirm_clear(),
                        KeyCode::Esc | KeyCode::Char('n') => app.close_modal(),
                        _ => {}
                    },
                }
            }
        }
    }
}
