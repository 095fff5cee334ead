//! Terminal UI for Word Scramble

mod app;
pub(crate) mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};
use word_scramble::{DictionaryOracle, Game};

use app::App;

/// Runs the single-screen game until the player quits.
#[instrument(skip_all, fields(root = %game.session().root_word()))]
pub fn run_tui<D, R>(game: Game<D, R>) -> Result<()>
where
    D: DictionaryOracle,
    R: rand::Rng,
{
    info!("Starting Word Scramble TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(game));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

fn run_app<D, R>(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App<D, R>) -> Result<()>
where
    D: DictionaryOracle,
    R: rand::Rng,
{
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && let Some(action) = input::action_for(key, app.alert().is_some())
        {
            app.handle(action);
        }
    }

    let session = app.session();
    info!(
        words = session.word_count(),
        letters = session.total_letters(),
        "Player quit"
    );
    Ok(())
}
