//! Terminal lifecycle and the cooperative event loop.
//!
//! One thread, no locks: the loop sleeps until either a key arrives or the
//! playback deadline passes, applies exactly one event, and redraws on a
//! fixed cadence.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Terminal,
};

use crate::app::{App, Mode};
use crate::ui::screen::ScreenContent;
use crate::ui::view;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let render_tick = Duration::from_millis(1000 / 60);
        let mut last_frame = Instant::now();

        // First paint before any input arrives.
        self.render_frame(app)?;

        loop {
            if app.mode == Mode::Quit {
                return Ok(());
            }

            // Sleep until the armed advance or the next render tick,
            // whichever comes first.
            let now = Instant::now();
            let timeout = app
                .playback
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(now))
                .map_or(render_tick, |until| until.min(render_tick));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_key(key, Instant::now());
                }
            }

            app.playback.tick(Instant::now(), &mut app.screen);

            if last_frame.elapsed() >= render_tick {
                self.render_frame(app)?;
                last_frame = Instant::now();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // reader pane
                    Constraint::Length(1), // progress bar
                    Constraint::Length(1), // status line
                    Constraint::Length(1), // command line
                ])
                .split(area);

            match app.screen.content() {
                ScreenContent::Word {
                    frame: word,
                    progress,
                } => {
                    let word_row = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Percentage(50),
                            Constraint::Length(1),
                            Constraint::Min(0),
                        ])
                        .split(rows[0])[1];
                    frame.render_widget(
                        Paragraph::new(view::render_word_line(word, word_row.width)),
                        word_row,
                    );
                    frame.render_widget(Paragraph::new(view::render_progress_bar(*progress)), rows[1]);
                }
                ScreenContent::Empty => {
                    frame.render_widget(view::render_placeholder(), rows[0]);
                }
            }

            let settings = app.playback.settings();
            let state = if app.playback.is_empty() {
                "EMPTY"
            } else if app.playback.is_playing() {
                "PLAYING"
            } else {
                "PAUSED"
            };
            frame.render_widget(
                Paragraph::new(view::render_status_line(
                    settings.rate_wpm,
                    settings.pause_on_punctuation,
                    settings.punctuation_delay_multiplier,
                    state,
                    app.status.as_deref(),
                )),
                rows[2],
            );

            if app.mode == Mode::Command {
                frame.render_widget(view::render_command_line(&app.command_line), rows[3]);
            }
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
