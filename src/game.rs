use std::time::Instant;

use crate::TermInt;
use crate::config::GameConfig;
use crate::snake::Collision;
use crate::state::{HostCmd, Command, EndReason, Event, GameState, Status};
use crate::term::TermManager;

use anyhow::Context;
use log::{error, info, warn};

const STATUS_LINE: &str = "arrows/hjkl: move  q: quit";

/// Drives a `GameState` from the terminal: keys and the tick timer go in,
/// frames come out.
pub struct SnakeGame {
    config: GameConfig,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Self {
        SnakeGame { config, term: TermManager::new() }
    }

    /// Sets the terminal up, plays one game and puts the terminal back, also
    /// when the game fails halfway.
    pub fn run(&mut self) -> anyhow::Result<Status> {
        let res = match self.term.setup().context("Could not set up the terminal") {
            Ok(()) => self.session(),
            Err(err) => Err(err),
        };

        // Setup may have entered the alternate screen before failing
        let restored = self.term.restore().context("Could not restore the terminal");
        settle(res, restored)
    }

    fn session(&mut self) -> anyhow::Result<Status> {
        if self.show_intro()? {
            return Ok(Status::Dead(EndReason::Quit));
        }

        self.play()
    }

    /// Returns `true` if the player quit from the intro screen.
    fn show_intro(&mut self) -> anyhow::Result<bool> {
        let (w, h) = self.term.get_terminal_size()?;
        let window = self.config.window;
        if (w as usize) < window.width || (h as usize) < window.height + 1 {
            warn!("Terminal is {}x{}, the game needs {}x{}", w, h, window.width, window.height + 1);
        }

        let area = self.frame_area();
        self.term.clear()?;
        self.term.show_message(area, &[
            "Arrow keys or hjkl to move",
            "q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ])?;

        let key = self.term.read_key_blocking()?;
        Ok(Command::from_key_event(&key) == Some(Command::Quit))
    }

    fn play(&mut self) -> anyhow::Result<Status> {
        let mut state = GameState::new(self.config.clone(), &mut rand::thread_rng());
        let mut next_tick = None;
        schedule(state.init(), &mut next_tick);

        self.term.clear()?;
        self.draw(&state)?;

        // No tick armed means the game is over
        while let Some(deadline) = next_tick {
            let event = match self.term.read_key_until(deadline)? {
                Some(key) => match Command::from_key_event(&key) {
                    Some(cmd) => Event::Key(cmd),
                    None => continue,
                },
                None => {
                    next_tick = None;
                    Event::Tick
                },
            };

            if let Some(cmd) = state.update(event) {
                schedule(cmd, &mut next_tick);
            }

            self.draw(&state)?;
        }

        let status = state.status();
        info!("Game ended: {:?} at {:?}", status, state.snake().head());

        if let Status::Dead(EndReason::Crashed(collision)) = status {
            self.game_over(collision)?;
        }

        Ok(status)
    }

    fn draw(&mut self, state: &GameState) -> anyhow::Result<()> {
        let mut lines = state.render().lines();
        lines.push(format!("{:<width$}", STATUS_LINE, width = self.config.window.width));
        self.term.draw_lines(&lines).context("Could not draw the frame")
    }

    fn game_over(&mut self, collision: Collision) -> anyhow::Result<()> {
        let cause = match collision {
            Collision::Wall => "You hit the wall",
            Collision::Body => "You bit yourself",
        };

        let area = self.frame_area();
        self.term.show_message(area, &[
            "Game over!",
            cause,
            "",
            "Press any key to exit"
        ])?;

        self.term.read_key_blocking()?;
        Ok(())
    }

    fn frame_area(&self) -> (TermInt, TermInt) {
        (self.config.window.width as TermInt, self.config.window.height as TermInt)
    }
}

fn schedule(cmd: HostCmd, next_tick: &mut Option<Instant>) {
    match cmd {
        HostCmd::Tick(delay) => *next_tick = Some(Instant::now() + delay),
        HostCmd::Quit => *next_tick = None,
    }
}

/// The game's own error wins over a failed restore, which only gets logged.
fn settle<T>(res: anyhow::Result<T>, restored: anyhow::Result<()>) -> anyhow::Result<T> {
    match (res, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(restore_err)) => Err(restore_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(restore_err)) => {
            error!("{:#}", restore_err);
            Err(err)
        },
    }
}
