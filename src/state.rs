//! The game as a state machine: `update` consumes one event at a time and
//! tells the host what to do next, `render` is a pure read of the state.

use std::time::Duration;

use crate::config::GameConfig;
use crate::snake::{Collision, Direction, Snake};
use crate::viewport::{self, Frame};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info, warn};
use rand::Rng;

/// Player intent decoded from a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

impl Command {
    /// Arrow keys or hjkl turn, `q` and Ctrl+C quit. Anything else is ignored.
    pub fn from_key_event(ev: &KeyEvent) -> Option<Command> {
        if is_ctrl_c(ev) {
            return Some(Command::Quit);
        }

        match ev.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::Turn(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::Turn(Direction::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(Command::Turn(Direction::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Command::Turn(Direction::Right)),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(Command),
    Tick,
}

/// What the host has to do after an update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HostCmd {
    /// Deliver one `Event::Tick` after the given delay
    Tick(Duration),
    /// Stop the event loop
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    Crashed(Collision),
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Alive,
    Dead(EndReason),
}

pub struct GameState {
    config: GameConfig,
    snake: Snake,
    status: Status,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let snake = Snake::spawn(&config, rng);
        GameState::with_snake(config, snake)
    }

    pub fn with_snake(config: GameConfig, snake: Snake) -> Self {
        info!("Snake spawned at {:?} heading {:?}", snake.head(), snake.direction());
        if snake.check_collision(&config.world) {
            warn!("Snake spawned colliding, world {:?} is too small", config.world);
        }
        GameState { config, snake, status: Status::Alive }
    }

    /// The first tick, armed once when the loop starts.
    pub fn init(&self) -> HostCmd {
        HostCmd::Tick(self.config.tick_interval)
    }

    pub fn update(&mut self, event: Event) -> Option<HostCmd> {
        if !self.is_alive() {
            return None;
        }

        match event {
            Event::Key(Command::Turn(dir)) => {
                if self.snake.turn(dir) {
                    debug!("Turned {:?}", dir);
                }
                None
            },
            Event::Key(Command::Quit) => {
                info!("Quit requested at {:?}", self.snake.head());
                self.status = Status::Dead(EndReason::Quit);
                Some(HostCmd::Quit)
            },
            Event::Tick => {
                self.snake.advance();
                debug!("Body: {:?}", self.snake.body());

                match self.snake.collision(&self.config.world) {
                    Some(collision) => {
                        info!("Crashed into {:?} at {:?}", collision, self.snake.head());
                        self.status = Status::Dead(EndReason::Crashed(collision));
                        Some(HostCmd::Quit)
                    },
                    None => Some(HostCmd::Tick(self.config.tick_interval)),
                }
            },
        }
    }

    pub fn render(&self) -> Frame {
        let window = &self.config.window;
        let mut frame = viewport::build_map(self.snake.head(), &self.config.world, window);
        viewport::draw_snake(&mut frame, &self.snake, window, !self.is_alive());
        frame
    }

    pub fn is_alive(&self) -> bool {
        self.status == Status::Alive
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }
}
