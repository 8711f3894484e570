use crate::Coords;
use crate::config::{GameConfig, WorldSize};
use Direction::*;

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit vector for one step in this direction. Y grows downwards.
    pub fn delta(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Up | Down)
    }
}

/// What the head ran into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// The snake body is a shift register of head positions: `body[0]` is the
/// head and `body[i + 1]` always holds what `body[i]` held one tick ago.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
}

impl Snake {
    /// Lays out `size` segments starting at `head` and trailing away from
    /// `direction`, so the snake moves away from its own body.
    pub fn new(head: Coords, size: usize, direction: Direction) -> Self {
        let diff = direction.delta();

        let body = (0..size.max(1) as i32)
            .map(|i| (head.0 - diff.0 * i, head.1 - diff.1 * i))
            .collect();
        Snake { body, direction }
    }

    /// Random head inside the spawn margin, random heading.
    pub fn spawn<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let margin = config.spawn_margin;
        let head = (
            pick_coord(rng, margin, config.world.width - margin),
            pick_coord(rng, margin, config.world.height - margin),
        );
        let direction = *Direction::ALL.choose(rng).unwrap_or(&Right);

        Snake::new(head, config.initial_length, direction)
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn velocity(&self) -> Coords {
        self.direction.delta()
    }

    /// Turns are only taken across axes: moving horizontally you may go up or
    /// down, moving vertically you may go left or right. Reversing in place
    /// would run the head straight into the second segment.
    pub fn turn(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_vertical() == self.direction.is_vertical() {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn advance(&mut self) {
        let (dx, dy) = self.velocity();

        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0].0 += dx;
        self.body[0].1 += dy;
    }

    /// The wall sits one cell outside the world, so a head at `world.width`
    /// is still alive and one at `world.width + 1` is not.
    pub fn collision(&self, world: &WorldSize) -> Option<Collision> {
        let (x, y) = self.head();

        if x < 0 || x > world.width || y < 0 || y > world.height {
            Some(Collision::Wall)
        } else if self.body[1..].contains(&(x, y)) {
            Some(Collision::Body)
        } else {
            None
        }
    }

    pub fn check_collision(&self, world: &WorldSize) -> bool {
        self.collision(world).is_some()
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

// Uniform in [low, high); a world too small for the margin gets its midpoint
fn pick_coord<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if low < high {
        rng.gen_range(low..high)
    } else {
        (low + high) / 2
    }
}
