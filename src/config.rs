use std::time::Duration;

pub const WORLD_WIDTH: i32 = 200;
pub const WORLD_HEIGHT: i32 = 200;
pub const WINDOW_WIDTH: usize = 51;
pub const WINDOW_HEIGHT: usize = 21;
pub const INITIAL_SNAKE_LENGTH: usize = 5;
pub const TICK_INTERVAL_MS: u64 = 100;

/// Size of the logical grid. Valid coordinates are `[0, width] x [0, height]`,
/// both ends inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorldSize {
    pub width: i32,
    pub height: i32,
}

/// Size of the visible window, in terminal cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub world: WorldSize,
    pub window: WindowSize,
    pub initial_length: usize,
    /// Distance kept from the world edges when picking the spawn point
    pub spawn_margin: i32,
    pub tick_interval: Duration,
}

impl GameConfig {
    pub fn new(world: WorldSize, window: WindowSize, initial_length: usize) -> Self {
        GameConfig {
            world,
            window,
            initial_length,
            spawn_margin: initial_length as i32 + 1,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(
            WorldSize { width: WORLD_WIDTH, height: WORLD_HEIGHT },
            WindowSize { width: WINDOW_WIDTH, height: WINDOW_HEIGHT },
            INITIAL_SNAKE_LENGTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margin_fits_initial_body() {
        let config = GameConfig::default();
        assert_eq!(config.spawn_margin, 6);
        assert!(config.spawn_margin as usize > config.initial_length);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
    }
}
