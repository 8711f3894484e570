//! Maps a fixed-size window onto the world grid, centered on the snake head.
//!
//! Window column `c` shows world column `head.x + c - middle_x` (rows alike),
//! so the world walls at `-1` and `width + 1` slide into view only when the
//! head gets near them.

use std::fmt;

use crate::Coords;
use crate::config::{WindowSize, WorldSize};
use crate::snake::Snake;

pub const BORDER_CHAR: char = '█';
pub const EMPTY_CHAR: char = '⋅';
pub const OUTSIDE_CHAR: char = ' ';
pub const SNAKE_BODY_CHAR: char = 'o';
pub const DEAD_SNAKE_CHAR: char = 'X';

/// Window coordinates of the four world walls for a given head position.
/// Values may fall outside the window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Walls {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Walls {
    pub fn compute(head: Coords, world: &WorldSize, window: &WindowSize) -> Self {
        let (middle_x, middle_y) = middle(window);
        let (head_x, head_y) = head;

        Walls {
            top: middle_y - head_y - 1,
            bottom: world.height - head_y + middle_y + 1,
            left: middle_x - head_x - 1,
            right: world.width - head_x + middle_x + 1,
        }
    }

    fn cell(&self, col: i32, row: i32) -> char {
        if row < self.top || row > self.bottom || col < self.left || col > self.right {
            OUTSIDE_CHAR
        } else if row == self.top || row == self.bottom || col == self.left || col == self.right {
            BORDER_CHAR
        } else {
            EMPTY_CHAR
        }
    }
}

/// Window cell holding the head.
pub fn middle(window: &WindowSize) -> (i32, i32) {
    ((window.width / 2) as i32, (window.height / 2) as i32)
}

/// A rectangular grid of glyphs, one row per terminal line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<Vec<char>>,
}

impl Frame {
    pub fn new(window: &WindowSize, fill: char) -> Self {
        Frame { rows: vec![vec![fill; window.width]; window.height] }
    }

    /// Writes `ch` if the cell exists; anything off the frame is dropped.
    pub fn put(&mut self, col: i32, row: i32, ch: char) {
        if col < 0 || row < 0 {
            return;
        }

        if let Some(cell) = self.rows.get_mut(row as usize).and_then(|r| r.get_mut(col as usize)) {
            *cell = ch;
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Terrain only: walls, the empty field inside them and blank space past them.
pub fn build_map(head: Coords, world: &WorldSize, window: &WindowSize) -> Frame {
    let walls = Walls::compute(head, world, window);
    let mut frame = Frame::new(window, OUTSIDE_CHAR);

    for row in 0..window.height as i32 {
        for col in 0..window.width as i32 {
            frame.put(col, row, walls.cell(col, row));
        }
    }

    frame
}

/// Overlays the snake on a frame centered on its head. The head goes last so
/// it wins over whatever it ran into.
pub fn draw_snake(frame: &mut Frame, snake: &Snake, window: &WindowSize, dead: bool) {
    let (middle_x, middle_y) = middle(window);
    let (head_x, head_y) = snake.head();

    for &(x, y) in snake.body()[1..].iter() {
        frame.put(x - head_x + middle_x, y - head_y + middle_y, SNAKE_BODY_CHAR);
    }

    let head_char = if dead { DEAD_SNAKE_CHAR } else { snake.head_char() };
    frame.put(middle_x, middle_y, head_char);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;

    const WORLD: WorldSize = WorldSize { width: 200, height: 200 };
    const WINDOW: WindowSize = WindowSize { width: 51, height: 21 };

    impl Frame {
        pub(crate) fn get(&self, col: usize, row: usize) -> Option<char> {
            self.rows.get(row).and_then(|r| r.get(col)).copied()
        }
    }

    fn row(frame: &Frame, row: usize) -> String {
        frame.lines()[row].clone()
    }

    #[test]
    fn far_from_edges_is_all_field() {
        let frame = build_map((100, 100), &WORLD, &WINDOW);

        assert_eq!(frame.lines().len(), 21);
        for line in frame.lines() {
            assert!(line.chars().all(|c| c == EMPTY_CHAR), "unexpected cell in {:?}", line);
        }
    }

    #[test]
    fn walls_for_head_at_origin() {
        let walls = Walls::compute((0, 0), &WORLD, &WINDOW);
        assert_eq!(walls, Walls { top: 9, bottom: 211, left: 24, right: 226 });
    }

    #[test]
    fn top_left_corner_comes_into_view() {
        let frame = build_map((0, 0), &WORLD, &WINDOW);
        let blank: String = std::iter::repeat(OUTSIDE_CHAR).take(24).collect();

        for r in 0..9 {
            assert!(row(&frame, r).chars().all(|c| c == OUTSIDE_CHAR));
        }

        let top: String = blank.clone() + &std::iter::repeat(BORDER_CHAR).take(27).collect::<String>();
        assert_eq!(row(&frame, 9), top);

        let inner: String = blank + &BORDER_CHAR.to_string()
            + &std::iter::repeat(EMPTY_CHAR).take(26).collect::<String>();
        for r in 10..21 {
            assert_eq!(row(&frame, r), inner);
        }

        // the head itself sits on a playable cell
        assert_eq!(frame.get(25, 10), Some(EMPTY_CHAR));
    }

    #[test]
    fn bottom_right_corner_comes_into_view() {
        let frame = build_map((200, 200), &WORLD, &WINDOW);

        assert_eq!(frame.get(25, 10), Some(EMPTY_CHAR));
        assert_eq!(frame.get(26, 10), Some(BORDER_CHAR));
        assert_eq!(frame.get(27, 10), Some(OUTSIDE_CHAR));
        assert_eq!(frame.get(0, 11), Some(BORDER_CHAR));
        assert_eq!(frame.get(26, 11), Some(BORDER_CHAR));
        assert_eq!(frame.get(27, 11), Some(OUTSIDE_CHAR));
        assert!(row(&frame, 12).chars().all(|c| c == OUTSIDE_CHAR));
    }

    #[test]
    fn wall_cell_matches_collision_position() {
        // head one step from the left wall: the wall is right next to it
        let frame = build_map((0, 100), &WORLD, &WINDOW);
        assert_eq!(frame.get(24, 10), Some(BORDER_CHAR));
        assert_eq!(frame.get(25, 10), Some(EMPTY_CHAR));
    }

    #[test]
    fn display_joins_rows_with_newlines() {
        let text = build_map((100, 100), &WORLD, &WINDOW).to_string();

        assert_eq!(text.matches('\n').count(), 20);
        assert_eq!(text.split('\n').count(), 21);
        assert!(!text.ends_with('\n'));
        assert!(text.split('\n').all(|line| line.chars().count() == 51));
    }

    #[test]
    fn every_line_has_window_width() {
        for &head in [(0, 0), (3, 197), (200, 0), (100, 100)].iter() {
            let frame = build_map(head, &WORLD, &WINDOW);
            for line in frame.lines() {
                assert_eq!(line.chars().count(), 51);
            }
        }
    }

    #[test]
    fn snake_overlay_follows_body() {
        let snake = Snake::new((100, 100), 3, Direction::Right);
        let mut frame = build_map(snake.head(), &WORLD, &WINDOW);
        draw_snake(&mut frame, &snake, &WINDOW, false);

        assert_eq!(frame.get(25, 10), Some('>'));
        assert_eq!(frame.get(24, 10), Some(SNAKE_BODY_CHAR));
        assert_eq!(frame.get(23, 10), Some(SNAKE_BODY_CHAR));
        assert_eq!(frame.get(22, 10), Some(EMPTY_CHAR));

        draw_snake(&mut frame, &snake, &WINDOW, true);
        assert_eq!(frame.get(25, 10), Some(DEAD_SNAKE_CHAR));
    }

    #[test]
    fn overlay_clips_to_window() {
        let window = WindowSize { width: 5, height: 3 };
        let snake = Snake::new((10, 10), 8, Direction::Right);
        let mut frame = build_map(snake.head(), &WORLD, &window);
        draw_snake(&mut frame, &snake, &window, false);

        assert_eq!(row(&frame, 1), "oo>⋅⋅");
    }
}
