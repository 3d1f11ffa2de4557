//! Character canvas for re-drawing parts of a network
//!
//! Used when a drawing has to be shown back to a human, mostly inside error
//! messages. Unlike a layout canvas it never recentres its contents: row 0
//! and column 0 stay where they were in the source text.

use super::Position;

/// Character grid addressed by [`Position`]
#[derive(Debug, Clone, Default)]
pub struct AsciiCanvas {
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<char>>,
}

impl AsciiCanvas {
    /// Create a new canvas with the specified dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let grid = vec![vec![' '; width]; height];
        Self {
            width,
            height,
            grid,
        }
    }

    /// Ensure the canvas is at least the specified size, expanding if needed
    pub fn ensure_size(&mut self, min_width: usize, min_height: usize) {
        if min_width > self.width {
            for row in &mut self.grid {
                row.resize(min_width, ' ');
            }
            self.width = min_width;
        }
        if min_height > self.height {
            let extra_rows = min_height - self.height;
            self.grid
                .extend((0..extra_rows).map(|_| vec![' '; self.width]));
            self.height = min_height;
        }
    }

    /// Set a character at the specified position
    ///
    /// Positions left of column 0 or above row 0 are off the canvas and
    /// silently ignored.
    pub fn set_char(&mut self, position: Position, c: char) {
        let (Ok(x), Ok(y)) = (usize::try_from(position.x), usize::try_from(position.y)) else {
            return;
        };
        self.ensure_size(x + 1, y + 1);
        self.grid[y][x] = c;
    }

    /// Get the character at the specified position
    pub fn get_char(&self, position: Position) -> char {
        match (usize::try_from(position.x), usize::try_from(position.y)) {
            (Ok(x), Ok(y)) if y < self.height && x < self.width => self.grid[y][x],
            _ => ' ',
        }
    }

    /// Draw text starting at the specified position (left-aligned)
    pub fn draw_text(&mut self, position: Position, text: &str) {
        for (i, c) in text.chars().enumerate() {
            self.set_char(position.shifted(i as i64), c);
        }
    }
}

impl std::fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rows: Vec<String> = self
            .grid
            .iter()
            .map(|row| {
                let s: String = row.iter().collect();
                s.trim_end().to_string()
            })
            .collect();

        // Leading rows are kept so row numbers still line up with the source
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        write!(f, "{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = AsciiCanvas::new(10, 5);
        assert_eq!(canvas.width, 10);
        assert_eq!(canvas.height, 5);
    }

    #[test]
    fn test_set_and_get_char() {
        let mut canvas = AsciiCanvas::new(10, 10);
        canvas.set_char(Position::new(5, 3), 'X');
        assert_eq!(canvas.get_char(Position::new(5, 3)), 'X');
        assert_eq!(canvas.get_char(Position::new(0, 0)), ' ');
    }

    #[test]
    fn test_auto_expand() {
        let mut canvas = AsciiCanvas::default();
        canvas.set_char(Position::new(10, 10), 'X');
        assert!(canvas.width >= 11);
        assert!(canvas.height >= 11);
        assert_eq!(canvas.get_char(Position::new(10, 10)), 'X');
    }

    #[test]
    fn test_negative_positions_are_ignored() {
        let mut canvas = AsciiCanvas::default();
        canvas.set_char(Position::new(-1, 0), 'X');
        assert_eq!(canvas.height, 0);
        assert_eq!(canvas.get_char(Position::new(-1, 0)), ' ');
    }

    #[test]
    fn test_display_keeps_leading_rows_and_indent() {
        let mut canvas = AsciiCanvas::default();
        canvas.draw_text(Position::new(4, 2), "node");
        assert_eq!(canvas.to_string(), "\n\n    node");
    }
}
