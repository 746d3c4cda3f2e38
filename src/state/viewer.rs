/// Single-image viewer state and cyclic navigation
use super::project::ImageSequence;

/// Direction of one navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Signed step applied to the current index
    pub fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// The sequence being viewed and the position within it.
///
/// `index` stays within `[0, len - 1]` for any non-empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    sequence: ImageSequence,
    index: usize,
}

impl ViewerState {
    /// Seed the viewer with a sequence and a start position.
    ///
    /// A start index past the end is clamped to the last image.
    pub fn new(sequence: ImageSequence, start: usize) -> Self {
        let index = start.min(sequence.len().saturating_sub(1));
        Self { sequence, index }
    }

    /// Move one step and wrap around at either end
    pub fn advance(&mut self, direction: Direction) {
        let len = self.sequence.len();
        if len == 0 {
            return;
        }

        let next = self.index as isize + direction.step();
        self.index = if next >= len as isize {
            0
        } else if next < 0 {
            len - 1
        } else {
            next as usize
        };
    }

    /// Image reference at the current position
    pub fn current(&self) -> Option<&str> {
        self.sequence.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Previous/next controls are only worth showing with two or more images
    pub fn shows_navigation(&self) -> bool {
        self.sequence.len() > 1
    }
}
