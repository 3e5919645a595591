use crate::error::{CarouselError, Result};

/// User-facing navigation requests, as carried by the arrow and dot controls.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Previous,    // Previous arrow
    Next,        // Next arrow
    GoTo(usize), // Dot k
}

impl Action {
    /// Parses the `data-carousel-action` / `data-carousel-index` attribute pair of the markup.
    pub fn from_attributes(action: &str, index: Option<&str>) -> Option<Action> {
        match action {
            "previous" => Some(Action::Previous),
            "next" => Some(Action::Next),
            "goto" => index?.parse().ok().map(Action::GoTo),
            _ => None,
        }
    }

    pub fn attribute(self) -> &'static str {
        match self {
            Action::Previous => "previous",
            Action::Next => "next",
            Action::GoTo(_) => "goto",
        }
    }
}

/// The single mutable cell of a carousel: which image is current.
///
/// Invariant: `current_index < len`, and `len > 0`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
    wrap: bool,
}

impl CarouselState {
    pub fn new(first_index: usize, len: usize, wrap: bool) -> Result<Self> {
        if len == 0 {
            return Err(CarouselError::EmptyImages);
        }
        if first_index >= len {
            return Err(CarouselError::FirstIndexOutOfBounds { index: first_index, len });
        }
        Ok(Self { current_index: first_index, len, wrap })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.len - 1
    }

    /// Returns `true` when the index changed.
    pub fn previous(&mut self) -> bool {
        let target = match (self.current_index, self.wrap) {
            (0, true) => self.len - 1,
            (0, false) => 0,
            (i, _) => i - 1,
        };
        self.set(target)
    }

    /// Returns `true` when the index changed.
    pub fn next(&mut self) -> bool {
        let target = match (self.is_last(), self.wrap) {
            (true, true) => 0,
            (true, false) => self.current_index,
            (false, _) => self.current_index + 1,
        };
        self.set(target)
    }

    /// Returns `Ok(true)` when the index changed. Out-of-range targets leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfBounds { index, len: self.len });
        }
        Ok(self.set(index))
    }

    fn set(&mut self, index: usize) -> bool {
        let changed = index != self.current_index;
        self.current_index = index;
        changed
    }
}
