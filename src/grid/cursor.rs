// Pool cursor - the (row, col) address of the currently selected window
// A two-state machine: "idle at (r, c)" with a single transition `move_by`
// that either commits an in-bounds candidate or rejects the move as a no-op.

/// A discrete navigation event from the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NavDirection {
    /// The (delta_row, delta_col) this direction applies to the cursor
    pub fn delta(self) -> (i32, i32) {
        match self {
            NavDirection::Up => (-1, 0),
            NavDirection::Down => (1, 0),
            NavDirection::Left => (0, -1),
            NavDirection::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCursor {
    row: usize,
    col: usize,
    bounds: usize,
}

impl PoolCursor {
    /// A cursor at (0, 0) constrained to [0, bounds) on both axes
    pub fn new(bounds: usize) -> Self {
        Self {
            row: 0,
            col: 0,
            bounds,
        }
    }

    /// Apply a delta. Commits and returns true iff the candidate position
    /// lies within bounds on both axes; otherwise the cursor is unchanged
    /// and the move is a rejected no-op, not an error.
    pub fn move_by(&mut self, delta: (i32, i32)) -> bool {
        let (delta_row, delta_col) = delta;
        let new_row = self.row as i32 + delta_row;
        let new_col = self.col as i32 + delta_col;

        if new_row >= 0
            && new_row < self.bounds as i32
            && new_col >= 0
            && new_col < self.bounds as i32
        {
            self.row = new_row as usize;
            self.col = new_col as usize;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.row = 0;
        self.col = 0;
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Origin of the window this cursor addresses in the input grid
    pub fn window_origin(&self, stride: usize) -> (usize, usize) {
        (self.row * stride, self.col * stride)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn bounds(&self) -> usize {
        self.bounds
    }

    // Edge predicates drive the demo's unavailable-direction hints
    pub fn at_top_edge(&self) -> bool {
        self.row == 0
    }

    pub fn at_bottom_edge(&self) -> bool {
        self.row + 1 >= self.bounds
    }

    pub fn at_left_edge(&self) -> bool {
        self.col == 0
    }

    pub fn at_right_edge(&self) -> bool {
        self.col + 1 >= self.bounds
    }
}
