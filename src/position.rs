//! Board positions for tic-tac-toe moves.

use crate::types::Board;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// The nine squares are a closed set, so callers choose from a finite
/// enum rather than passing raw coordinates that might be out of range.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parse from label or flat index (0-8).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        // Try as number first (position index 0-8)
        if let Ok(num) = s.trim().parse::<usize>() {
            return Self::from_index(num);
        }

        // Try as label (case-insensitive, partial match)
        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter().find(|pos| {
            let label = pos.label().to_lowercase();
            label.contains(&s_lower) || s_lower.contains(&label)
        })
    }

    /// Converts position to flat board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from flat board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Creates position from (row, column) coordinates.
    ///
    /// Returns `None` if either coordinate is outside 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Returns the row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Returns the column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Filters positions by board state - returns only empty squares.
    ///
    /// Front ends use this to decide which cells still accept a click.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
