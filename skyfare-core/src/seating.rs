use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns treated as aisle seats, tried first in every row.
pub const AISLE_COLUMNS: [usize; 4] = [0, 2, 3, 5];

/// Zero-based seat coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatPosition {
    pub row: usize,
    pub col: usize,
}

impl SeatPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}, Seat {}", self.row + 1, self.col + 1)
    }
}

/// Greedy seat allocation over a fixed rows x cols occupancy grid.
///
/// Seats are only ever taken, never released.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SeatGrid")]
pub struct SeatAssigner {
    rows: usize,
    cols: usize,
    occupied: Vec<Vec<bool>>,
}

/// Serialized form of [`SeatAssigner`]; the grid must be `rows` x `cols`
#[derive(Deserialize)]
struct SeatGrid {
    rows: usize,
    cols: usize,
    occupied: Vec<Vec<bool>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeatingError {
    #[error("Seat grid does not match a {rows}x{cols} layout")]
    InvalidGrid {
        rows: usize,
        cols: usize,
    },
}

impl TryFrom<SeatGrid> for SeatAssigner {
    type Error = SeatingError;

    fn try_from(grid: SeatGrid) -> Result<Self, Self::Error> {
        let shape_ok = grid.occupied.len() == grid.rows
            && grid.occupied.iter().all(|row| row.len() == grid.cols);
        if !shape_ok {
            return Err(SeatingError::InvalidGrid {
                rows: grid.rows,
                cols: grid.cols,
            });
        }

        Ok(Self {
            rows: grid.rows,
            cols: grid.cols,
            occupied: grid.occupied,
        })
    }
}

impl SeatAssigner {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            occupied: vec![vec![false; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Take the best free seat: aisle columns then the window column, row by
    /// row, falling back to the first free seat anywhere. `None` when full.
    pub fn assign_best_seat(&mut self) -> Option<SeatPosition> {
        let Some(seat) = self
            .preferred_candidates()
            .into_iter()
            .next()
            .or_else(|| self.first_free())
        else {
            tracing::warn!("No seats available in {}x{} grid", self.rows, self.cols);
            return None;
        };

        self.occupied[seat.row][seat.col] = true;
        tracing::debug!("Seat assigned: {}", seat);
        Some(seat)
    }

    /// Free aisle and window seats in preference order.
    ///
    /// On a 6-column layout the window column is also aisle column 5, so that
    /// seat is listed twice per row. Only the first entry is ever taken, so the
    /// duplicate never changes which seat is assigned.
    fn preferred_candidates(&self) -> Vec<SeatPosition> {
        let mut candidates = Vec::new();
        let Some(window) = self.cols.checked_sub(1) else {
            return candidates;
        };

        for row in 0..self.rows {
            for col in AISLE_COLUMNS.into_iter().chain(std::iter::once(window)) {
                if col < self.cols && !self.occupied[row][col] {
                    candidates.push(SeatPosition::new(row, col));
                }
            }
        }

        candidates
    }

    fn first_free(&self) -> Option<SeatPosition> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| SeatPosition::new(row, col)))
            .find(|seat| !self.occupied[seat.row][seat.col])
    }

    pub fn is_occupied(&self, seat: SeatPosition) -> bool {
        self.occupied
            .get(seat.row)
            .and_then(|row| row.get(seat.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().flatten().filter(|taken| **taken).count()
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Grid as text: `O` for occupied, `.` for free, one row per line.
    pub fn render(&self) -> String {
        self.occupied
            .iter()
            .map(|row| {
                row.iter()
                    .map(|taken| if *taken { "O" } else { "." })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
