//! Algorithms shared by the reservation engine: ordering and lookup helpers,
//! the cheapest-route search, and greedy seat assignment.

pub mod route;
pub mod search;
pub mod seating;
pub mod sort;

pub use route::{RouteEdge, RouteError, RouteOptimizer, UNREACHABLE};
pub use seating::{SeatAssigner, SeatPosition, SeatingError, AISLE_COLUMNS};
