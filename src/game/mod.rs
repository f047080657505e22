//! Game state: grid, focus and the turn controller

mod grid;
mod state;

pub use grid::{Focus, Grid, MAX_ROWS, ROW_LEN};
pub use state::{Game, SubmitOutcome, TurnState};
