pub mod grid;
pub mod io;
pub mod logger;
pub mod solver;
pub mod trace;

pub use grid::{Digit, Grid, ParseError, Pos};
pub use solver::{find_empty, fits, solve, solve_traced, Puzzle};
pub use trace::{NoTrace, Placement, TraceSink};
