use crate::grid::{Digit, Grid, Pos};
use crate::trace::{NoTrace, Placement, TraceSink};
use std::hash::{Hash, Hasher};

/// First empty cell in row-major order. The scan order fixes the exact
/// sequence of trial assignments, and with it the trace output.
pub fn find_empty(grid: &Grid) -> Option<Pos> {
    for r in 0..9 {
        for c in 0..9 {
            if grid.get(Pos { r, c }) == 0 { return Some(Pos { r, c }); }
        }
    }
    None
}

/// True iff `d` appears nowhere in the row, column, or 3x3 box of `p`.
pub fn fits(grid: &Grid, p: Pos, d: Digit) -> bool {
    for c in 0..9 { if grid.get(Pos { r: p.r, c }) == d { return false; } }
    for r in 0..9 { if grid.get(Pos { r, c: p.c }) == d { return false; } }
    let o = p.box_origin();
    for r in o.r..o.r + 3 {
        for c in o.c..o.c + 3 {
            if grid.get(Pos { r, c }) == d { return false; }
        }
    }
    true
}

/// Fill all empty cells of `grid` in place by exhaustive backtracking.
/// Returns false on an unsolvable grid, with every exploratory placement
/// undone on the way back up.
pub fn solve(grid: &mut Grid) -> bool {
    solve_traced(grid, &mut NoTrace)
}

/// Same search, emitting one event per tentative placement. Digits are
/// tried 1..=9 ascending at the first empty cell; a failed branch resets
/// the cell to 0 before the next digit.
pub fn solve_traced(grid: &mut Grid, sink: &mut dyn TraceSink) -> bool {
    let Some(p) = find_empty(grid) else { return true; };
    for d in 1..=9 {
        if fits(grid, p, d) {
            grid.set(p, d);
            sink.record(Placement { row: p.r, col: p.c, digit: d });
            if solve_traced(grid, sink) { return true; }
            grid.clear(p);
        }
    }
    false
}

/// A puzzle keeps the immutable original grid alongside the working grid.
/// Each solve re-derives the working grid from the original, so a stale
/// solution never leaks into a later search.
#[derive(Clone, Debug)]
pub struct Puzzle {
    original: Grid,
    solved: Grid,
}

impl Puzzle {
    pub fn new(original: Grid) -> Self {
        let solved = original.clone();
        Self { original, solved }
    }

    pub fn original(&self) -> &Grid { &self.original }
    pub fn solved(&self) -> &Grid { &self.solved }

    /// Replace the original grid; the next solve starts from it.
    pub fn set_original(&mut self, grid: Grid) {
        self.solved = grid.clone();
        self.original = grid;
    }

    pub fn solve(&mut self) -> bool {
        self.solve_traced(&mut NoTrace)
    }

    pub fn solve_traced(&mut self, sink: &mut dyn TraceSink) -> bool {
        self.solved = self.original.clone();
        log::debug!("searching {} empty cells", self.solved.count_empty());
        let solved = solve_traced(&mut self.solved, sink);
        log::debug!("search {}", if solved { "succeeded" } else { "exhausted" });
        solved
    }
}

// Puzzle identity is the original grid only; the working grid is derived.
impl PartialEq for Puzzle {
    fn eq(&self, other: &Self) -> bool { self.original == other.original }
}

impl Eq for Puzzle {}

impl Hash for Puzzle {
    fn hash<H: Hasher>(&self, state: &mut H) { self.original.hash(state); }
}
