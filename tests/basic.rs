use gridlock::io::{grid_from_text, LoadError};
use gridlock::{fits, solve, solve_traced, Grid, ParseError, Placement, Pos, Puzzle};
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const EASY: &str = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const EASY_SOLVED: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
// EASY with the given 3 at (0,1) replaced by a second 5
const TWO_FIVES: &str = "55..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

const EASY_CSV: &str = "\
5,3,0,0,7,0,0,0,0
6,0,0,1,9,5,0,0,0
0,9,8,0,0,0,0,6,0
8,0,0,0,6,0,0,0,3
4,0,0,8,0,3,0,0,1
7,0,0,0,2,0,0,0,6
0,6,0,0,0,0,2,8,0
0,0,0,4,1,9,0,0,5
0,0,0,0,8,0,0,7,9
";

#[test]
fn parse_compact_and_csv_agree() {
    let a = Grid::from_compact(EASY).unwrap();
    let b = Grid::from_csv(EASY_CSV).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_compact(), EASY);
}

#[test]
fn csv_round_trip() {
    let g = Grid::from_csv(EASY_CSV).unwrap();
    assert_eq!(g.to_csv(), EASY_CSV);
}

#[test]
fn solves_classic_to_canonical_solution() {
    let mut puzzle = Puzzle::new(Grid::from_compact(EASY).unwrap());
    assert!(puzzle.solve());
    assert!(puzzle.solved().is_solved());
    assert_eq!(puzzle.solved().to_compact(), EASY_SOLVED);
    assert_eq!(puzzle.solved().get(Pos { r: 0, c: 2 }), 4);
    assert_eq!(puzzle.solved().get(Pos { r: 8, c: 8 }), 9);
}

#[test]
fn solver_never_overwrites_givens() {
    let mut puzzle = Puzzle::new(Grid::from_compact(EASY).unwrap());
    assert!(puzzle.solve());
    for r in 0..9 {
        for c in 0..9 {
            let given = puzzle.original().get(Pos { r, c });
            if given != 0 {
                assert_eq!(puzzle.solved().get(Pos { r, c }), given);
            }
        }
    }
}

#[test]
fn duplicate_givens_exhaust_and_restore() {
    let original = Grid::from_compact(TWO_FIVES).unwrap();
    let mut g = original.clone();
    assert!(!solve(&mut g));
    // every exploratory placement was undone on the way out
    assert_eq!(g, original);
}

#[test]
fn prefilled_valid_board_returns_immediately() {
    let original = Grid::from_compact(EASY_SOLVED).unwrap();
    let mut g = original.clone();
    let mut trace: Vec<Placement> = Vec::new();
    assert!(solve_traced(&mut g, &mut trace));
    assert_eq!(g, original);
    assert!(trace.is_empty());
}

#[test]
fn trace_is_deterministic() {
    let mut a = Puzzle::new(Grid::from_compact(EASY).unwrap());
    let mut b = Puzzle::new(Grid::from_compact(EASY).unwrap());
    let mut ta: Vec<Placement> = Vec::new();
    let mut tb: Vec<Placement> = Vec::new();
    assert!(a.solve_traced(&mut ta));
    assert!(b.solve_traced(&mut tb));
    assert_eq!(ta, tb);
    assert_eq!(a.solved(), b.solved());
    // row-major scan + ascending digits: the first empty cell is (0,2) and 1 fits there
    assert_eq!(ta[0], Placement { row: 0, col: 2, digit: 1 });
    assert_eq!(ta.len(), 4208);
}

#[test]
fn fits_ignores_cells_outside_row_col_box() {
    let mut g = Grid::from_compact(EASY).unwrap();
    let p = Pos { r: 0, c: 2 };
    assert!(fits(&g, p, 4));
    assert!(!fits(&g, p, 7)); // 7 already in row 0
    // (8,0) shares no row, column, or box with (0,2)
    g.set(Pos { r: 8, c: 0 }, 2);
    assert!(fits(&g, p, 4));
    assert!(!fits(&g, p, 7));
}

#[test]
fn resolving_uses_fresh_working_copy() {
    let mut puzzle = Puzzle::new(Grid::from_compact(EASY).unwrap());
    assert!(puzzle.solve());
    puzzle.set_original(Grid::from_compact(TWO_FIVES).unwrap());
    assert!(!puzzle.solve());
    // no stale solved cells survive the failed search
    assert_eq!(puzzle.solved(), puzzle.original());
    puzzle.set_original(Grid::from_compact(EASY).unwrap());
    assert!(puzzle.solve());
    assert_eq!(puzzle.solved().to_compact(), EASY_SOLVED);
}

#[test]
fn puzzle_identity_is_the_original_grid() {
    let mut a = Puzzle::new(Grid::from_compact(EASY).unwrap());
    let b = Puzzle::new(Grid::from_compact(EASY).unwrap());
    assert!(a.solve());
    assert_eq!(a, b); // solving does not change identity
    assert_eq!(hash_of(&a), hash_of(&b));
    let c = Puzzle::new(Grid::from_compact(EASY_SOLVED).unwrap());
    assert_ne!(a, c);
}

#[test]
fn loader_rejects_malformed_input() {
    assert!(matches!(
        grid_from_text("1,2,3\n4,5,6"),
        Err(LoadError::Parse(ParseError::WrongRowCount(2)))
    ));
    assert!(matches!(
        grid_from_text(&EASY_CSV.replace("5,3,0", "5,x,0")),
        Err(LoadError::Parse(ParseError::BadToken { row: 0, .. }))
    ));
    assert!(matches!(
        grid_from_text(&EASY_CSV.replace("5,3,0", "5,12,0")),
        Err(LoadError::Parse(ParseError::OutOfRange(12)))
    ));
    assert!(matches!(
        grid_from_text(&EASY[..80]),
        Err(LoadError::Parse(ParseError::WrongLength(80)))
    ));
    assert!(matches!(grid_from_text(TWO_FIVES), Err(LoadError::Inconsistent)));
}

#[test]
fn consistency_check_covers_rows_cols_boxes() {
    let mut g = Grid::from_compact(EASY).unwrap();
    assert!(g.is_consistent());
    g.set(Pos { r: 4, c: 4 }, 8); // 8 already at (4,3) in the same row
    assert!(!g.is_consistent());
    let mut g = Grid::from_compact(EASY).unwrap();
    g.set(Pos { r: 1, c: 1 }, 9); // 9 already at (2,1) in the same column and box
    assert!(!g.is_consistent());
}

fn hash_of(p: &Puzzle) -> u64 {
    let mut h = DefaultHasher::new();
    p.hash(&mut h);
    h.finish()
}
