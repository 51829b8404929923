use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

pub type Digit = u8; // 0 = empty; 1..=9 placed

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    pub fn idx(self) -> usize { self.r * 9 + self.c }
    /// Top-left corner of the 3x3 box containing this position.
    pub fn box_origin(self) -> Pos { Pos { r: self.r - self.r % 3, c: self.c - self.c % 3 } }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("expected 81 cells, got {0}")]
    WrongLength(usize),
    #[error("expected 9 rows, got {0}")]
    WrongRowCount(usize),
    #[error("row {row} has {len} cells, expected 9")]
    WrongRowLength { row: usize, len: usize },
    #[error("invalid cell token {token:?} in row {row}")]
    BadToken { row: usize, token: String },
    #[error("cell value {0} out of range 0..=9")]
    OutOfRange(u8),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub(crate) cells: [[Digit; 9]; 9],
}

impl Grid {
    pub fn empty() -> Self { Self { cells: [[0; 9]; 9] } }

    /// Parse 81 digits (0 or . for blanks); whitespace and other chars are ignored.
    pub fn from_compact(s: &str) -> Result<Self, ParseError> {
        let mut digits = Vec::with_capacity(81);
        for ch in s.chars() {
            match ch {
                '1'..='9' => digits.push(ch as u8 - b'0'),
                '0' | '.' => digits.push(0),
                _ => {}
            }
        }
        if digits.len() != 81 { return Err(ParseError::WrongLength(digits.len())); }
        let mut g = Self::empty();
        for (i, &v) in digits.iter().enumerate() { g.cells[i / 9][i % 9] = v; }
        Ok(g)
    }

    /// Parse nine lines of nine comma-separated values, 0 for blanks.
    pub fn from_csv(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != 9 { return Err(ParseError::WrongRowCount(lines.len())); }
        let mut g = Self::empty();
        for (r, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
            if tokens.len() != 9 { return Err(ParseError::WrongRowLength { row: r, len: tokens.len() }); }
            for (c, tok) in tokens.iter().enumerate() {
                let v: u8 = tok.parse().map_err(|_| ParseError::BadToken { row: r, token: tok.to_string() })?;
                if v > 9 { return Err(ParseError::OutOfRange(v)); }
                g.cells[r][c] = v;
            }
        }
        Ok(g)
    }

    pub fn get(&self, p: Pos) -> Digit { self.cells[p.r][p.c] }
    pub fn set(&mut self, p: Pos, d: Digit) { self.cells[p.r][p.c] = d; }
    pub fn clear(&mut self, p: Pos) { self.cells[p.r][p.c] = 0; }

    pub fn is_filled(&self) -> bool { self.cells.iter().all(|row| row.iter().all(|&d| d != 0)) }
    pub fn count_empty(&self) -> usize { self.cells.iter().flatten().filter(|&&d| d == 0).count() }

    /// No duplicate non-zero digit in any row, column, or 3x3 box.
    pub fn is_consistent(&self) -> bool {
        for r in 0..9 { if !no_dupes(self.row_values(r)) { return false; } }
        for c in 0..9 { if !no_dupes(self.col_values(c)) { return false; } }
        for br in 0..3 { for bc in 0..3 { if !no_dupes(self.box_values(br, bc)) { return false; } } }
        true
    }

    pub fn is_solved(&self) -> bool { self.is_filled() && self.is_consistent() }

    pub fn row_values(&self, r: usize) -> [Digit; 9] { self.cells[r] }
    pub fn col_values(&self, c: usize) -> [Digit; 9] {
        let mut a = [0; 9];
        for r in 0..9 { a[r] = self.cells[r][c]; }
        a
    }
    pub fn box_values(&self, br: usize, bc: usize) -> [Digit; 9] {
        let mut a = [0; 9];
        let mut i = 0;
        for r in br * 3..br * 3 + 3 { for c in bc * 3..bc * 3 + 3 { a[i] = self.cells[r][c]; i += 1; } }
        a
    }

    pub fn to_compact(&self) -> String {
        self.cells.iter().flatten().map(|&d| if d == 0 { '.' } else { (b'0' + d) as char }).collect()
    }

    /// Nine comma-separated rows, one per line.
    pub fn to_csv(&self) -> String {
        self.cells.iter().map(|row| row.iter().map(|d| d.to_string()).join(",")).join("\n") + "\n"
    }
}

fn no_dupes(vals: [Digit; 9]) -> bool {
    let mut seen = [false; 10];
    for v in vals {
        if v != 0 {
            if seen[v as usize] { return false; }
            seen[v as usize] = true;
        }
    }
    true
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..9 {
            if r % 3 == 0 { writeln!(f, "+-------+-------+-------+")?; }
            for c in 0..9 {
                if c % 3 == 0 { write!(f, "| ")?; }
                let d = self.cells[r][c];
                write!(f, "{} ", if d == 0 { '.' } else { (b'0' + d) as char })?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}
