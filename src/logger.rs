use crate::trace::{Placement, TraceSink};
use anyhow::Result;
use chrono::Local;
use colored::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Streams the placement trace to the console, and optionally to a file as
/// bare row/col/digit triples, one per line.
pub struct TraceLogger {
    file: Option<File>,
    color: bool,
    step: bool,
    max_lines: usize,
    counter: usize,
}

impl TraceLogger {
    pub fn new(log_file: Option<PathBuf>, color: bool, step: bool, max_lines: usize) -> Result<Self> {
        let file = match log_file {
            Some(path) => {
                let mut f = File::create(&path)?;
                let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
                writeln!(f, "# placement trace {}", ts)?;
                Some(f)
            }
            None => None,
        };
        Ok(Self { file, color, step, max_lines, counter: 0 })
    }
}

impl TraceSink for TraceLogger {
    fn record(&mut self, p: Placement) {
        if self.max_lines != 0 && self.counter >= self.max_lines { return; }
        self.counter += 1;
        let line = format!("try {} at r{},c{}", p.digit, p.row + 1, p.col + 1);
        if self.color {
            println!("{} {}", "➤".blue().bold(), line.bold());
        } else {
            println!("➤ {}", line);
        }

        if let Some(f) = self.file.as_mut() {
            writeln!(f, "{}{}{}", p.row, p.col, p.digit).ok();
        }

        if self.step {
            print!("-- press Enter to continue --");
            io::stdout().flush().ok();
            let mut s = String::new();
            io::stdin().read_line(&mut s).ok();
        }
    }
}
