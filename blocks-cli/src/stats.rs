//! Session statistics tracking.

use std::io::{self, Write};
use std::time::Instant;

use blocks_core::{Operator, Outcome};

/// Counters collected over one interactive session.
#[derive(Debug, Default)]
pub struct SessionStats {
    /// Non-blank lines read
    pub commands: u64,

    /// Operators that rearranged the world
    pub accepted: u64,

    /// Operators refused because both operands shared a pile
    pub rejected: u64,

    /// Lines refused by the parser
    pub input_errors: u64,

    /// Accepted operators by kind: move onto, move over, pile onto, pile over
    pub by_operator: [u64; 4],

    start_time: Option<Instant>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record one operator call and its outcome
    pub fn record_outcome(&mut self, op: Operator, outcome: Outcome) {
        self.commands += 1;
        match outcome {
            Outcome::Accepted => {
                self.accepted += 1;
                self.by_operator[op as usize] += 1;
            }
            Outcome::Rejected => self.rejected += 1,
        }
    }

    /// Record a line the parser refused
    pub fn record_error(&mut self) {
        self.commands += 1;
        self.input_errors += 1;
    }

    /// Record the closing `quit`
    pub fn record_quit(&mut self) {
        self.commands += 1;
    }

    /// Write final summary
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Commands read: {}", self.commands)?;
        writeln!(out, "Accepted: {}", self.accepted)?;
        for (op, count) in Operator::all().zip(self.by_operator) {
            writeln!(out, "  - {}: {}", op, count)?;
        }
        writeln!(out, "Rejected (same pile): {}", self.rejected)?;
        writeln!(out, "Input errors: {}", self.input_errors)?;

        if let Some(start) = self.start_time {
            writeln!(out, "Session time: {:.1}s", start.elapsed().as_secs_f64())?;
        }
        Ok(())
    }
}
