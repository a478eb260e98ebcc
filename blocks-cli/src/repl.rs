//! Read-eval-print loop over a world.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use blocks_core::{Command, World};
use tracing::{debug, info};

use crate::display::Format;
use crate::stats::SessionStats;

const PROMPT: &str = "\n>> ";

/// One interactive session: the world plus its counters.
pub struct Session {
    pub world: World,
    pub stats: SessionStats,
    format: Format,
    prompt: bool,
}

impl Session {
    pub fn new(blocks: usize, format: Format, prompt: bool) -> Self {
        Self {
            world: World::new(blocks),
            stats: SessionStats::new(),
            format,
            prompt,
        }
    }

    /// Run until `quit`, end of input, or `running` is cleared.
    ///
    /// The world is printed before every prompt. Parse errors are reported
    /// to `out` and leave the world unchanged.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        running: &AtomicBool,
    ) -> io::Result<()> {
        let mut line = String::new();

        loop {
            write!(out, "{}", self.format.render(&self.world.snapshot()))?;
            if self.prompt {
                write!(out, "{}", PROMPT)?;
            }
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("end of input");
                break;
            }
            if !running.load(Ordering::SeqCst) {
                info!("interrupted");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line, self.world.len()) {
                Ok(Command::Quit) => {
                    self.stats.record_quit();
                    break;
                }
                Ok(Command::Apply { op, a, b }) => {
                    let outcome = self.world.apply(op, a, b);
                    self.stats.record_outcome(op, outcome);
                }
                Err(e) => {
                    debug!(line = line.trim(), error = %e, "bad command");
                    writeln!(out, "\n{}", e)?;
                    self.stats.record_error();
                }
            }
        }

        writeln!(out, "\nProgram finished.")?;
        self.stats.write_summary(out)?;
        out.flush()
    }
}
