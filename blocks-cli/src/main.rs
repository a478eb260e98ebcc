//! Blocks World
//!
//! Interactive terminal front end for the pile engine. Reads commands such as
//! `move 3 onto 1` or `pile 2 over 4` from stdin, one per line, and prints the
//! piles after each one.

mod display;
mod repl;
mod stats;

use std::io;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Level};

use crate::display::Format;
use crate::repl::Session;

#[derive(Parser, Debug)]
#[command(name = "blocks", about = "Interactive blocks world simulator")]
struct Args {
    /// Number of blocks (and piles).
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    blocks: u32,

    /// How the piles are printed after each command.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Do not print the `>>` prompt (useful with piped input).
    #[arg(long)]
    no_prompt: bool,

    /// Diagnostics level written to stderr: error | warn | info | debug | trace
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    // Set up SIGINT handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!("\nInterrupt received, finishing after the current line...");
        r.store(false, Ordering::SeqCst);
    }) {
        error!("failed to set Ctrl-C handler: {}", e);
    }

    let blocks = args.blocks as usize;
    info!(blocks, format = ?args.format, "starting session");

    let mut session = Session::new(blocks, args.format, !args.no_prompt);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match session.run(stdin.lock(), &mut stdout, &running) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("session aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
