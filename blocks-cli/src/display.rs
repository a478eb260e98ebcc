//! Render the world for the terminal.
//!
//! Text layout, one column per pile, stacks growing upward:
//!
//! ```text
//!              2
//!        0
//!     1  3     4
//! ```
//!
//! Each cell is three characters wide (`"%2d "`), empty cells are blank, and
//! levels with no block at all are skipped.

use blocks_core::Snapshot;
use clap::ValueEnum;

/// How the world is printed after each command.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Format {
    /// Columns of block numbers
    Text,
    /// One JSON object per line
    Json,
}

impl Format {
    pub fn render(self, snapshot: &Snapshot) -> String {
        match self {
            Format::Text => render_columns(snapshot),
            Format::Json => render_json(snapshot),
        }
    }
}

/// Column layout, preceded by a blank line.
pub fn render_columns(snapshot: &Snapshot) -> String {
    let mut out = String::from("\n");

    for level in (0..snapshot.max_height()).rev() {
        let mut line = String::with_capacity(snapshot.piles.len() * 3);
        for pile in &snapshot.piles {
            match pile.get(level) {
                Some(block) => line.push_str(&format!("{:>2} ", block)),
                None => line.push_str("   "),
            }
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Snapshot as a single JSON line.
pub fn render_json(snapshot: &Snapshot) -> String {
    // Plain integer vectors always serialize.
    serde_json::to_string(snapshot).unwrap_or_default() + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(piles: &[&[usize]]) -> Snapshot {
        Snapshot {
            piles: piles.iter().map(|p| p.to_vec()).collect(),
        }
    }

    #[test]
    fn test_canonical_layout() {
        let s = snap(&[&[0], &[1], &[2], &[3], &[4]]);
        assert_eq!(render_columns(&s), "\n 0  1  2  3  4 \n");
    }

    #[test]
    fn test_stacked_layout() {
        let s = snap(&[&[], &[1, 0, 2], &[], &[3], &[4]]);
        let expected = concat!(
            "\n",
            "    2          \n",
            "    0          \n",
            "    1     3  4 \n",
        );
        assert_eq!(render_columns(&s), expected);
    }

    #[test]
    fn test_single_tall_pile() {
        let s = snap(&[&[], &[], &[], &[3, 1, 0, 2], &[4]]);
        let expected = concat!(
            "\n",
            "          2    \n",
            "          0    \n",
            "          1    \n",
            "          3  4 \n",
        );
        assert_eq!(render_columns(&s), expected);
    }

    #[test]
    fn test_two_digit_blocks() {
        let mut piles: Vec<Vec<usize>> = (0..12).map(|i| vec![i]).collect();
        piles[11].clear();
        piles[0].push(11);
        let s = Snapshot { piles };
        let text = render_columns(&s);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], format!("11 {}", " ".repeat(33)));
        assert!(lines[2].starts_with(" 0  1  2"));
        assert!(lines[2].ends_with(" 9 10    "));
    }

    #[test]
    fn test_empty_world() {
        assert_eq!(render_columns(&snap(&[])), "\n");
    }

    #[test]
    fn test_json_line() {
        let s = snap(&[&[], &[1, 0]]);
        assert_eq!(Format::Json.render(&s), "{\"piles\":[[],[1,0]]}\n");
    }
}
