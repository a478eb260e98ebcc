//! Blocks world pile engine with array-backed stacks.
//!
//! # World Layout
//!
//! ```text
//! N blocks, N piles. Pile i starts holding only block i (its "home").
//!
//!   pile:   0    1    2    3    4
//!          [0]  [1]  [2]  [3]  [4]        <- canonical configuration
//!
//! Piles are read bottom-to-top; the last element is the top.
//!
//!   move 0 onto 1    ->   []  [1,0]  [2]  [3]  [4]
//!   move 2 onto 0    ->   []  [1,0,2]  []  [3]  [4]
//!   pile 1 onto 3    ->   []  []  []  [3,1,0,2]  [4]
//! ```
//!
//! # Operators
//!
//! ```text
//! move a onto b:  restore above a, restore above b, move a alone
//! move a over b:  restore above a,                  move a alone
//! pile a onto b:                   restore above b, move a and everything above it
//! pile a over b:                                    move a and everything above it
//! ```
//!
//! "Restore above x" returns every block resting on x to its home pile.
//! Every operator is rejected (no mutation) when `a` and `b` share a pile.

pub mod command;
#[cfg(feature = "wasm")]
pub mod wasm;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use command::{Command, CommandError};

/// Block identifier in `[0, N)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Block(pub usize);

impl Block {
    /// Index of the pile this block starts in and is restored to.
    ///
    /// A block's identifier doubles as its home pile index.
    #[inline]
    pub fn home_pile(self) -> usize {
        self.0
    }

    /// Iterate over the blocks of an `n`-block world.
    pub fn all(n: usize) -> impl Iterator<Item = Block> {
        (0..n).map(Block)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four rearrangement operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    MoveOnto,
    MoveOver,
    PileOnto,
    PileOver,
}

impl Operator {
    /// Look up an operator by its verb and preposition (`"move"`, `"onto"`).
    pub fn from_words(verb: &str, preposition: &str) -> Option<Operator> {
        match (verb, preposition) {
            ("move", "onto") => Some(Operator::MoveOnto),
            ("move", "over") => Some(Operator::MoveOver),
            ("pile", "onto") => Some(Operator::PileOnto),
            ("pile", "over") => Some(Operator::PileOver),
            _ => None,
        }
    }

    /// Verb and preposition, e.g. `("pile", "over")`.
    pub fn words(self) -> (&'static str, &'static str) {
        match self {
            Operator::MoveOnto => ("move", "onto"),
            Operator::MoveOver => ("move", "over"),
            Operator::PileOnto => ("pile", "onto"),
            Operator::PileOver => ("pile", "over"),
        }
    }

    pub fn all() -> impl Iterator<Item = Operator> {
        [
            Operator::MoveOnto,
            Operator::MoveOver,
            Operator::PileOnto,
            Operator::PileOver,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (verb, preposition) = self.words();
        write!(f, "{} {}", verb, preposition)
    }
}

/// Result of an operator call.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The world was rearranged.
    Accepted,
    /// Operands were missing or shared a pile; nothing changed.
    Rejected,
}

impl Outcome {
    #[inline]
    pub fn is_accepted(self) -> bool {
        self == Outcome::Accepted
    }
}

// ============================================================================
// PILE - array-backed stack of blocks
// ============================================================================

/// Ordered stack of blocks, bottom first.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Pile {
    blocks: Vec<Block>,
}

impl Pile {
    /// Create an empty pile.
    #[inline]
    pub const fn new() -> Pile {
        Pile { blocks: Vec::new() }
    }

    /// Put a block on top.
    #[inline]
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Remove the top block. Returns None if the pile is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    /// The top block, if any.
    #[inline]
    pub fn top(&self) -> Option<Block> {
        self.blocks.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check whether the block sits anywhere in this pile.
    #[inline]
    pub fn contains(&self, block: Block) -> bool {
        self.blocks.contains(&block)
    }

    /// Height of the block counted from the bottom (0 = bottom).
    pub fn position(&self, block: Block) -> Option<usize> {
        self.blocks.iter().position(|&b| b == block)
    }

    /// Detach the run from height `at` up to the top, keeping its order.
    ///
    /// Returns an empty run if `at` is at or past the top.
    pub fn split_off(&mut self, at: usize) -> Vec<Block> {
        if at >= self.blocks.len() {
            return Vec::new();
        }
        self.blocks.split_off(at)
    }

    /// Stack a run on top, first element lowest.
    pub fn extend(&mut self, run: impl IntoIterator<Item = Block>) {
        self.blocks.extend(run);
    }

    /// Blocks from bottom to top.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl FromIterator<Block> for Pile {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Pile {
        Pile {
            blocks: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// SNAPSHOT - read-only view for display
// ============================================================================

/// Copy of every pile's contents, bottom to top, indexed by pile.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub piles: Vec<Vec<usize>>,
}

impl Snapshot {
    /// Height of the tallest pile.
    pub fn max_height(&self) -> usize {
        self.piles.iter().map(Vec::len).max().unwrap_or(0)
    }
}

// ============================================================================
// WORLD
// ============================================================================

/// N piles holding N blocks.
///
/// Every block sits in exactly one pile at all times; operators only migrate
/// blocks between piles.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct World {
    piles: Vec<Pile>,
}

impl World {
    /// Create the canonical configuration: pile `i` holds only block `i`.
    pub fn new(n: usize) -> World {
        let piles: Vec<Pile> = Block::all(n).map(|b| [b].into_iter().collect()).collect();
        World { piles }
    }

    /// Number of piles (equal to the number of blocks).
    #[inline]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Check a pile index against `[0, N)`.
    #[inline]
    pub fn is_valid_pile(&self, index: usize) -> bool {
        index < self.piles.len()
    }

    /// Borrow a pile by index.
    #[inline]
    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    /// Find the pile currently holding `block`.
    pub fn locate(&self, block: Block) -> Option<usize> {
        self.piles.iter().position(|pile| pile.contains(block))
    }

    /// Check that blocks `0..N` each appear exactly once across all piles.
    pub fn is_partition(&self) -> bool {
        let mut seen = vec![false; self.piles.len()];
        for block in self.piles.iter().flat_map(|p| p.blocks().iter()) {
            match seen.get_mut(block.0) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Copy the current pile contents out for display.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            piles: self
                .piles
                .iter()
                .map(|p| p.blocks().iter().map(|b| b.0).collect())
                .collect(),
        }
    }

    // ========== Restoration ==========

    /// Return every block resting above `target` in pile `index` to its home
    /// pile, top block first.
    ///
    /// If `target` is not in the pile the whole pile is drained. A block whose
    /// home is the drained pile itself ends up back on it. Out-of-range pile
    /// indices are ignored.
    pub fn restore_above(&mut self, index: usize, target: Block) {
        let Some(pile) = self.piles.get_mut(index) else {
            return;
        };
        let keep = pile.position(target).map_or(0, |pos| pos + 1);
        let displaced = pile.split_off(keep);

        for block in displaced.into_iter().rev() {
            let home = block.home_pile();
            trace!(block = block.0, from = index, home, "restoring block");
            // Homes are always in range while the partition invariant holds.
            let dest = if self.is_valid_pile(home) { home } else { index };
            self.piles[dest].push(block);
        }
    }

    /// Move the top block of pile `from` onto pile `to`.
    fn move_top(&mut self, from: usize, to: usize) {
        if !self.is_valid_pile(from) || !self.is_valid_pile(to) {
            return;
        }
        if let Some(block) = self.piles[from].pop() {
            self.piles[to].push(block);
        }
    }

    /// Move the run from `block` up to the top of pile `from` onto pile `to`.
    fn move_run(&mut self, from: usize, to: usize, block: Block) {
        let Some(at) = self.piles[from].position(block) else {
            return;
        };
        let run = self.piles[from].split_off(at);
        self.piles[to].extend(run);
    }

    /// Resolve both operands to distinct piles, or None if the operator
    /// must be rejected.
    fn operand_piles(&self, op: Operator, a: Block, b: Block) -> Option<(usize, usize)> {
        let pile_a = self.locate(a);
        let pile_b = self.locate(b);
        match (pile_a, pile_b) {
            (Some(pa), Some(pb)) if pa != pb => Some((pa, pb)),
            _ => {
                debug!(%op, a = a.0, b = b.0, ?pile_a, ?pile_b, "operator rejected");
                None
            }
        }
    }

    // ========== Operators ==========

    /// Put `a` alone onto `b`, after returning whatever rests on either to
    /// their home piles.
    pub fn move_onto(&mut self, a: Block, b: Block) -> Outcome {
        let Some((pa, pb)) = self.operand_piles(Operator::MoveOnto, a, b) else {
            return Outcome::Rejected;
        };
        self.restore_above(pa, a);
        self.restore_above(pb, b);
        self.move_top(pa, pb);
        debug!(a = a.0, b = b.0, from = pa, to = pb, "move onto");
        Outcome::Accepted
    }

    /// Put `a` alone on top of the pile holding `b`, after returning whatever
    /// rests on `a` to home piles.
    pub fn move_over(&mut self, a: Block, b: Block) -> Outcome {
        let Some((pa, pb)) = self.operand_piles(Operator::MoveOver, a, b) else {
            return Outcome::Rejected;
        };
        self.restore_above(pa, a);
        self.move_top(pa, pb);
        debug!(a = a.0, b = b.0, from = pa, to = pb, "move over");
        Outcome::Accepted
    }

    /// Put `a` and everything above it onto `b`, after returning whatever
    /// rests on `b` to home piles.
    pub fn pile_onto(&mut self, a: Block, b: Block) -> Outcome {
        let Some((pa, pb)) = self.operand_piles(Operator::PileOnto, a, b) else {
            return Outcome::Rejected;
        };
        self.restore_above(pb, b);
        self.move_run(pa, pb, a);
        debug!(a = a.0, b = b.0, from = pa, to = pb, "pile onto");
        Outcome::Accepted
    }

    /// Put `a` and everything above it on top of the pile holding `b`.
    pub fn pile_over(&mut self, a: Block, b: Block) -> Outcome {
        let Some((pa, pb)) = self.operand_piles(Operator::PileOver, a, b) else {
            return Outcome::Rejected;
        };
        self.move_run(pa, pb, a);
        debug!(a = a.0, b = b.0, from = pa, to = pb, "pile over");
        Outcome::Accepted
    }

    /// Dispatch to one of the four operators.
    pub fn apply(&mut self, op: Operator, a: Block, b: Block) -> Outcome {
        let outcome = match op {
            Operator::MoveOnto => self.move_onto(a, b),
            Operator::MoveOver => self.move_over(a, b),
            Operator::PileOnto => self.pile_onto(a, b),
            Operator::PileOver => self.pile_over(a, b),
        };
        debug_assert!(self.is_partition(), "partition broken after {:?}", op);
        outcome
    }
}
