//! WASM bindings for blocks-core
//!
//! Provides a JavaScript-friendly API for the pile engine.

use wasm_bindgen::prelude::*;
use crate::{Block, Command, Operator, World};

/// WASM-friendly wrapper around World
#[wasm_bindgen]
pub struct WasmWorld {
    inner: World,
}

#[wasm_bindgen]
impl WasmWorld {
    /// Create a world of `n` blocks in the canonical configuration
    #[wasm_bindgen(constructor)]
    pub fn new(n: usize) -> WasmWorld {
        WasmWorld { inner: World::new(n) }
    }

    /// Number of blocks (and piles)
    #[wasm_bindgen(js_name = blockCount)]
    pub fn block_count(&self) -> usize {
        self.inner.len()
    }

    /// Pile index holding `block`, or -1 if there is no such block
    pub fn locate(&self, block: usize) -> i32 {
        self.inner
            .locate(Block(block))
            .map_or(-1, |index| index as i32)
    }

    /// Returns true if the world was rearranged
    #[wasm_bindgen(js_name = moveOnto)]
    pub fn move_onto(&mut self, a: usize, b: usize) -> bool {
        self.inner.move_onto(Block(a), Block(b)).is_accepted()
    }

    #[wasm_bindgen(js_name = moveOver)]
    pub fn move_over(&mut self, a: usize, b: usize) -> bool {
        self.inner.move_over(Block(a), Block(b)).is_accepted()
    }

    #[wasm_bindgen(js_name = pileOnto)]
    pub fn pile_onto(&mut self, a: usize, b: usize) -> bool {
        self.inner.pile_onto(Block(a), Block(b)).is_accepted()
    }

    #[wasm_bindgen(js_name = pileOver)]
    pub fn pile_over(&mut self, a: usize, b: usize) -> bool {
        self.inner.pile_over(Block(a), Block(b)).is_accepted()
    }

    /// Run a text command such as "pile 1 over 3".
    /// Returns "accepted", "rejected", "quit", or the parse error message.
    pub fn execute(&mut self, line: &str) -> String {
        match Command::parse(line, self.inner.len()) {
            Ok(Command::Quit) => "quit".to_string(),
            Ok(Command::Apply { op, a, b }) => {
                if self.inner.apply(op, a, b).is_accepted() {
                    "accepted".to_string()
                } else {
                    "rejected".to_string()
                }
            }
            Err(e) => e.to_string(),
        }
    }

    /// Blocks in one pile, bottom to top
    #[wasm_bindgen(js_name = pileBlocks)]
    pub fn pile_blocks(&self, index: usize) -> Vec<u32> {
        self.inner
            .pile(index)
            .map(|pile| pile.blocks().iter().map(|b| b.0 as u32).collect())
            .unwrap_or_default()
    }

    /// All piles as a JSON array of arrays, bottom to top
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).map_err(JsValue::from)
    }

    /// Operator names as typed in commands, e.g. "move onto"
    pub fn operators() -> Vec<String> {
        Operator::all().map(|op| op.to_string()).collect()
    }

    /// Clone the world
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_world(&self) -> WasmWorld {
        WasmWorld { inner: self.inner.clone() }
    }
}
