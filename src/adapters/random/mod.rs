//! Random adapters - `RandomSource` backed by `rand` and by scripts.

mod scripted;
mod std_rng;

pub use scripted::{ScriptedRandomSource, SharedScript};
pub use std_rng::{StdRandomProvider, StdRandomSource};
