//! Scripted random source for tests.

use std::sync::{Arc, Mutex};

use crate::ports::{RandomProvider, RandomSource};

/// Replays a fixed list of draws, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomSource {
    script: Vec<f64>,
    position: usize,
}

impl ScriptedRandomSource {
    pub fn new(script: Vec<f64>) -> Self {
        let script = script
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 0.999_999_999) } else { 0.0 })
            .collect();
        Self { script, position: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_unit(&mut self) -> f64 {
        if self.script.is_empty() {
            return 0.0;
        }
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value
    }
}

/// Every source handed out replays the same script from the start.
impl RandomProvider for ScriptedRandomSource {
    fn source(&self) -> Box<dyn RandomSource> {
        Box::new(Self::new(self.script.clone()))
    }
}

/// Provider whose sources continue one shared script.
#[derive(Debug, Clone)]
pub struct SharedScript(Arc<Mutex<ScriptedRandomSource>>);

impl SharedScript {
    pub fn new(script: Vec<f64>) -> Self {
        Self(Arc::new(Mutex::new(ScriptedRandomSource::new(script))))
    }
}

struct SharedDraws(Arc<Mutex<ScriptedRandomSource>>);

impl RandomSource for SharedDraws {
    fn next_unit(&mut self) -> f64 {
        match self.0.lock() {
            Ok(mut source) => source.next_unit(),
            Err(poisoned) => poisoned.into_inner().next_unit(),
        }
    }
}

impl RandomProvider for SharedScript {
    fn source(&self) -> Box<dyn RandomSource> {
        Box::new(SharedDraws(self.0.clone()))
    }
}
