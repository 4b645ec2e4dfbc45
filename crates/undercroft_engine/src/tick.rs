//! Tick orchestration.
//!
//! A tick runs every registered system to completion, strictly in
//! registration order, against a store the tick exclusively owns. Side
//! effects are collected in emission order and handed back to the caller,
//! which folds them into application state after the pipeline completes;
//! effects are never reordered, dropped, or replayed.

use undercroft_storage::ComponentStore;

use crate::system::System;

/// An ordered pipeline of systems sharing one store.
pub struct Pipeline<I, E> {
    systems: Vec<Box<dyn System<I, E>>>,
    ticks: u64,
}

impl<I, E> Default for Pipeline<I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, E> Pipeline<I, E> {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
            ticks: 0,
        }
    }

    /// Appends a system; systems run in the order they were added.
    #[must_use]
    pub fn with_system(mut self, system: impl System<I, E> + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    /// Appends a system to an existing pipeline.
    pub fn add_system(&mut self, system: impl System<I, E> + 'static) {
        self.systems.push(Box::new(system));
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one tick: every system once, in order, single-threaded.
    ///
    /// Returns the concatenated side effects in emission order.
    pub fn run_tick(&mut self, store: &mut ComponentStore, input: &I) -> Vec<E> {
        self.ticks += 1;
        let mut effects = Vec::new();
        for system in &mut self.systems {
            let out = system.run(store, input);
            log::debug!(
                "tick {}: system {} emitted {} effect(s)",
                self.ticks,
                system.name(),
                out.len()
            );
            effects.extend(out);
        }
        log::debug!("tick {} complete: {} effect(s) total", self.ticks, effects.len());
        effects
    }
}
