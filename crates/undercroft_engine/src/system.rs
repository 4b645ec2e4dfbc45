//! The per-tick system contract.

use undercroft_storage::ComponentStore;

/// One unit of game logic, run once per tick.
///
/// A system reads and mutates the store through its query/join API and
/// reports everything externally visible as a sequence of side-effect values
/// of the application's choosing; it never touches application state
/// directly. The store is passed in on every call; a system must not retain
/// a reference across ticks, so no system can observe a half-applied
/// pipeline.
///
/// Determinism contract: for a fixed store state and fixed input, a system
/// must produce the same effect sequence and the same store mutations.
///
/// Plain functions are systems: any `FnMut(&mut ComponentStore, &I) ->
/// Vec<E>` implements this trait.
pub trait System<I, E> {
    /// Name used in logs and tick summaries.
    fn name(&self) -> &str;

    /// Runs the system to completion for this tick.
    fn run(&mut self, store: &mut ComponentStore, input: &I) -> Vec<E>;
}

impl<I, E, F> System<I, E> for F
where
    F: FnMut(&mut ComponentStore, &I) -> Vec<E>,
{
    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }

    fn run(&mut self, store: &mut ComponentStore, input: &I) -> Vec<E> {
        self(store, input)
    }
}
