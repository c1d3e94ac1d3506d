use crate::layout::Layout;

/// The simulation a layout is scored against.
///
/// The oracle is stateful and holds exactly one layout at a time. The
/// scheduler drives it through `assign`, a series of `tick`s, and `reset`, and
/// never calls `assign` twice without a `reset` in between.
pub trait SimulationOracle {
    /// Installs the lines of `layout` into the running simulation.
    fn assign(&mut self, layout: &Layout);

    /// Advances the simulation by `delta_ms` milliseconds.
    ///
    /// The score may move in either direction.
    fn tick(&mut self, delta_ms: u64);

    /// The current score. Reading it has no side effects.
    fn current_score(&self) -> f64;

    /// Removes the installed lines and clears all per-station state, leaving
    /// the simulation as it was before the first `assign`.
    fn reset(&mut self);
}

impl<O> SimulationOracle for Box<O>
where
    O: SimulationOracle + ?Sized,
{
    fn assign(&mut self, layout: &Layout) {
        (**self).assign(layout)
    }

    fn tick(&mut self, delta_ms: u64) {
        (**self).tick(delta_ms)
    }

    fn current_score(&self) -> f64 {
        (**self).current_score()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
