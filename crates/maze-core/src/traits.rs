//! Read-only grid access and the step-observer hook.
//!
//! These traits decouple external collaborators (renderers, live
//! visualizers, persistence) from the concrete grid type: they read
//! through `&dyn GridView` and are notified through `&mut dyn StepObserver`.

use crate::algorithm::Algorithm;
use crate::pos::Pos;
use crate::zone::Zone;

/// Read-only view of a maze grid.
///
/// Lookups outside the grid return `None` / `false`.
pub trait GridView {
    /// Number of rows.
    fn height(&self) -> usize;

    /// Number of columns.
    fn width(&self) -> usize;

    /// Full wall byte of a cell (low nibble current, high nibble previous).
    fn walls(&self, pos: Pos) -> Option<u8>;

    /// Zone tag of a cell.
    fn zone(&self, pos: Pos) -> Option<Zone>;

    /// Whether a cell is excluded from traversal.
    fn is_forbidden(&self, pos: Pos) -> bool;

    /// Whether `algorithm` explored this cell.
    fn is_visited(&self, pos: Pos, algorithm: Algorithm) -> bool;

    /// Whether this cell lies on `algorithm`'s returned path.
    fn is_path(&self, pos: Pos, algorithm: Algorithm) -> bool;
}

/// What the engine was doing when a [`Step`] was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Zone carving, path carving, or wall removal.
    Generation,
    /// A pathfinder run.
    Solve(Algorithm),
}

/// Context handed to a [`StepObserver`] after each processed cell.
pub struct Step<'a> {
    /// Generation or the running algorithm.
    pub stage: Stage,
    /// The cell just processed.
    pub pos: Pos,
    /// Whether maze generation has completed.
    pub built: bool,
    /// Whether the current algorithm or build call has finished (set on
    /// its final step).
    pub finished: bool,
    /// The grid as it stands right now.
    pub view: &'a dyn GridView,
}

/// Observation point invoked once per processed cell.
///
/// Observers see the grid but cannot change it, so they never alter a
/// traversal's outcome.
pub trait StepObserver {
    /// Called after a cell has been processed.
    fn on_step(&mut self, _step: &Step<'_>) {}
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {}

impl<F> StepObserver for F
where
    F: FnMut(&Step<'_>),
{
    fn on_step(&mut self, step: &Step<'_>) {
        self(step)
    }
}
