//! Test utilities for maze development.
//!
//! Provides a [`RecordingObserver`] that captures every step callback,
//! structural invariant checks shared by the generator and solver test
//! suites, and small hand-built [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod invariants;

pub use invariants::{
    assert_all_reachable, assert_border_closed, assert_no_open_block, assert_valid_path,
    assert_walls_symmetric, check_path,
};

use maze_core::{Pos, Stage, Step, StepObserver};

/// A step callback with the grid view stripped off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedStep {
    pub stage: Stage,
    pub pos: Pos,
    pub built: bool,
    pub finished: bool,
}

/// Observer that records every step it is handed.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    steps: Vec<RecordedStep>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded step, in call order.
    pub fn steps(&self) -> &[RecordedStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Positions reported during `stage`, in call order.
    pub fn positions(&self, stage: Stage) -> Vec<Pos> {
        self.steps
            .iter()
            .filter(|s| s.stage == stage)
            .map(|s| s.pos)
            .collect()
    }
}

impl StepObserver for RecordingObserver {
    fn on_step(&mut self, step: &Step<'_>) {
        self.steps.push(RecordedStep {
            stage: step.stage,
            pos: step.pos,
            built: step.built,
            finished: step.finished,
        });
    }
}
