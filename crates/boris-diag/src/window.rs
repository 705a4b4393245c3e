use std::ops::RangeInclusive;

use boris_core::{BorisError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Inclusive range of steps handed to the visualization side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepWindow {
    start: usize,
    until: usize,
}

impl StepWindow {
    /// Every step of a run.
    pub fn full(nsteps: usize) -> Self {
        Self {
            start: 0,
            until: nsteps,
        }
    }

    /// `start..=until`, both within `0..=nsteps`.
    pub fn new(start: usize, until: usize, nsteps: usize) -> Result<Self, BorisError> {
        if start > until || until > nsteps {
            return Err(BorisError::Config(
                ErrorInfo::new("window-range", "window must satisfy start <= until <= nsteps")
                    .with_context("start", start)
                    .with_context("until", until)
                    .with_context("nsteps", nsteps),
            ));
        }
        Ok(Self { start, until })
    }

    /// `step - width ..= step + width`, clamped to the run.
    pub fn around(step: usize, width: usize, nsteps: usize) -> Self {
        let step = step.min(nsteps);
        Self {
            start: step.saturating_sub(width),
            until: step.saturating_add(width).min(nsteps),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn until(&self) -> usize {
        self.until
    }

    pub fn steps(&self) -> RangeInclusive<usize> {
        self.start..=self.until
    }

    pub fn len(&self) -> usize {
        self.until - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The part of a step-indexed series inside the window.
    pub fn slice<'a, T>(&self, series: &'a [T]) -> &'a [T] {
        let end = (self.until + 1).min(series.len());
        &series[self.start.min(end)..end]
    }
}
