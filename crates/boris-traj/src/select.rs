//! Row selection shared by the main and reference streams.

/// Which of the two retention conditions a row satisfies.
///
/// `seed` marks the pre-advance state: iteration 0 of step 1, stored under
/// step 0. `converged` marks the last sweep `niter - 1` of a step, stored under
/// that step. With `niter == 1` a single row can satisfy both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub seed: bool,
    pub converged: bool,
}

impl Selection {
    pub fn classify(step: usize, iteration: usize, niter: usize) -> Self {
        Self {
            seed: iteration == 0 && step == 1,
            converged: niter > 0 && iteration == niter - 1,
        }
    }

    pub fn is_retained(&self) -> bool {
        self.seed || self.converged
    }

    /// Steps a row with this selection writes to, seed first.
    pub fn target_steps(self, step: usize) -> impl Iterator<Item = usize> {
        self.seed
            .then_some(0)
            .into_iter()
            .chain(self.converged.then_some(step))
    }
}
