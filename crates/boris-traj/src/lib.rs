//! Trajectory loader for Boris particle-pusher runs.
//!
//! Two record streams are read per dataset: the multi-particle run and a
//! single-particle reference run. Both go through the same row selection, so
//! step 0 always holds the pre-advance state and every later step holds the
//! converged sweep.

pub mod dataset;
pub mod loader;
pub mod record;
pub mod select;

pub use dataset::{FileDigest, InputProvenance, ReferenceTrajectory, TrajectoryDataset};
pub use loader::{load, load_config};
pub use record::{ParticleId, TrajectoryRecord, RECORD_FIELDS};
pub use select::Selection;
