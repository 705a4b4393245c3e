#![doc = "Shared building blocks for analysing Boris particle-pusher runs: the error taxonomy, the immutable run configuration and the trajectory file naming template."]

pub mod config;
pub mod errors;
pub mod naming;
pub mod serde;

pub use config::RunConfig;
pub use errors::{BorisError, ErrorInfo};
pub use naming::{DatasetPaths, FileNaming};

/// Cartesian position of a particle or of the center of mass.
pub type Position = nalgebra::Vector3<f64>;

/// Placeholder for a `(particle, step)` slot no retained row has written.
pub fn unset_position() -> Position {
    Position::repeat(f64::NAN)
}
