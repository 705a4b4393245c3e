use std::path::PathBuf;

use boris_core::{unset_position, BorisError, ErrorInfo, Position};
use serde::{Deserialize, Serialize};

use crate::record::{ParticleId, TrajectoryRecord};

/// Digest and row counts of one ingested file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileDigest {
    pub path: PathBuf,
    /// Lowercase hex SHA-256 of the file bytes.
    pub sha256: String,
    pub rows: usize,
    pub retained: usize,
}

/// Where the dataset came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputProvenance {
    pub main: FileDigest,
    pub reference: FileDigest,
}

/// Step-aligned positions of the single-particle baseline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTrajectory {
    positions: Vec<Position>,
}

impl ReferenceTrajectory {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Dense per-step arrays of one run, read-only once built.
///
/// Particle positions are stored particle-major: `positions[p][s]`. Slots no
/// retained row wrote hold `NaN` components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryDataset {
    nsteps: usize,
    nparticles: usize,
    positions: Vec<Vec<Position>>,
    center_of_mass: Vec<Position>,
    energy: Vec<f64>,
    drift: Vec<f64>,
    residual: Vec<f64>,
    reference: ReferenceTrajectory,
    #[serde(default)]
    provenance: InputProvenance,
}

impl TrajectoryDataset {
    /// Assembles a dataset from already reduced series.
    ///
    /// Shapes are not checked here; [`TrajectoryDataset::validate_shape`] does
    /// that and the diagnostics engine calls it before computing anything.
    pub fn from_series(
        nsteps: usize,
        positions: Vec<Vec<Position>>,
        center_of_mass: Vec<Position>,
        energy: Vec<f64>,
        drift: Vec<f64>,
        residual: Vec<f64>,
        reference: ReferenceTrajectory,
    ) -> Self {
        Self {
            nsteps,
            nparticles: positions.len(),
            positions,
            center_of_mass,
            energy,
            drift,
            residual,
            reference,
            provenance: InputProvenance::default(),
        }
    }

    pub fn nsteps(&self) -> usize {
        self.nsteps
    }

    pub fn nparticles(&self) -> usize {
        self.nparticles
    }

    /// Position of particle `particle` at `step`.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn position(&self, particle: usize, step: usize) -> Position {
        self.positions[particle][step]
    }

    /// Full track of one particle, indexed by step.
    pub fn track(&self, particle: usize) -> Option<&[Position]> {
        self.positions.get(particle).map(Vec::as_slice)
    }

    pub fn tracks(&self) -> &[Vec<Position>] {
        &self.positions
    }

    pub fn center_of_mass(&self) -> &[Position] {
        &self.center_of_mass
    }

    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    pub fn drift(&self) -> &[f64] {
        &self.drift
    }

    pub fn residual(&self) -> &[f64] {
        &self.residual
    }

    pub fn reference(&self) -> &ReferenceTrajectory {
        &self.reference
    }

    pub fn provenance(&self) -> &InputProvenance {
        &self.provenance
    }

    /// Energy drift relative to the total energy at each step.
    pub fn relative_drift(&self) -> Vec<f64> {
        self.drift
            .iter()
            .zip(&self.energy)
            .map(|(drift, energy)| drift / energy)
            .collect()
    }

    /// Number of particle and center-of-mass slots that were never written.
    pub fn missing_slots(&self) -> usize {
        self.positions
            .iter()
            .chain(std::iter::once(&self.center_of_mass))
            .flatten()
            .filter(|pos| pos.iter().any(|c| c.is_nan()))
            .count()
    }

    /// Checks that every series spans `nsteps + 1` entries.
    pub fn validate_shape(&self) -> Result<(), BorisError> {
        let expected = self.nsteps + 1;
        if self.positions.len() != self.nparticles {
            return Err(BorisError::InvalidDataset(
                ErrorInfo::new("dataset-particle-count", "particle table size mismatch")
                    .with_context("expected", self.nparticles)
                    .with_context("found", self.positions.len()),
            ));
        }
        let mut lengths = vec![
            ("center_of_mass", self.center_of_mass.len()),
            ("energy", self.energy.len()),
            ("drift", self.drift.len()),
            ("residual", self.residual.len()),
            ("reference", self.reference.len()),
        ];
        lengths.extend(self.positions.iter().map(|track| ("particle", track.len())));
        for (series, len) in lengths {
            if len != expected {
                return Err(BorisError::InvalidDataset(
                    ErrorInfo::new("dataset-series-length", "series length is not nsteps + 1")
                        .with_context("series", series)
                        .with_context("expected", expected)
                        .with_context("found", len),
                ));
            }
        }
        Ok(())
    }
}

/// Mutable staging area filled row by row while the two files are read.
#[derive(Debug)]
pub(crate) struct DatasetBuilder {
    dataset: TrajectoryDataset,
}

impl DatasetBuilder {
    pub(crate) fn new(nsteps: usize, nparticles: usize) -> Self {
        let len = nsteps + 1;
        let dataset = TrajectoryDataset {
            nsteps,
            nparticles,
            positions: vec![vec![unset_position(); len]; nparticles],
            center_of_mass: vec![unset_position(); len],
            energy: vec![f64::NAN; len],
            drift: vec![f64::NAN; len],
            residual: vec![f64::NAN; len],
            reference: ReferenceTrajectory::new(vec![unset_position(); len]),
            provenance: InputProvenance::default(),
        };
        Self { dataset }
    }

    /// Writes a retained main-run row under `step`; the last write wins.
    pub(crate) fn store_main(
        &mut self,
        step: usize,
        record: &TrajectoryRecord,
    ) -> Result<(), ErrorInfo> {
        let data = &mut self.dataset;
        let slot = match record.particle {
            ParticleId::CenterOfMass => &mut data.center_of_mass[step],
            ParticleId::Particle(p) => {
                let nparticles = data.nparticles;
                let track = data.positions.get_mut(p).ok_or_else(|| {
                    ErrorInfo::new("record-particle-range", "particle index out of range")
                        .with_context("particle", p)
                        .with_context("nparticles", nparticles)
                })?;
                &mut track[step]
            }
        };
        *slot = record.position;
        data.energy[step] = record.energy;
        data.drift[step] = record.drift;
        data.residual[step] = record.residual;
        Ok(())
    }

    /// Writes a retained reference-run row under `step`, whatever its particle id.
    pub(crate) fn store_reference(&mut self, step: usize, record: &TrajectoryRecord) {
        self.dataset.reference.positions[step] = record.position;
    }

    pub(crate) fn finish(mut self, provenance: InputProvenance) -> TrajectoryDataset {
        self.dataset.provenance = provenance;
        self.dataset
    }
}
