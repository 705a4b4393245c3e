use std::str::FromStr;

use boris_core::{ErrorInfo, Position};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Columns written per row: step, iteration, particle, position (3),
/// velocity (3), energy, drift, residual.
pub const RECORD_FIELDS: usize = 12;

const RAW_CENTER_OF_MASS: i64 = -1;

/// Identity of the body a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleId {
    /// Aggregate row, written with the sentinel id `-1`.
    CenterOfMass,
    /// Cloud member with a zero-based index.
    Particle(usize),
}

impl ParticleId {
    /// Maps a raw column value; negative ids other than the sentinel are invalid.
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw == RAW_CENTER_OF_MASS {
            Some(ParticleId::CenterOfMass)
        } else {
            usize::try_from(raw).ok().map(ParticleId::Particle)
        }
    }
}

/// One parsed row of a trajectory file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    pub step: usize,
    pub iteration: usize,
    pub particle: ParticleId,
    pub position: Position,
    /// Carried through but unused by the diagnostics.
    pub velocity: Position,
    pub energy: f64,
    pub drift: f64,
    pub residual: f64,
}

impl TrajectoryRecord {
    /// Parses the twelve columns of a row.
    ///
    /// The returned payload names the failing column; callers attach the file
    /// and line.
    pub fn from_fields(fields: &StringRecord) -> Result<Self, ErrorInfo> {
        if fields.len() != RECORD_FIELDS {
            return Err(ErrorInfo::new(
                "record-field-count",
                format!("expected {RECORD_FIELDS} fields, found {}", fields.len()),
            ));
        }
        let raw_particle: i64 = field(fields, 2, "particle_id")?;
        let particle = ParticleId::from_raw(raw_particle).ok_or_else(|| {
            ErrorInfo::new(
                "record-particle-id",
                format!("particle id {raw_particle} is neither -1 nor a particle index"),
            )
            .with_context("field", "particle_id")
        })?;
        Ok(Self {
            step: field(fields, 0, "step")?,
            iteration: field(fields, 1, "iteration")?,
            particle,
            position: Position::new(
                field(fields, 3, "x")?,
                field(fields, 4, "y")?,
                field(fields, 5, "z")?,
            ),
            velocity: Position::new(
                field(fields, 6, "u")?,
                field(fields, 7, "v")?,
                field(fields, 8, "w")?,
            ),
            energy: field(fields, 9, "energy")?,
            drift: field(fields, 10, "drift")?,
            residual: field(fields, 11, "residual")?,
        })
    }

    /// Formats the row the way the simulation writes it: integers for the
    /// first three columns, sixteen decimals for the rest.
    pub fn to_csv_row(&self) -> String {
        let particle = match self.particle {
            ParticleId::CenterOfMass => RAW_CENTER_OF_MASS,
            ParticleId::Particle(p) => p as i64,
        };
        let p = &self.position;
        let v = &self.velocity;
        format!(
            "{},{},{particle},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16}",
            self.step,
            self.iteration,
            p.x,
            p.y,
            p.z,
            v.x,
            v.y,
            v.z,
            self.energy,
            self.drift,
            self.residual
        )
    }
}

fn field<T: FromStr>(fields: &StringRecord, idx: usize, name: &str) -> Result<T, ErrorInfo> {
    let raw = fields.get(idx).unwrap_or_default();
    raw.parse().map_err(|_| {
        ErrorInfo::new("record-field-value", format!("cannot parse {name} from {raw:?}"))
            .with_context("field", name)
            .with_context("column", idx)
    })
}
