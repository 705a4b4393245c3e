use std::fmt::{self, Display};

use boris_core::{BorisError, ErrorInfo, Position};
use boris_traj::InputProvenance;
use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;

/// Headline numbers of one run, as printed before the plots are drawn.
///
/// Values read from steps no retained row wrote are `NaN`; in JSON they appear
/// as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub nsteps: usize,
    pub nparticles: usize,
    /// Step the "last" center of mass is taken at.
    pub until: usize,
    #[serde(with = "boris_core::serde::nan_position")]
    pub initial_center_of_mass: Position,
    #[serde(with = "boris_core::serde::nan_position")]
    pub last_center_of_mass: Position,
    #[serde(with = "boris_core::serde::nan_f64")]
    pub initial_energy: f64,
    #[serde(with = "boris_core::serde::nan_f64")]
    pub final_energy: f64,
    #[serde(with = "boris_core::serde::nan_f64")]
    pub final_drift: f64,
    #[serde(with = "boris_core::serde::nan_f64")]
    pub final_residual: f64,
    /// Largest residual over the whole run, ignoring unset steps.
    #[serde(with = "boris_core::serde::nan_f64")]
    pub peak_residual: f64,
    /// Tightest dispersion over the whole run, if any step has a finite spread.
    pub meetup_step: Option<usize>,
    pub provenance: InputProvenance,
}

impl RunSummary {
    /// Summarises `analysis`, reading the last center of mass at `until`
    /// (default: the final step).
    pub fn from_analysis(analysis: &Analysis, until: Option<usize>) -> Result<Self, BorisError> {
        let dataset = analysis.dataset();
        let nsteps = dataset.nsteps();
        let until = until.unwrap_or(nsteps);
        if until > nsteps {
            return Err(BorisError::Config(
                ErrorInfo::new("summary-until", "until lies beyond the last step")
                    .with_context("until", until)
                    .with_context("nsteps", nsteps),
            ));
        }
        let com = dataset.center_of_mass();
        let residual = dataset.residual();
        let peak_residual = residual
            .iter()
            .copied()
            .filter(|r| !r.is_nan())
            .fold(None, |peak: Option<f64>, r| Some(peak.map_or(r, |p| p.max(r))))
            .unwrap_or(f64::NAN);
        Ok(Self {
            nsteps,
            nparticles: dataset.nparticles(),
            until,
            initial_center_of_mass: com[0],
            last_center_of_mass: com[until],
            initial_energy: dataset.energy()[0],
            final_energy: dataset.energy()[nsteps],
            final_drift: dataset.drift()[nsteps],
            final_residual: residual[nsteps],
            peak_residual,
            meetup_step: analysis.meetup_step(0).ok(),
            provenance: dataset.provenance().clone(),
        })
    }
}

/// Scientific notation with a signed exponent of at least two digits
/// (`1.0000e-05`, `2.5000e+05`).
fn scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string().to_lowercase();
    }
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => formatted,
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c0 = &self.initial_center_of_mass;
        let c1 = &self.last_center_of_mass;
        writeln!(f, "Initial Center of Mass: {:10.4}\t{:10.4}\t{:10.4}", c0.x, c0.y, c0.z)?;
        writeln!(f, "Last Center of Mass:    {:10.4}\t{:10.4}\t{:10.4}", c1.x, c1.y, c1.z)?;
        writeln!(f, "Initial Energy: {:16.4}", self.initial_energy)?;
        writeln!(f, "Final Energy:   {:16.4}", self.final_energy)?;
        writeln!(f, "Final Drift:    {:16.4}", self.final_drift)?;
        write!(
            f,
            "Final Residual: {:>16} (max: {})",
            scientific(self.final_residual, 4),
            scientific(self.peak_residual, 4)
        )?;
        if let Some(step) = self.meetup_step {
            write!(f, "\nMeetup Step:    {step:16}")?;
        }
        Ok(())
    }
}
