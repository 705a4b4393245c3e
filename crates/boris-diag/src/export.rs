//! CSV and JSON artefacts consumed by the plotting side.

use std::fs;
use std::path::Path;

use boris_core::serde::to_canonical_json_bytes;
use boris_core::{BorisError, Position};

use crate::analysis::Analysis;
use crate::summary::RunSummary;
use crate::window::StepWindow;

fn write_error(path: &Path, err: impl ToString) -> BorisError {
    BorisError::io("export-write", path, err)
}

/// Rejects windows reaching past the last step of the run.
fn check_window(window: &StepWindow, nsteps: usize) -> Result<(), BorisError> {
    StepWindow::new(window.start(), window.until(), nsteps).map(|_| ())
}

/// Writes per-step scalar series and distances inside `window`.
///
/// Columns: `step, energy, drift, relative_drift, residual, dist_min, dist_max,
/// dist_mean, distance_p0 .. distance_p{n-1}`.
pub fn write_analytics_csv(
    analysis: &Analysis,
    window: &StepWindow,
    path: &Path,
) -> Result<(), BorisError> {
    let dataset = analysis.dataset();
    let diag = analysis.diagnostics();
    check_window(window, dataset.nsteps())?;
    let relative_drift = dataset.relative_drift();

    let mut wtr = csv::Writer::from_path(path).map_err(|err| write_error(path, err))?;
    let mut header: Vec<String> = [
        "step",
        "energy",
        "drift",
        "relative_drift",
        "residual",
        "dist_min",
        "dist_max",
        "dist_mean",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend((0..dataset.nparticles()).map(|p| format!("distance_p{p}")));
    wtr.write_record(&header)
        .map_err(|err| write_error(path, err))?;

    for step in window.steps() {
        let mut record = vec![
            step.to_string(),
            dataset.energy()[step].to_string(),
            dataset.drift()[step].to_string(),
            relative_drift[step].to_string(),
            dataset.residual()[step].to_string(),
            diag.dist_min()[step].to_string(),
            diag.dist_max()[step].to_string(),
            diag.dist_mean()[step].to_string(),
        ];
        record.extend(diag.distances().iter().map(|row| row[step].to_string()));
        wtr.write_record(&record)
            .map_err(|err| write_error(path, err))?;
    }
    wtr.flush().map_err(|err| write_error(path, err))
}

/// Writes positions in long format: one `step, series, x, y, z` row per
/// particle, center of mass (`com`) and reference (`ref`) and step.
pub fn write_trajectories_csv(
    analysis: &Analysis,
    window: &StepWindow,
    path: &Path,
) -> Result<(), BorisError> {
    let dataset = analysis.dataset();
    check_window(window, dataset.nsteps())?;
    let mut wtr = csv::Writer::from_path(path).map_err(|err| write_error(path, err))?;
    wtr.write_record(["step", "series", "x", "y", "z"])
        .map_err(|err| write_error(path, err))?;

    let mut series: Vec<(String, &[Position])> = dataset
        .tracks()
        .iter()
        .enumerate()
        .map(|(p, track)| (format!("p{p}"), track.as_slice()))
        .collect();
    series.push(("com".to_string(), dataset.center_of_mass()));
    series.push(("ref".to_string(), dataset.reference().positions()));

    for step in window.steps() {
        for (label, positions) in &series {
            let pos = positions[step];
            wtr.write_record([
                step.to_string(),
                label.clone(),
                pos.x.to_string(),
                pos.y.to_string(),
                pos.z.to_string(),
            ])
            .map_err(|err| write_error(path, err))?;
        }
    }
    wtr.flush().map_err(|err| write_error(path, err))
}

/// Writes the summary as canonical JSON.
pub fn write_summary_json(summary: &RunSummary, path: &Path) -> Result<(), BorisError> {
    let bytes = to_canonical_json_bytes(summary)?;
    fs::write(path, bytes).map_err(|err| write_error(path, err))
}
