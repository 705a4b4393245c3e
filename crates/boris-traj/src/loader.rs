use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use boris_core::{BorisError, ErrorInfo, RunConfig};
use sha2::{Digest, Sha256};

use crate::dataset::{DatasetBuilder, FileDigest, InputProvenance, TrajectoryDataset};
use crate::record::TrajectoryRecord;
use crate::select::Selection;

/// Loads the main and reference runs identified by the given dimensions,
/// using the default naming constants.
pub fn load(
    build_dir: impl AsRef<Path>,
    nsteps: usize,
    niter: usize,
    nparticles: usize,
) -> Result<TrajectoryDataset, BorisError> {
    load_config(&RunConfig::new(build_dir.as_ref(), nsteps, niter, nparticles))
}

/// Loads the dataset described by `config`.
///
/// Both files must exist before either is read. Rows are consumed in file
/// order; the first row that fails to parse aborts the load.
pub fn load_config(config: &RunConfig) -> Result<TrajectoryDataset, BorisError> {
    config.validate()?;
    let paths = config.paths();
    ensure_present(&paths.main, "main")?;
    ensure_present(&paths.reference, "reference")?;

    let mut builder = DatasetBuilder::new(config.nsteps, config.nparticles);
    let main = ingest(&paths.main, config, |step, record| {
        builder.store_main(step, record)
    })?;
    let reference = ingest(&paths.reference, config, |step, record| {
        builder.store_reference(step, record);
        Ok(())
    })?;
    let dataset = builder.finish(InputProvenance { main, reference });

    let missing = dataset.missing_slots();
    if missing > 0 {
        if config.require_complete {
            return Err(BorisError::InvalidDataset(
                ErrorInfo::new("dataset-incomplete", "some (particle, step) slots were never written")
                    .with_context("missing", missing)
                    .with_path(&paths.main),
            ));
        }
        log::warn!(
            "{missing} position slot(s) in {} were never written and hold NaN",
            paths.main.display()
        );
    }
    Ok(dataset)
}

fn ensure_present(path: &Path, role: &str) -> Result<(), BorisError> {
    if path.is_file() {
        return Ok(());
    }
    Err(BorisError::DataFileNotFound(
        ErrorInfo::new("data-file-missing", format!("{role} run file is absent"))
            .with_context("role", role)
            .with_path(path)
            .with_hint("check build_dir and the step, iteration and particle counts"),
    ))
}

fn malformed(path: &Path, line: u64, info: ErrorInfo) -> BorisError {
    BorisError::MalformedRecord(info.with_path(path).with_context("line", line))
}

/// Runs the two-condition selection over one file and hands every retained
/// `(target step, record)` pair to `store`.
fn ingest<F>(path: &Path, config: &RunConfig, mut store: F) -> Result<FileDigest, BorisError>
where
    F: FnMut(usize, &TrajectoryRecord) -> Result<(), ErrorInfo>,
{
    log::info!("reading trajectory data from {}", path.display());
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => BorisError::DataFileNotFound(
            ErrorInfo::new("data-file-missing", err.to_string()).with_path(path),
        ),
        _ => BorisError::io("data-file-read", path, err),
    })?;
    let sha256 = hex::encode(Sha256::digest(&bytes));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes.as_slice());

    let mut rows = 0;
    let mut retained = 0;
    for (idx, row) in reader.records().enumerate() {
        let fallback_line = idx as u64 + 1;
        let row = row.map_err(|err| {
            let line = err.position().map_or(fallback_line, |pos| pos.line());
            malformed(path, line, ErrorInfo::new("record-read", err.to_string()))
        })?;
        let line = row.position().map_or(fallback_line, |pos| pos.line());
        let record =
            TrajectoryRecord::from_fields(&row).map_err(|info| malformed(path, line, info))?;
        rows += 1;

        let selection = Selection::classify(record.step, record.iteration, config.niter);
        for step in selection.target_steps(record.step) {
            if step > config.nsteps {
                return Err(malformed(
                    path,
                    line,
                    ErrorInfo::new("record-step-range", "step beyond the configured run length")
                        .with_context("step", step)
                        .with_context("nsteps", config.nsteps),
                ));
            }
            store(step, &record).map_err(|info| malformed(path, line, info))?;
        }
        if selection.is_retained() {
            retained += 1;
        }
    }
    log::debug!(
        "{}: {rows} rows, {retained} retained, {} discarded",
        path.display(),
        rows - retained
    );

    Ok(FileDigest {
        path: path.to_path_buf(),
        sha256,
        rows,
        retained,
    })
}
