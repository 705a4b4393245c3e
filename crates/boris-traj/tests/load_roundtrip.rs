mod common;

use boris_core::{FileNaming, Position, RunConfig};
use boris_traj::{load, load_config};
use common::{complete_main_rows, reference_rows, row, write_rows};

#[test]
fn seed_and_final_rows_land_on_step_zero_and_last_step() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let config = RunConfig::new(dir.path(), 3, 2, 2);
    let paths = config.paths();
    write_rows(
        &paths.main,
        &[
            row(1, 0, 0, [1.0, 2.0, 3.0]),
            row(1, 0, 1, [-1.0, -2.0, -3.0]),
            row(2, 0, 0, [99.0, 99.0, 99.0]),
            row(3, 1, 0, [4.5, 5.5, 6.5]),
            row(3, 1, 1, [-4.5, -5.5, -6.5]),
        ],
    );
    write_rows(&paths.reference, &reference_rows(&config));

    let dataset = load(dir.path(), 3, 2, 2).expect("load");
    assert_eq!(dataset.position(0, 0), Position::new(1.0, 2.0, 3.0));
    assert_eq!(dataset.position(1, 0), Position::new(-1.0, -2.0, -3.0));
    assert_eq!(dataset.position(0, 3), Position::new(4.5, 5.5, 6.5));
    assert_eq!(dataset.position(1, 3), Position::new(-4.5, -5.5, -6.5));
    // step 2 only had an intermediate sweep
    assert!(dataset.position(0, 2).x.is_nan());
}

#[test]
fn center_of_mass_rows_fill_their_own_series() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let config = RunConfig::new(dir.path(), 2, 3, 1);
    let paths = config.paths();
    write_rows(
        &paths.main,
        &[
            row(1, 0, 0, [1.0, 0.0, 0.0]),
            row(1, 0, -1, [7.0, 7.0, 7.0]),
            row(2, 2, -1, [8.0, 8.0, 8.0]),
        ],
    );
    write_rows(&paths.reference, &reference_rows(&config));

    let dataset = load_config(&config).expect("load");
    assert_eq!(dataset.center_of_mass()[0], Position::new(7.0, 7.0, 7.0));
    assert_eq!(dataset.center_of_mass()[2], Position::new(8.0, 8.0, 8.0));
    assert_eq!(dataset.position(0, 0), Position::new(1.0, 0.0, 0.0));
    assert!(dataset.position(0, 2).x.is_nan());
}

#[test]
fn scalar_series_follow_the_last_retained_row() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let config = RunConfig::new(dir.path(), 2, 2, 2);
    let paths = config.paths();
    write_rows(&paths.main, &complete_main_rows(&config));
    write_rows(&paths.reference, &reference_rows(&config));

    let dataset = load_config(&config).expect("load");
    assert_eq!(dataset.missing_slots(), 0);
    // common::row derives energy from the step the row was written for
    assert_eq!(dataset.energy(), &[11.0, 11.0, 12.0]);
    assert_eq!(dataset.drift(), &[0.5, 0.5, 1.0]);
    assert_eq!(dataset.relative_drift()[2], 1.0 / 12.0);
    assert_eq!(dataset.position(1, 2), Position::new(1.0, 2.0, 1.0));
    assert_eq!(dataset.center_of_mass()[1], Position::new(0.0, 1.0, 1.0));
}

#[test]
fn reference_positions_are_step_aligned() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let config = RunConfig::new(dir.path(), 4, 2, 2);
    let paths = config.paths();
    write_rows(&paths.main, &complete_main_rows(&config));
    let mut reference = reference_rows(&config);
    // energy columns of the reference run are never read
    for record in &mut reference {
        record.energy = -1.0;
    }
    write_rows(&paths.reference, &reference);

    let dataset = load_config(&config).expect("load");
    let xs: Vec<f64> = dataset.reference().positions().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert!(dataset.energy().iter().all(|e| *e > 0.0));
}

#[test]
fn duplicate_rows_keep_the_last_one() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let config = RunConfig::new(dir.path(), 1, 2, 1);
    let paths = config.paths();
    write_rows(
        &paths.main,
        &[
            row(1, 0, 0, [0.0, 0.0, 0.0]),
            row(1, 1, 0, [1.0, 1.0, 1.0]),
            row(1, 1, 0, [2.0, 2.0, 2.0]),
        ],
    );
    write_rows(&paths.reference, &reference_rows(&config));

    let dataset = load_config(&config).expect("load");
    assert_eq!(dataset.position(0, 1), Position::new(2.0, 2.0, 2.0));
}

#[test]
fn single_sweep_runs_seed_step_zero_and_fill_step_one() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let config = RunConfig::new(dir.path(), 2, 1, 1);
    let paths = config.paths();
    write_rows(
        &paths.main,
        &[
            row(1, 0, 0, [3.0, 0.0, 0.0]),
            row(2, 0, 0, [5.0, 0.0, 0.0]),
        ],
    );
    write_rows(&paths.reference, &reference_rows(&config));

    let dataset = load_config(&config).expect("load");
    assert_eq!(dataset.position(0, 0), Position::new(3.0, 0.0, 0.0));
    assert_eq!(dataset.position(0, 1), Position::new(3.0, 0.0, 0.0));
    assert_eq!(dataset.position(0, 2), Position::new(5.0, 0.0, 0.0));
}

#[test]
fn level_suffixed_files_are_found() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let config = RunConfig::new(dir.path(), 2, 2, 2).with_naming(FileNaming {
        level: Some(1),
        ..FileNaming::default()
    });
    let paths = config.paths();
    assert!(paths.main.to_string_lossy().ends_with("_p2_level1.csv"));
    write_rows(&paths.main, &complete_main_rows(&config));
    write_rows(&paths.reference, &reference_rows(&config));

    let dataset = load_config(&config).expect("load");
    assert_eq!(dataset.nparticles(), 2);
    assert_eq!(dataset.provenance().main.rows, complete_main_rows(&config).len());
    assert_eq!(dataset.provenance().main.sha256.len(), 64);
    assert_ne!(
        dataset.provenance().main.sha256,
        dataset.provenance().reference.sha256
    );
}
