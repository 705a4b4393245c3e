use std::fs;
use std::path::Path;

use boris_core::{BorisError, FileNaming, RunConfig};

#[test]
fn main_and_reference_names_follow_template() {
    let config = RunConfig::new("/data/build", 100, 5, 3);
    let paths = config.paths();
    assert_eq!(
        paths.main,
        Path::new("/data/build/s100_i5_dt0.015625_m5_p3.csv")
    );
    assert_eq!(
        paths.reference,
        Path::new("/data/build/s100_i5_dt0.015625_m5_p1.csv")
    );
}

#[test]
fn level_suffix_precedes_extension() {
    let naming = FileNaming {
        dt: 0.5,
        nodes: 3,
        level: Some(2),
    };
    assert_eq!(naming.file_name(8, 4, 10), "s8_i4_dt0.500000_m3_p10_level2.csv");
}

#[test]
fn yaml_config_loads_with_overrides() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("run.yaml");
    fs::write(
        &path,
        "build_dir: build\nnsteps: 64\nniter: 4\nnparticles: 5\nrequire_complete: true\nnaming:\n  nodes: 3\n",
    )
    .expect("write yaml");
    let config = RunConfig::load(&path).expect("load");
    assert_eq!(config.nparticles, 5);
    assert!(config.require_complete);
    assert_eq!(config.naming.nodes, 3);
    assert_eq!(config.naming.dt, 0.015625);
    assert_eq!(config.naming.level, None);
}

#[test]
fn yaml_config_with_zero_particles_is_rejected() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("run.yaml");
    fs::write(&path, "build_dir: build\nnsteps: 4\nniter: 2\nnparticles: 0\n").expect("write");
    let err = RunConfig::load(&path).unwrap_err();
    assert!(matches!(err, BorisError::Config(_)));
    assert_eq!(err.code(), "config-nparticles");
}

#[test]
fn missing_config_file_reports_path() {
    let err = RunConfig::load(Path::new("/nonexistent/run.yaml")).unwrap_err();
    assert_eq!(err.code(), "config-read");
    assert_eq!(
        err.info().context.get("path").map(String::as_str),
        Some("/nonexistent/run.yaml")
    );
}
