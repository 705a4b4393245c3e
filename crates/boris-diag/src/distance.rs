use boris_core::Position;
use boris_traj::TrajectoryDataset;

/// Euclidean distance between two points.
pub fn distance(a: &Position, b: &Position) -> f64 {
    (a - b).norm()
}

/// Distance of every particle to the center of mass, indexed `[particle][step]`.
///
/// Callers validate the dataset shape first.
pub fn distances_to_center(dataset: &TrajectoryDataset) -> Vec<Vec<f64>> {
    let center = dataset.center_of_mass();
    dataset
        .tracks()
        .iter()
        .map(|track| {
            track
                .iter()
                .zip(center)
                .map(|(pos, com)| distance(pos, com))
                .collect()
        })
        .collect()
}
