use serde::{Deserialize, Serialize};

/// Per-step reductions of the distance table across the particle axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reductions {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
    pub mean: Vec<f64>,
}

impl Reductions {
    /// Reduces a `[particle][step]` table over `steps` columns.
    ///
    /// A step with any `NaN` distance reduces to `NaN` in all three series.
    pub fn across_particles(distances: &[Vec<f64>], steps: usize) -> Self {
        let mut out = Reductions {
            min: Vec::with_capacity(steps),
            max: Vec::with_capacity(steps),
            mean: Vec::with_capacity(steps),
        };
        for step in 0..steps {
            let (min, max, mean) = reduce(distances.iter().map(|row| row[step]));
            out.min.push(min);
            out.max.push(max);
            out.mean.push(mean);
        }
        out
    }

    /// `max - min` per step.
    pub fn spread(&self) -> Vec<f64> {
        self.max.iter().zip(&self.min).map(|(hi, lo)| hi - lo).collect()
    }
}

fn reduce(values: impl Iterator<Item = f64>) -> (f64, f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        if value.is_nan() {
            return (f64::NAN, f64::NAN, f64::NAN);
        }
        min = min.min(value);
        max = max.max(value);
        sum += value;
        count += 1;
    }
    if count == 0 {
        return (f64::NAN, f64::NAN, f64::NAN);
    }
    // summation rounding can nudge the mean of near-equal values past an extreme
    let mean = (sum / count as f64).clamp(min, max);
    (min, max, mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_columns() {
        let table = vec![vec![1.0, 4.0], vec![3.0, 4.0], vec![2.0, 4.0]];
        let red = Reductions::across_particles(&table, 2);
        assert_eq!(red.min, vec![1.0, 4.0]);
        assert_eq!(red.max, vec![3.0, 4.0]);
        assert_eq!(red.mean, vec![2.0, 4.0]);
        assert_eq!(red.spread(), vec![2.0, 0.0]);
    }

    #[test]
    fn mean_of_identical_values_stays_in_bounds() {
        let table = vec![vec![0.1]; 3];
        let red = Reductions::across_particles(&table, 1);
        assert_eq!(red.mean, vec![0.1]);
    }

    #[test]
    fn nan_poisons_the_step() {
        let table = vec![vec![1.0, f64::NAN], vec![2.0, 5.0]];
        let red = Reductions::across_particles(&table, 2);
        assert_eq!(red.max[0], 2.0);
        assert!(red.min[1].is_nan() && red.max[1].is_nan() && red.mean[1].is_nan());
    }
}
