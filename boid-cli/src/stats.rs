use boid_core::{perception::distance, Boid};
use boid_shared::Summary;

/// Mean and sample standard deviation from running sums over `n` values.
fn summarize(sum: f64, sum_sq: f64, n: usize) -> Summary {
    let count = n as f64;
    let mean = sum / count;
    if n < 2 {
        return Summary::new(mean, 0.0);
    }
    let mean_sq = sum_sq / count;
    // rounding can push the variance slightly below zero
    let variance = (count / (count - 1.0) * (mean_sq - mean * mean)).max(0.0);
    Summary::new(mean, variance.sqrt())
}

/// Mean distance over every unordered pair of boids.
pub fn mean_distance(boids: &[Boid]) -> Summary {
    assert!(boids.len() > 1, "statistics need more than one boid");
    let (mut sum, mut sum_sq) = (0.0, 0.0);
    for (i, boid) in boids.iter().enumerate() {
        for other in &boids[i + 1..] {
            let d = distance(boid, other);
            sum += d;
            sum_sq += d * d;
        }
    }
    let pairs = boids.len() * (boids.len() - 1) / 2;
    summarize(sum, sum_sq, pairs)
}

/// Mean speed of the boids.
pub fn mean_speed(boids: &[Boid]) -> Summary {
    assert!(boids.len() > 1, "statistics need more than one boid");
    let (sum, sum_sq) = boids.iter().fold((0.0, 0.0), |(sum, sum_sq), boid| {
        let speed = boid.speed();
        (sum + speed, sum_sq + speed * speed)
    });
    summarize(sum, sum_sq, boids.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boid_core::{Position, Velocity};

    fn regular(x: f64, y: f64, vx: f64, vy: f64) -> Boid {
        Boid::regular(Position::new(x, y), Velocity::new(vx, vy))
    }

    #[test]
    fn test_mean_distance() {
        // pair distances 3, 4 and 5
        let boids = [
            regular(0.0, 0.0, 1.0, 0.0),
            regular(3.0, 0.0, 1.0, 0.0),
            regular(0.0, 4.0, 1.0, 0.0),
        ];
        let summary = mean_distance(&boids);
        assert!((summary.mean - 4.0).abs() < 1e-9);
        assert!((summary.std_dev - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed() {
        let boids = [
            regular(0.0, 0.0, 3.0, 4.0),
            regular(1.0, 0.0, 0.0, 1.0),
            regular(2.0, 0.0, -6.0, 8.0),
            regular(3.0, 0.0, 0.0, -4.0),
        ];
        // speeds 5, 1, 10, 4
        let summary = mean_speed(&boids);
        assert!((summary.mean - 5.0).abs() < 1e-9);
        assert!((summary.std_dev - 14.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_identical_values_have_no_spread() {
        let boids = [
            regular(0.0, 0.0, 2.0, 0.0),
            regular(1.0, 1.0, 0.0, 2.0),
            regular(5.0, 5.0, 0.0, -2.0),
        ];
        let summary = mean_speed(&boids);
        assert!((summary.mean - 2.0).abs() < 1e-9);
        assert!(summary.std_dev.abs() < 1e-9);
    }

    #[test]
    fn test_single_pair() {
        let boids = [regular(0.0, 0.0, 1.0, 0.0), regular(6.0, 8.0, 1.0, 0.0)];
        let summary = mean_distance(&boids);
        assert_eq!(summary, Summary::new(10.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "more than one boid")]
    fn test_single_boid() {
        mean_speed(&[regular(0.0, 0.0, 1.0, 0.0)]);
    }
}
