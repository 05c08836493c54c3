use boid_core::{populate, simulate, Flock};
use boid_shared::{RunRecord, StepStats};

use crate::config::SimulationPlan;
use crate::report::format_state_line;
use crate::stats::{mean_distance, mean_speed};

/// Result of a single recorded run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub stats: Vec<StepStats>,
    pub eaten: usize,
    pub flock: Flock,
}

fn record(step: u32, flock: &Flock) -> StepStats {
    let row = StepStats {
        step,
        distance: mean_distance(flock.boids()),
        speed: mean_speed(flock.boids()),
    };
    log::info!("{}", format_state_line(&row));
    row
}

/// Runs one simulation, recording statistics at step 0 and every
/// `prescale` steps after that.
pub fn run_single(plan: &SimulationPlan) -> RunOutcome {
    let params = &plan.parameters;
    let mut flock = populate(plan.boids, plan.predators, params, plan.seed);
    let mut stats = vec![record(0, &flock)];

    for step in 1..=params.steps {
        flock.evolve(params);
        if step % plan.prescale == 0 {
            stats.push(record(step, &flock));
        }
    }

    log::info!(
        "Run finished after {} steps: {} of {} boids eaten",
        params.steps,
        flock.eaten(),
        plan.boids
    );
    RunOutcome {
        stats,
        eaten: flock.eaten(),
        flock,
    }
}

/// Runs `runs` independent simulations; run `i` is seeded with
/// `plan.seed + i` (wrapping).
pub fn run_batch(plan: &SimulationPlan, runs: u32) -> Vec<RunRecord> {
    let seek_type = plan.seek_type();
    (0..runs)
        .map(|run| {
            let seed = plan.seed.wrapping_add(u64::from(run));
            let mut flock = populate(plan.boids, plan.predators, &plan.parameters, seed);
            simulate(&mut flock, &plan.parameters);
            log::debug!("Run {} (seed {}): {} eaten", run, seed, flock.eaten());
            RunRecord {
                run,
                seek_type,
                seed,
                eaten: flock.eaten(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boid_shared::SimulationSettings;

    fn small_plan() -> SimulationPlan {
        let settings = SimulationSettings {
            boids: 20,
            predators: 1,
            steps: 50,
            prescale: 10,
            duration: 5.0,
            seed: Some(8),
            ..SimulationSettings::default()
        };
        SimulationPlan::from_settings(&settings).unwrap()
    }

    #[test]
    fn test_run_single_records_every_prescale_steps() {
        let outcome = run_single(&small_plan());
        let steps: Vec<u32> = outcome.stats.iter().map(|row| row.step).collect();
        assert_eq!(steps, vec![0, 10, 20, 30, 40, 50]);
        assert_eq!(outcome.flock.len(), 21);
        assert_eq!(outcome.eaten, outcome.flock.eaten());
    }

    #[test]
    fn test_run_single_is_reproducible() {
        assert_eq!(run_single(&small_plan()), run_single(&small_plan()));
    }

    #[test]
    fn test_run_batch_seeds() {
        let plan = small_plan();
        let records = run_batch(&plan, 3);

        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.run, i as u32);
            assert_eq!(record.seed, 8 + i as u64);
            assert!(record.eaten <= plan.boids);
        }
        // run 0 replays the single run with the same seed
        assert_eq!(records[0].eaten, run_single(&plan).eaten);
    }
}
