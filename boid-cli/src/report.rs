//! Text and JSON renderings of run results.

use std::io::{self, Write};

use boid_shared::{RunRecord, SeekType, StepStats};
use serde::Serialize;

use crate::config::SimulationPlan;

/// One row per recorded step: distance mean and deviation, then speed mean
/// and deviation.
pub fn write_stats<W: Write>(out: &mut W, rows: &[StepStats]) -> io::Result<()> {
    for row in rows {
        writeln!(
            out,
            "{:9.3}{:9.3}{:9.3}{:9.3}",
            row.distance.mean, row.distance.std_dev, row.speed.mean, row.speed.std_dev
        )?;
    }
    Ok(())
}

/// Console line shown while a run progresses.
pub fn format_state_line(row: &StepStats) -> String {
    format!(
        "{:8.3} \u{b1} {:7.3}{:>8}{:13.3} \u{b1} {:7.3}",
        row.distance.mean, row.distance.std_dev, '|', row.speed.mean, row.speed.std_dev
    )
}

pub fn state_header() -> String {
    format!("{:>18}{:>8}{:>23}", "distance", '|', "speed")
}

/// Eaten counts of a batch, one per line, after a header naming the seek
/// type.
pub fn write_eaten_counts<W: Write>(
    out: &mut W,
    seek_type: SeekType,
    records: &[RunRecord],
) -> io::Result<()> {
    writeln!(out, "# seek-type: {}", seek_type)?;
    for record in records {
        writeln!(out, "{}", record.eaten)?;
    }
    Ok(())
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Two-column summary of the parameters a run used.
pub fn format_parameters(plan: &SimulationPlan) -> String {
    let p = &plan.parameters;
    let rows = [
        ("angle A:", format!("{:.3}", p.angle_of_view), "distance d:", format!("{:.3}", p.neighbour_distance)),
        ("sep-dist d_s:", format!("{:.3}", p.separation_distance), "sep-fact s:", format!("{:.3}", p.separation_factor)),
        ("coh-fact c:", format!("{:.3}", p.cohesion_factor), "align-fact a:", format!("{:.3}", p.alignment_factor)),
        ("max-sp V:", format!("{:.3}", p.max_speed), "min-sp-fr v:", format!("{:.6}", p.min_speed / p.max_speed)),
        ("duration t:", format!("{:.3}", p.duration), "steps S:", p.steps.to_string()),
        ("presc p:", plan.prescale.to_string(), "N_boids N:", plan.boids.to_string()),
        ("N_preds P:", plan.predators.to_string(), "seek-type:", plan.seek_type().to_string()),
    ];
    let mut text = String::new();
    for (left, left_value, right, right_value) in rows {
        text.push_str(&format!("{:>15}{:>9}{:>18}{:>10}\n", left, left_value, right, right_value));
    }
    text.push_str(&format!("{:>15}{:>9}\n", "seed:", plan.seed));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use boid_shared::Summary;

    fn row(step: u32) -> StepStats {
        StepStats {
            step,
            distance: Summary::new(41.5, 2.25),
            speed: Summary::new(12.0, 0.125),
        }
    }

    #[test]
    fn test_stats_table_columns() {
        let mut out = Vec::new();
        write_stats(&mut out, &[row(0), row(40)]).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "   41.500    2.250   12.000    0.125");
        assert_eq!(lines[0].len(), 36);
    }

    #[test]
    fn test_state_line() {
        assert_eq!(
            format_state_line(&row(0)),
            "  41.500 \u{b1}   2.250       |       12.000 \u{b1}   0.125"
        );
    }

    #[test]
    fn test_eaten_counts() {
        let records: Vec<RunRecord> = [3, 0, 12]
            .iter()
            .enumerate()
            .map(|(run, &eaten)| RunRecord {
                run: run as u32,
                seek_type: SeekType::Isolated,
                seed: 100 + run as u64,
                eaten,
            })
            .collect();
        let mut out = Vec::new();
        write_eaten_counts(&mut out, SeekType::Isolated, &records).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "# seek-type: isolated\n3\n0\n12\n");
    }

    #[test]
    fn test_json_rows() {
        let mut out = Vec::new();
        write_json(&mut out, &[row(40)]).unwrap();
        let parsed: Vec<StepStats> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![row(40)]);
    }
}
