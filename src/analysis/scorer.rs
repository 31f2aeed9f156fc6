use crate::models::{Score, Status, Verdict};

/// Percentage of `total` represented by `found`, rounded to two decimals
/// (half away from zero).
///
/// Returns `0.0` when `total` is zero; callers must treat a screening with no
/// requirements as a failure rather than a 0% match.
pub fn score(found: &[String], total: usize) -> Score {
    if total == 0 {
        return Score::ZERO;
    }

    let matched = found.len().min(total);
    let percent = matched as f64 / total as f64 * 100.0;
    Score::new(round_to_hundredths(percent))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compares `score` against `threshold`. A score equal to the threshold passes.
pub fn verdict(score: Score, threshold: f64) -> Verdict {
    if score.value() >= threshold {
        Verdict {
            status: Status::Selected,
            explanation: format!("Candidate meets requirements with {}% match", score),
        }
    } else {
        Verdict {
            status: Status::Rejected,
            explanation: format!("Candidate below threshold with only {}% match", score),
        }
    }
}
