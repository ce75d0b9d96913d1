use super::tally::ParticipantState;
use super::{AssignmentRecord, FairnessBreakdown};

const FILL_WEIGHT: f64 = 40.0;
const PREFERENCE_WEIGHT: f64 = 40.0;
const DISTRIBUTION_WEIGHT: f64 = 20.0;
/// Points de distribution perdus par unité d'écart-type.
const STD_DEV_PENALTY: f64 = 5.0;

/// Score global 0..=100 et ses composantes.
pub(super) fn fairness_score(
    records: &[AssignmentRecord],
    states: &[ParticipantState<'_>],
) -> (u8, FairnessBreakdown) {
    let breakdown = FairnessBreakdown {
        fill: fill_component(records),
        preference: preference_component(records),
        distribution: distribution_component(states),
    };
    let total = (breakdown.fill + breakdown.preference + breakdown.distribution)
        .round()
        .clamp(0.0, 100.0);
    (total as u8, breakdown)
}

fn fill_component(records: &[AssignmentRecord]) -> f64 {
    let required: u64 = records.iter().map(|r| u64::from(r.staff_needed)).sum();
    if required == 0 {
        return 0.0;
    }
    let assigned: u64 = records.iter().map(|r| r.assigned_staff.len() as u64).sum();
    assigned as f64 / required as f64 * FILL_WEIGHT
}

/// Moyenne de 1/rang sur les affectations classées ; les placements sans rang ne comptent pas.
fn preference_component(records: &[AssignmentRecord]) -> f64 {
    let (sum, count) = records
        .iter()
        .flat_map(|r| r.assigned_staff.iter())
        .filter_map(|s| s.preference_rank)
        .fold((0.0_f64, 0u64), |(sum, count), rank| {
            (sum + 1.0 / f64::from(rank), count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    sum / count as f64 * PREFERENCE_WEIGHT
}

/// Écart-type (population) du nombre d'affectations, participants à zéro inclus.
fn distribution_component(states: &[ParticipantState<'_>]) -> f64 {
    if states.is_empty() {
        return 0.0;
    }
    let n = states.len() as f64;
    let mean = states
        .iter()
        .map(|s| f64::from(s.tally.assigned_count))
        .sum::<f64>()
        / n;
    let variance = states
        .iter()
        .map(|s| {
            let d = f64::from(s.tally.assigned_count) - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (DISTRIBUTION_WEIGHT - variance.sqrt() * STD_DEV_PENALTY).max(0.0)
}
