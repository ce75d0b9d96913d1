use super::{AssignedStaff, Run};
use crate::model::Preference;

/// Passe 1 : candidats ayant classé le férié, triés par (rang, affectations, score cumulé).
pub(super) fn fill_by_preference(run: &mut Run<'_>, index: usize) {
    let holiday = run.holidays[index];

    let mut candidates: Vec<(usize, u32)> = run
        .states
        .iter()
        .enumerate()
        .filter_map(|(i, state)| match state.preference_for(&holiday.id) {
            Preference::Ranked(rank) => Some((i, rank.get())),
            Preference::Unavailable | Preference::NoPreference => None,
        })
        .collect();
    candidates.sort_by_key(|&(i, rank)| {
        let (count, score) = run.states[i].tally.fairness_key();
        (rank, count, score)
    });

    let take = candidates.len().min(holiday.staff_needed as usize);
    for &(i, rank) in &candidates[..take] {
        let state = &mut run.states[i];
        state.tally.record(u64::from(rank));
        run.records[index].assigned_staff.push(AssignedStaff {
            participant_id: state.participant.id.clone(),
            name: state.participant.name.clone(),
            email: state.participant.email.clone(),
            preference_rank: Some(rank),
        });
    }
    run.records[index].refresh_unassigned();

    log_event!(
        debug,
        holiday = %holiday.id,
        candidates = candidates.len(),
        assigned = take,
        remaining = run.records[index].unassigned_count,
        "preference pass"
    );
}

/// Passe 2 : complète avec les participants sans préférence pour ce férié.
pub(super) fn fill_remaining(run: &mut Run<'_>, index: usize) {
    let remaining = run.records[index].unassigned_count as usize;
    if remaining == 0 {
        return;
    }
    let holiday = run.holidays[index];
    let record = &run.records[index];

    let mut candidates: Vec<usize> = run
        .states
        .iter()
        .enumerate()
        .filter(|(_, state)| {
            state.preference_for(&holiday.id) == Preference::NoPreference
                && !record.is_assigned(&state.participant.id)
        })
        .map(|(i, _)| i)
        .collect();
    candidates.sort_by_key(|&i| run.states[i].tally.fairness_key());

    let take = candidates.len().min(remaining);
    for &i in &candidates[..take] {
        let state = &mut run.states[i];
        state.tally.record(run.unranked_cost);
        run.records[index].assigned_staff.push(AssignedStaff {
            participant_id: state.participant.id.clone(),
            name: state.participant.name.clone(),
            email: state.participant.email.clone(),
            preference_rank: None,
        });
    }
    run.records[index].refresh_unassigned();

    log_event!(
        debug,
        holiday = %holiday.id,
        candidates = candidates.len(),
        assigned = take,
        remaining = run.records[index].unassigned_count,
        "fill pass"
    );
}
