//! Répartition des fériés : remplissage glouton en deux passes, pondéré par l'équité.
//!
//! 1. Passe « préférences » : chaque férié, par date croissante, prend les
//!    participants qui l'ont classé (rang, puis nb d'affectations, puis score cumulé).
//! 2. Passe « complément » : les fériés encore incomplets prennent, dans le même
//!    ordre, les participants sans préférence pour eux (jamais les indisponibles).
//!
//! Aucun état partagé entre deux appels ; les compteurs vivent dans [`balance`].

mod fill;
mod score;
mod tally;
mod types;
mod util;

pub use types::{
    AssignedStaff, AssignmentRecord, BalancingResult, FairnessBreakdown, ParticipantLoad,
};

use crate::model::{BalancerConfig, Holiday, Participant, ParticipantId, Response};
use std::collections::{HashMap, HashSet};
use tally::ParticipantState;

/// Calcule l'affectation des participants aux fériés. Ne modifie aucune entrée
/// et n'échoue jamais : la demande non satisfaite part dans `unmet_requirements`.
pub fn balance(
    config: &BalancerConfig,
    participants: &[Participant],
    responses: &[Response],
) -> BalancingResult {
    let mut run = Run::prepare(config, participants, responses);

    for index in 0..run.records.len() {
        fill::fill_by_preference(&mut run, index);
    }
    for index in 0..run.records.len() {
        fill::fill_remaining(&mut run, index);
    }

    run.finish()
}

/// État transitoire d'un calcul.
struct Run<'a> {
    /// Triés par date (tri stable).
    holidays: Vec<&'a Holiday>,
    states: Vec<ParticipantState<'a>>,
    /// Parallèle à `holidays`.
    records: Vec<AssignmentRecord>,
    /// Coût d'une affectation sans préférence : pire que tout rang possible.
    unranked_cost: u64,
}

impl<'a> Run<'a> {
    fn prepare(
        config: &'a BalancerConfig,
        participants: &'a [Participant],
        responses: &'a [Response],
    ) -> Self {
        let holidays = util::chronological(&config.holidays);

        let mut by_participant: HashMap<&ParticipantId, &Response> = HashMap::new();
        for response in responses {
            by_participant
                .entry(&response.participant_id)
                .or_insert(response);
        }

        let mut seen = HashSet::new();
        let mut states = Vec::with_capacity(participants.len());
        for participant in participants {
            if !seen.insert(&participant.id) {
                log_event!(warn, participant = %participant.id, "duplicate participant ignored");
                continue;
            }
            let response = by_participant.get(&participant.id).copied();
            if let Some(response) = response {
                for holiday in response.rankings.keys() {
                    if config.find_holiday(holiday).is_none() {
                        log_event!(
                            warn,
                            participant = %participant.id,
                            holiday = %holiday,
                            "ranking for unknown holiday ignored"
                        );
                    }
                }
            }
            states.push(ParticipantState::new(participant, response));
        }

        for response in responses {
            if !seen.contains(&response.participant_id) {
                log_event!(
                    warn,
                    participant = %response.participant_id,
                    "response from unknown participant ignored"
                );
            }
        }

        let records = holidays.iter().map(|h| util::empty_record(h)).collect();
        let unranked_cost = holidays.len() as u64 + 1;

        Self {
            holidays,
            states,
            records,
            unranked_cost,
        }
    }

    fn finish(self) -> BalancingResult {
        let assignments = self.records;

        let (fairness_score, breakdown) = score::fairness_score(&assignments, &self.states);
        let unmet_requirements: Vec<String> = assignments
            .iter()
            .filter(|a| a.unassigned_count > 0)
            .map(util::unmet_message)
            .collect();

        let loads = self
            .states
            .iter()
            .map(|s| ParticipantLoad {
                participant_id: s.participant.id.clone(),
                assigned_count: s.tally.assigned_count,
                total_preference_score: s.tally.total_preference_score,
            })
            .collect();

        log_event!(
            info,
            holidays = assignments.len(),
            participants = self.states.len(),
            fairness_score,
            unmet = unmet_requirements.len(),
            "balancing done"
        );

        BalancingResult {
            assignments,
            fairness_score,
            unmet_requirements,
            breakdown,
            loads,
        }
    }
}
