use crate::model::{HolidayId, Participant, Preference, Response};

/// Compteurs d'un participant, limités à un seul appel de `balance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Tally {
    pub assigned_count: u32,
    /// Somme des rangs obtenus ; plus bas = plus de chance jusqu'ici.
    pub total_preference_score: u64,
}

impl Tally {
    pub fn record(&mut self, cost: u64) {
        self.assigned_count += 1;
        self.total_preference_score += cost;
    }

    /// Clé d'équité : moins d'affectations d'abord, puis le plus petit score cumulé.
    pub fn fairness_key(&self) -> (u32, u64) {
        (self.assigned_count, self.total_preference_score)
    }
}

pub(super) struct ParticipantState<'a> {
    pub participant: &'a Participant,
    pub response: Option<&'a Response>,
    pub tally: Tally,
}

impl<'a> ParticipantState<'a> {
    pub fn new(participant: &'a Participant, response: Option<&'a Response>) -> Self {
        Self {
            participant,
            response,
            tally: Tally::default(),
        }
    }

    pub fn preference_for(&self, holiday: &HolidayId) -> Preference {
        self.response
            .map_or(Preference::NoPreference, |r| r.preference_for(holiday))
    }
}
