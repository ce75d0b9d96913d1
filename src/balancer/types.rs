use crate::model::{HolidayId, ParticipantId};
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Personne placée sur un férié.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssignedStaff {
    pub participant_id: ParticipantId,
    pub name: String,
    pub email: String,
    /// `None` : placé sans avoir classé ce férié
    pub preference_rank: Option<u32>,
}

/// Résultat pour un férié.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssignmentRecord {
    pub holiday_id: HolidayId,
    pub holiday_name: String,
    pub date: NaiveDate,
    pub staff_needed: u32,
    pub assigned_staff: Vec<AssignedStaff>,
    pub unassigned_count: u32,
}

impl AssignmentRecord {
    pub fn is_assigned(&self, participant: &ParticipantId) -> bool {
        self.assigned_staff
            .iter()
            .any(|s| &s.participant_id == participant)
    }

    pub fn is_fully_staffed(&self) -> bool {
        self.unassigned_count == 0
    }

    pub(super) fn refresh_unassigned(&mut self) {
        let assigned = u32::try_from(self.assigned_staff.len()).unwrap_or(u32::MAX);
        self.unassigned_count = self.staff_needed.saturating_sub(assigned);
    }
}

/// Détail des trois composantes du score d'équité.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FairnessBreakdown {
    /// 0..=40
    pub fill: f64,
    /// 0..=40
    pub preference: f64,
    /// 0..=20
    pub distribution: f64,
}

/// Charge finale d'un participant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticipantLoad {
    pub participant_id: ParticipantId,
    pub assigned_count: u32,
    pub total_preference_score: u64,
}

/// Résultat complet d'un calcul.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalancingResult {
    /// Un enregistrement par férié, dans l'ordre chronologique.
    pub assignments: Vec<AssignmentRecord>,
    pub fairness_score: u8,
    pub unmet_requirements: Vec<String>,
    pub breakdown: FairnessBreakdown,
    pub loads: Vec<ParticipantLoad>,
}

impl BalancingResult {
    pub fn total_assigned(&self) -> u64 {
        self.assignments
            .iter()
            .map(|a| a.assigned_staff.len() as u64)
            .sum()
    }

    pub fn total_required(&self) -> u64 {
        self.assignments
            .iter()
            .map(|a| u64::from(a.staff_needed))
            .sum()
    }

    pub fn is_fully_staffed(&self) -> bool {
        self.assignments.iter().all(AssignmentRecord::is_fully_staffed)
    }

    pub fn record_for(&self, holiday: &HolidayId) -> Option<&AssignmentRecord> {
        self.assignments.iter().find(|a| &a.holiday_id == holiday)
    }

    /// Fériés attribués à un participant, dans l'ordre chronologique.
    pub fn assignments_for<'a>(
        &'a self,
        participant: &'a ParticipantId,
    ) -> impl Iterator<Item = &'a AssignmentRecord> + 'a {
        self.assignments
            .iter()
            .filter(move |a| a.is_assigned(participant))
    }
}
