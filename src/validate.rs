//! Contrôles de forme des entrées, côté appelant. [`crate::balance`] ne les exige pas.

use crate::model::{BalancerConfig, HolidayId, Participant, ParticipantId, Response};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputIssue {
    #[error("holiday with empty id")]
    EmptyHolidayId,
    #[error("duplicate holiday id: {0}")]
    DuplicateHoliday(HolidayId),
    #[error("holiday {0} has an empty name")]
    EmptyHolidayName(HolidayId),
    #[error("duplicate participant id: {0}")]
    DuplicateParticipant(ParticipantId),
    #[error("participant {0} has an empty name")]
    EmptyParticipantName(ParticipantId),
    #[error("response from unknown participant: {0}")]
    UnknownParticipant(ParticipantId),
    #[error("more than one response from participant {0}")]
    DuplicateResponse(ParticipantId),
    #[error("participant {participant} ranked unknown holiday {holiday}")]
    UnknownHoliday {
        participant: ParticipantId,
        holiday: HolidayId,
    },
}

/// Tous les problèmes trouvés, pas seulement le premier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} input issue(s)", .0.len())]
pub struct ValidationErrors(pub Vec<InputIssue>);

impl ValidationErrors {
    pub fn issues(&self) -> &[InputIssue] {
        &self.0
    }
}

pub fn validate_input(
    config: &BalancerConfig,
    participants: &[Participant],
    responses: &[Response],
) -> Result<(), ValidationErrors> {
    let mut issues = Vec::new();

    let mut holiday_ids = HashSet::new();
    for holiday in &config.holidays {
        if holiday.id.as_str().trim().is_empty() {
            issues.push(InputIssue::EmptyHolidayId);
            continue;
        }
        if !holiday_ids.insert(&holiday.id) {
            issues.push(InputIssue::DuplicateHoliday(holiday.id.clone()));
        }
        if holiday.name.trim().is_empty() {
            issues.push(InputIssue::EmptyHolidayName(holiday.id.clone()));
        }
    }

    let mut participant_ids = HashSet::new();
    for participant in participants {
        if !participant_ids.insert(&participant.id) {
            issues.push(InputIssue::DuplicateParticipant(participant.id.clone()));
        }
        if participant.name.trim().is_empty() {
            issues.push(InputIssue::EmptyParticipantName(participant.id.clone()));
        }
    }

    let mut responders = HashSet::new();
    for response in responses {
        let pid = &response.participant_id;
        if !participant_ids.contains(pid) {
            issues.push(InputIssue::UnknownParticipant(pid.clone()));
        }
        if !responders.insert(pid) {
            issues.push(InputIssue::DuplicateResponse(pid.clone()));
        }
        for holiday in response.rankings.keys() {
            if !holiday_ids.contains(holiday) {
                issues.push(InputIssue::UnknownHoliday {
                    participant: pid.clone(),
                    holiday: holiday.clone(),
                });
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Holiday, Rank};
    use chrono::NaiveDate;

    #[test]
    fn reports_every_issue() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let xmas = HolidayId::new("xmas");
        let config = BalancerConfig::new(vec![
            Holiday::new(xmas.clone(), "Christmas", date, 1),
            Holiday::new(xmas.clone(), " ", date, 1),
        ]);
        let alice = ParticipantId::new("alice");
        let participants = vec![Participant::new(alice.clone(), "Alice", "a@example.com")];
        let responses = vec![
            Response::new(alice.clone()).with_rank(&HolidayId::new("easter"), Rank::nth(1).unwrap()),
            Response::new(ParticipantId::new("ghost")),
        ];

        let err = validate_input(&config, &participants, &responses).unwrap_err();
        assert_eq!(
            err.issues(),
            &[
                InputIssue::DuplicateHoliday(xmas.clone()),
                InputIssue::EmptyHolidayName(xmas),
                InputIssue::UnknownHoliday {
                    participant: alice,
                    holiday: HolidayId::new("easter"),
                },
                InputIssue::UnknownParticipant(ParticipantId::new("ghost")),
            ]
        );
        assert_eq!(err.to_string(), "4 input issue(s)");
    }

    #[test]
    fn clean_input_passes() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let ny = HolidayId::new("ny");
        let config = BalancerConfig::new(vec![Holiday::new(ny.clone(), "New Year", date, 2)]);
        let bob = ParticipantId::new("bob");
        let participants = vec![Participant::new(bob.clone(), "Bob", "b@example.com")];
        let responses = vec![Response::new(bob).with_unavailable(&ny)];
        assert!(validate_input(&config, &participants, &responses).is_ok());
    }
}
