use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;
use uuid::Uuid;

/// Identifiant fort pour Holiday
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HolidayId(String);

impl HolidayId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolidayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiant fort pour Participant
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Jour férié à couvrir. La date ne sert qu'à l'ordre de traitement et à l'affichage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Holiday {
    pub id: HolidayId,
    pub name: String,
    pub date: NaiveDate,
    pub staff_needed: u32,
}

impl Holiday {
    pub fn new<N: Into<String>>(id: HolidayId, name: N, date: NaiveDate, staff_needed: u32) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            staff_needed,
        }
    }
}

/// Membre du personnel éligible pour un calcul.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: String,
}

impl Participant {
    pub fn new<N: Into<String>, E: Into<String>>(id: ParticipantId, name: N, email: E) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("rank must be a positive integer or -1 (unavailable), got {0}")]
    OutOfRange(i64),
}

/// Rang soumis pour un férié. Sur le fil : entier positif, ou `-1` pour « indisponible ».
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub enum Rank {
    /// 1 = le plus souhaité
    Ranked(NonZeroU32),
    Unavailable,
}

impl Rank {
    pub const UNAVAILABLE_SENTINEL: i64 = -1;

    /// `None` pour 0.
    pub fn nth(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Rank::Ranked)
    }
}

impl TryFrom<i64> for Rank {
    type Error = RankError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw == Self::UNAVAILABLE_SENTINEL {
            return Ok(Rank::Unavailable);
        }
        u32::try_from(raw)
            .ok()
            .and_then(Rank::nth)
            .ok_or(RankError::OutOfRange(raw))
    }
}

impl From<Rank> for i64 {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Ranked(n) => i64::from(n.get()),
            Rank::Unavailable => Rank::UNAVAILABLE_SENTINEL,
        }
    }
}

/// Préférence effective d'un participant pour un férié donné.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Ranked(NonZeroU32),
    Unavailable,
    NoPreference,
}

impl From<Option<Rank>> for Preference {
    fn from(rank: Option<Rank>) -> Self {
        match rank {
            Some(Rank::Ranked(n)) => Preference::Ranked(n),
            Some(Rank::Unavailable) => Preference::Unavailable,
            None => Preference::NoPreference,
        }
    }
}

/// Réponse au sondage d'un participant (férié → rang). Les fériés absents sont « sans préférence ».
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Response {
    pub participant_id: ParticipantId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rankings: BTreeMap<HolidayId, Rank>,
}

impl Response {
    pub fn new(participant_id: ParticipantId) -> Self {
        Self {
            participant_id,
            rankings: BTreeMap::new(),
        }
    }

    pub fn with_rank(mut self, holiday: &HolidayId, rank: Rank) -> Self {
        self.rankings.insert(holiday.clone(), rank);
        self
    }

    pub fn with_unavailable(self, holiday: &HolidayId) -> Self {
        self.with_rank(holiday, Rank::Unavailable)
    }

    pub fn preference_for(&self, holiday: &HolidayId) -> Preference {
        self.rankings.get(holiday).copied().into()
    }
}

/// Paramètres d'un calcul : la liste des fériés.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalancerConfig {
    pub holidays: Vec<Holiday>,
}

impl BalancerConfig {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    pub fn find_holiday(&self, id: &HolidayId) -> Option<&Holiday> {
        self.holidays.iter().find(|h| &h.id == id)
    }
}

/// Jeu d'entrée complet (fériés, participants, réponses), tel que chargé depuis JSON.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Survey {
    pub holidays: Vec<Holiday>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub participants: Vec<Participant>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub responses: Vec<Response>,
}

impl Survey {
    pub fn config(&self) -> BalancerConfig {
        BalancerConfig::new(self.holidays.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_from_wire_values() {
        assert_eq!(Rank::try_from(-1_i64), Ok(Rank::Unavailable));
        assert_eq!(Rank::try_from(3_i64), Ok(Rank::nth(3).unwrap()));
        assert_eq!(Rank::try_from(0_i64), Err(RankError::OutOfRange(0)));
        assert_eq!(Rank::try_from(-2_i64), Err(RankError::OutOfRange(-2)));
        assert_eq!(i64::from(Rank::Unavailable), -1);
    }

    #[test]
    fn missing_ranking_is_no_preference() {
        let xmas = HolidayId::new("xmas");
        let ny = HolidayId::new("ny");
        let resp = Response::new(ParticipantId::new("p1")).with_unavailable(&xmas);
        assert_eq!(resp.preference_for(&xmas), Preference::Unavailable);
        assert_eq!(resp.preference_for(&ny), Preference::NoPreference);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn response_json_uses_sentinel() {
        let json = r#"{"participant_id":"p1","rankings":{"xmas":1,"ny":-1}}"#;
        let resp: Response = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.preference_for(&HolidayId::new("xmas")),
            Preference::Ranked(NonZeroU32::new(1).unwrap())
        );
        assert_eq!(
            resp.preference_for(&HolidayId::new("ny")),
            Preference::Unavailable
        );

        let bad = r#"{"participant_id":"p1","rankings":{"xmas":0}}"#;
        assert!(serde_json::from_str::<Response>(bad).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn holiday_json_requires_staff_needed() {
        let ok = r#"{"id":"xmas","name":"Christmas","date":"2025-12-25","staff_needed":0}"#;
        assert_eq!(serde_json::from_str::<Holiday>(ok).unwrap().staff_needed, 0);

        let missing = r#"{"id":"xmas","name":"Christmas","date":"2025-12-25"}"#;
        let err = serde_json::from_str::<Holiday>(missing).unwrap_err();
        assert!(err.to_string().contains("staff_needed"));
    }
}
