#![forbid(unsafe_code)]
//! Feries — répartition équitable du personnel sur les jours fériés.
//!
//! - Préférences classées (1 = préféré), ou indisponibilité explicite.
//! - Remplissage glouton déterministe en deux passes, par date croissante.
//! - Score d'équité 0..=100 (remplissage, préférences, répartition).
//! - Import CSV/JSON et export JSON en dehors du cœur (feature `serde`).

/// Évènement `tracing`, compilé seulement avec la feature `logging`.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        tracing::$level!($($arg)+);
    };
}

pub mod balancer;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod validate;

pub use balancer::{
    balance, AssignedStaff, AssignmentRecord, BalancingResult, FairnessBreakdown, ParticipantLoad,
};
pub use model::{
    BalancerConfig, Holiday, HolidayId, Participant, ParticipantId, Preference, Rank, RankError,
    Response, Survey,
};
pub use validate::{validate_input, InputIssue, ValidationErrors};
