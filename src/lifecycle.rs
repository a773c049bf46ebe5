//! Milestone timestamps and the derived lifecycle state
use super::voucher::TimeStamp;
use chrono::Utc;
use std::fmt;

/// Optional milestone timestamps of a voucher. Nothing enforces that earlier
/// milestones exist when a later one is set; [`LifecycleDates::resolve`]
/// tolerates out-of-order data and the service layer guards only against
/// writes after release.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Default, Clone, PartialEq, Eq)]
pub struct LifecycleDates {
    #[n(0)]
    pub printed_at: Option<TimeStamp<Utc>>,
    #[n(1)]
    pub approved_at: Option<TimeStamp<Utc>>,
    #[n(2)]
    pub released_at: Option<TimeStamp<Utc>>,
}

/// Derived state of a voucher, always recomputed from [`LifecycleDates`] and
/// never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Draft,
    Printed,
    Approved,
    Released,
}

impl LifecycleDates {
    /// Fixed priority order, first match wins: released, then approved, then
    /// printed, else draft.
    pub fn resolve(&self) -> LifecycleState {
        if self.released_at.is_some() {
            LifecycleState::Released
        } else if self.approved_at.is_some() {
            LifecycleState::Approved
        } else if self.printed_at.is_some() {
            LifecycleState::Printed
        } else {
            LifecycleState::Draft
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Draft => "draft",
            LifecycleState::Printed => "printed",
            LifecycleState::Approved => "approved",
            LifecycleState::Released => "released",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dates_resolve_to_draft() {
        assert_eq!(LifecycleDates::default().resolve(), LifecycleState::Draft);
    }

    #[test]
    fn released_wins_even_without_earlier_milestones() {
        let dates = LifecycleDates {
            released_at: Some(TimeStamp::new_with(2024, 1, 1, 0, 0, 0)),
            ..Default::default()
        };
        assert_eq!(dates.resolve(), LifecycleState::Released);
    }

    #[test]
    fn approved_outranks_printed() {
        let dates = LifecycleDates {
            printed_at: Some(TimeStamp::new_with(2024, 1, 1, 8, 0, 0)),
            approved_at: Some(TimeStamp::new_with(2024, 1, 1, 9, 0, 0)),
            ..Default::default()
        };
        assert_eq!(dates.resolve(), LifecycleState::Approved);
    }

    #[test]
    fn printed_alone_is_printed() {
        let dates = LifecycleDates {
            printed_at: Some(TimeStamp::new_with(2024, 1, 1, 8, 0, 0)),
            ..Default::default()
        };
        assert_eq!(dates.resolve(), LifecycleState::Printed);
    }

    #[test]
    fn state_names_match_back_office_labels() {
        assert_eq!(LifecycleState::Draft.to_string(), "draft");
        assert_eq!(LifecycleState::Released.to_string(), "released");
    }
}
