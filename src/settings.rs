//! Voucher numbering settings and active-group selection
use crate::numbering::format_or;

/// One numbering configuration: prefix, running counter, zero-pad width and
/// whether tellers may type the OR number by hand instead.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct NumberingGroup {
    #[n(0)]
    pub prefix: String,
    #[n(1)]
    pub counter: u64,
    #[n(2)]
    pub padding: u32,
    #[n(3)]
    pub allow_user_input: bool,
}

/// Persisted settings record holding the two parallel numbering groups.
///
/// Exactly one group is active per evaluation, picked by `use_general`.
/// Callers go through [`VoucherSettings::active`] so the inactive group is
/// structurally unread rather than skipped by runtime discipline.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct VoucherSettings {
    #[n(0)]
    pub use_general: bool,
    #[n(1)]
    pub general: NumberingGroup,
    #[n(2)]
    pub loan: NumberingGroup,
}

impl VoucherSettings {
    /// The group selected by `use_general`.
    pub fn active(&self) -> &NumberingGroup {
        if self.use_general {
            &self.general
        } else {
            &self.loan
        }
    }

    /// Mutable access to the active group, used to bump its counter after a
    /// voucher number has been handed out.
    pub fn active_mut(&mut self) -> &mut NumberingGroup {
        if self.use_general {
            &mut self.general
        } else {
            &mut self.loan
        }
    }

    /// Format the next voucher number from the active group. Pure, does not
    /// advance the counter.
    pub fn build_voucher_number(&self) -> String {
        let group = self.active();
        format_or(group.counter, group.padding as usize, &group.prefix)
    }
}

/// Whether the teller may type the OR number manually.
///
/// Mirrors the active-group selection; with no settings record configured at
/// all this defaults to `true` (fail-open), so call sites that want strict
/// behaviour must check for missing settings themselves.
pub fn allows_user_input(settings: Option<&VoucherSettings>) -> bool {
    settings.map_or(true, |s| s.active().allow_user_input)
}
