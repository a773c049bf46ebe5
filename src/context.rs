//! Persisted voucher context: identity, OR number and milestone dates
use super::error::LifecycleError;
use super::lifecycle::{LifecycleDates, LifecycleState};

#[derive(Debug, PartialEq, Eq, minicbor::Encode, minicbor::Decode, Clone)]
pub struct VoucherContext {
    #[n(0)]
    pub voucher_id: String, // uuid7, bech32 encoded
    #[n(1)]
    pub details_hash: String, // hash of a voucher-details object
    #[n(2)]
    pub or_number: String,
    #[n(3)]
    pub dates: LifecycleDates,
}

impl VoucherContext {
    pub fn new(voucher_id: String, details_hash: String, or_number: String) -> Self {
        Self {
            voucher_id,
            details_hash,
            or_number,
            dates: LifecycleDates::default(),
        }
    }

    /// Derived state, recomputed from the milestone dates on every call.
    pub fn current_state(&self) -> LifecycleState {
        self.dates.resolve()
    }

    pub fn load_from_db(db: &sled::Db, voucher_id: &str) -> anyhow::Result<Self> {
        let bytes = db
            .get(voucher_id.as_bytes())?
            .ok_or_else(|| LifecycleError::NotFound(voucher_id.to_owned()))?;

        Ok(minicbor::decode(&bytes)?)
    }

    pub fn save_to_db(&self, db: &sled::Db) -> anyhow::Result<()> {
        db.insert(self.voucher_id.as_bytes(), minicbor::to_vec(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voucher::TimeStamp;

    #[test]
    fn new_context_starts_as_draft() {
        let ctx = VoucherContext::new("vchr_1abc".into(), "deadbeef".into(), "GEN-00012".into());
        assert_eq!(ctx.current_state(), LifecycleState::Draft);
    }

    #[test]
    fn context_encoding_roundtrip() {
        let mut ctx =
            VoucherContext::new("vchr_1abc".into(), "deadbeef".into(), "GEN-00012".into());
        ctx.dates.printed_at = Some(TimeStamp::new());

        let encoded = minicbor::to_vec(&ctx).unwrap();
        let decoded: VoucherContext = minicbor::decode(&encoded).unwrap();

        assert_eq!(ctx, decoded);
        assert_eq!(decoded.current_state(), LifecycleState::Printed);
    }
}
