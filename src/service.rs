//! Service layer API for voucher workflow operations
use super::context::VoucherContext;
use super::error::LifecycleError;
use super::lifecycle::LifecycleState;
use super::settings::VoucherSettings;
use super::utils::new_bech32_id;
use super::voucher::{TimeStamp, VoucherDetails};
use sled::Batch;
use std::sync::Arc;

// Fixed key the settings record lives under; voucher ids and details hashes
// never collide with it because they carry a bech32 hrp or are hex.
const SETTINGS_KEY: &[u8] = b"voucher_settings";

pub struct VoucherService {
    instance: Arc<sled::Db>,
}

impl VoucherService {
    pub fn new(instance: Arc<sled::Db>) -> Self {
        Self { instance }
    }

    /// Persist the numbering settings record.
    pub fn configure(&self, settings: &VoucherSettings) -> anyhow::Result<()> {
        self.instance
            .insert(SETTINGS_KEY, minicbor::to_vec(settings)?)?;
        Ok(())
    }

    /// Load the numbering settings record, `None` when never configured.
    pub fn settings(&self) -> anyhow::Result<Option<VoucherSettings>> {
        match self.instance.get(SETTINGS_KEY)? {
            Some(bytes) => Ok(Some(minicbor::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Load voucher context from database
    fn load_voucher_context(&self, voucher_id: &str) -> anyhow::Result<VoucherContext> {
        VoucherContext::load_from_db(&self.instance, voucher_id)
    }

    /// Load finalised voucher details by their content hash
    pub fn load_details(&self, details_hash: &str) -> anyhow::Result<VoucherDetails> {
        let bytes = self
            .instance
            .get(details_hash.as_bytes())?
            .ok_or_else(|| LifecycleError::NotFound(details_hash.to_owned()))?;

        Ok(minicbor::decode(&bytes)?)
    }

    /// Issue a new voucher: validate the details, assign the next OR number
    /// from the active numbering group and advance that group's counter.
    ///
    /// Details, context and the bumped settings record are written in one
    /// sled batch so the counter can never advance without the voucher that
    /// consumed it landing too.
    pub fn issue_voucher(&self, details: VoucherDetails) -> anyhow::Result<VoucherContext> {
        // Validate and serialize voucher details
        let (details_hash, details_cbor) = details.validate_and_finalise()?;

        let mut settings = self
            .settings()?
            .ok_or(LifecycleError::SettingsNotConfigured)?;

        let or_number = settings.build_voucher_number();
        settings.active_mut().counter += 1;

        let voucher_id = new_bech32_id("vchr_")?;
        let voucher_context = VoucherContext::new(voucher_id, details_hash.clone(), or_number);

        let mut batch = Batch::default();
        batch.insert(details_hash.as_bytes(), details_cbor);
        batch.insert(
            voucher_context.voucher_id.as_bytes(),
            minicbor::to_vec(&voucher_context)?,
        );
        batch.insert(SETTINGS_KEY, minicbor::to_vec(&settings)?);
        self.instance.apply_batch(batch)?;

        Ok(voucher_context)
    }

    /// Record the printed milestone
    pub fn print_voucher(&self, voucher_id: &str) -> anyhow::Result<VoucherContext> {
        let mut voucher_context = self.load_voucher_context(voucher_id)?;

        if voucher_context.current_state() == LifecycleState::Released {
            return Err(LifecycleError::AlreadyReleased.into());
        }

        voucher_context.dates.printed_at = Some(TimeStamp::new());
        voucher_context.save_to_db(&self.instance)?;

        Ok(voucher_context)
    }

    /// Record the approved milestone
    pub fn approve_voucher(&self, voucher_id: &str) -> anyhow::Result<VoucherContext> {
        let mut voucher_context = self.load_voucher_context(voucher_id)?;

        if voucher_context.current_state() == LifecycleState::Released {
            return Err(LifecycleError::AlreadyReleased.into());
        }

        voucher_context.dates.approved_at = Some(TimeStamp::new());
        voucher_context.save_to_db(&self.instance)?;

        Ok(voucher_context)
    }

    /// Record the released milestone, finalising the voucher
    pub fn release_voucher(&self, voucher_id: &str) -> anyhow::Result<VoucherContext> {
        let mut voucher_context = self.load_voucher_context(voucher_id)?;

        if voucher_context.current_state() == LifecycleState::Released {
            return Err(LifecycleError::AlreadyReleased.into());
        }

        voucher_context.dates.released_at = Some(TimeStamp::new());
        voucher_context.save_to_db(&self.instance)?;

        Ok(voucher_context)
    }
}
