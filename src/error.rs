#[derive(thiserror::Error, Debug)]
pub enum VoucherError {
    #[error("Payee is not set")]
    MissingPayee,
    #[error("Member id is not set")]
    MissingMember,
    #[error("Branch is not set")]
    MissingBranch,
    #[error("Voucher kind is not set")]
    MissingKind,
    #[error("Amount is set to zero")]
    ZeroAmount,
    #[error("Voucher date is not set")]
    MissingDate,
}

#[derive(thiserror::Error, Debug)]
pub enum LifecycleError {
    #[error("Voucher '{0}' was not found")]
    NotFound(String),
    #[error("Voucher has already been released")]
    AlreadyReleased,
    #[error("Voucher numbering settings have not been configured")]
    SettingsNotConfigured,
}
