//! Core voucher details and timestamp types
use super::error::VoucherError;
use chrono::{DateTime, TimeZone, Utc};

#[derive(minicbor::Encode, minicbor::Decode, Debug, Eq, Ord, PartialEq, PartialOrd, Clone, Copy)]
pub enum VoucherKind {
    #[n(0)]
    Loan,
    #[n(1)]
    Cash,
    #[n(2)]
    Journal,
    #[n(3)]
    Check,
}

// Also used for constructing drafts
// Key is the hash of this struct encoded into CBOR
#[derive(minicbor::Encode, minicbor::Decode, Debug, Default, Eq, PartialEq)]
pub struct VoucherDetails {
    // No ID field, as the ID *is* the hash of this struct
    #[n(0)]
    payee: Option<String>,
    #[n(1)]
    member_id: Option<String>, // bech32 encoded member address
    #[n(2)]
    branch: Option<String>,
    #[n(3)]
    kind: Option<VoucherKind>,
    #[n(4)]
    amount: u64, // integer minor units, never floats
    #[n(5)]
    particulars: Option<String>,
    #[n(6)]
    voucher_date: Option<TimeStamp<Utc>>,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }
    pub fn new_with(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .unwrap()
            .into()
    }
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl VoucherDetails {
    /// Construct a new builder object, this becomes the basis for a draft
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set_payee(mut self, payee: &str) -> Self {
        self.payee = Some(payee.to_owned());
        self
    }
    pub fn set_member_id(mut self, member_id: &str) -> Self {
        self.member_id = Some(member_id.to_owned());
        self
    }
    pub fn set_branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_owned());
        self
    }
    pub fn set_kind(mut self, kind: VoucherKind) -> Self {
        self.kind = Some(kind);
        self
    }
    pub fn set_amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }
    pub fn set_particulars(mut self, particulars: &str) -> Self {
        self.particulars = Some(particulars.to_owned());
        self
    }
    pub fn set_voucher_date(mut self, date: TimeStamp<Utc>) -> Self {
        self.voucher_date = Some(date);
        self
    }
    // Checks fields, then returns a hash of the voucher and its contents
    // serialised into CBOR
    pub fn validate_and_finalise(&self) -> anyhow::Result<(String, Vec<u8>)> {
        if self.payee.is_none() {
            return Err(VoucherError::MissingPayee.into());
        }
        if self.member_id.is_none() {
            return Err(VoucherError::MissingMember.into());
        }
        if self.branch.is_none() {
            return Err(VoucherError::MissingBranch.into());
        }
        if self.kind.is_none() {
            return Err(VoucherError::MissingKind.into());
        }
        if self.amount == 0 {
            return Err(VoucherError::ZeroAmount.into());
        }
        if self.voucher_date.is_none() {
            return Err(VoucherError::MissingDate.into());
        }

        let contents = minicbor::to_vec(self)?;
        let hash = sha256::digest(&contents);

        Ok((hash, contents))
    }
}

impl<T: TimeZone> From<DateTime<T>> for TimeStamp<T> {
    fn from(value: DateTime<T>) -> Self {
        TimeStamp(value)
    }
}
impl<C> minicbor::Encode<C> for TimeStamp<Utc> {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        if let Some(nsec) = self.0.timestamp_nanos_opt() {
            return e.i64(nsec)?.ok();
        }

        Err(minicbor::encode::Error::message(
            "failed to encode timestamp. timestamp_nanos_opt returned None",
        ))
    }
}
impl<'b, C> minicbor::Decode<'b, C> for TimeStamp<Utc> {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let nsecs = d.i64()?;

        Ok(TimeStamp(DateTime::from_timestamp_nanos(nsecs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_encoding() {
        let original = TimeStamp::new();

        let encoding = minicbor::to_vec(original.clone()).unwrap();
        let decode: TimeStamp<Utc> = minicbor::decode(&encoding).unwrap();

        assert_eq!(original, decode);
    }

    #[test]
    fn complete_details_finalise() {
        let details = VoucherDetails::new()
            .set_payee("Juan dela Cruz")
            .set_member_id("member_1abc")
            .set_branch("main")
            .set_kind(VoucherKind::Loan)
            .set_amount(250_000)
            .set_particulars("loan release")
            .set_voucher_date(TimeStamp::new());

        let (hash, cbor) = details.validate_and_finalise().unwrap();
        assert_eq!(hash.len(), 64);
        assert!(!cbor.is_empty());
    }

    #[test]
    fn zero_amount_is_rejected() {
        let details = VoucherDetails::new()
            .set_payee("Juan dela Cruz")
            .set_member_id("member_1abc")
            .set_branch("main")
            .set_kind(VoucherKind::Cash)
            .set_amount(0)
            .set_voucher_date(TimeStamp::new());

        assert!(details.validate_and_finalise().is_err());
    }
}
