//! Utility functions for id minting

use bech32::Bech32m;
use uuid7::uuid7;

// construct a unique id from a fresh uuid7 then encode using bech32
pub fn new_bech32_id(hrp: &str) -> anyhow::Result<String> {
    let hrp = bech32::Hrp::parse(hrp)?;
    let encode = bech32::encode::<Bech32m>(hrp, uuid7().as_bytes())?;
    Ok(encode)
}
