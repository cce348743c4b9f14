// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
//! Validator set extraction from the block extra data field.
//!
//! The extra data of a sealed block is an RLP list whose element at
//! index 1 is the list of validator addresses for the rotation. Any
//! decode failure is reported as "no validator set" and the caller
//! decides whether that is fatal (seed block) or a cycle skip.

use ethers_core::utils::rlp::{DecoderError, Rlp};
use sla_types::ValidatorAddress;

use crate::Error;

/// Position of the validator list inside the extra data structure.
const VALIDATORS_INDEX: usize = 1;

/// Decode the validator set from a `0x`-prefixed extra data hex blob.
pub fn extract_validators(extra_data: &str) -> Result<Vec<ValidatorAddress>, Error> {
    let payload = extra_data
        .strip_prefix("0x")
        .ok_or_else(|| Error::NoValidatorSet("extra data is missing the 0x prefix".to_string()))?;

    let raw = hex::decode(payload)
        .map_err(|e| Error::NoValidatorSet(format!("extra data is not valid hex: {e}")))?;

    decode_validators(&raw)
}

fn decode_validators(raw: &[u8]) -> Result<Vec<ValidatorAddress>, Error> {
    let rlp = Rlp::new(raw);
    if !rlp.is_list() {
        return Err(Error::NoValidatorSet(
            "extra data is not an RLP list".to_string(),
        ));
    }

    let validators = rlp.at(VALIDATORS_INDEX).map_err(rlp_error)?;
    if !validators.is_list() {
        return Err(Error::NoValidatorSet(format!(
            "element {VALIDATORS_INDEX} of the extra data is not a list"
        )));
    }

    let count = validators.item_count().map_err(rlp_error)?;
    let mut addrs = Vec::with_capacity(count);
    for i in 0..count {
        let data = validators
            .at(i)
            .and_then(|item| item.data())
            .map_err(rlp_error)?;

        let addr = ValidatorAddress::from_bytes(data)
            .map_err(|_| Error::NoValidatorSet(format!("validator {i} is not 20 bytes")))?;

        addrs.push(addr);
    }
    Ok(addrs)
}

fn rlp_error(e: DecoderError) -> Error {
    Error::NoValidatorSet(format!("malformed RLP: {e}"))
}
