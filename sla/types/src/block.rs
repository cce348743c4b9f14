// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
use serde::{Deserialize, Serialize};

use crate::ValidatorAddress;

/// One block header as exported from the chain to CSV.
///
/// Only the first block of the sorted sequence is guaranteed to carry
/// `extra_data` with a decodable validator list; the field is optional
/// everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub number: u64,
    /// Unix seconds.
    pub timestamp: u64,
    pub miner: ValidatorAddress,
    #[serde(default)]
    pub extra_data: Option<String>,
}

impl Block {
    pub fn new(number: u64, timestamp: u64, miner: ValidatorAddress) -> Self {
        Self {
            number,
            timestamp,
            miner,
            extra_data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::ValidatorAddress;

    #[test]
    fn block_deserializes_without_extra_data() {
        let json = r#"{"number": 42, "timestamp": 1700000000, "miner": "0x6be1ccf648c74800380d0520d797a170c808b624"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.number, 42);
        assert_eq!(block.extra_data, None);
        assert_eq!(
            block.miner,
            "0x6be1ccf648c74800380d0520d797a170c808b624"
                .parse::<ValidatorAddress>()
                .unwrap()
        );
    }
}
