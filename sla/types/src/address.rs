// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Error as _};

/// A validator address as it appears in block headers: the 20 byte
/// account of the node that sealed the block.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ValidatorAddress(pub [u8; 20]);

impl ValidatorAddress {
    /// Interpret a raw byte string (e.g. an RLP item) as an address.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, hex::FromHexError> {
        if bytes.len() != 20 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut addr = [0u8; 20];
        addr.copy_from_slice(bytes);
        Ok(Self(addr))
    }
}

impl FromStr for ValidatorAddress {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Check if it has the 0x prefix
        if s.len() > 2 && &s[..2] == "0x" {
            return Self::from_str(&s[2..]);
        }

        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

/// Renders as `0x` + lowercase hex, the form used in the ledger CSV
/// and in the reports.
impl fmt::Display for ValidatorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ValidatorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl AsRef<[u8]> for ValidatorAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Serializes exactly as its display string, so CSV and JSON rows
/// carry the `0x...` form.
impl serde::Serialize for ValidatorAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'d> serde::Deserialize<'d> for ValidatorAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'d>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(|e| D::Error::custom(format!("invalid address {s}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::ValidatorAddress;

    #[test]
    fn address_from_str() {
        let addr = ValidatorAddress::from_str("0x6BE1Ccf648c74800380d0520D797a170c808b624").unwrap();
        assert_eq!(addr.to_string(), "0x6be1ccf648c74800380d0520d797a170c808b624");
    }

    #[test]
    fn address_from_str_without_prefix() {
        let with = ValidatorAddress::from_str("0x6be1ccf648c74800380d0520d797a170c808b624").unwrap();
        let without = ValidatorAddress::from_str("6be1ccf648c74800380d0520d797a170c808b624").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn address_rejects_wrong_length() {
        assert!(ValidatorAddress::from_str("0x6be1cc").is_err());
        assert!(ValidatorAddress::from_bytes(&[0u8; 19]).is_err());
        assert!(ValidatorAddress::from_bytes(&[0u8; 21]).is_err());
    }

    #[test]
    fn address_serde_round_trip() {
        let addr = ValidatorAddress([0xab; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{addr}\""));
        let back: ValidatorAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}
