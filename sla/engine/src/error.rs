// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no blocks in the ledger")]
    EmptyLedger,
    #[error("validator set not found: {0}")]
    NoValidatorSet(String),
    #[error("decoded validator set is empty")]
    EmptyValidatorSet,
}
