// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
//! Reconstruction of validator downtime from a ledger of block headers.
//!
//! The engine partitions a sorted block sequence into round-robin
//! rotation cycles, derives who was expected to seal blocks in each
//! cycle, and attributes downtime from absence under a half-cycle /
//! full-cycle policy. Results are exposed as per-validator totals, a
//! detailed event log and merged continuous-outage segments.

pub use self::error::Error;

pub mod analysis;
pub mod cycle;
pub mod extract;
pub mod outage;
pub mod report;

mod error;
