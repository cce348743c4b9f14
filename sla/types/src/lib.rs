// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
pub use self::address::*;
pub use self::block::*;

mod address;
mod block;
