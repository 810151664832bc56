// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed values produced by the gas oracle.
//!
//! - Gas-price tiers in gwei
//! - The full oracle reading (tiers plus block and base-fee metadata)

pub mod gas;
pub mod report;

// Note: Public types are re-exported from lib.rs, not here
