//! Shared test harness modules for the neighbourly CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod profile_steps;
mod unit;
