#![cfg(test)]

//! Logging for the crate's own unit tests.
//!
//! Integration test binaries install logging through
//! `roster_test_support::logging`; unit tests go through here so both
//! share one filter policy.

pub fn init() {
    roster_test_support::logging::init();
}
