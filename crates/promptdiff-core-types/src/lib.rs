//! Core types shared across promptdiff facilities
//!
//! - **Schema constants**: canonical structured-logging field keys and event
//!   names used by the logging macros and asserted on in tests

pub mod schema;
