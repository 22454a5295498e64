//! # Triage
//!
//! Decision logic behind the clinic backend.
//!
//! Two components, both plain functions over static lookup tables:
//! - [`symptoms::evaluate`]: free-text symptom description to a predicted
//!   condition plus prevention and test advice.
//! - [`quiz::recommend`]: seven yes/no answers to an ordered list of
//!   recommended test panels.
//!
//! No I/O, no async, no shared mutable state. The tables are `&'static`
//! slices so the server can call into this crate from any number of request
//! tasks without coordination.
//!
//! ## Notes
//!
//! - Rule tables are slices, not maps: iteration order is part of the
//!   matching contract (first rule wins).
//! - Lookups that miss fall back to generic "consult a professional"
//!   strings. Nothing in this crate returns an error.

pub mod catalog;
pub mod knowledge;
pub mod quiz;
pub mod symptoms;
