//! # faan_calc
//!
//! Rule engine for a Hong Kong mahjong faan calculator: which win types may
//! be selected given the seating and the other selections, and how many faan
//! each one is worth.

pub mod implements;
pub use implements::*;
