//! Shared data tables for the portfolio render engine.
//!
//! Section identity, page copy, the starfield palette and all animation
//! tuning live here so the engine crate and its tests read one source.

pub mod content;
pub mod motion;
pub mod palette;
pub mod sections;
