//! # delta-core
//!
//! Core types for the DELTA evaluation tool.
//!
//! This crate provides the foundational types shared across all delta crates:
//! - Entity structs for all domain objects (programmes, modules, evaluations,
//!   taking-stock records, priorities, themes, goals)
//! - The DELTA framework constants (five categories, their indicators and
//!   Likert questions)
//! - Scoring functions (Likert sum → 0–10 score → maturity level, timing bands)
//! - ID prefix constants and formatting helpers
//! - CLI response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod framework;
pub mod ids;
pub mod responses;
pub mod scoring;
