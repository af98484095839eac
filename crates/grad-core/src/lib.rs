//! # grad-core
//!
//! Core types, ID prefixes, and error types for gradtrack.
//!
//! This crate provides the foundational types shared across all gradtrack crates:
//! - Entity structs for the tracked records (universities, deadlines, documents, etc.)
//! - Status, tag, and type enums
//! - ID prefix constants
//! - Cross-cutting error types
//! - Pure view logic over already-fetched records: filtering and sorting,
//!   calendar buckets, dashboard aggregates, notifications, requirement
//!   tracking, post-graduation summaries, and the application timeline

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod views;
