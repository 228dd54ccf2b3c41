//! Core business logic, framework-agnostic.
//!
//! Each submodule owns one domain area: loaders, validated creation, and
//! persist-on-set mutators for its entity. The bot layer calls into these
//! and never touches SeaORM queries directly.

/// Background check submission and review
pub mod background;
/// Input parsing and display helpers (colors, salaries, mentions)
pub mod format;
/// Guild role/channel purpose mappings
pub mod guild_config;
/// Job posting lifecycle
pub mod posting;
/// Position and requirement management
pub mod position;
/// Hireable services and per-user profiles
pub mod service;
/// Staff members and qualifications
pub mod staff;
/// Venue profiles
pub mod venue;
