//! Discord command implementations organized by category.

/// Background check submission and review queue
pub mod background;
/// General utility commands
pub mod general;
/// Position and requirement management
pub mod position;
/// Job posting wizard and board
pub mod posting;
/// Hireable service listings and profiles
pub mod service;
/// Guild role/channel configuration
pub mod setup;
/// Staff registration and qualifications
pub mod staff;
/// Venue profiles and the edit panel
pub mod venue;
