//! Unified error type for the whole crate.
//!
//! Core modules return these errors directly; the bot layer either maps them
//! into user-facing replies (input validation) or lets them propagate to the
//! poise `on_error` hook (framework and database failures).

use thiserror::Error;

/// All the ways a greenroom operation can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problem
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Database error from SeaORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A position lookup failed
    #[error("Position '{name}' not found")]
    PositionNotFound {
        /// The name or id the lookup used
        name: String,
    },

    /// A venue lookup failed
    #[error("Venue '{name}' not found")]
    VenueNotFound {
        /// The name or id the lookup used
        name: String,
    },

    /// A service lookup failed
    #[error("Service '{name}' not found")]
    ServiceNotFound {
        /// The name or id the lookup used
        name: String,
    },

    /// A service profile lookup failed
    #[error("Service profile #{id} not found")]
    ProfileNotFound {
        /// The database id the lookup used
        id: i64,
    },

    /// A background check lookup failed
    #[error("Background check #{id} not found")]
    CheckNotFound {
        /// The database id the lookup used
        id: i64,
    },

    /// A user tried to submit a second check while one is pending
    #[error("A background check for this user is already awaiting review")]
    CheckAlreadyPending {
        /// Discord user ID of the applicant
        user_id: String,
    },

    /// A reviewer acted on a check that was already resolved
    #[error("Background check #{id} has already been reviewed")]
    CheckAlreadyReviewed {
        /// The database id of the check
        id: i64,
    },

    /// A job posting lookup failed
    #[error("Job posting #{id} not found")]
    PostingNotFound {
        /// The database id the lookup used
        id: i64,
    },

    /// Rejected color input, e.g. "#GGHHII"
    #[error("Invalid color '{input}': expected a hex value like #A1B2C3")]
    InvalidColor {
        /// The raw input the user provided
        input: String,
    },

    /// Rejected salary input, e.g. "lots"
    #[error("Invalid salary '{input}': expected a positive amount like 150,000 or 150k")]
    InvalidSalary {
        /// The raw input the user provided
        input: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// String formatting error (from `write!` into a `String`)
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Discord framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
