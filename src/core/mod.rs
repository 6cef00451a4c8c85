//! Core components of the `igscout` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`IgClient`] and its builder.
//! - The primary [`IgError`] type.
//! - [`Credentials`] and the schema-less [`ProfileRecord`].
//! - The shared fetch strategy and the [`ProfileService`] seam.

/// The main client (`IgClient`), builder, and configuration.
pub mod client;
/// Validated username and session token.
pub mod credentials;
/// The primary error type (`IgError`) for the crate.
pub mod error;
pub(crate) mod fetch;
/// The merged/partial profile record.
pub mod record;
/// Service trait for abstracting the three upstream calls.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IgClient`
pub use client::{IgClient, IgClientBuilder, ResolvePreference};
pub use credentials::{Credentials, SessionToken, Username};
pub use error::IgError;
pub use fetch::Enrichment;
pub use record::ProfileRecord;
pub use services::{BoxFuture, ProfileService, Resolved};
