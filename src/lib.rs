//! igscout: single-account Instagram profile lookup.
//!
//! An investigation resolves a username to its numeric id, fetches the
//! detailed profile by id, performs a username lookup, and merges the three
//! partial records (later sources win). The result can be rendered for a
//! terminal or exported as JSON or CSV.

pub mod core;
pub mod details;
pub mod export;
pub mod investigate;
pub mod lookup;
pub mod report;
pub mod resolve;
pub mod session;

pub use crate::core::{
    Credentials, Enrichment, IgClient, IgClientBuilder, IgError, ProfileRecord, ProfileService,
    ResolvePreference, Resolved, SessionToken, Username,
};
pub use export::ExportFormat;
pub use investigate::{Investigator, Pacing, Stage, merge};
pub use report::Palette;
pub use session::Session;
