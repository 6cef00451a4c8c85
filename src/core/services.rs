use std::future::Future;
use std::pin::Pin;

use crate::core::{Credentials, Enrichment, IgClient, IgError, ProfileRecord, SessionToken, Username};

/// A boxed, `Send` future borrowed for `'a`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of identifier resolution: the numeric id, plus the full user
/// object when the profile-info API answered.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The upstream account id, kept as text exactly as the service returns it.
    pub user_id: String,
    /// The web profile partial record (absent when the id came from the page scan).
    pub web_profile: Option<ProfileRecord>,
}

/// The three upstream calls an investigation is made of.
///
/// This decouples the pipeline in [`crate::investigate`] from HTTP, making it
/// easy to drive with canned sources. It is implemented by [`IgClient`].
pub trait ProfileService: Send + Sync {
    /// Determines the numeric id for `creds.username`.
    ///
    /// Fails with [`IgError::Resolution`] when no path yields an id.
    fn resolve<'a>(&'a self, creds: &'a Credentials) -> BoxFuture<'a, Result<Resolved, IgError>>;

    /// Fetches the detailed record for an id. Never fails the pipeline.
    fn details<'a>(
        &'a self,
        user_id: &'a str,
        session: &'a SessionToken,
    ) -> BoxFuture<'a, Enrichment>;

    /// Performs the username lookup. Never fails the pipeline.
    fn lookup<'a>(&'a self, username: &'a Username) -> BoxFuture<'a, Enrichment>;
}

impl ProfileService for IgClient {
    fn resolve<'a>(&'a self, creds: &'a Credentials) -> BoxFuture<'a, Result<Resolved, IgError>> {
        Box::pin(crate::resolve::resolve(self, creds))
    }

    fn details<'a>(
        &'a self,
        user_id: &'a str,
        session: &'a SessionToken,
    ) -> BoxFuture<'a, Enrichment> {
        Box::pin(crate::details::fetch_details(self, user_id, session))
    }

    fn lookup<'a>(&'a self, username: &'a Username) -> BoxFuture<'a, Enrichment> {
        Box::pin(crate::lookup::lookup(self, username))
    }
}
