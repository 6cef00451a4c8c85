//! Username -> numeric id resolution (profile-info API first, then page scan).
//!
//! Internals are split into:
//! - `api`:    the authenticated `web_profile_info` call
//! - `scrape`: profile page HTML + id pattern scan

mod api;
mod scrape;

pub use scrape::scan_for_user_id;

use crate::core::{Credentials, IgClient, IgError, ResolvePreference, Resolved};

const UNRESOLVED: &str = "could not determine user id";

fn unresolved() -> IgError {
    IgError::Resolution(UNRESOLVED.into())
}

/// Helper to contain the API->Scrape fallback logic.
async fn resolve_with_fallback(client: &IgClient, creds: &Credentials) -> Result<Resolved, IgError> {
    match api::load_web_profile(client, creds).await {
        Ok(r) => Ok(r),
        Err(e) => {
            tracing::warn!(
                username = %creds.username,
                "profile-info API failed ({e}), falling back to page scan"
            );
            resolve_from_page(client, creds).await
        }
    }
}

async fn resolve_from_page(client: &IgClient, creds: &Credentials) -> Result<Resolved, IgError> {
    match scrape::scan_profile_page(client, creds).await {
        Ok(Some(user_id)) => Ok(Resolved {
            user_id,
            web_profile: None,
        }),
        Ok(None) => {
            tracing::warn!(username = %creds.username, "no id pattern found in profile page");
            Err(unresolved())
        }
        Err(e) => {
            tracing::warn!(username = %creds.username, "profile page fetch failed: {e}");
            Err(unresolved())
        }
    }
}

/// Resolves the numeric id for `creds.username`.
///
/// The profile-info API is tried first; on any failure (transport, non-success
/// status, unexpected body) the public profile page is fetched and scanned.
/// [`ResolvePreference`] on the client can pin either path.
///
/// # Errors
///
/// Returns [`IgError::Resolution`] when no permitted path yields an id.
pub async fn resolve(client: &IgClient, creds: &Credentials) -> Result<Resolved, IgError> {
    match client.resolve_preference() {
        ResolvePreference::ApiThenScrape => resolve_with_fallback(client, creds).await,
        ResolvePreference::ApiOnly => api::load_web_profile(client, creds).await.map_err(|e| {
            tracing::warn!(username = %creds.username, "profile-info API failed: {e}");
            unresolved()
        }),
        ResolvePreference::ScrapeOnly => resolve_from_page(client, creds).await,
    }
}
