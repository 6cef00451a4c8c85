//! Detailed profile fetch by numeric id (`users/{id}/info/`).

use reqwest::header::{COOKIE, USER_AGENT};
use serde_json::Value;

use crate::core::client::WEB_APP_ID;
use crate::core::fetch::FetchStrategy;
use crate::core::{Enrichment, IgClient, IgError, ProfileRecord, SessionToken};

/// Pulls the `user` object out of an info reply.
///
/// An absent, non-object, or empty `user` yields `None`.
pub fn extract_user(json: Value) -> Option<ProfileRecord> {
    let Value::Object(mut root) = json else {
        return None;
    };
    ProfileRecord::from_value(root.remove("user")?).filter(|user| !user.is_empty())
}

async fn fetch(
    client: &IgClient,
    user_id: &str,
    session: &SessionToken,
) -> Result<Option<ProfileRecord>, IgError> {
    let url = client
        .base_mobile_api()
        .join(&format!("users/{user_id}/info/"))?;
    tracing::debug!(%url, "requesting user info");

    let request = client
        .http()
        .get(url)
        .header(USER_AGENT, client.mobile_user_agent())
        .header("x-ig-app-id", WEB_APP_ID)
        .header(COOKIE, session.cookie_header());

    FetchStrategy {
        endpoint: "user_info",
        key: user_id.to_string(),
        request,
        extract: extract_user,
    }
    .run()
    .await
}

/// Fetches the detailed record for `user_id` with a mobile client identity.
///
/// The returned record is the raw `user` object; the pipeline tags it with
/// the resolved id.
///
/// Never fails: a transport/status/decode problem yields
/// [`Enrichment::Failed`], a reply without a `user` object yields
/// [`Enrichment::Missing`].
pub async fn fetch_details(client: &IgClient, user_id: &str, session: &SessionToken) -> Enrichment {
    Enrichment::from_fetch(fetch(client, user_id, session).await)
}
