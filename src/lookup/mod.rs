//! Username lookup (`users/lookup/`), the unauthenticated mobile endpoint.

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde_json::json;
use url::form_urlencoded;

use crate::core::client::LOOKUP_APP_ID;
use crate::core::fetch::FetchStrategy;
use crate::core::{Enrichment, IgClient, IgError, ProfileRecord, Username};

/// Builds the form body: `signed_body=SIGNATURE.<compact json>`, form-encoded.
///
/// The JSON carries the query and `skip_recovery: "1"`.
pub fn signed_body(username: &Username) -> String {
    let payload = json!({ "q": username.as_str(), "skip_recovery": "1" });
    form_urlencoded::Serializer::new(String::new())
        .append_pair("signed_body", &format!("SIGNATURE.{payload}"))
        .finish()
}

async fn fetch(client: &IgClient, username: &Username) -> Result<Option<ProfileRecord>, IgError> {
    let url = client.base_mobile_api().join("users/lookup/")?;
    tracing::debug!(%url, "posting lookup");

    let request = client
        .http()
        .post(url)
        .header(USER_AGENT, client.lookup_user_agent())
        .header(
            CONTENT_TYPE,
            "application/x-www-form-urlencoded; charset=UTF-8",
        )
        .header("x-ig-app-id", LOOKUP_APP_ID)
        .body(signed_body(username));

    FetchStrategy {
        endpoint: "lookup",
        key: username.to_string(),
        request,
        extract: ProfileRecord::from_value,
    }
    .run()
    .await
}

/// Looks `username` up and returns the whole reply object as a partial record.
///
/// No session cookie is sent. Never fails: problems surface as
/// [`Enrichment::Failed`], a non-object reply as [`Enrichment::Missing`].
pub async fn lookup(client: &IgClient, username: &Username) -> Enrichment {
    Enrichment::from_fetch(fetch(client, username).await)
}
