//! `api/v1/users/web_profile_info/` path.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, COOKIE, REFERER, USER_AGENT};
use serde_json::Value;

use crate::core::client::{ACCEPT_LANGUAGE as LANGS, ASBD_ID, SEC_CH_UA, SEC_CH_UA_PLATFORM, WEB_APP_ID};
use crate::core::fetch::FetchStrategy;
use crate::core::{Credentials, IgClient, IgError, ProfileRecord, Resolved};

pub(super) async fn load_web_profile(
    client: &IgClient,
    creds: &Credentials,
) -> Result<Resolved, IgError> {
    let username = creds.username.as_str();

    let mut url = client.base_web().join("api/v1/users/web_profile_info/")?;
    url.query_pairs_mut().append_pair("username", username);
    let referer = client.base_web().join(&format!("{username}/"))?;

    tracing::debug!(%url, "requesting web profile info");

    let request = client
        .http()
        .get(url)
        .header(ACCEPT, "*/*")
        .header(ACCEPT_LANGUAGE, LANGS)
        .header(REFERER, referer.as_str())
        .header("sec-ch-ua", SEC_CH_UA)
        .header("sec-ch-ua-mobile", "?0")
        .header("sec-ch-ua-platform", SEC_CH_UA_PLATFORM)
        .header("sec-fetch-dest", "empty")
        .header("sec-fetch-mode", "cors")
        .header("sec-fetch-site", "same-origin")
        .header(USER_AGENT, client.user_agent())
        .header("x-asbd-id", ASBD_ID)
        .header("x-ig-app-id", WEB_APP_ID)
        .header("x-ig-www-claim", "0")
        .header("x-requested-with", "XMLHttpRequest")
        .header(COOKIE, creds.session.cookie_header());

    let user = FetchStrategy {
        endpoint: "web_profile_info",
        key: username.to_string(),
        request,
        extract: |mut json: Value| {
            ProfileRecord::from_value(json.pointer_mut("/data/user")?.take())
        },
    }
    .run()
    .await?
    .ok_or_else(|| IgError::Data("web_profile_info: data.user missing".into()))?;

    let user_id = user
        .text("id")
        .ok_or_else(|| IgError::Data("web_profile_info: data.user.id missing".into()))?;

    Ok(Resolved {
        user_id,
        web_profile: Some(user),
    })
}
