//! Profile page fetch + id pattern scan.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::{COOKIE, USER_AGENT};

use crate::core::net::{self, Origin};
use crate::core::{Credentials, IgClient, IgError};

/// Candidate id carriers, in the order they are tried.
static ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r#""profilePage_([0-9]+)""#,
        r#""user_id":"([0-9]+)""#,
        r#""id":"([0-9]+)""#,
    ]
    .map(|p| Regex::new(p).expect("static id pattern"))
});

/// Scans page markup for the numeric account id.
///
/// Patterns are tried in a fixed order (`"profilePage_<id>"`,
/// `"user_id":"<id>"`, `"id":"<id>"`); the first one that matches anywhere
/// in the body wins, even if a later pattern appears earlier in the text.
pub fn scan_for_user_id(html: &str) -> Option<String> {
    ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(html))
        .map(|caps| caps[1].to_string())
}

/// Fetches `{base_web}/{username}/` with a bare header set and scans it.
///
/// The status code is not checked; whatever body comes back is scanned.
pub(super) async fn scan_profile_page(
    client: &IgClient,
    creds: &Credentials,
) -> Result<Option<String>, IgError> {
    let username = creds.username.as_str();
    let url = client.base_web().join(&format!("{username}/"))?;

    let resp = client
        .http()
        .get(url)
        .header(USER_AGENT, client.user_agent())
        .header(COOKIE, creds.session.cookie_header())
        .send()
        .await?;
    tracing::debug!(status = resp.status().as_u16(), "profile page fetched");

    let origin = Origin {
        endpoint: "profile_page",
        key: username,
        ext: "html",
    };
    let body = net::read_body(resp, origin).await?;
    Ok(scan_for_user_id(&body))
}
