//! Centralized constants for default endpoints, user agents and app ids.

/// Desktop browser UA used for the web profile endpoints.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/121.0.0.0 Safari/537.36"
);

/// Mobile client UA expected by the per-id info endpoint.
pub(crate) const MOBILE_USER_AGENT: &str = "Instagram 64.0.0.14.96";

/// Mobile client UA expected by the lookup endpoint.
pub(crate) const LOOKUP_USER_AGENT: &str = "Instagram 101.0.0.15.120";

/// App id sent by the web client (also accepted by the info endpoint).
pub(crate) const WEB_APP_ID: &str = "936619743392459";

/// App id sent by the legacy mobile client for lookups.
pub(crate) const LOOKUP_APP_ID: &str = "124024574287414";

/// Web origin; the profile-info API and profile pages hang off it.
pub(crate) const DEFAULT_BASE_WEB: &str = "https://www.instagram.com/";

/// Private mobile API root (`users/{id}/info/`, `users/lookup/`).
pub(crate) const DEFAULT_BASE_MOBILE_API: &str = "https://i.instagram.com/api/v1/";

/// Upper bound for every request.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/* -------- browser-like header values for the profile-info call -------- */

pub(crate) const ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";
pub(crate) const SEC_CH_UA: &str =
    r#""Not A(Brand";v="99", "Google Chrome";v="121", "Chromium";v="121""#;
pub(crate) const SEC_CH_UA_PLATFORM: &str = r#""Windows""#;
pub(crate) const ASBD_ID: &str = "129477";
