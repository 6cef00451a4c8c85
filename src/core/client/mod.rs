//! Public client surface + builder.
//! Defaults (UAs, app ids, endpoints) live in `constants`.

mod constants;

pub(crate) use constants::{
    ACCEPT_LANGUAGE, ASBD_ID, LOOKUP_APP_ID, SEC_CH_UA, SEC_CH_UA_PLATFORM, WEB_APP_ID,
};

use crate::core::IgError;
use constants::{
    DEFAULT_BASE_MOBILE_API, DEFAULT_BASE_WEB, DEFAULT_TIMEOUT_SECS, LOOKUP_USER_AGENT,
    MOBILE_USER_AGENT, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Which path the identifier resolver may take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolvePreference {
    /// Try the profile-info API first, then fall back to scanning the profile page.
    #[default]
    ApiThenScrape,
    /// Use only the profile-info API.
    ApiOnly,
    /// Use only the profile page scan.
    ScrapeOnly,
}

/// Holds a configured HTTP client plus the endpoints and client identities
/// every request is built from.
///
/// No cookie store is kept; the session cookie is attached per request.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct IgClient {
    http: Client,
    base_web: Url,
    base_mobile_api: Url,
    user_agent: String,
    mobile_user_agent: String,
    lookup_user_agent: String,
    resolve_preference: ResolvePreference,
}

impl Default for IgClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl IgClient {
    /// Create a new builder.
    pub fn builder() -> IgClientBuilder {
        IgClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_web(&self) -> &Url {
        &self.base_web
    }
    pub(crate) fn base_mobile_api(&self) -> &Url {
        &self.base_mobile_api
    }
    pub(crate) fn user_agent(&self) -> &str {
        &self.user_agent
    }
    pub(crate) fn mobile_user_agent(&self) -> &str {
        &self.mobile_user_agent
    }
    pub(crate) fn lookup_user_agent(&self) -> &str {
        &self.lookup_user_agent
    }

    pub fn resolve_preference(&self) -> ResolvePreference {
        self.resolve_preference
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IgClientBuilder {
    user_agent: Option<String>,
    mobile_user_agent: Option<String>,
    lookup_user_agent: Option<String>,
    base_web: Option<Url>,
    base_mobile_api: Option<Url>,
    resolve_preference: Option<ResolvePreference>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl IgClientBuilder {
    /// Override the desktop User-Agent used by the resolver.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the mobile User-Agent used by the detail fetch.
    pub fn mobile_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.mobile_user_agent = Some(ua.into());
        self
    }

    /// Override the mobile User-Agent used by the lookup call.
    pub fn lookup_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.lookup_user_agent = Some(ua.into());
        self
    }

    /// Override the web origin (e.g., `https://www.instagram.com/`).
    pub fn base_web(mut self, url: Url) -> Self {
        self.base_web = Some(url);
        self
    }

    /// Override the mobile API root (e.g., `https://i.instagram.com/api/v1/`).
    pub fn base_mobile_api(mut self, url: Url) -> Self {
        self.base_mobile_api = Some(url);
        self
    }

    /// Restrict the identifier resolver to one path.
    pub fn resolve_preference(mut self, pref: ResolvePreference) -> Self {
        self.resolve_preference = Some(pref);
        self
    }

    /// Set the overall per-request timeout. Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<IgClient, IgError> {
        let base_web = self.base_web.unwrap_or(Url::parse(DEFAULT_BASE_WEB)?);
        let base_mobile_api = self
            .base_mobile_api
            .unwrap_or(Url::parse(DEFAULT_BASE_MOBILE_API)?);

        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());

        let mut httpb = reqwest::Client::builder()
            .user_agent(user_agent.as_str())
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(IgClient {
            http,
            base_web,
            base_mobile_api,
            user_agent,
            mobile_user_agent: self
                .mobile_user_agent
                .unwrap_or_else(|| MOBILE_USER_AGENT.to_string()),
            lookup_user_agent: self
                .lookup_user_agent
                .unwrap_or_else(|| LOOKUP_USER_AGENT.to_string()),
            resolve_preference: self.resolve_preference.unwrap_or_default(),
        })
    }
}
