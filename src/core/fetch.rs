//! The one request/parse/extract shape every upstream call goes through.

use reqwest::RequestBuilder;
use serde_json::Value;

use crate::core::net::{self, Origin};
use crate::core::{IgError, ProfileRecord};

/// One upstream call: the prepared request (endpoint + headers + body) and
/// the function that pulls a partial record out of the decoded reply.
///
/// `extract` returning `None` means the reply was valid JSON but did not
/// carry the expected object.
pub(crate) struct FetchStrategy<F> {
    /// Short label for logs and fixture names, e.g. `user_info`.
    pub(crate) endpoint: &'static str,
    /// Username or id the call is about; used as the fixture key.
    pub(crate) key: String,
    pub(crate) request: RequestBuilder,
    pub(crate) extract: F,
}

impl<F> FetchStrategy<F>
where
    F: FnOnce(Value) -> Option<ProfileRecord>,
{
    pub(crate) async fn run(self) -> Result<Option<ProfileRecord>, IgError> {
        let Self {
            endpoint,
            key,
            request,
            extract,
        } = self;

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(IgError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        let text = net::read_body(
            resp,
            Origin {
                endpoint,
                key: &key,
                ext: "json",
            },
        )
        .await?;
        let json: Value = serde_json::from_str(&text)
            .map_err(|e| IgError::Data(format!("{endpoint} json parse: {e}")))?;

        Ok(extract(json))
    }
}

/// Outcome of a non-fatal enrichment call (detail fetch, lookup).
///
/// `Missing` and `Failed` both degrade to an empty partial record in the
/// pipeline.
#[derive(Debug)]
pub enum Enrichment {
    /// The call succeeded and produced a partial record.
    Found(ProfileRecord),
    /// The call succeeded but the reply held no usable object.
    Missing,
    /// The call itself failed (transport, status, or undecodable body).
    Failed(IgError),
}

impl Enrichment {
    pub(crate) fn from_fetch(res: Result<Option<ProfileRecord>, IgError>) -> Self {
        match res {
            Ok(Some(rec)) => Self::Found(rec),
            Ok(None) => Self::Missing,
            Err(e) => Self::Failed(e),
        }
    }

    pub fn record(&self) -> Option<&ProfileRecord> {
        match self {
            Self::Found(rec) => Some(rec),
            _ => None,
        }
    }

    /// The partial record, or an empty one when nothing was obtained.
    pub fn into_record(self) -> ProfileRecord {
        match self {
            Self::Found(rec) => rec,
            Self::Missing | Self::Failed(_) => ProfileRecord::new(),
        }
    }
}
