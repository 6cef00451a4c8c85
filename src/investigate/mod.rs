//! The investigation pipeline: resolve -> details -> lookup -> merge.

use std::time::Duration;

use crate::core::record::USER_ID_KEY;
use crate::core::{Credentials, Enrichment, IgError, ProfileRecord, ProfileService};

/// Fixed pauses between upstream calls.
///
/// These are plain sleeps to keep request pacing human-like; there is no
/// backoff or retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after the id is resolved, before the detail fetch.
    pub after_resolve: Duration,
    /// Pause after the detail fetch, before the lookup.
    pub after_details: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            after_resolve: Duration::from_secs(2),
            after_details: Duration::from_secs(1),
        }
    }
}

impl Pacing {
    /// No pauses at all.
    pub const fn none() -> Self {
        Self {
            after_resolve: Duration::ZERO,
            after_details: Duration::ZERO,
        }
    }
}

/// Progress notifications emitted while a pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    ResolvingId,
    Resolved { user_id: String },
    FetchingDetails,
    LookingUp,
}

/// Shallow union of the three partial records.
///
/// On key collision the lookup value wins over the detail value, which wins
/// over the web profile value. A key keeps the position where it first
/// appeared.
pub fn merge(web: ProfileRecord, detail: ProfileRecord, lookup: ProfileRecord) -> ProfileRecord {
    let mut merged = web;
    merged.overlay(detail);
    merged.overlay(lookup);
    merged
}

/// Returns `detail` with `userID` set to the resolved id, placed first.
pub fn tag_user_id(detail: ProfileRecord, user_id: &str) -> ProfileRecord {
    let mut tagged = ProfileRecord::new();
    tagged.insert(USER_ID_KEY, user_id);
    tagged.overlay(detail);
    tagged.insert(USER_ID_KEY, user_id);
    tagged
}

fn settle(step: &'static str, outcome: Enrichment) -> ProfileRecord {
    match &outcome {
        Enrichment::Found(rec) => tracing::debug!(step, fields = rec.len(), "partial record obtained"),
        Enrichment::Missing => tracing::info!(step, "reply carried no usable data; continuing without it"),
        Enrichment::Failed(e) => tracing::warn!(step, "call failed ({e}); continuing without it"),
    }
    outcome.into_record()
}

async fn pause(d: Duration) {
    if !d.is_zero() {
        tokio::time::sleep(d).await;
    }
}

/// Runs investigations against any [`ProfileService`].
///
/// # Example
///
/// ```no_run
/// # use igscout::{Credentials, IgClient, Investigator};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let investigator = Investigator::new(IgClient::default());
/// let creds = Credentials::parse("@instagram", "my-session-id")?;
/// let record = investigator.run(&creds).await?;
/// println!("{}", igscout::report::render(&record, Default::default()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Investigator<S> {
    service: S,
    pacing: Pacing,
}

impl<S: ProfileService> Investigator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            pacing: Pacing::default(),
        }
    }

    #[must_use]
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Runs the full pipeline for one account.
    ///
    /// # Errors
    ///
    /// Only identifier resolution is fatal ([`IgError::Resolution`]); detail
    /// and lookup failures degrade to empty partial records.
    pub async fn run(&self, creds: &Credentials) -> Result<ProfileRecord, IgError> {
        self.run_with(creds, |_| {}).await
    }

    /// Like [`run`](Self::run), reporting each [`Stage`] to `on_stage`.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    #[tracing::instrument(skip_all, fields(username = %creds.username))]
    pub async fn run_with<F>(&self, creds: &Credentials, mut on_stage: F) -> Result<ProfileRecord, IgError>
    where
        F: FnMut(Stage),
    {
        on_stage(Stage::ResolvingId);
        let resolved = self.service.resolve(creds).await?;
        on_stage(Stage::Resolved {
            user_id: resolved.user_id.clone(),
        });
        pause(self.pacing.after_resolve).await;

        on_stage(Stage::FetchingDetails);
        let detail = settle(
            "details",
            self.service.details(&resolved.user_id, &creds.session).await,
        );
        pause(self.pacing.after_details).await;

        on_stage(Stage::LookingUp);
        let lookup = settle("lookup", self.service.lookup(&creds.username).await);

        Ok(merge(
            resolved.web_profile.unwrap_or_default(),
            tag_user_id(detail, &resolved.user_id),
            lookup,
        ))
    }
}
