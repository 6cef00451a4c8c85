//! The controller that owns the most recent investigation result.

use std::path::{Path, PathBuf};

use crate::core::{Credentials, IgError, ProfileRecord, ProfileService};
use crate::export::{self, ExportFormat};
use crate::investigate::{Investigator, Stage};

/// Runs investigations one after another and keeps the last successful
/// merged record until the next one replaces it.
pub struct Session<S> {
    investigator: Investigator<S>,
    last: Option<ProfileRecord>,
}

impl<S: ProfileService> Session<S> {
    pub fn new(investigator: Investigator<S>) -> Self {
        Self {
            investigator,
            last: None,
        }
    }

    /// Runs one investigation; on success its record becomes the last result.
    ///
    /// A failed run leaves the previous result in place.
    ///
    /// # Errors
    ///
    /// Propagates [`IgError::Resolution`] from the pipeline.
    pub async fn investigate<F>(&mut self, creds: &Credentials, on_stage: F) -> Result<&ProfileRecord, IgError>
    where
        F: FnMut(Stage),
    {
        let record = self.investigator.run_with(creds, on_stage).await?;
        let last: &ProfileRecord = self.last.insert(record);
        Ok(last)
    }

    pub fn last(&self) -> Option<&ProfileRecord> {
        self.last.as_ref()
    }

    /// Exports the last result.
    ///
    /// # Errors
    ///
    /// [`IgError::NoInvestigation`] if nothing has been investigated yet,
    /// otherwise whatever [`export::export`] reports.
    pub fn export_last(&self, format: ExportFormat, filename: Option<&Path>) -> Result<PathBuf, IgError> {
        let record = self.last.as_ref().ok_or(IgError::NoInvestigation)?;
        export::export(record, format, filename)
    }
}
