//! Response body reading, with optional fixture capture under `test-mode`.

use reqwest::Response;

/// Which call a body belongs to. Doubles as the fixture file name when
/// recording: `{endpoint}_{key}.{ext}`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Origin<'a> {
    pub(crate) endpoint: &'a str,
    pub(crate) key: &'a str,
    pub(crate) ext: &'a str,
}

impl Origin<'_> {
    pub(crate) fn file_name(&self) -> String {
        format!("{}_{}.{}", self.endpoint, self.key, self.ext)
    }
}

#[cfg_attr(not(feature = "test-mode"), allow(unused_variables))]
pub(crate) async fn read_body(resp: Response, origin: Origin<'_>) -> Result<String, reqwest::Error> {
    let body = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if let Some(dir) = crate::core::fixtures::recording_dir()
            && let Err(e) = crate::core::fixtures::save(&dir, origin, &body)
        {
            tracing::warn!(fixture = %origin.file_name(), "IG_RECORD: could not save body: {e}");
        }
    }

    Ok(body)
}
