use crate::domain::model::{PublicConfig, SERVER_URL_KEY};
use crate::utils::error::{EnvError, Result};
use crate::utils::validation::validate_url;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub status: u16,
    pub elapsed_ms: u64,
}

impl ProbeReport {
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }

    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(EnvError::ProbeStatusError {
                url: self.url,
                status: self.status,
            })
        }
    }
}

/// GET the configured server once.
///
/// Unlike loading, this requires an absolute http(s) URL.
pub async fn probe(config: &PublicConfig, timeout: Duration) -> Result<ProbeReport> {
    let url = validate_url(SERVER_URL_KEY, config.server_url())?;

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    tracing::info!("🔍 Probing {}", url);
    let started = Instant::now();
    let response = client.get(url.clone()).send().await?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let report = ProbeReport {
        url: url.to_string(),
        status: response.status().as_u16(),
        elapsed_ms,
    };

    if report.is_success() {
        tracing::info!("✅ {} answered {} in {} ms", report.url, report.status, elapsed_ms);
    } else {
        tracing::warn!("{} answered {} in {} ms", report.url, report.status, elapsed_ms);
    }
    Ok(report)
}
