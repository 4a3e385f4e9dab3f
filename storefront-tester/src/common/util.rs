use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};

use crate::browser::{PageProbe, PageSnapshot};

/// What a failed browser scenario leaves behind for inspection.
#[derive(Debug, Default)]
pub struct FailureArtifacts {
    pub screenshot: Option<Vec<u8>>,
    pub dom: Option<String>,
    pub page_state: Option<PageSnapshot>,
    pub error_chain: String,
}

impl FailureArtifacts {
    /// Collect whatever the page still yields; unreadable parts are skipped.
    pub async fn collect(probe: &PageProbe<'_>, err: &anyhow::Error) -> Self {
        let page_state = match probe.snapshot().await {
            Ok(snapshot) => Some(snapshot),
            Err(snapshot_err) => {
                log::warn!("could not snapshot storefront state: {snapshot_err:#}");
                None
            }
        };
        Self {
            screenshot: probe.screenshot_png().await.ok(),
            dom: probe.source().await.ok(),
            page_state,
            error_chain: format!("{err:#}"),
        }
    }

    /// Write each artifact under `dir`. Individual write failures are logged.
    ///
    /// # Errors
    /// Returns an error if `dir` cannot be created.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating artifacts dir {}", dir.display()))?;

        if let Some(png) = &self.screenshot {
            write_artifact(dir, "screenshot.png", png);
        }
        if let Some(dom) = &self.dom {
            write_artifact(dir, "dom.html", dom.as_bytes());
        }
        if let Some(state) = &self.page_state {
            match serde_json::to_vec_pretty(state) {
                Ok(json) => write_artifact(dir, "page_state.json", &json),
                Err(err) => log::warn!("could not encode page state: {err}"),
            }
        }
        write_artifact(dir, "error.txt", self.error_chain.as_bytes());
        Ok(())
    }
}

fn write_artifact(dir: &Path, name: &str, contents: &[u8]) {
    let path = dir.join(name);
    if let Err(err) = fs::write(&path, contents) {
        log::warn!("could not write artifact {}: {err}", path.display());
    }
}

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Snapshot the failing page into `dir`.
///
/// # Errors
/// Returns an error if the artifacts directory cannot be created.
pub async fn capture_artifacts(probe: &PageProbe<'_>, dir: &str, err: &anyhow::Error) -> Result<()> {
    FailureArtifacts::collect(probe, err)
        .await
        .write_to(Path::new(dir))
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}
