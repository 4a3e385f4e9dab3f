use anyhow::Result;
use storefront_core::StorefrontConfig;

use crate::browser::PageProbe;

pub mod catalog;
mod guard;
mod nav;
mod pricing;
mod smoke;
mod stepper;

pub use catalog::{get_scenario, list_scenarios};

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub probe: PageProbe<'a>,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    /// Load a fresh copy of the page under test.
    pub async fn open(&self) -> Result<()> {
        if self.verbose {
            println!("   ↳ opening {}", self.base_url);
        }
        self.probe.open(&self.base_url).await
    }
}

/// One interaction check that can run against the page model and a real browser.
#[async_trait::async_trait]
pub trait Scenario: Send + Sync {
    fn key(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Replay the interaction against the in-memory page model.
    fn run_logic(&self, config: &StorefrontConfig) -> Result<()>;

    /// Replay the interaction in a browser session.
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()>;
}
