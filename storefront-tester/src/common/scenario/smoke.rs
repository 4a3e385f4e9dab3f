use anyhow::{Context, Result};
use storefront_core::StorefrontConfig;

use super::catalog::{CORE_SCENARIOS, get_scenario};
use super::{Scenario, ScenarioCtx};

/// Every core scenario back to back.
pub struct Smoke;

fn core_scenarios() -> impl Iterator<Item = Box<dyn Scenario>> {
    CORE_SCENARIOS.iter().filter_map(|key| get_scenario(key))
}

#[async_trait::async_trait]
impl Scenario for Smoke {
    fn key(&self) -> &'static str {
        "smoke"
    }

    fn description(&self) -> &'static str {
        "Quick pass over every interaction"
    }

    fn run_logic(&self, config: &StorefrontConfig) -> Result<()> {
        for scenario in core_scenarios() {
            scenario
                .run_logic(config)
                .with_context(|| format!("smoke step {}", scenario.key()))?;
        }
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        // guard-products navigates away, so it runs last.
        for scenario in core_scenarios() {
            scenario
                .run_browser(ctx)
                .await
                .with_context(|| format!("smoke step {}", scenario.key()))?;
        }
        Ok(())
    }
}
