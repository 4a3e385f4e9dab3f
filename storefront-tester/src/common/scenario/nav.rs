use anyhow::{Result, ensure};
use storefront_core::{StorefrontConfig, StorefrontPage};

use super::{Scenario, ScenarioCtx};

pub struct NavToggle;

#[async_trait::async_trait]
impl Scenario for NavToggle {
    fn key(&self) -> &'static str {
        "nav-toggle"
    }

    fn description(&self) -> &'static str {
        "Menu trigger toggles the active class on itself and the nav list"
    }

    fn run_logic(&self, config: &StorefrontConfig) -> Result<()> {
        for clicks in 0..8_usize {
            let mut page = StorefrontPage::new(config.clone());
            for _ in 0..clicks {
                page.click_menu();
            }
            ensure!(
                page.nav_active() == (clicks % 2 == 1),
                "after {clicks} clicks the menu should be {}",
                if clicks % 2 == 1 { "active" } else { "inactive" }
            );
        }
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open().await?;
        let selectors = &ctx.probe.config().selectors;
        let class = &ctx.probe.config().active_class;
        let initial = ctx.probe.has_class(&selectors.menu_trigger, class).await?;

        for clicks in 1..=4_usize {
            ctx.probe.click(&selectors.menu_trigger).await?;
            let expected = initial ^ (clicks % 2 == 1);
            let trigger = ctx.probe.has_class(&selectors.menu_trigger, class).await?;
            let list = ctx.probe.has_class(&selectors.nav_list, class).await?;
            ensure!(
                trigger == expected,
                "trigger active={trigger} after {clicks} clicks, expected {expected}"
            );
            ensure!(
                list == trigger,
                "nav list active={list} diverged from trigger active={trigger}"
            );
        }
        Ok(())
    }
}
