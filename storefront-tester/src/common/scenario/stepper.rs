use anyhow::{Result, ensure};
use storefront_core::{StorefrontConfig, StorefrontPage};

use super::{Scenario, ScenarioCtx};

pub struct QuantityStepper;

#[async_trait::async_trait]
impl Scenario for QuantityStepper {
    fn key(&self) -> &'static str {
        "quantity-stepper"
    }

    fn description(&self) -> &'static str {
        "Decrement and increment controls move the quantity field by one"
    }

    fn run_logic(&self, config: &StorefrontConfig) -> Result<()> {
        let mut page = StorefrontPage::new(config.clone()).with_quantity("5");
        page.click_decrement();
        page.click_decrement();
        ensure!(
            page.quantity().value == "3" && page.quantity().text == "3",
            "5 decremented twice should read 3, got {:?}",
            page.quantity()
        );

        page.click_increment();
        ensure!(page.quantity().value == "4", "increment should read 4");

        if config.stepper.min_quantity.is_none() {
            page.set_quantity("0");
            page.click_decrement();
            ensure!(
                page.quantity().value == "-1",
                "decrement below zero should not clamp without a floor"
            );
        }
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open().await?;
        let selectors = &ctx.probe.config().selectors;
        ctx.probe
            .set_input_value(&selectors.quantity_input, "5")
            .await?;

        ctx.probe.click(&selectors.decrement).await?;
        ctx.probe.click(&selectors.decrement).await?;
        let value = ctx.probe.input_value(&selectors.quantity_input).await?;
        ensure!(value == "3", "5 decremented twice should read 3, got {value}");

        ctx.probe.click(&selectors.increment).await?;
        let value = ctx.probe.input_value(&selectors.quantity_input).await?;
        ensure!(value == "4", "increment should read 4, got {value}");
        Ok(())
    }
}
