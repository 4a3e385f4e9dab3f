use anyhow::{Result, ensure};
use storefront_core::{RowPricing, StorefrontConfig, StorefrontPage};

use super::{Scenario, ScenarioCtx};

/// First two data rows of the table body, addressed positionally.
const ROW_A: &str = "tr:nth-of-type(1)";
const ROW_B: &str = "tr:nth-of-type(2)";

pub struct RowPricingScenario;

fn cell(config: &StorefrontConfig, row: &str, column: usize, rest: &str) -> String {
    format!(
        "{} > {row} > td:nth-of-type({}){rest}",
        config.selectors.table_body,
        column + 1
    )
}

#[async_trait::async_trait]
impl Scenario for RowPricingScenario {
    fn key(&self) -> &'static str {
        "row-pricing"
    }

    fn description(&self) -> &'static str {
        "Row stepper clicks write unit price times quantity into the total cell"
    }

    fn run_logic(&self, config: &StorefrontConfig) -> Result<()> {
        let mut page = StorefrontPage::new(config.clone())
            .with_row("20", "3")
            .with_row("7.5", "2");
        let total = page.click_row_stepper(0).unwrap_or_default().to_string();
        ensure!(total == "60", "20 x 3 should be 60, got {total}");
        ensure!(
            page.row(1).is_some_and(|row| row.total_text.is_empty()),
            "clicking row 0 must not touch row 1"
        );

        page.set_row_price_text(0, "999");
        page.set_row_quantity(0, "4");
        let total = page.click_row_stepper(0).unwrap_or_default().to_string();
        ensure!(
            total == "80",
            "unit price must be the one captured at setup, got {total}"
        );
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open().await?;
        let config = ctx.probe.config();
        let price_text = ctx
            .probe
            .text(&cell(config, ROW_A, storefront_core::PRICE_CELL, ""))
            .await?;
        let other_total_before = ctx
            .probe
            .text(&cell(config, ROW_B, storefront_core::TOTAL_CELL, ""))
            .await?;

        ctx.probe
            .set_input_value(
                &cell(config, ROW_A, storefront_core::QUANTITY_CELL, " input"),
                "3",
            )
            .await?;
        ctx.probe
            .click(&cell(
                config,
                ROW_A,
                storefront_core::QUANTITY_CELL,
                " form button",
            ))
            .await?;

        let expected = RowPricing::from_price_text(&price_text).line_total_text("3");
        let total = ctx
            .probe
            .text(&cell(config, ROW_A, storefront_core::TOTAL_CELL, ""))
            .await?;
        ensure!(
            total.trim() == expected,
            "price {price_text} x 3 should be {expected}, got {total}"
        );

        let other_total_after = ctx
            .probe
            .text(&cell(config, ROW_B, storefront_core::TOTAL_CELL, ""))
            .await?;
        ensure!(
            other_total_after == other_total_before,
            "second row total changed from {other_total_before} to {other_total_after}"
        );
        Ok(())
    }
}
