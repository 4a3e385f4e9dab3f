use anyhow::{Result, ensure};
use storefront_core::{ModalClickTarget, StorefrontConfig, StorefrontPage};

use super::{Scenario, ScenarioCtx};

pub struct GuardEmpty;
pub struct GuardProducts;
pub struct ModalDismissal;

async fn ensure_modal(ctx: &ScenarioCtx<'_>, visible: bool, step: &str) -> Result<()> {
    let config = ctx.probe.config();
    let display = ctx.probe.modal_display().await?;
    let shown = display == config.modal_visible_display;
    ensure!(
        shown == visible,
        "{step}: modal display is {display:?}, expected it {}",
        if visible { "visible" } else { "hidden" }
    );
    Ok(())
}

#[async_trait::async_trait]
impl Scenario for GuardEmpty {
    fn key(&self) -> &'static str {
        "guard-empty"
    }

    fn description(&self) -> &'static str {
        "Buy click with no product cards opens the modal and stays on the page"
    }

    fn run_logic(&self, config: &StorefrontConfig) -> Result<()> {
        let mut page = StorefrontPage::new(config.clone());
        ensure!(page.click_buy().is_none(), "buy without products navigated");
        ensure!(page.modal().is_visible(), "modal should be visible");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open().await?;
        let config = ctx.probe.config();
        let start = ctx.probe.current_path().await?;
        ctx.probe.remove_product_cards().await?;
        ctx.probe.click(&config.selectors.buy_button).await?;
        ensure_modal(ctx, true, "after buy").await?;
        let path = ctx.probe.current_path().await?;
        ensure!(path == start, "page navigated from {start} to {path}");
        Ok(())
    }
}

#[async_trait::async_trait]
impl Scenario for GuardProducts {
    fn key(&self) -> &'static str {
        "guard-products"
    }

    fn description(&self) -> &'static str {
        "Buy click with product cards navigates to the cart"
    }

    fn run_logic(&self, config: &StorefrontConfig) -> Result<()> {
        let mut page = StorefrontPage::new(config.clone()).with_product_cards(1);
        let nav = page.click_buy();
        ensure!(
            nav.as_ref().is_some_and(|n| n.path == config.cart_path),
            "expected navigation to {}, got {nav:?}",
            config.cart_path
        );
        ensure!(!page.modal().is_visible(), "modal should stay hidden");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open().await?;
        let config = ctx.probe.config();
        ctx.probe.ensure_present(&config.selectors.product_card).await?;
        ensure_modal(ctx, false, "before buy").await?;
        ctx.probe.click(&config.selectors.buy_button).await?;
        ctx.probe.wait_for_path(&config.cart_path).await
    }
}

#[async_trait::async_trait]
impl Scenario for ModalDismissal {
    fn key(&self) -> &'static str {
        "modal-dismissal"
    }

    fn description(&self) -> &'static str {
        "Modal closes from its close control or backdrop, not from its content"
    }

    fn run_logic(&self, config: &StorefrontConfig) -> Result<()> {
        let mut page = StorefrontPage::new(config.clone());
        page.click_buy();
        page.click_close();
        ensure!(!page.modal().is_visible(), "close control should hide modal");

        page.click_buy();
        page.click_modal(ModalClickTarget::Elsewhere);
        ensure!(page.modal().is_visible(), "content click must not hide modal");
        page.click_modal(ModalClickTarget::Backdrop);
        ensure!(!page.modal().is_visible(), "backdrop click should hide modal");
        Ok(())
    }

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open().await?;
        let selectors = &ctx.probe.config().selectors;
        ctx.probe.remove_product_cards().await?;

        ctx.probe.click(&selectors.buy_button).await?;
        ensure_modal(ctx, true, "after buy").await?;
        ctx.probe
            .dispatch_click(&format!("{} > *", selectors.modal))
            .await?;
        ensure_modal(ctx, true, "after content click").await?;
        ctx.probe.click(&selectors.close_button).await?;
        ensure_modal(ctx, false, "after close").await?;

        ctx.probe.click(&selectors.buy_button).await?;
        ensure_modal(ctx, true, "after second buy").await?;
        ctx.probe.dispatch_click(&selectors.modal).await?;
        ensure_modal(ctx, false, "after backdrop click").await
    }
}
