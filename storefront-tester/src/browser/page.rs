use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use storefront_core::StorefrontConfig;
use thirtyfour::prelude::*;

const NAVIGATION_POLL: Duration = Duration::from_millis(100);
const NAVIGATION_ATTEMPTS: usize = 50;

const SNAPSHOT_SCRIPT: &str = r"
const [menu, nav, qty, body, modal, card, active] = arguments;
const q = (sel) => document.querySelector(sel);
const tbody = q(body);
const rows = tbody ? Array.from(tbody.querySelectorAll('tr')) : [];
return {
    url: location.href,
    nav_trigger_active: !!(q(menu) && q(menu).classList.contains(active)),
    nav_list_active: !!(q(nav) && q(nav).classList.contains(active)),
    quantity: q(qty) ? q(qty).value : null,
    modal_display: q(modal) ? q(modal).style.display : null,
    row_totals: rows.map((row) => {
        const cells = row.querySelectorAll('td');
        return cells.length > 3 ? cells[3].textContent : null;
    }),
    product_cards: document.querySelectorAll(card).length,
};
";

/// Storefront state read back from the live page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    pub nav_trigger_active: bool,
    pub nav_list_active: bool,
    pub quantity: Option<String>,
    pub modal_display: Option<String>,
    pub row_totals: Vec<Option<String>>,
    pub product_cards: usize,
}

/// Drives the storefront page through WebDriver using the page contract selectors.
#[derive(Debug, Clone)]
pub struct PageProbe<'a> {
    driver: &'a WebDriver,
    config: &'a StorefrontConfig,
}

impl<'a> PageProbe<'a> {
    pub const fn new(driver: &'a WebDriver, config: &'a StorefrontConfig) -> Self {
        Self { driver, config }
    }

    pub const fn config(&self) -> &StorefrontConfig {
        self.config
    }

    pub async fn open(&self, url: &str) -> Result<()> {
        self.driver
            .goto(url)
            .await
            .with_context(|| format!("opening {url}"))?;
        self.ensure_present(&self.config.selectors.menu_trigger)
            .await
    }

    pub async fn ensure_present(&self, selector: &str) -> Result<()> {
        self.driver
            .find(By::Css(selector))
            .await
            .with_context(|| format!("waiting for `{selector}`"))?;
        Ok(())
    }

    /// Native click at the element's centre.
    pub async fn click(&self, selector: &str) -> Result<()> {
        self.driver
            .find(By::Css(selector))
            .await
            .with_context(|| format!("finding `{selector}`"))?
            .click()
            .await
            .with_context(|| format!("clicking `{selector}`"))?;
        Ok(())
    }

    /// Dispatch a click whose target is exactly the matched element.
    pub async fn dispatch_click(&self, selector: &str) -> Result<()> {
        self.script(
            "document.querySelector(arguments[0]).click(); return null;",
            vec![selector.into()],
        )
        .await?;
        Ok(())
    }

    pub async fn has_class(&self, selector: &str, class: &str) -> Result<bool> {
        let ret = self
            .script(
                "return document.querySelector(arguments[0]).classList.contains(arguments[1]);",
                vec![selector.into(), class.into()],
            )
            .await?;
        Ok(ret.as_bool().unwrap_or(false))
    }

    pub async fn input_value(&self, selector: &str) -> Result<String> {
        self.string_script(
            "return document.querySelector(arguments[0]).value;",
            selector,
        )
        .await
    }

    pub async fn text(&self, selector: &str) -> Result<String> {
        self.string_script(
            "return document.querySelector(arguments[0]).textContent;",
            selector,
        )
        .await
    }

    pub async fn set_input_value(&self, selector: &str, value: &str) -> Result<()> {
        self.script(
            "document.querySelector(arguments[0]).value = arguments[1]; return null;",
            vec![selector.into(), value.into()],
        )
        .await?;
        Ok(())
    }

    pub async fn modal_display(&self) -> Result<String> {
        self.string_script(
            "return document.querySelector(arguments[0]).style.display;",
            &self.config.selectors.modal,
        )
        .await
    }

    pub async fn remove_product_cards(&self) -> Result<()> {
        self.script(
            "document.querySelectorAll(arguments[0]).forEach(el => el.remove()); return null;",
            vec![self.config.selectors.product_card.clone().into()],
        )
        .await?;
        Ok(())
    }

    /// Read every piece of storefront state in a single script round trip.
    pub async fn snapshot(&self) -> Result<PageSnapshot> {
        let selectors = &self.config.selectors;
        let args = [
            &selectors.menu_trigger,
            &selectors.nav_list,
            &selectors.quantity_input,
            &selectors.table_body,
            &selectors.modal,
            &selectors.product_card,
            &self.config.active_class,
        ]
        .into_iter()
        .map(|arg| Value::from(arg.as_str()))
        .collect();
        let value = self.script(SNAPSHOT_SCRIPT, args).await?;
        serde_json::from_value(value).context("decoding page snapshot")
    }

    pub async fn screenshot_png(&self) -> Result<Vec<u8>> {
        Ok(self.driver.screenshot_as_png().await?)
    }

    pub async fn source(&self) -> Result<String> {
        Ok(self.driver.source().await?)
    }

    pub async fn current_path(&self) -> Result<String> {
        let url = self.driver.current_url().await?;
        Ok(url.path().to_string())
    }

    /// Poll until the page has navigated to `path`.
    pub async fn wait_for_path(&self, path: &str) -> Result<()> {
        for _ in 0..NAVIGATION_ATTEMPTS {
            if self.current_path().await? == path {
                return Ok(());
            }
            tokio::time::sleep(NAVIGATION_POLL).await;
        }
        bail!(
            "expected navigation to {path}, still at {}",
            self.current_path().await?
        )
    }

    async fn string_script(&self, script: &str, selector: &str) -> Result<String> {
        let ret = self.script(script, vec![selector.into()]).await?;
        match ret {
            Value::String(s) => Ok(s),
            Value::Null => Ok(String::new()),
            other => Ok(other.to_string()),
        }
    }

    async fn script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        let ret = self
            .driver
            .execute(script, args)
            .await
            .context("executing page script")?;
        Ok(ret.json().clone())
    }
}
