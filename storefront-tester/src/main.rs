mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use storefront_core::StorefrontConfig;

use browser::{BrowserConfig, BrowserKind, PageProbe, new_session};
use common::scenario::{ScenarioCtx, catalog::CORE_SCENARIOS, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Replay scenarios against the in-memory page model (fast, no browser)
    Logic,
    /// Drive the served page through WebDriver
    Browser,
    /// Run both logic and browser scenarios
    Both,
}

impl TestMode {
    const fn runs_logic(self) -> bool {
        matches!(self, Self::Logic | Self::Both)
    }

    const fn runs_browser(self) -> bool {
        matches!(self, Self::Browser | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

#[derive(Debug, Parser)]
#[command(name = "storefront-tester", version = "0.1.0")]
#[command(about = "Replays storefront page interactions against the page model or a live browser")]
struct Args {
    /// Where to replay scenarios: the page model, a browser, or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every interaction scenario)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Storefront configuration JSON to test against instead of the bundled one
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// URL of the storefront page under test
    #[arg(long, default_value = "http://localhost:8080/index.html")]
    base_url: String,

    /// Directory for screenshots, DOM dumps and page state of failed scenarios
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        let mut out = open_output(args.output.as_deref())?;
        write_scenario_list(&mut out)?;
        return Ok(());
    }

    println!("{}", "🛒 Storefront Automated Tester".bright_cyan().bold());
    println!("{}", "==============================".cyan());

    let start_time = Instant::now();
    let config = load_config(args.config.as_deref())?;
    let scenarios = expand_scenarios(&args.scenarios);

    let results = run_logic_scenarios(&args, &scenarios, &config);
    let browser_failures = run_browser_scenarios(&args, &scenarios, &config).await?;

    let mut out = open_output(args.output.as_deref())?;
    write_report(&mut out, args.report, &results, start_time.elapsed())?;

    if browser_failures > 0 || results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

/// The page contract to test against: a file given on the command line, or
/// the configuration bundled with the page assets.
fn load_config(path: Option<&Path>) -> Result<StorefrontConfig> {
    let Some(path) = path else {
        return Ok(StorefrontConfig::load_from_static());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading storefront config {}", path.display()))?;
    StorefrontConfig::from_json(&json)
        .with_context(|| format!("invalid storefront config {}", path.display()))
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(stdout())),
    })
}

fn write_scenario_list(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(out, "  {key:20} - {description}")?;
    }
    out.flush()?;
    Ok(())
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in CORE_SCENARIOS {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn parse_browser_kind(name: &str) -> Option<BrowserKind> {
    BrowserKind::from_str(name, true).ok()
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: matches!(args.headless, HeadlessMode::Headless),
        remote_hub: args.hub.clone(),
        ..BrowserConfig::default()
    }
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    config: &StorefrontConfig,
) -> Vec<ScenarioResult> {
    if !args.mode.runs_logic() {
        return Vec::new();
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(config.clone(), args.verbose);
    scenarios
        .iter()
        .filter_map(|name| {
            let scenario = get_scenario(name);
            if scenario.is_none() {
                eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            }
            scenario
        })
        .map(|scenario| tester.run_scenario(scenario.as_ref(), args.iterations))
        .collect()
}

/// Run the browser scenarios and return how many failed.
async fn run_browser_scenarios(
    args: &Args,
    scenarios: &[String],
    config: &StorefrontConfig,
) -> Result<usize> {
    if !args.mode.runs_browser() {
        return Ok(0);
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let mut failures = 0;
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = parse_browser_kind(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &build_browser_config(args)).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        let ctx = ScenarioCtx {
            base_url: args.base_url.clone(),
            probe: PageProbe::new(&driver, config),
            verbose: args.verbose,
        };
        failures += run_browser_scenarios_in(args, scenarios, &browser_name, &ctx).await;
        let _ = driver.quit().await;
    }

    Ok(failures)
}

async fn run_browser_scenarios_in(
    args: &Args,
    scenarios: &[String],
    browser: &str,
    ctx: &ScenarioCtx<'_>,
) -> usize {
    let mut failures = 0;

    for scenario in scenarios.iter().filter_map(|name| get_scenario(name)) {
        let scenario_start = Instant::now();
        match scenario.run_browser(ctx).await {
            Ok(()) => println!(
                "✅ [{}] {} - {:?}",
                browser.green(),
                scenario.key(),
                scenario_start.elapsed()
            ),
            Err(e) => {
                failures += 1;
                eprintln!(
                    "❌ [{}] {} - {:?}: {e:#}",
                    browser.red(),
                    scenario.key(),
                    scenario_start.elapsed()
                );
                let dir = artifacts_dir(&args.artifacts_dir, browser, scenario.key());
                if let Err(capture_err) = capture_artifacts(&ctx.probe, &dir, &e).await {
                    log::warn!("could not capture artifacts in {dir}: {capture_err:#}");
                }
            }
        }
    }

    failures
}

fn write_report(
    out: &mut dyn Write,
    format: ReportFormat,
    results: &[ScenarioResult],
    elapsed: Duration,
) -> Result<()> {
    match (format, results.is_empty()) {
        (ReportFormat::Json, _) => logic::reports::generate_json_report(out, results)?,
        (ReportFormat::Markdown, true) => writeln!(
            out,
            "# Storefront Logic Test Results\n\n_No scenarios executed._"
        )?,
        (ReportFormat::Markdown, false) => logic::reports::generate_markdown_report(out, results)?,
        (ReportFormat::Console, true) => writeln!(out, "No logic scenarios executed.")?,
        (ReportFormat::Console, false) => {
            logic::reports::generate_console_report(out, results, elapsed)?;
        }
    }

    if format != ReportFormat::Json {
        writeln!(out)?;
        writeln!(out, "🏁 Total time: {elapsed:?}")?;
    }
    out.flush()?;
    Ok(())
}
