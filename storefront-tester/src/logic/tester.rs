use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use storefront_core::StorefrontConfig;

use crate::common::scenario::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    config: StorefrontConfig,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(config: StorefrontConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub fn run_scenario(&self, scenario: &dyn Scenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({} iterations)",
                scenario.key().bright_white(),
                iterations
            );
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut elapsed = Duration::ZERO;

        for iteration in 0..iterations {
            let start = Instant::now();
            let outcome = scenario.run_logic(&self.config);
            elapsed += start.elapsed();
            match outcome {
                Ok(()) => successes += 1,
                Err(err) => {
                    log::debug!("{} iteration {iteration} failed: {err:#}", scenario.key());
                    failures.push(format!("iteration {iteration}: {err:#}"));
                }
            }
        }

        let average_duration = if iterations == 0 {
            Duration::ZERO
        } else {
            elapsed / u32::try_from(iterations).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.key().to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs_f64().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(secs.max(0.0)))
    }
}
