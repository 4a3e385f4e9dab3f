pub mod reports;
mod tester;

pub use tester::{LogicTester, ScenarioResult};
