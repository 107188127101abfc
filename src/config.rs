use serde::{Deserialize, Serialize};

use crate::constants::{BENCH_TEAM_NAME, GREEDY_TRIALS};

/// Which improving swap the hybrid strategy applies in its single refinement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwapPolicy {
    /// Apply the first pair found that narrows the gap
    #[default]
    FirstImprovement,
    /// Scan every pair and apply the one that narrows the gap most
    BestImprovement,
}

/// Tunable heuristics of an assignment run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssignmentConfig {
    /// Independent shuffles tried by the greedy strategy (at least one always runs)
    pub greedy_trials: usize,
    pub swap_policy: SwapPolicy,
    /// Display name of the leftover team
    pub bench_name: String,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        AssignmentConfig {
            greedy_trials: GREEDY_TRIALS,
            swap_policy: SwapPolicy::default(),
            bench_name: BENCH_TEAM_NAME.to_string(),
        }
    }
}

impl AssignmentConfig {
    pub fn with_greedy_trials(mut self, trials: usize) -> Self {
        self.greedy_trials = trials;
        self
    }

    pub fn with_swap_policy(mut self, policy: SwapPolicy) -> Self {
        self.swap_policy = policy;
        self
    }

    pub fn with_bench_name(mut self, name: impl Into<String>) -> Self {
        self.bench_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssignmentConfig::default();
        assert_eq!(config.greedy_trials, 30);
        assert_eq!(config.swap_policy, SwapPolicy::FirstImprovement);
        assert_eq!(config.bench_name, "Bench");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AssignmentConfig = serde_json::from_str(r#"{"greedyTrials": 5}"#).unwrap();
        assert_eq!(config.greedy_trials, 5);
        assert_eq!(config.bench_name, "Bench");

        let policy: SwapPolicy = serde_json::from_str(r#""best-improvement""#).unwrap();
        assert_eq!(policy, SwapPolicy::BestImprovement);
    }
}
