/// Highest score a parsed participant may carry; larger values are clamped down
pub const MAX_SCORE: f64 = 28.0;

/// Lowest score a parsed participant may carry; negatives and NaN become this
pub const MIN_SCORE: f64 = 0.0;

/// Score given to a name-only entry in the default input mode
pub const NAME_ONLY_SCORE: f64 = 50.0;

/// Number of independent shuffles the greedy strategy tries before keeping the best
pub const GREEDY_TRIALS: usize = 30;

/// Team id reserved for the leftover group
pub const BENCH_TEAM_ID: &str = "bench";

/// Display name of the leftover group
pub const BENCH_TEAM_NAME: &str = "Bench";

/// Prefix for participant ids ("player-1", "player-2", ...)
pub const PARTICIPANT_ID_PREFIX: &str = "player-";

/// Prefix for regular team ids ("team-1", "team-2", ...)
pub const TEAM_ID_PREFIX: &str = "team-";
