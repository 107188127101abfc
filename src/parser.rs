//! Free-form roster text to participant records.
//!
//! Input is split on newlines, commas and slashes. Every non-empty token gets a
//! 1-based position, and a participant built from token `n` has id `player-n`
//! whether or not earlier tokens were dropped, so ids stay stable across modes.
//! Parsing never fails: tokens that cannot be read are skipped.

use std::fmt;
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCORE, MIN_SCORE, NAME_ONLY_SCORE};
use crate::error::BalanceError;
use crate::participant::Participant;

const NUMBER: &str = r"(-?\d+(?:\.\d+)?)";

static TOKEN_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n,/]").expect("valid regex"));

/// "name score", "name, score", "name: score", "name - score", tried in order
static DEFAULT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"^(.+?)\s+{}$", NUMBER),
        format!(r"^(.+?),\s*{}$", NUMBER),
        format!(r"^(.+?):\s*{}$", NUMBER),
        format!(r"^(.+?)\s*-\s*{}$", NUMBER),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Name, one separator, mandatory score. Whitespace is tried first so that a minus
/// sign written against the digits ("Kim -5") stays part of the number.
static SCORED_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(.+?)(?:\s+|\s*[,:]\s*|\s*-\s*){}$", NUMBER)).expect("valid regex")
});

static NUMERIC_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,:/-]+\d.*$").expect("valid regex"));

/// How scores in the roster text are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// Optional score in 0-28; a bare name gets the name-only score.
    #[default]
    Default,
    /// Score required and clamped to 0-28; tokens without one are dropped.
    ScreenAssignment,
    /// Names only; any trailing number is stripped and every score is 0.
    GeneralAssignment,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Default => "default",
            InputMode::ScreenAssignment => "screen-assignment",
            InputMode::GeneralAssignment => "general-assignment",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(InputMode::Default),
            "screen-assignment" => Ok(InputMode::ScreenAssignment),
            "general-assignment" => Ok(InputMode::GeneralAssignment),
            other => Err(BalanceError::UnknownInputMode(other.to_string())),
        }
    }
}

/// Clamp a parsed score into [`MIN_SCORE`, `MAX_SCORE`]; NaN becomes `MIN_SCORE`.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() || score < MIN_SCORE {
        MIN_SCORE
    } else if score > MAX_SCORE {
        MAX_SCORE
    } else {
        score
    }
}

/// Split roster text into trimmed, non-empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_DELIMITER
        .split(text)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse roster text into participants under `mode`.
pub fn parse_participants(text: &str, mode: InputMode) -> Vec<Participant> {
    let tokens = tokenize(text);
    let participants: Vec<Participant> = tokens
        .iter()
        .enumerate()
        .filter_map(|(index, token)| {
            let (name, score) = match mode {
                InputMode::Default => parse_default(token),
                InputMode::ScreenAssignment => parse_scored(token),
                InputMode::GeneralAssignment => parse_name_only(token),
            }?;
            Some(Participant::at_position(index + 1, name, score))
        })
        .collect();

    debug!(
        "parsed {} participants from {} tokens ({} mode)",
        participants.len(),
        tokens.len(),
        mode
    );
    participants
}

fn parse_default(token: &str) -> Option<(String, f64)> {
    for pattern in DEFAULT_PATTERNS.iter() {
        if let Some(parsed) = capture_name_and_score(pattern, token) {
            return Some(parsed);
        }
    }
    Some((token.to_string(), NAME_ONLY_SCORE))
}

fn parse_scored(token: &str) -> Option<(String, f64)> {
    capture_name_and_score(&SCORED_TOKEN, token)
}

fn parse_name_only(token: &str) -> Option<(String, f64)> {
    let name = NUMERIC_SUFFIX.replace(token, "");
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some((name.to_string(), 0.0))
    }
}

fn capture_name_and_score(pattern: &Regex, token: &str) -> Option<(String, f64)> {
    let caps = pattern.captures(token)?;
    let raw = caps.get(1)?.as_str();
    // "Park - 3" matches the whitespace pattern first with "Park -" as the name
    let trimmed = raw
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | ','))
        .trim();
    // a name made only of separators ("- 5") is kept as written
    let name = if trimmed.is_empty() { raw.trim() } else { trimmed };
    if name.is_empty() {
        return None;
    }
    let score = caps.get(2)?.as_str().parse::<f64>().unwrap_or(f64::NAN);
    Some((name.to_string(), clamp_score(score)))
}

/// Inclusive score bounds for narrowing a parsed roster. Missing bounds are open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ScoreRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        ScoreRange { min, max }
    }

    pub fn contains(&self, score: f64) -> bool {
        self.min.map_or(true, |min| score >= min) && self.max.map_or(true, |max| score <= max)
    }

    /// Keep the participants whose score falls inside the range, preserving order.
    pub fn filter(&self, participants: &[Participant]) -> Vec<Participant> {
        participants
            .iter()
            .filter(|p| self.contains(p.score))
            .cloned()
            .collect()
    }
}
