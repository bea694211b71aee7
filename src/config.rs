//! Runtime configuration from environment variables.
//!
//! - `BLOCKFALL_SEED`: piece RNG seed (default: derived from the system clock)
//! - `BLOCKFALL_LOG_PATH`: append a JSONL event log to this file (default: off)
//! - `BLOCKFALL_CELL_WIDTH`: terminal columns per board cell, 1-4 (default: 2)
//!
//! Unparseable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_CELL_WIDTH: u16 = 2;
pub const MAX_CELL_WIDTH: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_path: Option<String>,
    pub cell_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl Config {
    /// Read the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests)
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let cell_width = lookup("BLOCKFALL_CELL_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_CELL_WIDTH)
            .clamp(1, MAX_CELL_WIDTH);

        Self {
            seed,
            log_path,
            cell_width,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_reads_all_variables() {
        let cfg = config(&[
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_LOG_PATH", " /tmp/blockfall.jsonl "),
            ("BLOCKFALL_CELL_WIDTH", "3"),
        ]);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/blockfall.jsonl"));
        assert_eq!(cfg.cell_width, 3);
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.cell_width, DEFAULT_CELL_WIDTH);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            ("BLOCKFALL_LOG_PATH", "   "),
            ("BLOCKFALL_CELL_WIDTH", "wide"),
        ]);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.cell_width, DEFAULT_CELL_WIDTH);
    }

    #[test]
    fn test_cell_width_is_clamped() {
        assert_eq!(config(&[("BLOCKFALL_CELL_WIDTH", "0")]).cell_width, 1);
        assert_eq!(config(&[("BLOCKFALL_CELL_WIDTH", "9")]).cell_width, MAX_CELL_WIDTH);
    }
}
