//! Named opponent profiles, loaded from TOML at runtime for the arena CLI.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::engine::opponent::{MinimaxOpponent, Opponent, RandomOpponent};

/// A named opponent configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct OpponentProfile {
    pub description: Option<String>,
    #[serde(default = "default_strategy_type")]
    pub strategy_type: String,
    /// RNG seed for the random strategy. Unseeded when absent.
    pub seed: Option<u64>,
    /// Search depth for the minimax strategy. Full depth when absent.
    pub search_depth: Option<usize>,
}

fn default_strategy_type() -> String {
    "random".into()
}

/// Top-level TOML file structure.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: HashMap<String, OpponentProfile>,
}

impl OpponentProfile {
    /// Instantiate the configured strategy.
    pub fn build(&self) -> Result<Box<dyn Opponent>, String> {
        match self.strategy_type.as_str() {
            "random" => Ok(match self.seed {
                Some(seed) => Box::new(RandomOpponent::seeded(seed)),
                None => Box::new(RandomOpponent::new()),
            }),
            "minimax" => Ok(match self.search_depth {
                Some(depth) => Box::new(MinimaxOpponent::with_depth(depth)),
                None => Box::new(MinimaxOpponent::new()),
            }),
            other => Err(format!("unknown strategy type '{}'", other)),
        }
    }
}

/// Load profiles from a TOML file at the given path.
pub fn load_profiles(path: &Path) -> Result<ProfilesFile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Try to load profiles from well-known paths, returning an empty set if
/// none is found.
pub fn load_default_profiles() -> ProfilesFile {
    let candidates = [
        "opponent_profiles.toml",
        "../opponent_profiles.toml",
        "/etc/tictactoe/opponent_profiles.toml",
    ];
    for path in &candidates {
        let p = Path::new(path);
        if p.exists() {
            match load_profiles(p) {
                Ok(profiles) => {
                    tracing::info!(path = %p.display(), count = profiles.profiles.len(), "loaded opponent profiles");
                    return profiles;
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load opponent profiles");
                }
            }
        }
    }
    tracing::info!("no opponent_profiles.toml found, using built-in defaults");
    ProfilesFile::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_profiles_toml() {
        let toml_str = r#"
            [profiles.shuffler]
            description = "Seeded random baseline"
            strategy_type = "random"
            seed = 42

            [profiles.perfect]
            strategy_type = "minimax"

            [profiles.shallow]
            strategy_type = "minimax"
            search_depth = 2
        "#;
        let file: ProfilesFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.profiles.len(), 3);

        let shuffler = &file.profiles["shuffler"];
        assert_eq!(shuffler.strategy_type, "random");
        assert_eq!(shuffler.seed, Some(42));
        assert!(shuffler.build().is_ok());

        let perfect = &file.profiles["perfect"];
        assert_eq!(perfect.search_depth, None);
        assert_eq!(perfect.build().unwrap().name(), "minimax");
    }

    #[test]
    fn test_default_strategy_type_is_random() {
        let file: ProfilesFile = toml::from_str("[profiles.plain]\n").unwrap();
        let plain = &file.profiles["plain"];
        assert_eq!(plain.strategy_type, "random");
        assert_eq!(plain.build().unwrap().name(), "random");
    }

    #[test]
    fn test_unknown_strategy_type_rejected() {
        let profile = OpponentProfile {
            description: None,
            strategy_type: "mcts".into(),
            seed: None,
            search_depth: None,
        };
        assert!(profile.build().is_err());
    }

    #[test]
    fn test_load_profiles_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "[profiles.perfect]\nstrategy_type = \"minimax\"\n"
        )
        .unwrap();

        let file = load_profiles(tmp.path()).unwrap();
        assert!(file.profiles.contains_key("perfect"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(load_profiles(Path::new("/nonexistent/profiles.toml")).is_err());
    }
}
