use std::collections::HashSet;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Environment variable read by [`GameConfig::from_env`] for a fixed shuffle.
pub const SEED_ENV: &str = "PRESIDENT_SEED";
/// Environment variable holding comma-separated player names.
pub const PLAYERS_ENV: &str = "PRESIDENT_PLAYERS";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("need at least 2 players, got {0}")]
    TooFewPlayers(usize),
    #[error("at most 8 players fit a 52-card deal, got {0}")]
    TooManyPlayers(usize),
    #[error("player names must not be blank")]
    EmptyName,
    #[error("duplicate player name: '{0}'")]
    DuplicateName(String),
    #[error("invalid seed: '{0}'")]
    InvalidSeed(String),
}

/// Table setup for a new game.
///
/// ```
/// use president_rs::config::GameConfig;
///
/// let cfg = GameConfig::default().with_players(4).with_seed(Some(7));
/// assert_eq!(cfg.player_names, vec!["P1", "P2", "P3", "P4"]);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub player_names: Vec<String>,
    /// Fixed shuffle seed; `None` shuffles from OS randomness.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { player_names: default_names(3), seed: None }
    }
}

fn default_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("P{i}")).collect()
}

impl GameConfig {
    /// Replace the table with `n` default-named players.
    pub fn with_players(mut self, n: usize) -> Self {
        self.player_names = default_names(n);
        self
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn num_players(&self) -> usize {
        self.player_names.len()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.player_names.len();
        if n < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(n));
        }
        if n > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(n));
        }
        let mut seen = HashSet::new();
        for name in &self.player_names {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }
        Ok(())
    }

    /// Defaults overridden by `PRESIDENT_SEED` and `PRESIDENT_PLAYERS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed(raw))?;
            cfg.seed = Some(seed);
        }
        if let Some(raw) = lookup(PLAYERS_ENV) {
            cfg.player_names = raw.split(',').map(|s| s.trim().to_string()).collect();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_players_unseeded() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.num_players(), 3);
        assert_eq!(cfg.seed, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn player_count_bounds() {
        assert_eq!(
            GameConfig::default().with_players(1).validate(),
            Err(ConfigError::TooFewPlayers(1))
        );
        assert_eq!(
            GameConfig::default().with_players(9).validate(),
            Err(ConfigError::TooManyPlayers(9))
        );
    }

    #[test]
    fn names_must_be_present_and_unique() {
        let cfg = GameConfig::default().with_names(["Ana", " "]);
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyName));
        let cfg = GameConfig::default().with_names(["Ana", "Bo", "Ana"]);
        assert_eq!(cfg.validate(), Err(ConfigError::DuplicateName("Ana".into())));
    }

    #[test]
    fn lookup_reads_seed_and_names() {
        let cfg = GameConfig::from_lookup(|k| match k {
            SEED_ENV => Some("42".into()),
            PLAYERS_ENV => Some("Elias, Axel,Tito".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.player_names, vec!["Elias", "Axel", "Tito"]);
    }

    #[test]
    fn lookup_rejects_bad_seed() {
        let err = GameConfig::from_lookup(|k| (k == SEED_ENV).then(|| "abc".to_string()));
        assert_eq!(err, Err(ConfigError::InvalidSeed("abc".into())));
    }
}
