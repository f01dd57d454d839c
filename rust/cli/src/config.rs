//! Layered configuration: built-in defaults, then an optional TOML file named
//! by `SHOWDOWN_CONFIG`, then `SHOWDOWN_*` environment variables.
//!
//! Every resolved value remembers which layer it came from so `cfg` can show it.

use serde::{Deserialize, Serialize};
use showdown_ai::{Difficulty, DifficultyConfig};
use std::fs;

pub const ENV_CONFIG: &str = "SHOWDOWN_CONFIG";
pub const ENV_DIFFICULTY: &str = "SHOWDOWN_DIFFICULTY";
pub const ENV_SEED: &str = "SHOWDOWN_SEED";
pub const ENV_MIN_RAISE: &str = "SHOWDOWN_MIN_RAISE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    /// Raise size used when the AI raises.
    pub min_raise: u32,
    /// Decision thresholds: the difficulty preset, with any file overrides.
    pub thresholds: DifficultyConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub difficulty: ValueSource,
    pub seed: ValueSource,
    pub min_raise: ValueSource,
    pub thresholds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            difficulty: ValueSource::Default,
            seed: ValueSource::Default,
            min_raise: ValueSource::Default,
            thresholds: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: None,
            min_raise: 20,
            thresholds: Difficulty::Medium.config(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let mut overrides = ThresholdOverrides::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.difficulty {
            cfg.difficulty = parse_difficulty(&v)?;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.min_raise {
            cfg.min_raise = v;
            sources.min_raise = ValueSource::File;
        }
        if let Some(t) = f.thresholds {
            overrides = t;
        }
    }

    if let Ok(d) = std::env::var(ENV_DIFFICULTY)
        && !d.is_empty()
    {
        cfg.difficulty = parse_difficulty(&d)?;
        sources.difficulty = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(raise) = std::env::var(ENV_MIN_RAISE)
        && !raise.is_empty()
    {
        cfg.min_raise = raise
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid min_raise: {}", raise)))?;
        sources.min_raise = ValueSource::Env;
    }

    // thresholds follow the final difficulty, whichever layer chose it
    cfg.thresholds = overrides.apply(cfg.difficulty.config());
    if !overrides.is_empty() {
        sources.thresholds = ValueSource::File;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    min_raise: Option<u32>,
    #[serde(default)]
    thresholds: Option<ThresholdOverrides>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThresholdOverrides {
    fold: Option<f64>,
    call: Option<f64>,
    raise: Option<f64>,
    variance_min: Option<f64>,
    variance_range: Option<f64>,
    pot_odds: Option<f64>,
}

impl ThresholdOverrides {
    fn is_empty(&self) -> bool {
        self.fold.is_none()
            && self.call.is_none()
            && self.raise.is_none()
            && self.variance_min.is_none()
            && self.variance_range.is_none()
            && self.pot_odds.is_none()
    }

    fn apply(&self, base: DifficultyConfig) -> DifficultyConfig {
        DifficultyConfig {
            fold_threshold: self.fold.unwrap_or(base.fold_threshold),
            call_threshold: self.call.unwrap_or(base.call_threshold),
            raise_threshold: self.raise.unwrap_or(base.raise_threshold),
            variance_min: self.variance_min.unwrap_or(base.variance_min),
            variance_range: self.variance_range.unwrap_or(base.variance_range),
            pot_odds_threshold: self.pot_odds.unwrap_or(base.pot_odds_threshold),
        }
    }
}

fn parse_difficulty(s: &str) -> Result<Difficulty, ConfigError> {
    s.parse()
        .map_err(|e: showdown_ai::ParseDifficultyError| ConfigError::Invalid(e.to_string()))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.min_raise == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_raise must be >0".into(),
        ));
    }
    cfg.thresholds
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}
