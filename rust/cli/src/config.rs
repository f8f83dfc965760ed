use holdem_engine::engine::EngineConfig;
use holdem_engine::player::{RAISE_INCREMENT, STARTING_STACK};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub starting_stack: u32,
    pub raise_increment: u32,
    pub settle_ticks: u32,
    pub seed: Option<u64>,
    pub policy: String,
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
    pub starting_stack: ValueSource,
    pub raise_increment: ValueSource,
    pub settle_ticks: ValueSource,
    pub seed: ValueSource,
    pub policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            raise_increment: ValueSource::Default,
            settle_ticks: ValueSource::Default,
            seed: ValueSource::Default,
            policy: ValueSource::Default,
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
            starting_stack: STARTING_STACK,
            raise_increment: RAISE_INCREMENT,
            settle_ticks: EngineConfig::default().settle_ticks,
            seed: None,
            policy: "call-or-shove".into(),
        }
    }
}

impl Config {
    /// Engine settings for this configuration, with `seed` taking precedence
    /// over the configured one.
    pub fn engine_config(&self, seed: Option<u64>) -> EngineConfig {
        EngineConfig {
            starting_stack: self.starting_stack,
            raise_increment: self.raise_increment,
            settle_ticks: self.settle_ticks,
            seed: seed.or(self.seed),
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolves defaults, then the TOML file named by `HOLDEM_CONFIG`, then
/// `HOLDEM_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.raise_increment {
            cfg.raise_increment = v;
            sources.raise_increment = ValueSource::File;
        }
        if let Some(v) = f.settle_ticks {
            cfg.settle_ticks = v;
            sources.settle_ticks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
    }

    if let Some(v) = env_number("HOLDEM_STARTING_STACK")? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_number("HOLDEM_RAISE_INCREMENT")? {
        cfg.raise_increment = v;
        sources.raise_increment = ValueSource::Env;
    }
    if let Some(v) = env_number("HOLDEM_SETTLE_TICKS")? {
        cfg.settle_ticks = v;
        sources.settle_ticks = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("HOLDEM_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(policy) = std::env::var("HOLDEM_POLICY")
        && !policy.is_empty()
    {
        cfg.policy = policy;
        sources.policy = ValueSource::Env;
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
    starting_stack: Option<u32>,
    #[serde(default)]
    raise_increment: Option<u32>,
    #[serde(default)]
    settle_ticks: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    policy: Option<String>,
}

fn env_number(key: &str) -> Result<Option<u32>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", key, v))),
        _ => Ok(None),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.raise_increment == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: raise_increment must be >0".into(),
        ));
    }
    holdem_engine::policy::create_policy(&cfg.policy)
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    Ok(())
}
