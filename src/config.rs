use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants;

/// Default config filename looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "asset-gen.yaml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub tone: ToneConfig,
    #[serde(default)]
    pub splash: SplashConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToneConfig {
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: f64,
    #[serde(default = "default_sample_rate_hz")]
    pub sample_rate_hz: u32,
}

fn default_duration_secs() -> f64 {
    constants::tone::DURATION_SECS
}

fn default_frequency_hz() -> f64 {
    constants::tone::FREQUENCY_HZ
}

fn default_sample_rate_hz() -> u32 {
    constants::tone::SAMPLE_RATE_HZ
}

impl Default for ToneConfig {
    fn default() -> Self {
        ToneConfig {
            duration_secs: default_duration_secs(),
            frequency_hz: default_frequency_hz(),
            sample_rate_hz: default_sample_rate_hz(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplashConfig {
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default = "default_foreground")]
    pub foreground: [u8; 3],
}

fn default_canvas_size() -> u32 {
    constants::splash::CANVAS_SIZE
}

fn default_background() -> [u8; 3] {
    [0, 0, 0]
}

fn default_foreground() -> [u8; 3] {
    [255, 255, 255]
}

impl Default for SplashConfig {
    fn default() -> Self {
        SplashConfig {
            canvas_size: default_canvas_size(),
            background: default_background(),
            foreground: default_foreground(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tone: ToneConfig::default(),
            splash: SplashConfig::default(),
        }
    }
}

impl Config {
    /// Load a config file from an explicit path, failing if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Resolve the effective configuration: an explicit `--config` path must
    /// exist; otherwise `asset-gen.yaml` in the working directory is used when
    /// present, and the built-in defaults when not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate tone parameters
        if self.tone.duration_secs <= 0.0 {
            bail!("tone duration_secs must be greater than 0");
        }
        if self.tone.duration_secs >= constants::tone::MAX_DURATION_SECS {
            bail!(
                "tone duration_secs must be under {} seconds (iOS notification limit)",
                constants::tone::MAX_DURATION_SECS
            );
        }
        if self.tone.frequency_hz <= 0.0 {
            bail!("tone frequency_hz must be greater than 0");
        }
        if self.tone.sample_rate_hz == 0 {
            bail!("tone sample_rate_hz must be greater than 0");
        }

        // Validate splash parameters
        if self.splash.canvas_size == 0 {
            bail!("splash canvas_size must be greater than 0");
        }

        Ok(())
    }
}
