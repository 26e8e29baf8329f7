mod config;
mod constants;
mod manifest;
mod splash;
mod tone;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use config::{Config, ToneConfig};
use manifest::ManifestStatus;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "asset-gen")]
#[command(about = "Build-time asset generation for the mobile app", long_about = None)]
struct Cli {
    /// Path to a YAML config file (defaults to ./asset-gen.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the notification beep as a mono 16-bit PCM WAV file
    Sound {
        /// Output WAV path
        #[arg(short, long, default_value = constants::tone::OUTPUT_FILENAME)]
        output: PathBuf,
        /// Beep duration in seconds (must stay under 30 for iOS)
        #[arg(long)]
        duration: Option<f64>,
        /// Beep frequency in Hz
        #[arg(long)]
        frequency: Option<f64>,
        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,
    },
    /// Check whether the sound file is referenced by the Xcode project
    RegisterSound {
        /// Path to the project.pbxproj manifest
        #[arg(long, default_value = constants::manifest::PBXPROJ_PATH)]
        project: PathBuf,
        /// Resource filename to look for
        #[arg(long, default_value = constants::tone::OUTPUT_FILENAME)]
        file: String,
    },
    /// Render the splash screen PNGs into the asset catalog
    Splash {
        /// Directory to write the splash variants into (created if absent)
        #[arg(long, default_value = constants::splash::OUTPUT_DIR)]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Sound {
            output,
            duration,
            frequency,
            sample_rate,
        } => sound_command(&config, output, duration, frequency, sample_rate),
        Commands::RegisterSound { project, file } => register_sound_command(&project, &file),
        Commands::Splash { out_dir } => splash_command(&config, &out_dir),
    }
}

fn sound_command(
    config: &Config,
    output: PathBuf,
    duration: Option<f64>,
    frequency: Option<f64>,
    sample_rate: Option<u32>,
) -> Result<()> {
    // CLI flags override the config file, which overrides the built-in defaults
    let tone_config = ToneConfig {
        duration_secs: duration.unwrap_or(config.tone.duration_secs),
        frequency_hz: frequency.unwrap_or(config.tone.frequency_hz),
        sample_rate_hz: sample_rate.unwrap_or(config.tone.sample_rate_hz),
    };

    let effective = Config {
        tone: tone_config.clone(),
        splash: config.splash.clone(),
    };
    effective.validate()?;

    let sample_count = tone::generate(&tone_config, &output)?;

    println!("✓ Generated notification sound: {}", output.display());
    println!("   Duration: {}s", tone_config.duration_secs);
    println!("   Frequency: {}Hz", tone_config.frequency_hz);
    println!("   Sample rate: {}Hz", tone_config.sample_rate_hz);
    println!("   Samples: {}", sample_count);

    // Sanity check that the write actually landed on disk
    match fs::metadata(&output) {
        Ok(meta) => println!("✓ File created successfully: {} bytes", meta.len()),
        Err(_) => bail!("Failed to create {}", output.display()),
    }

    Ok(())
}

fn register_sound_command(project: &Path, file: &str) -> Result<()> {
    match manifest::check(project, file)? {
        ManifestStatus::AlreadyRegistered => {
            println!("✓ {} is already in the project", file);
        }
        ManifestStatus::NotRegistered => {
            println!("ℹ Checking {} registration...", file);
            println!("⚠ pbxproj modification requires manual setup or specialized tools");
            println!("✓ Sound file is in the correct location: {}", file);
            println!("💡 The file will be picked up by Xcode on next build");
        }
    }

    Ok(())
}

fn splash_command(config: &Config, out_dir: &Path) -> Result<()> {
    config.validate()?;

    let img = splash::render(&config.splash);
    let written = splash::write_variants(&img, out_dir)?;

    println!("✓ Splash screens generated successfully");
    for path in written {
        println!("  - {}", path.display());
    }

    Ok(())
}
