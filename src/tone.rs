//! Notification sound synthesis
//!
//! Generates a short mono sine beep and writes it as an uncompressed 16-bit
//! PCM WAV file. The last 20% of the clip is faded out linearly so playback
//! does not end with an audible click.

use anyhow::{Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::PI;
use std::path::Path;

use crate::config::ToneConfig;
use crate::constants::tone::FADE_PORTION;

/// Fade-out multiplier for sample `i` of a clip with `count` samples.
///
/// Samples in the first 80% of the clip pass through at full amplitude;
/// beyond that the factor ramps linearly from 1.0 down toward 0.0 at the
/// final sample.
pub fn fade_factor(i: usize, count: usize) -> f64 {
    let fade_start = count as f64 * (1.0 - FADE_PORTION);
    if i as f64 > fade_start {
        (count - i) as f64 / (count as f64 * FADE_PORTION)
    } else {
        1.0
    }
}

/// Synthesize the beep as a buffer of signed 16-bit PCM samples.
///
/// The sample count is `floor(duration * sample_rate)`. Quantization
/// multiplies by 32767 and truncates toward zero, so every sample lies in
/// `[-32767, 32767]`. Frequencies at or above Nyquist alias silently.
pub fn synthesize(config: &ToneConfig) -> Vec<i16> {
    let count = (config.duration_secs * config.sample_rate_hz as f64) as usize;
    let mut samples = Vec::with_capacity(count);

    for i in 0..count {
        let raw = (2.0 * PI * config.frequency_hz * i as f64 / config.sample_rate_hz as f64).sin();
        let faded = raw * fade_factor(i, count);
        samples.push((faded * 32767.0) as i16);
    }

    samples
}

/// Write PCM samples as a mono 16-bit WAV file at the given sample rate.
///
/// An empty sample buffer still produces a structurally valid WAV with an
/// empty data chunk. On a failed write the partial file is left as-is.
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file at {}", path.display()))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .with_context(|| format!("Failed to write sample data to {}", path.display()))?;
    }

    // finalize patches the header chunk sizes; without it the file is invalid
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file at {}", path.display()))?;

    Ok(())
}

/// Synthesize the configured beep and write it to `path`.
///
/// Returns the number of samples written.
pub fn generate(config: &ToneConfig, path: &Path) -> Result<usize> {
    let samples = synthesize(config);
    write_wav(path, &samples, config.sample_rate_hz)?;
    Ok(samples.len())
}
