//! Splash screen rendering
//!
//! Draws the app logo (a stylized hammer with a lightning-bolt cutout)
//! centered on a solid square canvas and writes the three scale-variant PNGs
//! the iOS asset catalog expects. All logo geometry is expressed as fixed
//! pixel offsets from the canvas center.

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SplashConfig;
use crate::constants::splash::VARIANT_FILENAMES;

/// Hammer handle quadrilateral, as (dx, dy) offsets from the canvas center
const HANDLE_OFFSETS: [(i32, i32); 4] = [(-90, 150), (-48, 192), (120, -36), (78, -78)];

/// Hammer head quadrilateral
const HEAD_OFFSETS: [(i32, i32); 4] = [(48, -120), (168, -60), (138, 0), (18, -60)];

/// Lightning bolt accent, drawn in the background color on top of the head
const LIGHTNING_OFFSETS: [(i32, i32); 6] = [
    (84, -48),
    (72, -12),
    (93, -12),
    (75, 18),
    (87, -6),
    (78, -6),
];

/// Fill a polygon with an even-odd scanline pass.
///
/// Each scanline is tested against the pixel-center row (y + 0.5); pixels
/// whose centers fall between an odd/even crossing pair are painted.
/// Out-of-bounds spans are clipped rather than treated as an error.
fn fill_polygon(img: &mut RgbImage, points: &[(i32, i32)], color: Rgb<u8>) {
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.1).min().unwrap();
    let max_y = points.iter().map(|p| p.1).max().unwrap();
    let mut crossings: Vec<f64> = Vec::new();

    for y in min_y..=max_y {
        if y < 0 || y as u32 >= img.height() {
            continue;
        }
        let scan = y as f64 + 0.5;

        crossings.clear();
        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);

            // Half-open edge rule: horizontal edges drop out, shared vertices
            // count exactly once
            if (y0 <= scan) != (y1 <= scan) {
                let t = (scan - y0) / (y1 - y0);
                crossings.push(x0 + t * (x1 - x0));
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil() as i32;
            let end = (pair[1] - 0.5).floor() as i32;
            for x in start..=end {
                if x >= 0 && (x as u32) < img.width() {
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

fn centered(offsets: &[(i32, i32)], cx: i32, cy: i32) -> Vec<(i32, i32)> {
    offsets.iter().map(|&(dx, dy)| (cx + dx, cy + dy)).collect()
}

/// Render the splash canvas: solid background with the centered logo.
pub fn render(config: &SplashConfig) -> RgbImage {
    let size = config.canvas_size;
    let background = Rgb(config.background);
    let foreground = Rgb(config.foreground);

    let mut img = RgbImage::from_pixel(size, size, background);

    let cx = (size / 2) as i32;
    let cy = (size / 2) as i32;

    fill_polygon(&mut img, &centered(&HANDLE_OFFSETS, cx, cy), foreground);
    fill_polygon(&mut img, &centered(&HEAD_OFFSETS, cx, cy), foreground);
    // the bolt punches back through to the background color
    fill_polygon(&mut img, &centered(&LIGHTNING_OFFSETS, cx, cy), background);

    img
}

/// Write the rendered splash under each asset-catalog variant filename.
///
/// Creates `out_dir` (and any missing parents) first. Returns the paths
/// written, in catalog order.
pub fn write_variants(img: &RgbImage, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(VARIANT_FILENAMES.len());
    for name in VARIANT_FILENAMES {
        let path = out_dir.join(name);
        img.save(&path)
            .with_context(|| format!("Failed to save splash image {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
