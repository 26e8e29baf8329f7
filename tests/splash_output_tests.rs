// Full-resolution splash render checks plus the asset-catalog file layout.

use asset_gen::config::SplashConfig;
use asset_gen::splash;
use image::Rgb;
use std::fs;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "asset-gen-splash-tests-{}-{}",
        name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn full_resolution_render_has_centered_logo_on_black() {
    let config = SplashConfig {
        canvas_size: 2732,
        background: [0, 0, 0],
        foreground: [255, 255, 255],
    };
    let img = splash::render(&config);
    assert_eq!(img.dimensions(), (2732, 2732));

    // all four corners stay background
    for &(x, y) in &[(0, 0), (2731, 0), (0, 2731), (2731, 2731)] {
        assert_eq!(*img.get_pixel(x, y), Rgb([0, 0, 0]));
    }

    // the central region carries the white logo
    let (cx, cy) = (1366u32, 1366u32);
    let mut white_pixels = 0usize;
    for y in (cy - 250)..(cy + 250) {
        for x in (cx - 250)..(cx + 250) {
            if *img.get_pixel(x, y) == Rgb([255, 255, 255]) {
                white_pixels += 1;
            }
        }
    }
    assert!(white_pixels > 1000, "logo missing: {} white pixels", white_pixels);

    // the lightning bolt punches back through to black inside the head
    assert_eq!(*img.get_pixel(cx + 80, cy - 30), Rgb([0, 0, 0]));
    // the head itself is white just above the bolt
    assert_eq!(*img.get_pixel(cx + 90, cy - 59), Rgb([255, 255, 255]));
}

#[test]
fn write_variants_creates_all_three_catalog_entries() {
    let out_dir = temp_dir("variants").join("Splash.imageset");
    let config = SplashConfig {
        canvas_size: 600,
        background: [0, 0, 0],
        foreground: [255, 255, 255],
    };
    let img = splash::render(&config);
    let written = splash::write_variants(&img, &out_dir).unwrap();

    assert_eq!(written.len(), 3);
    assert_eq!(written[0], out_dir.join("splash-2732x2732.png"));
    assert_eq!(written[1], out_dir.join("splash-2732x2732-1.png"));
    assert_eq!(written[2], out_dir.join("splash-2732x2732-2.png"));

    for path in &written {
        let loaded = image::open(path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (600, 600));
    }

    // all three variants are the same image
    let bytes: Vec<Vec<u8>> = written.iter().map(|p| fs::read(p).unwrap()).collect();
    assert_eq!(bytes[0], bytes[1]);
    assert_eq!(bytes[0], bytes[2]);
}

#[test]
fn write_variants_creates_missing_parent_directories() {
    let out_dir = temp_dir("nested")
        .join("ios/App/App/Assets.xcassets/Splash.imageset");
    let config = SplashConfig {
        canvas_size: 64,
        background: [0, 0, 0],
        foreground: [255, 255, 255],
    };
    let img = splash::render(&config);
    splash::write_variants(&img, &out_dir).unwrap();

    assert!(out_dir.join("splash-2732x2732.png").exists());
}
