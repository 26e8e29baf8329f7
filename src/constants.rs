/// Application-wide constants for the generated assets

pub mod tone {
    /// Default beep length in seconds
    pub const DURATION_SECS: f64 = 0.5;

    /// Default beep pitch in Hz (800 Hz reads as a pleasant notification chime)
    pub const FREQUENCY_HZ: f64 = 800.0;

    /// Default sample rate in Hz
    pub const SAMPLE_RATE_HZ: u32 = 44100;

    /// Fraction of the clip covered by the fade-out ramp
    /// Fading the last 20% avoids an audible click at the end of playback
    pub const FADE_PORTION: f64 = 0.2;

    /// iOS rejects notification sounds of 30 seconds or longer
    pub const MAX_DURATION_SECS: f64 = 30.0;

    /// Default output filename for the notification sound
    pub const OUTPUT_FILENAME: &str = "notification.wav";
}

pub mod splash {
    /// Universal iOS splash canvas edge, in pixels (2732x2732 covers every device)
    pub const CANVAS_SIZE: u32 = 2732;

    /// Filenames the asset catalog expects for the three scale variants
    /// All three hold the same resolution; the catalog just wants three entries
    pub const VARIANT_FILENAMES: [&str; 3] = [
        "splash-2732x2732.png",
        "splash-2732x2732-1.png",
        "splash-2732x2732-2.png",
    ];

    /// Default output directory inside the iOS project
    pub const OUTPUT_DIR: &str = "ios/App/App/Assets.xcassets/Splash.imageset";
}

pub mod manifest {
    /// Default path of the Xcode project manifest relative to the repo root
    pub const PBXPROJ_PATH: &str = "ios/App/App.xcodeproj/project.pbxproj";
}
