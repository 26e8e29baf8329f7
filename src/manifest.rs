//! Xcode project manifest inspection
//!
//! Checks whether the notification sound is already referenced by the
//! project's pbxproj. This is detect-only: the pbxproj format is not worth
//! hand-patching, and Xcode picks the file up from the bundle directory on
//! the next build anyway. The manifest is treated as an opaque string and
//! never parsed or written back.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Outcome of scanning the manifest for a resource reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStatus {
    /// The manifest already carries a `name = "..."` or `path = "..."` entry
    /// for the resource
    AlreadyRegistered,
    /// No reference found; registration is left to Xcode
    NotRegistered,
}

/// Scan the pbxproj at `manifest_path` for a reference to `resource_name`.
///
/// The only hard failure is the manifest file not existing.
pub fn check(manifest_path: &Path, resource_name: &str) -> Result<ManifestStatus> {
    if !manifest_path.exists() {
        bail!("pbxproj file not found: {}", manifest_path.display());
    }

    let contents = fs::read_to_string(manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;

    let name_ref = format!("name = \"{}\"", resource_name);
    let path_ref = format!("path = \"{}\"", resource_name);

    if contents.contains(&name_ref) || contents.contains(&path_ref) {
        Ok(ManifestStatus::AlreadyRegistered)
    } else {
        Ok(ManifestStatus::NotRegistered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp_manifest(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("asset-gen-{}-{}.pbxproj", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_detects_name_reference() {
        let path = write_temp_manifest(
            "name-ref",
            "13B07FB71A68108700A75B9A /* notification.wav */ = {isa = PBXFileReference; name = \"notification.wav\"; };",
        );
        assert_eq!(
            check(&path, "notification.wav").unwrap(),
            ManifestStatus::AlreadyRegistered
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_detects_path_reference() {
        let path = write_temp_manifest(
            "path-ref",
            "13B07FB71A68108700A75B9A = {isa = PBXFileReference; path = \"notification.wav\"; sourceTree = \"<group>\"; };",
        );
        assert_eq!(
            check(&path, "notification.wav").unwrap(),
            ManifestStatus::AlreadyRegistered
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_reports_absent_reference() {
        let path = write_temp_manifest(
            "absent",
            "/* Begin PBXFileReference section */\npath = \"AppDelegate.swift\";\n",
        );
        assert_eq!(
            check(&path, "notification.wav").unwrap(),
            ManifestStatus::NotRegistered
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_substring_of_other_resource_does_not_match() {
        // "path = \"old-notification.wav\"" must not count as a reference to
        // notification.wav: the quoted-attribute pattern anchors the opening quote
        let path = write_temp_manifest(
            "near-miss",
            "path = \"old-notification.wav\";\nname = \"notification.wav.bak\";\n",
        );
        assert_eq!(
            check(&path, "notification.wav").unwrap(),
            ManifestStatus::NotRegistered
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let path = std::env::temp_dir().join("asset-gen-no-such-dir/project.pbxproj");
        assert!(check(&path, "notification.wav").is_err());
    }
}
