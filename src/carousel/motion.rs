//! Reduced-motion capability.
//!
//! Whether the user prefers reduced motion is a property of the host
//! environment, and the probe may simply not exist (headless sessions, CI,
//! non-GNOME desktops). Providers report failures as errors; `resolve`
//! turns any failure into "no preference" so the carousel never sees them.

use std::process::Command;
use thiserror::Error;

/// Why a reduced-motion probe could not answer
#[derive(Debug, Error)]
pub enum MotionQueryError {
    #[error("reduced-motion probe unavailable: {0}")]
    Unavailable(String),

    #[error("unrecognized reduced-motion value: {0:?}")]
    Unrecognized(String),
}

/// Capability that answers "does the user prefer reduced motion?"
pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> Result<bool, MotionQueryError>;
}

/// Fixed answer, for explicit configuration and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMotionPreference(pub bool);

impl MotionPreference for FixedMotionPreference {
    fn prefers_reduced_motion(&self) -> Result<bool, MotionQueryError> {
        Ok(self.0)
    }
}

/// Desktop probe: GNOME's `enable-animations` setting via `gsettings`
///
/// Animations disabled on the desktop means reduced motion is preferred.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopMotionPreference;

impl DesktopMotionPreference {
    const SCHEMA: &'static str = "org.gnome.desktop.interface";
    const KEY: &'static str = "enable-animations";

    /// Interpret `gsettings get` output
    fn parse(output: &str) -> Result<bool, MotionQueryError> {
        match output.trim() {
            "true" => Ok(false),
            "false" => Ok(true),
            other => Err(MotionQueryError::Unrecognized(other.to_string())),
        }
    }
}

impl MotionPreference for DesktopMotionPreference {
    fn prefers_reduced_motion(&self) -> Result<bool, MotionQueryError> {
        let output = Command::new("gsettings")
            .args(["get", Self::SCHEMA, Self::KEY])
            .output()
            .map_err(|e| MotionQueryError::Unavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(MotionQueryError::Unavailable(format!(
                "gsettings exited with {}",
                output.status
            )));
        }

        Self::parse(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Query a provider, defaulting to "no preference" when absent or failing
pub fn resolve(provider: Option<&dyn MotionPreference>) -> bool {
    let Some(provider) = provider else {
        return false;
    };

    match provider.prefers_reduced_motion() {
        Ok(reduced) => reduced,
        Err(e) => {
            tracing::warn!("Reduced-motion query failed, assuming no preference: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenProbe;

    impl MotionPreference for BrokenProbe {
        fn prefers_reduced_motion(&self) -> Result<bool, MotionQueryError> {
            Err(MotionQueryError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn test_missing_provider_means_motion() {
        assert!(!resolve(None));
    }

    #[test]
    fn test_failing_provider_means_motion() {
        assert!(!resolve(Some(&BrokenProbe)));
    }

    #[test]
    fn test_fixed_provider_passes_through() {
        assert!(resolve(Some(&FixedMotionPreference(true))));
        assert!(!resolve(Some(&FixedMotionPreference(false))));
    }

    #[test]
    fn test_gsettings_output_parsing() {
        assert!(!DesktopMotionPreference::parse("true\n").unwrap());
        assert!(DesktopMotionPreference::parse("false").unwrap());
        assert!(matches!(
            DesktopMotionPreference::parse("'maybe'"),
            Err(MotionQueryError::Unrecognized(_))
        ));
    }
}
