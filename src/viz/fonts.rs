//! Registration of a "sans-serif" font for the `ab_glyph` text path.
//!
//! `ab_glyph` does not discover OS fonts, so a TrueType file has to be registered by hand. The
//! registry is process-global: a figure whose `font_path` differs from the registered one replaces
//! it, and figures without a `font_path` keep whatever was registered last, falling back to common
//! system locations. When nothing usable is found the figure is still rendered, only without text.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};
use plotters::style::{FontStyle, register_font};

use crate::config::ExportConfig;

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug)]
struct FontState {
    /// Last `font_path` that registered successfully.
    configured: Option<PathBuf>,
    /// Outcome of the system font scan, once it has run.
    system: Option<bool>,
}

impl FontState {
    const fn new() -> Self {
        FontState {
            configured: None,
            system: None,
        }
    }

    fn ensure(&mut self, wanted: Option<&Path>, mut register: impl FnMut(&Path) -> bool) -> bool {
        if let Some(path) = wanted {
            if self.configured.as_deref() == Some(path) {
                return true;
            }
            if register(path) {
                debug!("registered font {}", path.display());
                self.configured = Some(path.to_path_buf());
                return true;
            }
            warn!("cannot use font {}; falling back", path.display());
        }
        if self.configured.is_some() {
            return true;
        }
        *self.system.get_or_insert_with(|| {
            let found = SYSTEM_FONTS.iter().map(Path::new).find(|path| register(*path));
            match found {
                Some(path) => debug!("registered system font {}", path.display()),
                None => warn!("no TrueType font found; figures are rendered without text"),
            }
            found.is_some()
        })
    }
}

static FONTS: Mutex<FontState> = Mutex::new(FontState::new());

/// Make sure a font is registered for `config`. Returns whether text can be drawn.
pub fn ensure_fonts_registered(config: &ExportConfig) -> bool {
    let mut state = FONTS.lock().unwrap_or_else(PoisonError::into_inner);
    state.ensure(config.font_path.as_deref(), try_register)
}

fn try_register(path: &Path) -> bool {
    let Some(bytes) = read_font(path) else {
        return false;
    };
    // Registered fonts must live for the whole process; only parsed fonts get here.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font("sans-serif", FontStyle::Normal, bytes).is_ok()
}

/// Read `path` and keep it only if it parses as a font.
fn read_font(path: &Path) -> Option<Vec<u8>> {
    let bytes = std::fs::read(path).ok()?;
    ab_glyph::FontRef::try_from_slice(&bytes).ok()?;
    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_or_invalid_files_are_skipped() {
        assert!(!try_register(Path::new("/definitely/not/a/font.ttf")));
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();
        assert!(read_font(&bogus).is_none());
        assert!(!try_register(&bogus));
    }

    #[test]
    fn a_different_font_path_is_registered_again() {
        let mut state = FontState::new();
        let mut calls = Vec::new();
        let mut ensure = |state: &mut FontState, path: &str| {
            state.ensure(Some(Path::new(path)), |p| {
                calls.push(p.to_path_buf());
                true
            })
        };
        assert!(ensure(&mut state, "/fonts/a.ttf"));
        assert!(ensure(&mut state, "/fonts/a.ttf"));
        assert!(ensure(&mut state, "/fonts/b.ttf"));
        assert_eq!(
            calls,
            vec![PathBuf::from("/fonts/a.ttf"), PathBuf::from("/fonts/b.ttf")]
        );
        assert_eq!(state.configured, Some(PathBuf::from("/fonts/b.ttf")));
        assert_eq!(state.system, None);
    }

    #[test]
    fn a_failing_font_path_falls_back_and_is_retried() {
        let mut state = FontState::new();
        let bad = Path::new("/fonts/broken.ttf");
        let mut calls = 0;
        assert!(state.ensure(Some(bad), |p| {
            calls += 1;
            p != bad
        }));
        // The bad path and the first system font.
        assert_eq!(calls, 2);
        assert_eq!(state.system, Some(true));
        assert_eq!(state.configured, None);

        let mut retried = Vec::new();
        assert!(state.ensure(Some(bad), |p| {
            retried.push(p.to_path_buf());
            false
        }));
        assert_eq!(retried, vec![bad.to_path_buf()]);
    }

    #[test]
    fn a_missing_system_font_is_not_searched_twice() {
        let mut state = FontState::new();
        let mut calls = 0;
        assert!(!state.ensure(None, |_| {
            calls += 1;
            false
        }));
        assert_eq!(calls, SYSTEM_FONTS.len());
        assert!(!state.ensure(None, |_| {
            calls += 1;
            false
        }));
        assert_eq!(calls, SYSTEM_FONTS.len());

        // A configured font still gets its chance afterwards.
        assert!(state.ensure(Some(Path::new("/fonts/late.ttf")), |_| true));
    }
}
