//! Image resolution for image row layouts.
//!
//! Image references are opaque to the adapter. A renderer resolves them
//! through an [`ImageLoader`]; [`resolve_image`] turns any failure into a
//! placeholder so a row is always drawable.

use crate::domain::{ListAdapterError, Result};
use crate::infrastructure::paths::expand_tilde;
use std::path::{Path, PathBuf};

/// A resolved image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drawable {
    Loaded { reference: String, bytes: Vec<u8> },
    /// Blank stand-in for missing or unloadable images.
    Placeholder,
}

impl Drawable {
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Loads image data for a reference.
pub trait ImageLoader {
    /// # Errors
    ///
    /// Returns an error if the reference cannot be loaded.
    fn load(&self, reference: &str) -> Result<Drawable>;
}

/// Reads images as files relative to an asset directory.
#[derive(Debug, Clone)]
pub struct AssetImageLoader {
    asset_dir: PathBuf,
}

impl AssetImageLoader {
    #[must_use]
    pub fn new(asset_dir: &str) -> Self {
        Self {
            asset_dir: PathBuf::from(expand_tilde(asset_dir)),
        }
    }

    #[must_use]
    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }
}

impl ImageLoader for AssetImageLoader {
    fn load(&self, reference: &str) -> Result<Drawable> {
        let path = self.asset_dir.join(reference);
        let bytes = std::fs::read(&path).map_err(|e| ListAdapterError::Image {
            reference: reference.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Drawable::Loaded {
            reference: reference.to_string(),
            bytes,
        })
    }
}

/// Resolves `reference`, substituting a placeholder on failure.
///
/// Failures are logged as warnings with the reference; an absent or empty
/// reference yields a placeholder silently.
pub fn resolve_image(loader: &dyn ImageLoader, reference: Option<&str>) -> Drawable {
    let Some(reference) = reference.filter(|r| !r.is_empty()) else {
        return Drawable::Placeholder;
    };

    match loader.load(reference) {
        Ok(drawable) => drawable,
        Err(e) => {
            tracing::warn!(image = %reference, error = %e, "unable to load image, using placeholder");
            Drawable::Placeholder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_file_relative_to_asset_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("kiwi.png"), b"png").unwrap();
        let loader = AssetImageLoader::new(dir.path().to_str().unwrap());

        let drawable = resolve_image(&loader, Some("kiwi.png"));
        assert_eq!(
            drawable,
            Drawable::Loaded {
                reference: "kiwi.png".into(),
                bytes: b"png".to_vec(),
            }
        );
    }

    #[test]
    fn missing_file_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetImageLoader::new(dir.path().to_str().unwrap());

        assert!(loader.load("absent.png").is_err());
        assert!(resolve_image(&loader, Some("absent.png")).is_placeholder());
    }

    #[test]
    fn empty_reference_is_placeholder() {
        let loader = AssetImageLoader::new(".");
        assert!(resolve_image(&loader, None).is_placeholder());
        assert!(resolve_image(&loader, Some("")).is_placeholder());
    }
}
