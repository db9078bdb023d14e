//! Per-folder image manifests (`images/{folder}/manifest.json`).

use std::path::Path;

use serde::Serialize;

use crate::error::ContentError;

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "svg", "gif"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageManifest {
    pub folder: String,
    pub images: Vec<String>,
}

impl ImageManifest {
    /// Read the manifest of `folder` under `images_dir`.
    ///
    /// A missing, unreadable or malformed manifest yields an empty list so the
    /// gallery simply renders nothing. Only the folder name itself can fail.
    pub fn load(images_dir: impl AsRef<Path>, folder: &str) -> Result<Self, ContentError> {
        validate_folder(folder)?;

        let path = images_dir.as_ref().join(folder).join("manifest.json");
        let images = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "ignoring malformed image manifest: {e}");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Ok(Self::from_files(folder, images))
    }

    /// Keep image files only, sorted for stable gallery order.
    pub fn from_files(folder: &str, files: impl IntoIterator<Item = String>) -> Self {
        let mut images: Vec<String> = files
            .into_iter()
            .filter(|f| f != "manifest.json" && is_image(f))
            .collect();
        images.sort();
        Self {
            folder: folder.to_string(),
            images,
        }
    }

    /// Public URLs of the images.
    pub fn urls(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|f| format!("/images/{}/{}", self.folder, f))
            .collect()
    }
}

fn is_image(file: &str) -> bool {
    Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

fn validate_folder(folder: &str) -> Result<(), ContentError> {
    let ok = !folder.trim().is_empty()
        && folder.len() <= 64
        && folder
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'));
    if ok {
        Ok(())
    } else {
        Err(ContentError::InvalidName(folder.to_string()))
    }
}
