/// Texture batcher: fills a material's free texture slots with image files.

use std::path::{Path, PathBuf};
use crate::error::{Error, Result};
use super::material::{ImageTexture, Material, TextureExtension, TextureSlot, TransparencyMethod};

/// File extensions recognised as images (lowercase, with the dot)
pub const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".tif", ".bmp"];

/// Drop a trailing image extension from a file name.
///
/// Matching is case-insensitive. Names without a known image extension
/// are returned unchanged.
pub fn strip_image_extension(filename: &str) -> &str {
    let lower = filename.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(*ext) && lower.len() > ext.len())
        .map(|ext| &filename[..filename.len() - ext.len()])
        .unwrap_or(filename)
}

/// Parameters applied to created textures and to the material
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSettings {
    /// Let each created texture drive the material alpha
    pub use_map_alpha: bool,
    /// Show image alpha in previews
    pub use_preview_alpha: bool,
    /// Out-of-bounds behaviour of created textures
    pub extension: TextureExtension,
    /// Switch the material to Z-transparency with zero base alpha
    pub transparent_material: bool,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            use_map_alpha: true,
            use_preview_alpha: true,
            extension: TextureExtension::Clip,
            transparent_material: true,
        }
    }
}

/// Result of a batch assignment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Slot indices that received a texture, in order
    pub created: Vec<usize>,
    /// Images already bound to this material
    pub skipped: Vec<String>,
    /// Images left over because no free slot remained
    pub remaining: Vec<String>,
}

impl BatchOutcome {
    /// Whether every requested image ended up in a slot (or was already there)
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Assigns a list of image files from one directory to a material.
#[derive(Debug, Clone)]
pub struct TextureBatcher {
    directory: PathBuf,
    filenames: Vec<String>,
    settings: BatchSettings,
}

impl TextureBatcher {
    /// Batcher with default settings
    pub fn new(directory: impl Into<PathBuf>, filenames: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            filenames,
            settings: BatchSettings::default(),
        }
    }

    /// Builder: replace the settings
    pub fn with_settings(mut self, settings: BatchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Fill the material's empty slots in order.
    ///
    /// Every filled slot ends up disabled except slot 0. The last created
    /// slot becomes the active one.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the material has no texture slots.
    pub fn assign(&self, material: &mut Material) -> Result<BatchOutcome> {
        if material.slots().is_empty() {
            crate::align_error!("valign::material", "Material '{}' has no texture slots", material.name());
            return Err(Error::InvalidParameter(format!(
                "material '{}' has no texture slots",
                material.name()
            )));
        }

        let mut outcome = BatchOutcome::default();
        let mut pending = Vec::with_capacity(self.filenames.len());
        for filename in &self.filenames {
            let path = self.directory.join(filename);
            let bound = material.slots().iter().flatten().any(|s| s.texture.image_path == path);
            if bound {
                crate::align_debug!("valign::material", "'{}' already bound, skipping", filename);
                outcome.skipped.push(filename.clone());
            } else {
                pending.push(filename);
            }
        }

        let free: Vec<usize> = material.empty_slots().collect();
        for (&slot_index, filename) in free.iter().zip(pending.iter()) {
            let texture = self.create_texture(filename);
            let mut slot = TextureSlot::new(texture);
            slot.use_map_alpha = self.settings.use_map_alpha;
            material.set_slot(slot_index, Some(slot));
            material.set_active_slot(slot_index);
            outcome.created.push(slot_index);
        }

        outcome.remaining = pending
            .iter()
            .skip(outcome.created.len())
            .map(|f| f.to_string())
            .collect();

        material.set_all_enabled(false);
        if let Some(first) = material.slot_mut(0) {
            first.enabled = true;
        }

        if self.settings.transparent_material {
            material.use_transparency = true;
            material.transparency_method = TransparencyMethod::ZTransparency;
            material.alpha = 0.0;
        }

        crate::align_info!(
            "valign::material",
            "Material '{}': {} texture(s) created, {} skipped, {} without a free slot",
            material.name(),
            outcome.created.len(),
            outcome.skipped.len(),
            outcome.remaining.len()
        );

        Ok(outcome)
    }

    fn create_texture(&self, filename: &str) -> ImageTexture {
        let mut texture = ImageTexture::new(strip_image_extension(filename), self.directory.join(filename));
        texture.extension = self.settings.extension;
        texture.use_preview_alpha = self.settings.use_preview_alpha;
        texture
    }
}

#[cfg(test)]
#[path = "batcher_tests.rs"]
mod tests;
