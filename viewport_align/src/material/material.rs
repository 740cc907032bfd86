/// Material with a fixed number of texture slots.
///
/// Pure data: textures reference image files by path, nothing is loaded.

use std::path::PathBuf;

/// Number of texture slots on a material
pub const MAX_TEXTURE_SLOTS: usize = 18;

// ===== TEXTURE =====

/// How texture lookups outside [0, 1] behave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureExtension {
    /// Tile the image
    #[default]
    Repeat,
    /// Extend the edge pixels
    Extend,
    /// Transparent outside the image
    Clip,
}

/// Texture backed by an image file
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTexture {
    /// Texture name
    pub name: String,
    /// Image file path
    pub image_path: PathBuf,
    /// Behaviour outside the image bounds
    pub extension: TextureExtension,
    /// Show the image alpha in previews
    pub use_preview_alpha: bool,
}

impl ImageTexture {
    /// Texture with default parameters
    pub fn new(name: impl Into<String>, image_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            image_path: image_path.into(),
            extension: TextureExtension::default(),
            use_preview_alpha: false,
        }
    }
}

// ===== TEXTURE SLOT =====

/// A texture bound to a material slot
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSlot {
    /// Bound texture
    pub texture: ImageTexture,
    /// Whether the slot contributes to shading
    pub enabled: bool,
    /// Whether the texture drives the material alpha
    pub use_map_alpha: bool,
}

impl TextureSlot {
    pub fn new(texture: ImageTexture) -> Self {
        Self { texture, enabled: true, use_map_alpha: false }
    }
}

// ===== MATERIAL =====

/// Transparency method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransparencyMethod {
    /// Opaque surface
    #[default]
    Opaque,
    /// Depth-sorted alpha blending
    ZTransparency,
    /// Ray-traced transparency
    RayTraced,
}

/// Material with `MAX_TEXTURE_SLOTS` optional texture slots
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    slots: Vec<Option<TextureSlot>>,
    active_slot: usize,
    /// Whether transparency is enabled
    pub use_transparency: bool,
    /// Transparency method
    pub transparency_method: TransparencyMethod,
    /// Base alpha
    pub alpha: f32,
}

impl Material {
    /// Material with all slots empty
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_slot_count(name, MAX_TEXTURE_SLOTS)
    }

    /// Material with a custom number of slots
    pub fn with_slot_count(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            slots: vec![None; count],
            active_slot: 0,
            use_transparency: false,
            transparency_method: TransparencyMethod::default(),
            alpha: 1.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All slots, empty ones included
    pub fn slots(&self) -> &[Option<TextureSlot>] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&TextureSlot> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut TextureSlot> {
        self.slots.get_mut(index).and_then(|s| s.as_mut())
    }

    /// Bind a texture slot. Returns the previous content, or `None` if the
    /// index is out of range.
    pub fn set_slot(&mut self, index: usize, slot: Option<TextureSlot>) -> Option<Option<TextureSlot>> {
        let entry = self.slots.get_mut(index)?;
        Some(std::mem::replace(entry, slot))
    }

    /// Indices of empty slots, in order
    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_none()).map(|(i, _)| i)
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn set_active_slot(&mut self, index: usize) -> bool {
        if index < self.slots.len() {
            self.active_slot = index;
            true
        } else {
            false
        }
    }

    /// Enable or disable every filled slot
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for slot in self.slots.iter_mut().flatten() {
            slot.enabled = enabled;
        }
    }
}
