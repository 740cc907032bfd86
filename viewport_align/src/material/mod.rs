//! Material module
//!
//! Material texture slots and the batch assignment of image files to
//! a material's free slots.

mod batcher;
mod material;

pub use batcher::{strip_image_extension, BatchOutcome, BatchSettings, TextureBatcher, IMAGE_EXTENSIONS};
pub use material::{
    ImageTexture, Material, TextureExtension, TextureSlot, TransparencyMethod, MAX_TEXTURE_SLOTS,
};
