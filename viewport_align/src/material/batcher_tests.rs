use std::path::PathBuf;
use crate::material::{ImageTexture, Material, TextureExtension, TextureSlot, TransparencyMethod};
use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// strip_image_extension
// ============================================================================

#[test]
fn test_strip_known_extensions() {
    assert_eq!(strip_image_extension("0.png"), "0");
    assert_eq!(strip_image_extension("photo.jpeg"), "photo");
    assert_eq!(strip_image_extension("scan.TIF"), "scan");
    assert_eq!(strip_image_extension("frame.001.bmp"), "frame.001");
}

#[test]
fn test_strip_leaves_other_names() {
    assert_eq!(strip_image_extension("notes.txt"), "notes.txt");
    assert_eq!(strip_image_extension("plain"), "plain");
    assert_eq!(strip_image_extension(".png"), ".png");
}

// ============================================================================
// TextureBatcher::assign
// ============================================================================

#[test]
fn test_assign_fills_empty_slots_in_order() {
    let mut material = Material::new("Mat");
    let batcher = TextureBatcher::new("//textures", names(&["0.png", "1.png", "2.png"]));

    let outcome = batcher.assign(&mut material).unwrap();

    assert_eq!(outcome.created, vec![0, 1, 2]);
    assert!(outcome.is_complete());
    assert_eq!(material.active_slot(), 2);

    let slot = material.slot(1).unwrap();
    assert_eq!(slot.texture.name, "1");
    assert_eq!(slot.texture.image_path, PathBuf::from("//textures").join("1.png"));
    assert_eq!(slot.texture.extension, TextureExtension::Clip);
    assert!(slot.texture.use_preview_alpha);
    assert!(slot.use_map_alpha);
}

#[test]
fn test_assign_enables_only_first_slot() {
    let mut material = Material::new("Mat");
    TextureBatcher::new("dir", names(&["a.png", "b.png"])).assign(&mut material).unwrap();

    assert!(material.slot(0).unwrap().enabled);
    assert!(!material.slot(1).unwrap().enabled);
}

#[test]
fn test_assign_skips_occupied_slots() {
    let mut material = Material::new("Mat");
    material.set_slot(0, Some(TextureSlot::new(ImageTexture::new("existing", "other/x.png"))));

    let outcome = TextureBatcher::new("dir", names(&["a.png"])).assign(&mut material).unwrap();

    assert_eq!(outcome.created, vec![1]);
    assert_eq!(material.slot(0).unwrap().texture.name, "existing");
    assert!(material.slot(0).unwrap().enabled);
    assert!(!material.slot(1).unwrap().enabled);
}

#[test]
fn test_assign_reports_images_without_free_slot() {
    let mut material = Material::with_slot_count("Small", 2);
    let outcome = TextureBatcher::new("dir", names(&["a.png", "b.png", "c.png", "d.png"]))
        .assign(&mut material)
        .unwrap();

    assert_eq!(outcome.created, vec![0, 1]);
    assert_eq!(outcome.remaining, names(&["c.png", "d.png"]));
    assert!(!outcome.is_complete());
}

#[test]
fn test_assign_skips_already_bound_images() {
    let mut material = Material::new("Mat");
    let batcher = TextureBatcher::new("dir", names(&["a.png", "b.png"]));
    batcher.assign(&mut material).unwrap();

    let outcome = batcher.assign(&mut material).unwrap();

    assert!(outcome.created.is_empty());
    assert_eq!(outcome.skipped, names(&["a.png", "b.png"]));
    assert_eq!(material.empty_slots().count(), 16);
}

#[test]
fn test_assign_sets_material_transparency() {
    let mut material = Material::new("Mat");
    TextureBatcher::new("dir", names(&["a.png"])).assign(&mut material).unwrap();

    assert!(material.use_transparency);
    assert_eq!(material.transparency_method, TransparencyMethod::ZTransparency);
    assert_eq!(material.alpha, 0.0);
}

#[test]
fn test_assign_can_leave_material_opaque() {
    let mut material = Material::new("Mat");
    let settings = BatchSettings { transparent_material: false, ..BatchSettings::default() };
    TextureBatcher::new("dir", names(&["a.png"]))
        .with_settings(settings)
        .assign(&mut material)
        .unwrap();

    assert!(!material.use_transparency);
    assert_eq!(material.alpha, 1.0);
}

#[test]
fn test_assign_rejects_material_without_slots() {
    let mut material = Material::with_slot_count("None", 0);
    let err = TextureBatcher::new("dir", names(&["a.png"])).assign(&mut material).unwrap_err();
    assert!(matches!(err, crate::error::Error::InvalidParameter(_)));
}
