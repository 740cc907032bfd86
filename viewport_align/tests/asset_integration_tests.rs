//! Integration tests for asset helpers (texture batching, strip catalog)
//!
//! Run with: cargo test --test asset_integration_tests

use std::path::PathBuf;
use glam::Vec3;
use viewport_align::align::catalog::{IgnoreRules, Strip, StripCatalog, StripKind, StripKinds};
use viewport_align::align::material::{Material, TextureBatcher, TextureExtension, TransparencyMethod, MAX_TEXTURE_SLOTS};
use viewport_align::align::scene::{Scene, SceneObject};
use viewport_align::align::camera::RenderFrame;
use viewport_align::align::Error;

fn frames(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}.png", i)).collect()
}

// ============================================================================
// TEXTURE BATCHING
// ============================================================================

#[test]
fn test_integration_batch_onto_scene_object_material() {
    let mut scene = Scene::new(RenderFrame::default());
    let card = scene.add_object(
        SceneObject::mesh("Card", vec![Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)])
            .with_material(Material::new("Card")),
    );

    let material = scene.object_mut(card).unwrap().material_mut().unwrap();
    let outcome = TextureBatcher::new("//cards", frames(3)).assign(material).unwrap();

    assert_eq!(outcome.created, vec![0, 1, 2]);
    let material = scene.object(card).unwrap().material().unwrap();
    let first = material.slot(0).unwrap();
    assert!(first.enabled);
    assert_eq!(first.texture.name, "0");
    assert_eq!(first.texture.image_path, PathBuf::from("//cards").join("0.png"));
    assert_eq!(first.texture.extension, TextureExtension::Clip);
    assert!(!material.slot(2).unwrap().enabled);
    assert_eq!(material.active_slot(), 2);
    assert_eq!(material.transparency_method, TransparencyMethod::ZTransparency);
    assert_eq!(material.alpha, 0.0);
}

#[test]
fn test_integration_batch_overflow_then_rerun() {
    let mut material = Material::new("Flipbook");
    let images = frames(MAX_TEXTURE_SLOTS + 2);

    let first = TextureBatcher::new("//flip", images.clone()).assign(&mut material).unwrap();
    assert_eq!(first.created.len(), MAX_TEXTURE_SLOTS);
    assert_eq!(first.remaining, vec!["18.png".to_string(), "19.png".to_string()]);
    assert!(!first.is_complete());

    // Everything already bound is skipped, the leftovers still have no slot
    let second = TextureBatcher::new("//flip", images).assign(&mut material).unwrap();
    assert!(second.created.is_empty());
    assert_eq!(second.skipped.len(), MAX_TEXTURE_SLOTS);
    assert_eq!(second.remaining.len(), 2);
}

#[test]
fn test_integration_batch_rejects_slotless_material() {
    let mut material = Material::with_slot_count("Bare", 0);
    let err = TextureBatcher::new("//x", frames(1)).assign(&mut material).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

// ============================================================================
// STRIP CATALOG
// ============================================================================

#[test]
fn test_integration_catalog_report() {
    let strips: Vec<Strip> = [
        ("SOUND", "audio-scratch"),
        ("SOUND", "narration"),
        ("MOVIE", "b-roll"),
        ("SOUND", "narration.001"),
        ("COLOR", "black"),
        ("IMAGE", "logo"),
        ("MOVIE", "b-roll.001.002"),
    ]
    .iter()
    .map(|(kind, name)| Strip::new(*name, StripKind::from_type_name(kind)))
    .collect();
    let rules = IgnoreRules::new().ignore(StripKind::Sound, "audio-");

    let catalog = StripCatalog::find(&strips, StripKinds::SOUND | StripKinds::MOVIE, &rules);

    assert_eq!(catalog.len(), 4);
    assert_eq!(
        catalog.report(true).to_string(),
        "Found strips (duplicates ignored):\n\nSOUND strips:\nnarration\n\nMOVIE strips:\nb-roll"
    );
    assert_eq!(
        catalog.report(false).to_string(),
        "Found strips (duplicates included):\n\nSOUND strips:\nnarration\nnarration.001\n\nMOVIE strips:\nb-roll\nb-roll.001.002"
    );
}
