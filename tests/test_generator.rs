//! Integration tests for the generation orchestrator:
//! - seeded runs
//! - saving to disk
//! - debug output

mod common;

use common::*;

#[test]
fn test_seeded_generation_is_reproducible() -> anyhow::Result<()> {
    let generator = ArtGenerator::new().with_size(20, 10).with_seed(Some(42));

    let first = generator.generate()?;
    let second = generator.generate()?;

    assert_eq!(first.trees, second.trees);
    assert_eq!(first.raster, second.raster);
    Ok(())
}

#[test]
fn test_generated_trees_respect_depth_range() -> anyhow::Result<()> {
    for seed in 0..20 {
        let artwork = ArtGenerator::new()
            .with_size(4, 4)
            .with_depth_range(2, 5)
            .with_seed(Some(seed))
            .generate()?;
        for channel in Channel::ALL {
            let depth = artwork.trees.get(channel).depth();
            assert!((2..5).contains(&depth), "{} depth {}", channel.name(), depth);
        }
    }
    Ok(())
}

#[test]
fn test_invalid_depth_range() {
    let result = ArtGenerator::new()
        .with_size(4, 4)
        .with_depth_range(3, 3)
        .generate();
    assert!(matches!(
        result,
        Err(ArtError::InvalidDepthRange { min: 3, max: 3 })
    ));
}

#[test]
fn test_generate_to_writes_image() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("art.png");

    let artwork = ArtGenerator::new()
        .with_size(30, 20)
        .with_seed(Some(7))
        .generate_to(&path)?;

    let img = image::open(&path)?.to_rgb8();
    assert_eq!(img.dimensions(), (30, 20));
    assert_eq!(img, artwork.raster.to_image());
    Ok(())
}

#[test]
fn test_debug_output() -> anyhow::Result<()> {
    let dir = create_debug_dir();

    let artwork = ArtGenerator::new()
        .with_size(8, 8)
        .with_seed(Some(3))
        .with_debug(dir.path().to_path_buf())?
        .generate()?;

    for channel in Channel::ALL {
        let path = dir.path().join(format!("{}.png", channel.name()));
        let img = image::open(&path)?.to_luma8();
        assert_eq!(img, artwork.raster.channel_image(channel));
    }

    let listing = std::fs::read_to_string(dir.path().join("expressions.txt"))?;
    assert_eq!(listing.lines().count(), 3);
    assert!(listing.contains(&artwork.trees.red.to_string()));
    assert!(listing.starts_with("red ("));
    Ok(())
}

#[test]
fn test_debug_dir_must_be_empty() -> anyhow::Result<()> {
    let dir = create_debug_dir();
    std::fs::write(dir.path().join("leftover.txt"), "x")?;

    let result = ArtGenerator::new().with_debug(dir.path().to_path_buf());
    assert!(matches!(result, Err(ArtError::DebugDirNotEmpty { .. })));
    Ok(())
}

#[test]
fn test_debug_dir_is_created() -> anyhow::Result<()> {
    let parent = create_debug_dir();
    let dir = parent.path().join("nested").join("debug");

    ArtGenerator::new().with_debug(dir.clone())?;
    assert!(dir.is_dir());
    Ok(())
}
