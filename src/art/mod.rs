pub mod builder;
pub mod color;
pub mod eval;
pub mod remap;

use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{ArtError, Result};
use crate::models::{Channel, ChannelTriple, Expr};
use crate::raster::Raster;

pub const DEFAULT_SIZE: u32 = 350;
pub const DEFAULT_MIN_DEPTH: u32 = 1;
pub const DEFAULT_MAX_DEPTH: u32 = 9;

/// Builds one independent random tree per channel, each with its own drawn depth.
pub fn build_channels<R: Rng + ?Sized>(
    rng: &mut R,
    min_depth: u32,
    max_depth: u32,
) -> Result<ChannelTriple> {
    Ok(ChannelTriple {
        red: builder::build(rng, min_depth, max_depth)?,
        green: builder::build(rng, min_depth, max_depth)?,
        blue: builder::build(rng, min_depth, max_depth)?,
    })
}

/// Renders a fresh random image with the reference depth range.
pub fn synthesize(width: u32, height: u32) -> Result<Raster> {
    check_dimensions(width, height)?;
    let trees = build_channels(&mut rand::rng(), DEFAULT_MIN_DEPTH, DEFAULT_MAX_DEPTH)?;
    synthesize_with(&trees, width, height)
}

/// Renders `trees` over a width×height grid.
///
/// Pixel `(i, j)` is evaluated at `x = remap(i, 0, width, -1, 1)` and
/// `y = remap(j, 0, height, -1, 1)`. Rows are computed in parallel.
pub fn synthesize_with(trees: &ChannelTriple, width: u32, height: u32) -> Result<Raster> {
    check_dimensions(width, height)?;

    let rows = (0..height)
        .into_par_iter()
        .map(|j| {
            let y = remap::remap(f64::from(j), 0.0, f64::from(height), -1.0, 1.0)?;
            (0..width)
                .map(|i| {
                    let x = remap::remap(f64::from(i), 0.0, f64::from(width), -1.0, 1.0)?;
                    pixel(trees, x, y)
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Raster::from_rows(width, height, rows))
}

fn pixel(trees: &ChannelTriple, x: f64, y: f64) -> Result<[u8; 3]> {
    Ok([
        color::channel_byte(eval::evaluate(&trees.red, x, y)?)?,
        color::channel_byte(eval::evaluate(&trees.green, x, y)?)?,
        color::channel_byte(eval::evaluate(&trees.blue, x, y)?)?,
    ])
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ArtError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Debug configuration for art generation
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory receiving per-channel images and rendered expressions
    pub output_dir: PathBuf,
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct Artwork {
    pub trees: ChannelTriple,
    pub raster: Raster,
}

/// Generation orchestrator holding image size, depth range and debug settings
#[derive(Clone, Debug)]
pub struct ArtGenerator {
    pub width: u32,
    pub height: u32,
    pub min_depth: u32,
    pub max_depth: u32,
    pub seed: Option<u64>,
    pub debug: Option<DebugConfig>,
}

impl ArtGenerator {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: None,
            debug: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_depth_range(mut self, min_depth: u32, max_depth: u32) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enable debug output into `output_dir`.
    /// The directory must be empty or non-existent.
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            if std::fs::read_dir(&output_dir)?.next().is_some() {
                return Err(ArtError::DebugDirNotEmpty { path: output_dir });
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build the channel trees and render them
    pub fn generate(&self) -> Result<Artwork> {
        check_dimensions(self.width, self.height)?;

        let trees = build_channels(&mut self.rng(), self.min_depth, self.max_depth)?;
        info!(
            "Built channel trees (depth range [{}, {}))",
            self.min_depth, self.max_depth
        );
        for channel in Channel::ALL {
            let tree = trees.get(channel);
            debug!(
                "{}: depth={}, nodes={}, expr={}",
                channel.name(),
                tree.depth(),
                tree.node_count(),
                tree
            );
        }

        let raster = synthesize_with(&trees, self.width, self.height)?;
        info!("Rendered {}x{} raster", self.width, self.height);

        if let Some(debug_config) = &self.debug {
            save_debug_output(&debug_config.output_dir, &trees, &raster)?;
        }

        Ok(Artwork { trees, raster })
    }

    /// Generate and save to `path`
    pub fn generate_to(&self, path: impl AsRef<Path>) -> Result<Artwork> {
        let artwork = self.generate()?;
        artwork.raster.save(path.as_ref())?;
        info!("Saved {}", path.as_ref().display());
        Ok(artwork)
    }
}

impl Default for ArtGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn save_debug_output(dir: &Path, trees: &ChannelTriple, raster: &Raster) -> Result<()> {
    let mut listing = String::new();
    for channel in Channel::ALL {
        let filename = format!("{}.png", channel.name());
        raster.channel_image(channel).save(dir.join(&filename))?;
        debug!("Debug: saved {}", filename);

        listing.push_str(&describe(channel, trees.get(channel)));
        listing.push('\n');
    }
    std::fs::write(dir.join("expressions.txt"), listing)?;
    debug!("Debug: saved expressions.txt");
    Ok(())
}

fn describe(channel: Channel, tree: &Expr) -> String {
    format!(
        "{} (depth {}, {} nodes): {}",
        channel.name(),
        tree.depth(),
        tree.node_count(),
        tree
    )
}
