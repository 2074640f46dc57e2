use clap::Parser;
use std::path::PathBuf;

use randart::art::{DEFAULT_MAX_DEPTH, DEFAULT_MIN_DEPTH, DEFAULT_SIZE};
use randart::{ArtGenerator, BackgroundSetter, Channel};

#[derive(Parser)]
#[command(name = "randart")]
#[command(about = "Generate random computational art from expression trees")]
struct Cli {
    /// Path of the image to write (format follows the extension)
    #[arg(value_name = "OUTPUT", default_value = "art.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    height: u32,

    /// Smallest tree depth that may be drawn
    #[arg(long, default_value_t = DEFAULT_MIN_DEPTH)]
    min_depth: u32,

    /// Exclusive upper bound on the drawn tree depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Save per-channel images and expressions to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Set the generated image as the desktop background
    #[arg(long)]
    set_background: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut generator = ArtGenerator::new()
        .with_size(args.width, args.height)
        .with_depth_range(args.min_depth, args.max_depth)
        .with_seed(args.seed);

    if let Some(debug_dir) = args.debug_out {
        generator = generator.with_debug(debug_dir)?;
    }

    let artwork = generator.generate_to(&args.output)?;

    println!(
        "Saved {}x{} image to {}",
        artwork.raster.width(),
        artwork.raster.height(),
        args.output.display()
    );
    if args.verbose {
        for channel in Channel::ALL {
            println!("  {}: {}", channel.name(), artwork.trees.get(channel));
        }
    }

    if args.set_background {
        BackgroundSetter::default().apply(&args.output);
    }

    Ok(())
}
