//! Write metadata for a batch of random synthetic boards.
//!
//! Usage: `generate_synthetic <out_dir> [num_samples] [seed]`
//!
//! Each sample becomes `<out_dir>/<index>.json` holding the board notation
//! and its bounding boxes. Rendering the board and capturing the image is
//! done by a separate tool that reads `fen` from these files.

use std::{env, fs, path::PathBuf};

use chesslabel::annotate::{BoxParams, JsonFile};
use chesslabel::core::ImageSize;
use chesslabel::pipeline;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(not(feature = "tracing"))]
use chesslabel::core::init_from_env;
#[cfg(not(feature = "tracing"))]
use log::{info, LevelFilter};

#[cfg(feature = "tracing")]
use chesslabel::core::init_tracing;
#[cfg(feature = "tracing")]
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    init_from_env(LevelFilter::Info)?;
    #[cfg(feature = "tracing")]
    init_tracing(false);

    let mut args = env::args().skip(1);
    let Some(out_dir) = args.next().map(PathBuf::from) else {
        eprintln!("Usage: generate_synthetic <out_dir> [num_samples] [seed]");
        return Ok(());
    };
    let num_samples: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(10);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0);

    fs::create_dir_all(&out_dir)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let image = ImageSize::default();
    let params = BoxParams::default();
    let idx_width = num_samples.saturating_sub(1).to_string().len();

    for idx in 0..num_samples {
        let md = pipeline::generate_synthetic_sample(&mut rng, image, &params);
        let path = out_dir.join(format!("{idx:0idx_width$}.json"));
        md.write_json(&path)?;
        info!("{} {}", path.display(), md.fen);
    }

    Ok(())
}
