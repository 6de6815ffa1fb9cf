//! Convert one metadata file into a label file and class manifest.
//!
//! Usage: `make_labels <config.json>`
//!
//! Example config:
//! ```json
//! {
//!   "image": {"width": 640, "height": 640},
//!   "metadata_path": "out/00.json",
//!   "label_path": "out/00.txt",
//!   "manifest_path": "out/data.yaml"
//! }
//! ```

use std::{env, path::PathBuf};

use chesslabel::annotate::{write_manifest_yaml, AnnotateConfig, JsonFile};
use chesslabel::pipeline;

#[cfg(not(feature = "tracing"))]
use chesslabel::core::init_with_level;
#[cfg(not(feature = "tracing"))]
use log::{info, warn, LevelFilter};

#[cfg(feature = "tracing")]
use chesslabel::core::init_tracing;
#[cfg(feature = "tracing")]
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    init_with_level(LevelFilter::Info)?;
    #[cfg(feature = "tracing")]
    init_tracing(false);

    let Some(config_path) = env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: make_labels <config.json>");
        return Ok(());
    };
    let cfg = AnnotateConfig::load_json(&config_path)?;
    let vocab = cfg.build_vocabulary()?;

    let Some(metadata_path) = cfg.metadata_path.as_ref().map(PathBuf::from) else {
        warn!("config has no metadata_path, nothing to do");
        return Ok(());
    };

    let label_path = cfg.label_path();
    let count = pipeline::write_sample_labels(&metadata_path, &label_path, cfg.image, &vocab)?;
    info!("wrote {count} labels to {}", label_path.display());

    let manifest_path = cfg.manifest_path();
    write_manifest_yaml(&vocab.manifest(), &manifest_path)?;
    info!(
        "wrote {}-class manifest to {}",
        vocab.len(),
        manifest_path.display()
    );

    Ok(())
}
