//! Normalize real-capture annotation files and print a camera-view summary.
//!
//! Usage: `process_captures <dest_dir> <record.json>...`
//!
//! Each record is written to `<dest_dir>/<file name>` in normalized form.
//! Copying the matching images is left to the caller.

use std::{env, fs, path::PathBuf};

use chesslabel::annotate::{BoxParams, CaptureSummary};
use chesslabel::pipeline;

#[cfg(not(feature = "tracing"))]
use chesslabel::core::init_from_env;
#[cfg(not(feature = "tracing"))]
use log::{warn, LevelFilter};

#[cfg(feature = "tracing")]
use chesslabel::core::init_tracing;
#[cfg(feature = "tracing")]
use tracing::warn;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    init_from_env(LevelFilter::Info)?;
    #[cfg(feature = "tracing")]
    init_tracing(false);

    let mut args = env::args().skip(1);
    let Some(dest_dir) = args.next().map(PathBuf::from) else {
        eprintln!("Usage: process_captures <dest_dir> <record.json>...");
        return Ok(());
    };
    fs::create_dir_all(&dest_dir)?;

    let params = BoxParams::default();
    let mut summary = CaptureSummary::new();
    for src in args.map(PathBuf::from) {
        let Some(name) = src.file_name() else {
            warn!("skipping {}: no file name", src.display());
            continue;
        };
        let dest = dest_dir.join(name);
        if let Err(err) = pipeline::process_capture_file(&src, &dest, &params, &mut summary) {
            warn!("skipping {}: {err}", src.display());
        }
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
