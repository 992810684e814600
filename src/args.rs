use std::path::PathBuf;

use clap::Parser;

/// Embeds a binary ROM image into a generated JavaScript class.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the ROM image to embed.
    pub rom: PathBuf,

    /// Name of the generated class, also used as the output file stem.
    pub output_name: String,
}
