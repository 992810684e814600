pub mod args;
pub mod codegen;
pub mod constants;
pub mod rom;

use codegen::{generate_class, is_plain_identifier, output_path};
use constants::DEFAULT_LOG_FILTER;
use log::{info, warn};
use rom::{GenerateError, load_rom};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn setup_logging() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()));
    builder.init();
}

/// Embeds the ROM at `rom_path` into a class named `output_name` and writes
/// it to `<output_name>.js`, replacing any existing file.
/// Returns the path that was written.
pub fn generate(rom_path: &Path, output_name: &str) -> Result<PathBuf, GenerateError> {
    let rom = load_rom(rom_path)?;

    if !is_plain_identifier(output_name) {
        warn!(
            "'{}' is not a plain identifier, the generated class will not parse",
            output_name
        );
    }

    let path = output_path(output_name);
    let write_err = |source: io::Error| GenerateError::WriteOutput {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    generate_class(&rom, &mut out, output_name).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    info!(
        "Wrote {} bytes of ROM as class {} to {}",
        rom.len(),
        output_name,
        path.display()
    );
    Ok(path)
}

/// Entry point for the command line.
pub fn run(args: args::Args) -> Result<(), GenerateError> {
    setup_logging();
    generate(&args.rom, &args.output_name)?;
    Ok(())
}
