use super::error::GenerateError;
use super::image::RomImage;
use log::debug;
use std::fs;
use std::path::Path;

/// Reads the whole file into memory. Contents are not inspected.
pub fn load_rom(path: &Path) -> Result<RomImage, GenerateError> {
    let buffer = fs::read(path).map_err(|source| GenerateError::ReadRom {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} bytes from {}", buffer.len(), path.display());
    Ok(RomImage::new(buffer))
}
