mod error;
mod image;
mod loader;

pub use error::GenerateError;
pub use image::RomImage;
pub use loader::load_rom;
