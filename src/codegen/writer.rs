use super::template::{ClassDescriptor, render_class};
use crate::constants::OUTPUT_EXTENSION;
use crate::rom::RomImage;
use std::io::{self, Write};
use std::path::PathBuf;

/// `<name>.js`. Appended rather than swapped, so `a.b` becomes `a.b.js`.
pub fn output_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", name, OUTPUT_EXTENSION))
}

pub fn generate_class<W: Write>(rom: &RomImage, out: &mut W, class_name: &str) -> io::Result<()> {
    let descriptor = ClassDescriptor::new(class_name, rom);
    out.write_all(render_class(&descriptor).as_bytes())
}
