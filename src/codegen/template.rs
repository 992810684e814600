use super::literal::render_literal;
use crate::rom::RomImage;

/// Name and rendered data of one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: String,
    pub literal: String,
}

impl ClassDescriptor {
    pub fn new(name: &str, rom: &RomImage) -> Self {
        Self {
            name: name.to_string(),
            literal: render_literal(rom.bytes()),
        }
    }
}

/// Fills in the class template. The name is inserted verbatim.
pub fn render_class(descriptor: &ClassDescriptor) -> String {
    format!(
        r#"
class {class_name} {{
    constructor() {{
        this.memory = {rom_data};
    }}

    read(addr) {{
        return this.memory[addr];
    }}

    write(addr, value) {{
        console.log("Attempted to write " + value.toString(16) + " to ROM at " + addr.toString(16));
    }}
}}
"#,
        class_name = descriptor.name,
        rom_data = descriptor.literal
    )
}
