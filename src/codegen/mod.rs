mod identifier;
mod literal;
mod template;
mod writer;

pub use identifier::is_plain_identifier;
pub use literal::render_literal;
pub use template::{ClassDescriptor, render_class};
pub use writer::{generate_class, output_path};
