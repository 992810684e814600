/// Extension of the generated source file.
pub const OUTPUT_EXTENSION: &str = "js";

/// Separator placed between the byte literals of the embedded array.
pub const LITERAL_SEPARATOR: &str = ", ";

/// Default log filter when `RUST_LOG` isn't set. Keeps successful runs quiet.
pub const DEFAULT_LOG_FILTER: &str = "warn";
