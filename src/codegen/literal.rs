use crate::constants::LITERAL_SEPARATOR;

/// Renders the bytes as an array literal, e.g. `[0x0, 0xff, 0x10]`.
/// Each byte becomes exactly one token, in order.
pub fn render_literal(bytes: &[u8]) -> String {
    // "0xff" plus separator is the widest a token gets.
    let mut out = String::with_capacity(2 + bytes.len() * (4 + LITERAL_SEPARATOR.len()));
    out.push('[');
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(LITERAL_SEPARATOR);
        }
        out.push_str(&format!("{:#x}", byte));
    }
    out.push(']');
    out
}
