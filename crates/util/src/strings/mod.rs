//! String utilities.
//!
//! HTML entity encoding, `${name}` template formatting and small text helpers.

mod escape;
mod format;
mod util;

pub use escape::{decode_html, encode_html};
pub use format::format;
pub use util::{is_whitespace, to_pascal_case, trim};
