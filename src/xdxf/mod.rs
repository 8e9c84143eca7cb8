//! XDXF output generation for dictionary stores.

mod escape;
mod writer;

pub use escape::escape_xml;
pub use writer::{generate_xdxf, save_xdxf};
