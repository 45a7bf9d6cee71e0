//! Helper functions for rendering post pages and listings

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
