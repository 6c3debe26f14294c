//! Page chrome shared by every route.

mod footer;
mod header;

pub use footer::Footer;
pub use header::Header;
