//! App shell components: AppBar and Footer.
//!
//! These form the persistent UI framework around the main content area.

mod appbar;
mod footer;

pub use appbar::AppBar;
pub use footer::Footer;
