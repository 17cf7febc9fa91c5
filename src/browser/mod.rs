//! Live pages through Chrome DevTools Protocol
//!
//! [`BrowserSession`] launches or attaches to Chrome; [`TabSurface`] exposes a tab as a
//! [`crate::RenderingSurface`] so the outline pass runs on the real rendered page.

pub mod config;
pub mod session;
pub mod surface;
pub mod target;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
pub use surface::{TabNode, TabSurface};
pub use target::normalize_target;
