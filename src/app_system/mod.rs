//! Console wiring: seed data, menu parsing, the interactive session and logging setup.

pub mod catalog;
pub mod logging;
pub mod menu;
pub mod session;

pub use catalog::*;
pub use logging::*;
pub use menu::*;
pub use session::*;
