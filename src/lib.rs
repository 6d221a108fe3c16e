//! Library exports for doodlepad.
//!
//! The binary, the replay runner and the integration tests all share these
//! modules; the config schema dumper uses [`Config`] directly.

pub mod backend;
pub mod brush;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod replay;
pub mod ui;
pub mod util;

pub use config::Config;
