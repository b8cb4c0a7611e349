pub mod block;
pub mod chat;
pub mod constants;
pub mod format;
pub mod host;
pub mod hud;
pub mod index;
pub mod locale;
pub mod location;
pub mod marker;
pub mod overlay;
pub mod power;
pub mod predict;
pub mod scan;
pub mod schedule;
pub mod settings;
pub mod world;

pub mod visual;
pub use visual::*;

pub use overlay::ProjectorOverlay;

#[cfg(test)]
mod test_harness;
