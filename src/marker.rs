//! Optional bridge to an external map-marker API.
//!
//! Some client builds ship a marker API that pins labelled markers on the map.
//! Whether it exists is decided once, when the client loads. A missing API is
//! normal; a failing one is logged once and never called again.

use crate::location::*;
use log::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("marker API not found: {0}")]
    Unavailable(String),
    #[error("marker call failed at {pos}: {reason}")]
    CallFailed { pos: TilePos, reason: String },
}

/// The external marker API, once resolved.
pub trait ExternalMarkerApi {
    /// Create a marker as if `label` had been posted to chat at tile coordinates `pos`.
    fn new_mark_from_chat(&mut self, label: &str, pos: TilePos) -> Result<(), MarkerError>;
}

/// Host-side lookup of the external marker API.
pub trait MarkerProbe {
    fn resolve_marker_api(&mut self) -> Result<Box<dyn ExternalMarkerApi>, MarkerError>;
}

#[derive(Default)]
pub enum MarkerSink {
    External(Box<dyn ExternalMarkerApi>),
    #[default]
    Noop,
}

impl MarkerSink {
    pub fn probe(probe: &mut dyn MarkerProbe) -> Self {
        match probe.resolve_marker_api() {
            Ok(api) => {
                info!("External marker API detected");
                MarkerSink::External(api)
            }
            Err(err) => {
                debug!("External marker API unavailable: {}", err);
                MarkerSink::Noop
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MarkerSink::External(_))
    }

    /// Pin a "needs removal" marker on `pos`. Returns true if a marker was placed.
    pub fn mark_need_remove(&mut self, label: &str, pos: TilePos) -> bool {
        let api = match self {
            MarkerSink::External(api) => api,
            MarkerSink::Noop => return false,
        };

        let text = format!("[scarlet]{}[] {}", label, pos);
        match api.new_mark_from_chat(&text, pos) {
            Ok(()) => true,
            Err(err) => {
                error!("External marker call failed, disabling integration: {}", err);
                *self = MarkerSink::Noop;
                false
            }
        }
    }
}
