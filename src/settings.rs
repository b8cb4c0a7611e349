//! Cached overlay options and the settings panel that edits them.
//!
//! The host persists the values. The overlay reads them into `OverlaySettings`
//! on a timer and only ever consults the cached copy.

use crate::constants::*;

/// Host-persisted key/value settings.
pub trait SettingsStore {
    fn get_bool(&self, key: &str, default: bool) -> bool;

    fn get_int(&self, key: &str, default: i32) -> i32;

    /// Register a default without overwriting a stored value.
    fn set_default_bool(&mut self, key: &str, value: bool);

    fn set_default_int(&mut self, key: &str, value: i32);
}

/// Host settings dialog, one control per call.
///
/// Every control commits straight to the `SettingsStore`. The host reports a
/// commit with `HostEvent::SettingsChanged` so the cached copy is re-read at
/// once instead of on the next refresh tick.
pub trait SettingsPanel {
    /// Open a new category; the controls that follow belong to it.
    fn category(&mut self, title: &str);

    fn check_pref(&mut self, key: &str, default: bool);

    fn slider_pref(
        &mut self,
        key: &str,
        default: i32,
        min: i32,
        max: i32,
        step: i32,
        label: fn(i32) -> String,
    );
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlaySettings {
    pub enabled: bool,
    pub preview_enabled: bool,
    pub marker_enabled: bool,
    pub chat_enabled: bool,
    pub scan_interval_seconds: i32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        OverlaySettings {
            enabled: true,
            preview_enabled: true,
            marker_enabled: true,
            chat_enabled: false,
            scan_interval_seconds: DEFAULT_SCAN_INTERVAL,
        }
    }
}

impl OverlaySettings {
    pub fn load(store: &dyn SettingsStore) -> Self {
        let defaults = OverlaySettings::default();
        OverlaySettings {
            enabled: store.get_bool(KEY_ENABLED, defaults.enabled),
            preview_enabled: store.get_bool(KEY_PREVIEW_ENABLED, defaults.preview_enabled),
            marker_enabled: store.get_bool(KEY_MARKER_ENABLED, defaults.marker_enabled),
            chat_enabled: store.get_bool(KEY_CHAT_ENABLED, defaults.chat_enabled),
            scan_interval_seconds: store
                .get_int(KEY_SCAN_INTERVAL, defaults.scan_interval_seconds)
                .clamp(MIN_SCAN_INTERVAL, MAX_SCAN_INTERVAL),
        }
    }

    /// Seconds between periodic redundancy scans.
    pub fn scan_interval(&self) -> f32 {
        self.scan_interval_seconds
            .clamp(MIN_SCAN_INTERVAL, MAX_SCAN_INTERVAL) as f32
    }

    pub fn preview_active(&self) -> bool {
        self.enabled && self.preview_enabled
    }

    pub fn scan_active(&self) -> bool {
        self.enabled && self.marker_enabled
    }
}

pub fn apply_defaults(store: &mut dyn SettingsStore) {
    let defaults = OverlaySettings::default();
    store.set_default_bool(KEY_ENABLED, defaults.enabled);
    store.set_default_bool(KEY_PREVIEW_ENABLED, defaults.preview_enabled);
    store.set_default_bool(KEY_MARKER_ENABLED, defaults.marker_enabled);
    store.set_default_bool(KEY_CHAT_ENABLED, defaults.chat_enabled);
    store.set_default_int(KEY_SCAN_INTERVAL, defaults.scan_interval_seconds);
}

fn seconds_label(value: i32) -> String {
    format!("{}s", value)
}

/// Add the overlay's category to the panel and return the values it now shows.
pub fn build_settings(
    panel: &mut dyn SettingsPanel,
    store: &dyn SettingsStore,
    title: &str,
) -> OverlaySettings {
    let defaults = OverlaySettings::default();
    panel.category(title);
    panel.check_pref(KEY_ENABLED, defaults.enabled);
    panel.check_pref(KEY_PREVIEW_ENABLED, defaults.preview_enabled);
    panel.check_pref(KEY_MARKER_ENABLED, defaults.marker_enabled);
    panel.check_pref(KEY_CHAT_ENABLED, defaults.chat_enabled);
    panel.slider_pref(
        KEY_SCAN_INTERVAL,
        defaults.scan_interval_seconds,
        MIN_SCAN_INTERVAL,
        MAX_SCAN_INTERVAL,
        1,
        seconds_label,
    );

    OverlaySettings::load(store)
}
