/// Side length of a single world tile, in world units.
pub const TILE_SIZE: f32 = 8.0;

/// Host ticks per second. Power rates are reported per tick.
pub const TICKS_PER_SECOND: f32 = 60.0;

/// Name of the element attached to the minimap HUD container.
pub const OVERLAY_NAME: &str = "bpo-overlay";

/// Name of the host's minimap HUD element.
pub const MINIMAP_NAME: &str = "minimap";

/// Host setting that toggles the minimap. The overlay is only attached while it is on.
pub const MINIMAP_SETTING: &str = "minimap";

pub const KEY_ENABLED: &str = "bpo-enabled";
pub const KEY_PREVIEW_ENABLED: &str = "bpo-preview-enabled";
pub const KEY_MARKER_ENABLED: &str = "bpo-marker-enabled";
pub const KEY_CHAT_ENABLED: &str = "bpo-chat-enabled";
pub const KEY_SCAN_INTERVAL: &str = "bpo-scan-interval";

pub const DEFAULT_SCAN_INTERVAL: i32 = 8;
pub const MIN_SCAN_INTERVAL: i32 = 1;
pub const MAX_SCAN_INTERVAL: i32 = 30;

/// Seconds of host time between settings re-reads.
pub const SETTINGS_REFRESH_SECONDS: f32 = 0.5;

/// Seconds of host time between HUD attachment checks.
pub const ATTACH_REFRESH_SECONDS: f32 = 1.0;

/// Lower bound on a building's time scale before dividing by it.
pub const MIN_TIME_SCALE: f32 = 0.001;

/// A new boost must exceed the current time scale by more than this to count.
pub const TIME_SCALE_EPSILON: f32 = 0.0001;

/// Sources with a resolved range at or below this never cover anything.
pub const MIN_SOURCE_RANGE: f32 = 0.001;

/// Vertical gap between the preview circle and its label, in world units.
pub const LABEL_OFFSET: f32 = 10.0;

/// Translation bundle keys and the fallbacks used when the bundle lacks them.
pub mod bundle {
    pub const PREVIEW_NONE: (&str, &str) = ("bpo.preview.none", "No powered graph in range");
    pub const PREVIEW_POSITIVE: (&str, &str) =
        ("bpo.preview.positive", "Positive after placement");
    pub const PREVIEW_NEGATIVE: (&str, &str) =
        ("bpo.preview.negative", "Negative after placement");
    pub const CHAT_REMOVE: (&str, &str) = ("bpo.chat.remove", "<BPO><Need remove overdrive>");
    pub const MARK_REMOVE: (&str, &str) = ("bpo.mark.remove", "Need remove overdrive");
    pub const SETTINGS_CATEGORY: (&str, &str) = ("settings.bpo", "Better Projector Overlay");
}
