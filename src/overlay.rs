//! Public entry points, driven by the host's event bus and frame triggers.
//!
//! `handle_event` is called for every subscribed event, `update` once per
//! update trigger and `draw` once per draw trigger. Everything runs on the
//! host's thread and finishes within the call.

use crate::constants::bundle::*;
use crate::constants::*;
use crate::host::*;
use crate::hud::{ensure_attached, HudRoot};
use crate::locale::Bundle;
use crate::location::TilePos;
use crate::marker::MarkerSink;
use crate::predict::*;
use crate::scan::*;
use crate::schedule::*;
use crate::settings::*;
use crate::visual::*;
use crate::world::WorldView;
use fnv::FnvHashSet;
use log::*;

const TIMER_SETTINGS: usize = 0;
const TIMER_ATTACH: usize = 1;
const TIMER_SCAN: usize = 2;
const TIMER_COUNT: usize = 3;

pub struct ProjectorOverlay {
    settings: OverlaySettings,
    interval: Interval,
    rescan: RescanLatch,
    predictor: PlacementPredictor,
    scanner: RedundancyScanner,
    markers: MarkerSink,
    marker_probed: bool,
    settings_added: bool,
}

impl Default for ProjectorOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectorOverlay {
    pub fn new() -> Self {
        ProjectorOverlay {
            settings: OverlaySettings::default(),
            interval: Interval::new(TIMER_COUNT),
            rescan: RescanLatch::default(),
            predictor: PlacementPredictor::new(),
            scanner: RedundancyScanner::new(),
            markers: MarkerSink::Noop,
            marker_probed: false,
            settings_added: false,
        }
    }

    /// Drop an overlay element left behind by a previous load of the mod.
    pub fn init(&mut self, hud: Option<&mut dyn HudRoot>) {
        if let Some(root) = hud {
            if root.remove(OVERLAY_NAME) {
                debug!("Removed stale HUD overlay");
            }
        }
    }

    pub fn handle_event(&mut self, event: HostEvent, ctx: &mut HostContext) {
        match event {
            HostEvent::ClientLoad => {
                apply_defaults(ctx.settings);
                if !self.marker_probed {
                    self.marker_probed = true;
                    self.markers = MarkerSink::probe(ctx.markers);
                }
                self.refresh_settings(&*ctx.settings);
                self.add_settings_category(ctx);
                self.attach_hud(ctx);
                self.rescan.set();
            }
            HostEvent::WorldLoad => {
                self.scanner.reset();
                self.predictor.clear();
                self.attach_hud(ctx);
                self.rescan.set();
            }
            HostEvent::SettingsChanged => {
                self.refresh_settings(&*ctx.settings);
            }
            _ => {
                debug_assert!(event.is_structural());
                self.rescan.set();
            }
        }
    }

    /// Update trigger. Returns the scan report when a scan ran this tick.
    pub fn update(&mut self, ctx: &mut HostContext, delta_seconds: f32) -> Option<ScanReport> {
        self.interval.advance(delta_seconds);

        if self.interval.check(TIMER_SETTINGS, SETTINGS_REFRESH_SECONDS) {
            self.refresh_settings(&*ctx.settings);
        }
        if self.interval.check(TIMER_ATTACH, ATTACH_REFRESH_SECONDS) {
            self.attach_hud(ctx);
        }

        if !self.settings.scan_active() {
            return None;
        }

        let due = self.rescan.is_set()
            || self
                .interval
                .check(TIMER_SCAN, self.settings.scan_interval());
        if !due {
            return None;
        }
        self.rescan.take();

        let report = self.scanner.scan(
            ctx.world,
            ScanOutputs {
                markers: &mut self.markers,
                chat: &mut *ctx.chat,
                bundle: ctx.bundle,
                chat_enabled: self.settings.chat_enabled,
            },
        );
        Some(report)
    }

    /// Draw trigger. Returns whether the preview was drawn.
    pub fn draw(
        &mut self,
        world: &dyn WorldView,
        bundle: &dyn Bundle,
        canvas: &mut dyn OverlayCanvas,
    ) -> bool {
        if !self.settings.preview_active() {
            return false;
        }

        let preview = self.predictor.predict(world);
        render_preview(canvas, preview, bundle)
    }

    /// Add the overlay's settings category and pick up whatever it shows.
    pub fn build_settings(
        &mut self,
        panel: &mut dyn SettingsPanel,
        store: &dyn SettingsStore,
        bundle: &dyn Bundle,
    ) {
        self.settings = build_settings(panel, store, &bundle.text(SETTINGS_CATEGORY));
        self.settings_added = true;
    }

    /// Re-read settings immediately, e.g. after the player commits a change.
    pub fn refresh_settings(&mut self, store: &dyn SettingsStore) {
        self.settings = OverlaySettings::load(store);
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    pub fn preview(&self) -> &PlacementPreview {
        self.predictor.preview()
    }

    pub fn marked_positions(&self) -> &FnvHashSet<TilePos> {
        self.scanner.marked()
    }

    pub fn announced_positions(&self) -> &FnvHashSet<TilePos> {
        self.scanner.announced()
    }

    pub fn rescan_pending(&self) -> bool {
        self.rescan.is_set()
    }

    pub fn marker_available(&self) -> bool {
        self.markers.is_available()
    }

    fn add_settings_category(&mut self, ctx: &mut HostContext) {
        if self.settings_added {
            return;
        }
        if let Some(panel) = ctx.panel.as_deref_mut() {
            self.build_settings(panel, &*ctx.settings, ctx.bundle);
            debug!("Added settings category");
        }
    }

    fn attach_hud(&mut self, ctx: &mut HostContext) {
        let minimap_enabled = ctx.settings.get_bool(MINIMAP_SETTING, false);
        if let Some(root) = ctx.hud.as_deref_mut() {
            if ensure_attached(root, minimap_enabled) {
                debug!("Attached HUD overlay to minimap");
            }
        }
    }
}
