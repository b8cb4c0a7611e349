#![allow(dead_code)]

use fnv::FnvHashMap;
use projector_overlay::block::*;
use projector_overlay::chat::ChatChannel;
use projector_overlay::constants::*;
use projector_overlay::host::HostContext;
use projector_overlay::hud::*;
use projector_overlay::locale::StaticBundle;
use projector_overlay::location::TilePos;
use projector_overlay::marker::*;
use projector_overlay::settings::{SettingsPanel, SettingsStore};
use projector_overlay::visual::*;
use projector_overlay::world::*;
use std::cell::RefCell;
use std::rc::Rc;

pub const PLAYER: Team = Team(1);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct World {
    pub game: bool,
    pub generating: bool,
    pub team: Option<Team>,
    pub buildings: Vec<Building>,
    pub held: Option<BlockInfo>,
    pub cursor: (f32, f32),
    pub net: bool,
}

impl WorldView for World {
    fn is_game(&self) -> bool {
        self.game
    }

    fn is_generating(&self) -> bool {
        self.generating
    }

    fn width(&self) -> i32 {
        200
    }

    fn height(&self) -> i32 {
        200
    }

    fn player_team(&self) -> Option<Team> {
        self.team
    }

    fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    fn held_block(&self) -> Option<&BlockInfo> {
        self.held.as_ref()
    }

    fn cursor_world(&self) -> (f32, f32) {
        self.cursor
    }

    fn net_active(&self) -> bool {
        self.net
    }
}

#[derive(Default)]
pub struct Settings {
    pub bools: FnvHashMap<String, bool>,
    pub ints: FnvHashMap<String, i32>,
}

impl SettingsStore for Settings {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.bools.get(key).copied().unwrap_or(default)
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.ints.get(key).copied().unwrap_or(default)
    }

    fn set_default_bool(&mut self, key: &str, value: bool) {
        self.bools.entry(key.to_string()).or_insert(value);
    }

    fn set_default_int(&mut self, key: &str, value: i32) {
        self.ints.entry(key.to_string()).or_insert(value);
    }
}

/// Settings dialog that records categories and control keys.
#[derive(Default)]
pub struct Panel {
    pub categories: Vec<String>,
    pub keys: Vec<String>,
    pub slider_labels: Vec<String>,
}

impl SettingsPanel for Panel {
    fn category(&mut self, title: &str) {
        self.categories.push(title.to_string());
    }

    fn check_pref(&mut self, key: &str, _default: bool) {
        self.keys.push(key.to_string());
    }

    fn slider_pref(
        &mut self,
        key: &str,
        default: i32,
        min: i32,
        max: i32,
        _step: i32,
        label: fn(i32) -> String,
    ) {
        self.keys.push(key.to_string());
        self.slider_labels.push(format!("{}..{} {}", min, max, label(default)));
    }
}

#[derive(Default)]
pub struct Chat {
    pub sent: Vec<String>,
    pub toasts: Vec<String>,
}

impl ChatChannel for Chat {
    fn send_chat_message(&mut self, message: &str) {
        self.sent.push(message.to_string());
    }

    fn show_toast(&mut self, message: &str) {
        self.toasts.push(message.to_string());
    }
}

#[derive(Default)]
pub struct Minimap {
    pub children: Vec<String>,
}

impl HudContainer for Minimap {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn has_child(&self, name: &str) -> bool {
        self.children.iter().any(|c| c == name)
    }

    fn attach(&mut self, overlay: HudOverlay) {
        self.children.push(overlay.name);
    }
}

pub struct Hud {
    pub minimap: Minimap,
}

impl HudRoot for Hud {
    fn find_container(&mut self, name: &str) -> Option<&mut dyn HudContainer> {
        if name == MINIMAP_NAME {
            Some(&mut self.minimap)
        } else {
            None
        }
    }

    fn remove(&mut self, name: &str) -> bool {
        let before = self.minimap.children.len();
        self.minimap.children.retain(|c| c != name);
        before != self.minimap.children.len()
    }
}

pub type MarkLog = Rc<RefCell<Vec<(String, TilePos)>>>;

struct RecordingMarkers {
    log: MarkLog,
    fail: bool,
}

impl ExternalMarkerApi for RecordingMarkers {
    fn new_mark_from_chat(&mut self, label: &str, pos: TilePos) -> Result<(), MarkerError> {
        if self.fail {
            return Err(MarkerError::CallFailed {
                pos,
                reason: "marker API threw".to_string(),
            });
        }
        self.log.borrow_mut().push((label.to_string(), pos));
        Ok(())
    }
}

pub struct Probe {
    pub available: bool,
    pub fail_calls: bool,
    pub log: MarkLog,
    pub probes: usize,
}

impl MarkerProbe for Probe {
    fn resolve_marker_api(&mut self) -> Result<Box<dyn ExternalMarkerApi>, MarkerError> {
        self.probes += 1;
        if !self.available {
            return Err(MarkerError::Unavailable("mindustryX.features.MarkerType".to_string()));
        }
        Ok(Box::new(RecordingMarkers {
            log: self.log.clone(),
            fail: self.fail_calls,
        }))
    }
}

/// A whole host: world, settings, bundle, chat, HUD and marker API.
pub struct TestHost {
    pub world: World,
    pub settings: Settings,
    pub bundle: StaticBundle,
    pub chat: Chat,
    pub hud: Option<Hud>,
    pub probe: Probe,
    pub panel: Panel,
    next_id: u32,
}

impl TestHost {
    pub fn new() -> Self {
        let mut settings = Settings::default();
        settings.bools.insert(MINIMAP_SETTING.to_string(), true);

        TestHost {
            world: World {
                game: true,
                generating: false,
                team: Some(PLAYER),
                buildings: Vec::new(),
                held: None,
                cursor: (0.0, 0.0),
                net: false,
            },
            settings,
            bundle: StaticBundle::new(),
            chat: Chat::default(),
            hud: Some(Hud {
                minimap: Minimap {
                    children: vec!["minimap-view".to_string()],
                },
            }),
            probe: Probe {
                available: true,
                fail_calls: false,
                log: Rc::new(RefCell::new(Vec::new())),
                probes: 0,
            },
            panel: Panel::default(),
            next_id: 1,
        }
    }

    pub fn ctx(&mut self) -> HostContext<'_> {
        HostContext {
            world: &self.world,
            settings: &mut self.settings,
            bundle: &self.bundle,
            chat: &mut self.chat,
            hud: self.hud.as_mut().map(|h| h as &mut dyn HudRoot),
            markers: &mut self.probe,
            panel: Some(&mut self.panel),
        }
    }

    pub fn build(&mut self, tx: i32, ty: i32, block: BlockInfo) -> &mut Building {
        let building = Building::new(self.next_id, PLAYER, TilePos::new(tx, ty), block);
        self.next_id += 1;
        self.world.buildings.push(building);
        let last = self.world.buildings.len() - 1;
        &mut self.world.buildings[last]
    }

    pub fn hold(&mut self, block: BlockInfo, tx: i32, ty: i32) {
        self.world.held = Some(block);
        self.world.cursor = (tx as f32 * TILE_SIZE + 2.0, ty as f32 * TILE_SIZE + 2.0);
    }

    pub fn marks(&self) -> Vec<(String, TilePos)> {
        self.probe.log.borrow().clone()
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.settings.bools.insert(key.to_string(), value);
    }
}

pub fn powered(name: &str) -> BlockInfo {
    BlockInfo::new(name, 1, BlockFlags::CAN_OVERDRIVE | BlockFlags::CONSUMES_POWER)
}

/// Canvas that records primitive kinds and the last label drawn.
#[derive(Default)]
pub struct Canvas {
    pub font: FontState,
    pub discs: Vec<(f32, f32, f32, Color)>,
    pub labels: Vec<String>,
}

impl OverlayCanvas for Canvas {
    fn set_z(&mut self, _z: f32) {}

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.discs.push((x, y, radius, color));
    }

    fn stroke_circle(&mut self, _x: f32, _y: f32, _radius: f32, _width: f32, _color: Color) {}

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _color: Color) {}

    fn project(&self, x: f32, y: f32) -> (f32, f32) {
        (x, y)
    }

    fn font_state(&self) -> FontState {
        self.font
    }

    fn set_font_state(&mut self, state: FontState) {
        self.font = state;
    }

    fn measure_text(&self, text: &str) -> (f32, f32) {
        (text.len() as f32 * 6.0, 12.0)
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32) {
        self.labels.push(text.to_string());
    }
}
