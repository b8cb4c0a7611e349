use crate::block::*;
use crate::constants::*;
use crate::location::*;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Team(pub u8);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BuildingId(pub u32);

/// A building's view of the power subgraph it belongs to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PowerGraphRef {
    pub id: i32,
    /// Net balance of the whole subgraph, in power units per tick.
    pub balance_per_tick: f32,
}

impl PowerGraphRef {
    pub fn balance_per_second(&self) -> f32 {
        self.balance_per_tick * TICKS_PER_SECOND
    }
}

/// Snapshot of a live building, as read from the host each tick.
#[derive(Clone, Debug)]
pub struct Building {
    pub id: BuildingId,
    pub team: Team,
    pub valid: bool,
    pub tile: TilePos,
    pub x: f32,
    pub y: f32,
    pub block: BlockInfo,
    /// Current work-rate multiplier.
    pub time_scale: f32,
    pub production_per_tick: f32,
    pub should_consume_power: bool,
    pub consumption_per_tick: f32,
    pub power_graph: Option<PowerGraphRef>,
    /// Effective boost radius reported by the building itself, when it has one.
    pub real_range: Option<f32>,
    /// Range exposed through the host's generic ranged capability.
    pub ranged: Option<f32>,
}

impl Building {
    /// Place a building of `block` on `tile`, centered the way the host centers it.
    pub fn new(id: u32, team: Team, tile: TilePos, block: BlockInfo) -> Self {
        let (x, y) = tile.world(block.offset());
        Building {
            id: BuildingId(id),
            team,
            valid: true,
            tile,
            x,
            y,
            block,
            time_scale: 1.0,
            production_per_tick: 0.0,
            should_consume_power: false,
            consumption_per_tick: 0.0,
            power_graph: None,
            real_range: None,
            ranged: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> TilePos {
        self.tile
    }

    pub fn with_world_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_power_graph(mut self, id: i32, balance_per_tick: f32) -> Self {
        self.power_graph = Some(PowerGraphRef {
            id,
            balance_per_tick,
        });
        self
    }

    pub fn with_production(mut self, per_tick: f32) -> Self {
        self.production_per_tick = per_tick;
        self
    }

    pub fn with_consumption(mut self, per_tick: f32) -> Self {
        self.should_consume_power = true;
        self.consumption_per_tick = per_tick;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

/// Read-only access to the host's game state.
pub trait WorldView {
    /// True while a map is loaded and being played.
    fn is_game(&self) -> bool;

    fn is_generating(&self) -> bool;

    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Team of the local player, or `None` when there is no player.
    fn player_team(&self) -> Option<Team>;

    /// All live buildings, of every team.
    fn buildings(&self) -> &[Building];

    /// Block the player is currently holding for placement, if any.
    fn held_block(&self) -> Option<&BlockInfo>;

    /// Cursor position in world coordinates.
    fn cursor_world(&self) -> (f32, f32);

    /// Whether a multiplayer session is active.
    fn net_active(&self) -> bool;

    /// Host is in a state where analyses make sense.
    fn is_ready(&self) -> bool {
        self.is_game() && !self.is_generating() && self.player_team().is_some()
    }
}
