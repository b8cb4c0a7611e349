//! In-memory `WorldView` for unit tests.

use crate::block::*;
use crate::constants::*;
use crate::location::*;
use crate::world::*;

pub const PLAYER: Team = Team(1);
pub const ENEMY: Team = Team(2);

pub struct TestWorld {
    pub game: bool,
    pub generating: bool,
    pub width: i32,
    pub height: i32,
    pub team: Option<Team>,
    pub buildings: Vec<Building>,
    pub held: Option<BlockInfo>,
    pub cursor: (f32, f32),
    pub net: bool,
    next_id: u32,
}

impl TestWorld {
    /// A 100x100 map in play with nothing built.
    pub fn new() -> Self {
        TestWorld {
            game: true,
            generating: false,
            width: 100,
            height: 100,
            team: Some(PLAYER),
            buildings: Vec::new(),
            held: None,
            cursor: (0.0, 0.0),
            net: false,
            next_id: 1,
        }
    }

    /// Hold `block` with the cursor over tile (`tx`, `ty`).
    pub fn holding(mut self, block: BlockInfo, tx: i32, ty: i32) -> Self {
        self.cursor = (tx as f32 * TILE_SIZE + 1.0, ty as f32 * TILE_SIZE + 1.0);
        self.held = Some(block);
        self
    }

    pub fn add(&mut self, build: impl FnOnce(Building) -> Building, tx: i32, ty: i32, block: BlockInfo) -> usize {
        let building = Building::new(self.next_id, PLAYER, TilePos::new(tx, ty), block);
        self.next_id += 1;
        self.buildings.push(build(building));
        self.buildings.len() - 1
    }

    pub fn add_plain(&mut self, tx: i32, ty: i32, block: BlockInfo) -> usize {
        self.add(|b| b, tx, ty, block)
    }
}

impl WorldView for TestWorld {
    fn is_game(&self) -> bool {
        self.game
    }

    fn is_generating(&self) -> bool {
        self.generating
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
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

pub fn powered(name: &str) -> BlockInfo {
    BlockInfo::new(name, 1, BlockFlags::CAN_OVERDRIVE | BlockFlags::CONSUMES_POWER)
}
