//! Placement prediction: what a projector would do to power if placed under the cursor.
//!
//! Every friendly boostable building in range is grouped by power subgraph. The
//! subgraph's current balance plus the summed per-building deltas is its
//! predicted balance, and the worst subgraph is what the player sees.

use crate::location::*;
use crate::power::estimate_delta_per_second;
use crate::world::*;
use fnv::{FnvHashMap, FnvHashSet};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementPreview {
    pub active: bool,
    pub positive: bool,
    pub world_x: f32,
    pub world_y: f32,
    pub range: f32,
    /// Worst predicted subgraph balance, per second.
    pub balance: f32,
    pub graph_count: usize,
    pub affected_count: usize,
}

impl Default for PlacementPreview {
    fn default() -> Self {
        PlacementPreview {
            active: false,
            positive: true,
            world_x: 0.0,
            world_y: 0.0,
            range: 0.0,
            balance: f32::INFINITY,
            graph_count: 0,
            affected_count: 0,
        }
    }
}

impl PlacementPreview {
    pub fn reset(&mut self) {
        *self = PlacementPreview::default();
    }
}

/// Owns the preview and the per-frame scratch maps so nothing is allocated per frame.
#[derive(Default)]
pub struct PlacementPredictor {
    preview: PlacementPreview,
    touched_graphs: FnvHashSet<i32>,
    graph_balance: FnvHashMap<i32, f32>,
    graph_delta: FnvHashMap<i32, f32>,
}

impl PlacementPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> &PlacementPreview {
        &self.preview
    }

    pub fn clear(&mut self) {
        self.preview.reset();
        self.touched_graphs.clear();
        self.graph_balance.clear();
        self.graph_delta.clear();
    }

    pub fn predict(&mut self, world: &dyn WorldView) -> &PlacementPreview {
        self.preview.reset();

        if !world.is_ready() {
            return &self.preview;
        }
        let team = match world.player_team() {
            Some(team) => team,
            None => return &self.preview,
        };
        let block = match world.held_block() {
            Some(block) if block.is_projector() => block,
            _ => return &self.preview,
        };
        if world.width() <= 0 || world.height() <= 0 {
            return &self.preview;
        }

        let (cursor_x, cursor_y) = world.cursor_world();
        let tile = TilePos::from_world_clamped(cursor_x, cursor_y, world.width(), world.height());
        let (place_x, place_y) = tile.world(block.offset());
        let range = block.range.max(1.0);
        let boost = block.speed_boost.max(1.0);

        self.touched_graphs.clear();
        self.graph_balance.clear();
        self.graph_delta.clear();

        let mut affected = 0;

        for building in world.buildings() {
            if !building.valid || building.team != team {
                continue;
            }
            if !building.block.can_overdrive() {
                continue;
            }
            let graph = match building.power_graph {
                Some(graph) => graph,
                None => continue,
            };
            if !within(building.x, building.y, place_x, place_y, range) {
                continue;
            }

            affected += 1;

            self.touched_graphs.insert(graph.id);
            self.graph_balance.insert(graph.id, graph.balance_per_second());
            *self.graph_delta.entry(graph.id).or_insert(0.0) +=
                estimate_delta_per_second(building, boost);
        }

        let graph_count = self.touched_graphs.len();

        let mut balance = if graph_count > 0 {
            self.touched_graphs
                .iter()
                .map(|id| {
                    self.graph_balance.get(id).copied().unwrap_or(0.0)
                        + self.graph_delta.get(id).copied().unwrap_or(0.0)
                })
                .fold(f32::INFINITY, f32::min)
        } else {
            0.0
        };

        if !balance.is_finite() {
            balance = 0.0;
        }

        self.preview = PlacementPreview {
            active: true,
            positive: balance >= 0.0,
            world_x: place_x,
            world_y: place_y,
            range,
            balance,
            graph_count,
            affected_count: affected,
        };

        &self.preview
    }
}
