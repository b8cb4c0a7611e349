//! Redundancy scan: find projectors whose area is already covered by a source.
//!
//! A target is covered when some other source reaches the target's center,
//! padded by half the target's footprint. Each covered position is marked and
//! announced at most once per world.

use crate::chat::{send_alert, ChatChannel};
use crate::constants::bundle::*;
use crate::constants::*;
use crate::index::WorldIndex;
use crate::locale::Bundle;
use crate::location::*;
use crate::marker::MarkerSink;
use crate::world::*;
use fnv::FnvHashSet;
use log::*;

/// Outputs a scan may write to.
pub struct ScanOutputs<'a> {
    pub markers: &'a mut MarkerSink,
    pub chat: &'a mut dyn ChatChannel,
    pub bundle: &'a dyn Bundle,
    pub chat_enabled: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub sources: usize,
    pub community_sources: usize,
    pub targets: usize,
    pub covered: usize,
    pub newly_marked: usize,
    pub newly_announced: usize,
}

/// Effective boost radius of a source, clamped to be non-negative.
///
/// Prefers the building's own effective range, then the generic ranged
/// capability, then the block's static range.
pub fn real_range(source: &Building) -> f32 {
    if !source.block.is_projector() {
        return 0.0;
    }

    source
        .real_range
        .or(source.ranged)
        .unwrap_or(source.block.range)
        .max(0.0)
}

#[derive(Default)]
pub struct RedundancyScanner {
    index: WorldIndex,
    marked: FnvHashSet<TilePos>,
    announced: FnvHashSet<TilePos>,
}

impl RedundancyScanner {
    pub fn new() -> Self {
        RedundancyScanner {
            index: WorldIndex::new(),
            marked: FnvHashSet::default(),
            announced: FnvHashSet::default(),
        }
    }

    /// Forget everything marked or announced. Called on world load.
    pub fn reset(&mut self) {
        self.index.clear();
        self.marked.clear();
        self.announced.clear();
    }

    pub fn marked(&self) -> &FnvHashSet<TilePos> {
        &self.marked
    }

    pub fn announced(&self) -> &FnvHashSet<TilePos> {
        &self.announced
    }

    pub fn scan(&mut self, world: &dyn WorldView, outputs: ScanOutputs) -> ScanReport {
        let mut report = ScanReport::default();

        if !world.is_ready() {
            return report;
        }
        let team = match world.player_team() {
            Some(team) => team,
            None => return report,
        };

        let buildings = world.buildings();
        self.index.rebuild(buildings, team);

        report.sources = self.index.sources().len();
        report.community_sources = self.index.community_sources();
        report.targets = self.index.targets().len();

        if !self.index.has_candidates() {
            return report;
        }

        let mut mark_label: Option<String> = None;
        let mut chat_prefix: Option<String> = None;

        for &target_index in self.index.targets() {
            let target = &buildings[target_index];
            if !target.valid || !is_covered(target, buildings, self.index.sources()) {
                continue;
            }

            report.covered += 1;
            let pos = target.pos();

            if self.marked.insert(pos) {
                let label = mark_label.get_or_insert_with(|| outputs.bundle.text(MARK_REMOVE));
                outputs.markers.mark_need_remove(label, pos);
                report.newly_marked += 1;
            }

            if self.announced.insert(pos) {
                report.newly_announced += 1;
                if outputs.chat_enabled {
                    let prefix = chat_prefix.get_or_insert_with(|| outputs.bundle.text(CHAT_REMOVE));
                    send_alert(&mut *outputs.chat, world.net_active(), prefix, pos);
                }
            }
        }

        if report.newly_marked > 0 || report.newly_announced > 0 {
            debug!(
                "Redundancy scan: sources={} ({} community), targets={}, covered={}, new marks={}, new alerts={}",
                report.sources,
                report.community_sources,
                report.targets,
                report.covered,
                report.newly_marked,
                report.newly_announced
            );
        }

        report
    }
}

fn is_covered(target: &Building, buildings: &[Building], sources: &[usize]) -> bool {
    let pad = target.block.half_extent();

    sources.iter().map(|&i| &buildings[i]).any(|source| {
        if !source.valid || source.id == target.id {
            return false;
        }

        let range = real_range(source);
        range > MIN_SOURCE_RANGE && within(target.x, target.y, source.x, source.y, range + pad)
    })
}
