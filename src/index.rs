use crate::block::*;
use crate::world::*;

/// Friendly projectors found by the last scan, as indices into the building slice.
///
/// The sequences are cleared and refilled on every rebuild so their storage is
/// reused across scans.
#[derive(Default)]
pub struct WorldIndex {
    sources: Vec<usize>,
    targets: Vec<usize>,
    community_sources: usize,
}

impl WorldIndex {
    pub fn new() -> Self {
        WorldIndex {
            sources: Vec::with_capacity(64),
            targets: Vec::with_capacity(128),
            community_sources: 0,
        }
    }

    pub fn rebuild(&mut self, buildings: &[Building], team: Team) {
        self.clear();

        for (index, building) in buildings.iter().enumerate() {
            if !building.valid || building.team != team {
                continue;
            }

            let class = classify_block(&building.block);
            if class.is_source() {
                self.sources.push(index);
                if is_known_community_variant(&building.block) {
                    self.community_sources += 1;
                }
            }
            if class.is_target() {
                self.targets.push(index);
            }
        }
    }

    pub fn clear(&mut self) {
        self.sources.clear();
        self.targets.clear();
        self.community_sources = 0;
    }

    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Sources recognised as a known community projector by name.
    pub fn community_sources(&self) -> usize {
        self.community_sources
    }

    /// True when there is at least one source and one target to compare.
    pub fn has_candidates(&self) -> bool {
        !self.sources.is_empty() && !self.targets.is_empty()
    }
}
