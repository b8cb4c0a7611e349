//! Block descriptions and the projector classification heuristic.
//!
//! Vanilla projectors are recognised by identity. Anything else that is a
//! projector is assumed to come from a content mod; those are treated as
//! sources, and as targets too unless they are the dome.

use crate::constants::*;
use crate::location::block_offset;
use bitflags::*;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BlockFlags: u8 {
        const NONE = 0;
        /// The block is an overdrive projector.
        const PROJECTOR = 1;
        /// Buildings of this block speed up when boosted.
        const CAN_OVERDRIVE = 2;
        /// The block declares a power consumer.
        const CONSUMES_POWER = 4;
    }
}

/// Identity of the vanilla blocks the classifier cares about.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VanillaBlock {
    OverdriveProjector,
    OverdriveDome,
    #[default]
    None,
}

#[derive(Clone, Debug)]
pub struct BlockInfo {
    pub name: String,
    pub localized_name: String,
    /// Footprint side length, in tiles.
    pub size: u32,
    /// Static boost radius, in world units. Zero for non-projectors.
    pub range: f32,
    /// Work-rate multiplier applied to boosted buildings.
    pub speed_boost: f32,
    pub vanilla: VanillaBlock,
    pub flags: BlockFlags,
}

impl BlockInfo {
    pub fn new(name: impl Into<String>, size: u32, flags: BlockFlags) -> Self {
        let name = name.into();
        BlockInfo {
            localized_name: name.clone(),
            name,
            size,
            range: 0.0,
            speed_boost: 1.0,
            vanilla: VanillaBlock::None,
            flags,
        }
    }

    /// The vanilla 2x2 overdrive projector.
    pub fn overdrive_projector() -> Self {
        BlockInfo {
            range: 80.0,
            speed_boost: 1.5,
            vanilla: VanillaBlock::OverdriveProjector,
            localized_name: "Overdrive Projector".to_string(),
            ..BlockInfo::new(
                "overdrive-projector",
                2,
                BlockFlags::PROJECTOR | BlockFlags::CONSUMES_POWER,
            )
        }
    }

    /// The vanilla 3x3 overdrive dome.
    pub fn overdrive_dome() -> Self {
        BlockInfo {
            range: 200.0,
            speed_boost: 2.5,
            vanilla: VanillaBlock::OverdriveDome,
            localized_name: "Overdrive Dome".to_string(),
            ..BlockInfo::new(
                "overdrive-dome",
                3,
                BlockFlags::PROJECTOR | BlockFlags::CONSUMES_POWER,
            )
        }
    }

    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    pub fn with_speed_boost(mut self, speed_boost: f32) -> Self {
        self.speed_boost = speed_boost;
        self
    }

    pub fn with_localized_name(mut self, localized_name: impl Into<String>) -> Self {
        self.localized_name = localized_name.into();
        self
    }

    #[inline]
    pub fn is_projector(&self) -> bool {
        self.flags.contains(BlockFlags::PROJECTOR)
    }

    #[inline]
    pub fn can_overdrive(&self) -> bool {
        self.flags.contains(BlockFlags::CAN_OVERDRIVE)
    }

    #[inline]
    pub fn consumes_power(&self) -> bool {
        self.flags.contains(BlockFlags::CONSUMES_POWER)
    }

    /// Offset from the placement tile to the block's center.
    pub fn offset(&self) -> f32 {
        block_offset(self.size)
    }

    /// Half the block's footprint, in world units.
    pub fn half_extent(&self) -> f32 {
        (self.size as f32 * TILE_SIZE / 2.0).max(0.0)
    }
}

/// Role of a block in the redundancy scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProjectorClass {
    /// May be made redundant, never dominates.
    Target,
    /// May dominate others, never made redundant.
    Source,
    /// Community projectors: dominate others and can be dominated.
    Both,
    Neither,
}

impl ProjectorClass {
    pub fn is_source(self) -> bool {
        matches!(self, ProjectorClass::Source | ProjectorClass::Both)
    }

    pub fn is_target(self) -> bool {
        matches!(self, ProjectorClass::Target | ProjectorClass::Both)
    }
}

pub fn classify_block(block: &BlockInfo) -> ProjectorClass {
    if !block.is_projector() {
        return ProjectorClass::Neither;
    }

    match block.vanilla {
        VanillaBlock::OverdriveDome => ProjectorClass::Source,
        VanillaBlock::OverdriveProjector => ProjectorClass::Target,
        VanillaBlock::None => ProjectorClass::Both,
    }
}

const COMMUNITY_NAME_HINTS: [&str; 2] = ["gaobu", "gabu"];
const COMMUNITY_LOCALIZED_HINTS: [&str; 2] = ["加布", "高布"];

/// Whether a non-vanilla projector matches one of the known community variants.
///
/// Unknown non-vanilla projectors are classified as sources anyway, so this
/// only feeds the scan report.
pub fn is_known_community_variant(block: &BlockInfo) -> bool {
    if !block.is_projector() || block.vanilla != VanillaBlock::None {
        return false;
    }

    let name = block.name.to_lowercase();
    let localized = block.localized_name.to_lowercase();

    COMMUNITY_NAME_HINTS.iter().any(|hint| name.contains(hint))
        || COMMUNITY_LOCALIZED_HINTS
            .iter()
            .any(|hint| localized.contains(hint))
}
