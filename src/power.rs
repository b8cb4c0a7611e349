use crate::constants::*;
use crate::world::*;

/// Change in a building's net power per second if its work rate rose to `new_boost`.
///
/// Production and consumption both scale linearly with the work rate, so the
/// delta is linear in the net at the current scale. Boosts that do not raise
/// the current scale yield zero.
pub fn estimate_delta_per_second(building: &Building, new_boost: f32) -> f32 {
    let old_scale = building.time_scale.max(MIN_TIME_SCALE);
    let new_scale = old_scale.max(new_boost);
    if new_scale <= old_scale + TIME_SCALE_EPSILON {
        return 0.0;
    }

    let produced = building.production_per_tick * TICKS_PER_SECOND * old_scale;
    let consumed = if building.should_consume_power && building.block.consumes_power() {
        building.consumption_per_tick * TICKS_PER_SECOND * old_scale
    } else {
        0.0
    };

    (produced - consumed) * (new_scale / old_scale - 1.0)
}
