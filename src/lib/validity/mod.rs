use crate::config::Limits;
use crate::train::GearTrain;

/// Is this a geometrically valid gear configuration? Checks that the gears fit in the banjo slot,
/// that neighbouring gears clear each other and the empty hubs, and that the train is long enough
/// to reach the leadscrew.
pub fn is_valid(limits: &Limits, train: &GearTrain) -> bool {
    let t = |v: u32| i64::from(v);
    let fits = match *train {
        GearTrain::Simple { a, b, c } => {
            let (a, b, c) = (t(a), t(b), t(c));
            a + b <= limits.max_slot_span && b + c >= limits.min_final_center_distance
        }
        GearTrain::Compound5 { a, b, c, d, e } => {
            let (a, b, c, d, e) = (t(a), t(b), t(c), t(d), t(e));
            b + c <= limits.max_slot_span
                && d + e >= limits.min_final_center_distance
                && b - a <= limits.max_coaxial_diff
                && (b + c) - (a + d) >= limits.min_gear_clearance
                && (d + e) - (c + limits.hub_size) >= limits.min_gear_clearance
        }
        GearTrain::Compound4A { a, b, c, d } => {
            let (a, b, c, d) = (t(a), t(b), t(c), t(d));
            b + c <= limits.max_slot_span
                && c + d >= limits.min_final_center_distance
                && b - a <= limits.max_coaxial_diff
        }
        GearTrain::Compound4B { a, b, c, d } => {
            let (a, b, c, d) = (t(a), t(b), t(c), t(d));
            a + b <= limits.max_slot_span
                && c + d >= limits.min_final_center_distance
                && (a + b) - (c + limits.hub_size) >= limits.min_gear_clearance
                && (c + d) - (b + limits.hub_size) >= limits.min_gear_clearance
        }
    };

    fits && train.length() >= limits.min_train_length
}
