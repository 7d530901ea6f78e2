//! Gear train layouts, and the pitch and length each train produces.
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Teeth on the fixed reversing idler at the top of the train
pub const IDLER_TEETH: f64 = 40.0;
/// Leadscrew threads per inch
pub const LEADSCREW_TPI: f64 = 12.0;

/// The four ways gears can be hung on the banjo.
/// In the tag, `ab` means a and b share a shaft, `a-b` means a and b are meshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// a-b-c
    Simple,
    /// ab-cd-e
    Compound5,
    /// ab-c-d
    Compound4A,
    /// a-bc-d
    Compound4B,
}

impl Layout {
    pub const ALL: [Layout; 4] = [
        Layout::Simple,
        Layout::Compound5,
        Layout::Compound4A,
        Layout::Compound4B,
    ];

    /// Number of gears the layout uses
    pub fn slots(self) -> usize {
        match self {
            Layout::Simple => 3,
            Layout::Compound5 => 5,
            Layout::Compound4A | Layout::Compound4B => 4,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Layout::Simple => "a-b-c",
            Layout::Compound5 => "ab-cd-e",
            Layout::Compound4A => "ab-c-d",
            Layout::Compound4B => "a-bc-d",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown gear layout '{0}', expected one of a-b-c, ab-cd-e, ab-c-d, a-bc-d")]
pub struct LayoutParseError(pub String);

impl FromStr for Layout {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .iter()
            .copied()
            .find(|layout| layout.tag() == s)
            .ok_or_else(|| LayoutParseError(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainError {
    #[error("Layout {layout} takes {expected} gears, got {got}")]
    WrongGearCount {
        layout: Layout,
        expected: usize,
        got: usize,
    },

    #[error("Gear in slot {slot} has no teeth")]
    ZeroTeeth { slot: char },
}

/// A set of gears hung in a particular layout. Each variant only carries the slots its layout uses,
/// and every tooth count is known to be nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearTrain {
    Simple { a: u32, b: u32, c: u32 },
    Compound5 { a: u32, b: u32, c: u32, d: u32, e: u32 },
    Compound4A { a: u32, b: u32, c: u32, d: u32 },
    Compound4B { a: u32, b: u32, c: u32, d: u32 },
}

impl GearTrain {
    /// Build a train from tooth counts listed in slot order (a, b, c, ...)
    pub fn new(layout: Layout, teeth: &[u32]) -> Result<Self, TrainError> {
        if teeth.len() != layout.slots() {
            return Err(TrainError::WrongGearCount {
                layout,
                expected: layout.slots(),
                got: teeth.len(),
            });
        }
        if let Some(pos) = teeth.iter().position(|&t| t == 0) {
            return Err(TrainError::ZeroTeeth {
                slot: (b'a' + pos as u8) as char,
            });
        }
        Ok(Self::from_slots(layout, teeth))
    }

    /// Caller guarantees the slot count matches and no tooth count is zero
    pub(crate) fn from_slots(layout: Layout, t: &[u32]) -> Self {
        debug_assert_eq!(t.len(), layout.slots());
        debug_assert!(t.iter().all(|&v| v > 0));
        match layout {
            Layout::Simple => GearTrain::Simple {
                a: t[0],
                b: t[1],
                c: t[2],
            },
            Layout::Compound5 => GearTrain::Compound5 {
                a: t[0],
                b: t[1],
                c: t[2],
                d: t[3],
                e: t[4],
            },
            Layout::Compound4A => GearTrain::Compound4A {
                a: t[0],
                b: t[1],
                c: t[2],
                d: t[3],
            },
            Layout::Compound4B => GearTrain::Compound4B {
                a: t[0],
                b: t[1],
                c: t[2],
                d: t[3],
            },
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            GearTrain::Simple { .. } => Layout::Simple,
            GearTrain::Compound5 { .. } => Layout::Compound5,
            GearTrain::Compound4A { .. } => Layout::Compound4A,
            GearTrain::Compound4B { .. } => Layout::Compound4B,
        }
    }

    /// All five slots, with the slots this layout doesn't use set to 0.
    pub fn padded(&self) -> [u32; 5] {
        match *self {
            GearTrain::Simple { a, b, c } => [a, b, c, 0, 0],
            GearTrain::Compound5 { a, b, c, d, e } => [a, b, c, d, e],
            GearTrain::Compound4A { a, b, c, d } | GearTrain::Compound4B { a, b, c, d } => {
                [a, b, c, d, 0]
            }
        }
    }

    /// Thread pitch cut by this train, in inches per spindle revolution
    pub fn pitch(&self) -> f64 {
        let a = match *self {
            GearTrain::Simple { a, .. }
            | GearTrain::Compound5 { a, .. }
            | GearTrain::Compound4A { a, .. }
            | GearTrain::Compound4B { a, .. } => f64::from(a),
        };
        let mut ratio = IDLER_TEETH / a;

        match *self {
            GearTrain::Simple { a, c, .. } => {
                ratio *= f64::from(a) / f64::from(c);
            }
            GearTrain::Compound5 { b, c, d, e, .. } => {
                ratio *= f64::from(b) / f64::from(c);
                ratio *= f64::from(d) / f64::from(e);
            }
            GearTrain::Compound4A { b, d, .. } => {
                ratio *= f64::from(b) / f64::from(d);
            }
            GearTrain::Compound4B { a, b, c, d } => {
                ratio *= f64::from(a) / f64::from(b);
                ratio *= f64::from(c) / f64::from(d);
            }
        }

        ratio / LEADSCREW_TPI
    }

    /// Length of the train, in teeth. Gears sharing a shaft only count for half their teeth.
    pub fn length(&self) -> f64 {
        let half = |t: u32| f64::from(t) / 2.0;
        let n = IDLER_TEETH / 2.0;

        n + match *self {
            GearTrain::Simple { a, b, c } => f64::from(a) + f64::from(b) + half(c),
            GearTrain::Compound5 { a, b, c, d, e } => half(a) + half(b) + half(c) + half(d) + half(e),
            GearTrain::Compound4A { a, b, c, d } => half(a) + half(b) + f64::from(c) + half(d),
            GearTrain::Compound4B { a, b, c, d } => f64::from(a) + half(b) + half(c) + half(d),
        }
    }
}

impl fmt::Display for GearTrain {
    /// Gears on a shared shaft are joined with ':', meshed gears with '-'
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GearTrain::Simple { a, b, c } => write!(f, "{a}-{b}-{c}"),
            GearTrain::Compound5 { a, b, c, d, e } => write!(f, "{a}:{b}-{c}:{d}-{e}"),
            GearTrain::Compound4A { a, b, c, d } => write!(f, "{a}:{b}-{c}-{d}"),
            GearTrain::Compound4B { a, b, c, d } => write!(f, "{a}-{b}:{c}-{d}"),
        }
    }
}

/// A valid train together with the pitch it cuts.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub pitch: f64,
    pub train: GearTrain,
}

impl Solution {
    pub fn new(train: GearTrain) -> Self {
        Solution {
            pitch: train.pitch(),
            train,
        }
    }

    pub fn layout(&self) -> Layout {
        self.train.layout()
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Solution {}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by pitch, then layout tag, then the padded tooth counts
impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pitch
            .total_cmp(&other.pitch)
            .then_with(|| self.layout().tag().cmp(other.layout().tag()))
            .then_with(|| self.train.padded().cmp(&other.train.padded()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compound5_pitch_and_length() {
        let train = GearTrain::new(Layout::Compound5, &[68, 72, 80, 75, 48]).unwrap();
        let expected = (40.0 / 68.0) * (72.0 / 80.0) * (75.0 / 48.0) / 12.0;
        assert_relative_eq!(train.pitch(), expected);
        assert_relative_eq!(train.pitch() * 25.4, 1.75, epsilon = 0.01);
        assert_relative_eq!(train.length(), 191.5);
    }

    #[test]
    fn test_simple_pitch_ignores_middle_gear() {
        let t1 = GearTrain::new(Layout::Simple, &[40, 30, 80]).unwrap();
        let t2 = GearTrain::new(Layout::Simple, &[40, 100, 80]).unwrap();
        assert_relative_eq!(t1.pitch(), 40.0 / 80.0 / 12.0);
        assert_relative_eq!(t1.pitch(), t2.pitch());
        assert_relative_eq!(t1.length(), 20.0 + 40.0 + 30.0 + 40.0);
    }

    #[test]
    fn test_compound4_lengths() {
        let a = GearTrain::new(Layout::Compound4A, &[30, 35, 40, 45]).unwrap();
        assert_relative_eq!(a.length(), 20.0 + 15.0 + 17.5 + 40.0 + 22.5);
        assert_relative_eq!(a.pitch(), (40.0 / 30.0) * (35.0 / 45.0) / 12.0);

        let b = GearTrain::new(Layout::Compound4B, &[30, 35, 40, 45]).unwrap();
        assert_relative_eq!(b.length(), 20.0 + 30.0 + 17.5 + 20.0 + 22.5);
        assert_relative_eq!(b.pitch(), (40.0 / 30.0) * (30.0 / 35.0) * (40.0 / 45.0) / 12.0);
    }

    #[test]
    fn test_rejects_bad_gears() {
        assert_eq!(
            GearTrain::new(Layout::Compound5, &[30, 40, 50]),
            Err(TrainError::WrongGearCount {
                layout: Layout::Compound5,
                expected: 5,
                got: 3
            })
        );
        assert_eq!(
            GearTrain::new(Layout::Simple, &[30, 0, 50]),
            Err(TrainError::ZeroTeeth { slot: 'b' })
        );
    }

    #[test]
    fn test_layout_tags_round_trip() {
        for layout in Layout::ALL {
            assert_eq!(layout.tag().parse::<Layout>(), Ok(layout));
        }
        assert!("abc".parse::<Layout>().is_err());
    }

    #[test]
    fn test_notation() {
        let t = |l, g: &[u32]| GearTrain::new(l, g).unwrap().to_string();
        assert_eq!(t(Layout::Simple, &[30, 40, 50]), "30-40-50");
        assert_eq!(t(Layout::Compound5, &[68, 72, 80, 75, 48]), "68:72-80:75-48");
        assert_eq!(t(Layout::Compound4A, &[30, 35, 40, 45]), "30:35-40-45");
        assert_eq!(t(Layout::Compound4B, &[30, 35, 40, 45]), "30-35:40-45");
    }

    #[test]
    fn test_ordering_breaks_ties_by_tag_then_gears() {
        // Same pitch (1/12 in) from different layouts and gears
        let simple = Solution::new(GearTrain::new(Layout::Simple, &[40, 60, 40]).unwrap());
        let other_simple = Solution::new(GearTrain::new(Layout::Simple, &[40, 70, 40]).unwrap());
        let compound = Solution::new(GearTrain::new(Layout::Compound4A, &[40, 40, 50, 40]).unwrap());
        assert_eq!(simple.pitch, compound.pitch);
        // "a-b-c" sorts before "ab-c-d"
        assert!(simple < compound);
        assert!(simple < other_simple);
    }
}
