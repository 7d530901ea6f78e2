use crate::generate::SolutionSet;
use crate::train::Solution;

/// Find the index of the solution whose pitch is closest to `pitch`.
/// `solutions` must be sorted by pitch. Returns `None` only when there is nothing to choose from.
/// When the two bracketing solutions are equally close, the lower pitch wins.
pub fn find_nearest(solutions: &[Solution], pitch: f64) -> Option<usize> {
    if solutions.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = solutions.len() - 1;

    // Close in on the pair of solutions either side of the goal
    while hi - lo > 1 {
        let mid = (hi + lo) / 2;
        if solutions[mid].pitch >= pitch {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    let hi_error = solutions[hi].pitch - pitch;
    let lo_error = pitch - solutions[lo].pitch;
    if hi_error.abs() < lo_error.abs() {
        Some(hi)
    } else {
        Some(lo)
    }
}

impl SolutionSet {
    /// The solution whose pitch is closest to `pitch`, in inches
    pub fn nearest(&self, pitch: f64) -> Option<&Solution> {
        find_nearest(self.as_slice(), pitch).map(|i| &self.as_slice()[i])
    }
}
