//! Brute force search over every way of hanging the gear set in every layout.
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{GearInventory, Limits};
use crate::train::{GearTrain, Layout, Solution};
use crate::validity::is_valid;

/// Every valid train, sorted by pitch. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
}

impl SolutionSet {
    /// Sorts `solutions` into pitch order
    pub fn new(mut solutions: Vec<Solution>) -> Self {
        solutions.sort();
        SolutionSet { solutions }
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }
}

/// Enumerate every valid gear train the inventory can make, across all layouts.
/// Each layout is searched on its own rayon worker; the final sort makes the result independent
/// of which finished first.
pub fn generate(limits: &Limits, inventory: &GearInventory) -> SolutionSet {
    let per_layout: Vec<Vec<Solution>> = Layout::ALL
        .par_iter()
        .map(|&layout| solutions_for_layout(limits, inventory, layout))
        .collect();

    let total = per_layout.iter().map(Vec::len).sum();
    let mut solutions = Vec::with_capacity(total);
    for s in per_layout {
        solutions.extend(s);
    }

    info!(
        solutions = total,
        gears = inventory.teeth().len(),
        "Generated change gear solutions"
    );
    SolutionSet::new(solutions)
}

/// All valid trains for one layout, in enumeration order
pub fn solutions_for_layout(
    limits: &Limits,
    inventory: &GearInventory,
    layout: Layout,
) -> Vec<Solution> {
    let mut solutions = Vec::new();
    let mut candidates = 0usize;

    for_each_arrangement(inventory.teeth(), layout.slots(), |teeth| {
        candidates += 1;
        let train = GearTrain::from_slots(layout, teeth);
        if is_valid(limits, &train) {
            solutions.push(Solution::new(train));
        }
    });

    debug!(
        %layout,
        candidates,
        valid = solutions.len(),
        "Searched layout"
    );
    solutions
}

/// Call `f` with every ordered selection of `k` gears from `teeth`. Each position in `teeth` is used
/// at most once per selection, but two positions holding the same tooth count give distinct selections.
fn for_each_arrangement<F: FnMut(&[u32])>(teeth: &[u32], k: usize, mut f: F) {
    if k > teeth.len() {
        return;
    }
    let mut used = vec![false; teeth.len()];
    let mut picked = Vec::with_capacity(k);
    arrange(teeth, k, &mut used, &mut picked, &mut f);
}

fn arrange<F: FnMut(&[u32])>(
    teeth: &[u32],
    k: usize,
    used: &mut [bool],
    picked: &mut Vec<u32>,
    f: &mut F,
) {
    if picked.len() == k {
        f(picked);
        return;
    }
    for i in 0..teeth.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        picked.push(teeth[i]);
        arrange(teeth, k, used, picked, f);
        picked.pop();
        used[i] = false;
    }
}
