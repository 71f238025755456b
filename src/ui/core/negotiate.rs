//! Splitting a linear budget between participants with `(min, max)` bounds.

/// A size requirement along one axis.
///
/// `min <= max` is expected but not checked. A participant whose minimum
/// already meets its maximum simply never grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    pub min: usize,
    pub max: usize,
}

impl Extent {
    pub const UNBOUNDED: usize = usize::MAX;

    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn fixed(n: usize) -> Self {
        Self { min: n, max: n }
    }

    pub const fn at_least(min: usize) -> Self {
        Self {
            min,
            max: Self::UNBOUNDED,
        }
    }

    /// Sum of both bounds, saturating at `UNBOUNDED`.
    pub fn saturating_add(self, other: Extent) -> Extent {
        Extent {
            min: self.min.saturating_add(other.min),
            max: self.max.saturating_add(other.max),
        }
    }

    /// Larger of each bound.
    pub fn max_each(self, other: Extent) -> Extent {
        Extent {
            min: self.min.max(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn pad(self, n: usize) -> Extent {
        self.saturating_add(Extent::fixed(n))
    }
}

/// Distributes `total` units over `reqs`.
///
/// Every participant first receives its minimum, even when the minimums add up
/// to more than `total`. Whatever is left is handed out one unit at a time,
/// round-robin in order, to participants still below their maximum. Budget
/// left over once everyone is at its maximum stays unallocated.
pub fn distribute(total: usize, reqs: &[Extent]) -> Vec<usize> {
    let mut sizes: Vec<usize> = reqs.iter().map(|r| r.min).collect();
    let claimed = sizes.iter().fold(0usize, |acc, &n| acc.saturating_add(n));
    let mut left = total.saturating_sub(claimed);

    let mut growing: Vec<usize> = Vec::with_capacity(reqs.len());
    while left > 0 {
        growing.clear();
        growing.extend((0..reqs.len()).filter(|&i| sizes[i] < reqs[i].max));
        if growing.is_empty() {
            break;
        }

        // Apply as many complete passes as possible at once: nobody hits its
        // maximum before the last of them and the budget covers all of them.
        let headroom = growing
            .iter()
            .map(|&i| reqs[i].max - sizes[i])
            .min()
            .unwrap_or(0);
        let passes = headroom.min(left / growing.len());
        if passes > 0 {
            for &i in &growing {
                sizes[i] += passes;
            }
            left -= passes * growing.len();
            continue;
        }

        // Fewer units than growers: one each, earliest first.
        for &i in growing.iter().take(left) {
            sizes[i] += 1;
        }
        left = 0;
    }

    sizes
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/negotiate.rs"]
mod tests;
