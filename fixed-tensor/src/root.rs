//! Exact integer roots, used to infer a uniform shape from the size of a tensor.
//!
//! Both functions are `const` so that the check can run while a tensor type is instantiated.

/// Finds `base` such that `base.pow(rank) == size`, if one exists.
///
/// Runs a binary search over `1..=size`. Powers are built one multiplication at a time and the search
/// stops as soon as the next multiplication would exceed `size`, so it never overflows.
///
/// A rank of zero only has a root for `size == 1` (the empty product), and a size of zero never has one.
pub const fn exact_root(size: usize, rank: usize) -> Option<usize> {
    if rank == 0 {
        return if size == 1 { Some(1) } else { None };
    }

    let mut low = 1;
    let mut high = size;
    while low <= high {
        let mid = low + (high - low) / 2;

        let mut power = 1;
        let mut exceeded = false;
        let mut i = 0;
        while i < rank {
            if power > size / mid {
                exceeded = true;
                break;
            }
            power *= mid;
            i += 1;
        }

        if !exceeded && power == size {
            return Some(mid);
        }
        if exceeded || power > size {
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }

    None
}

/// Returns true if `size` is an exact `rank`-th power.
pub const fn has_exact_root(size: usize, rank: usize) -> bool {
    exact_root(size, rank).is_some()
}
