use std::iter::successors;

use rustc_hash::FxHashSet;

pub fn longest_consecutive(nums: &[i32]) -> usize {
    if nums.len() <= 1 {
        return nums.len();
    }

    let set: FxHashSet<i32> = nums.iter().copied().collect();
    let mut max_count = 0;

    for &num in &set {
        // Only walk from the start of a run
        if num.checked_sub(1).is_some_and(|prev| set.contains(&prev)) {
            continue;
        }

        let count = successors(Some(num), |n| n.checked_add(1))
            .take_while(|n| set.contains(n))
            .count();
        max_count = max_count.max(count);
    }

    max_count
}
