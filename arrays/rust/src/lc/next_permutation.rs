use tracing::trace;

/// Returns `false` when `nums` wrapped around to its smallest arrangement.
pub fn next_permutation<T: Ord>(nums: &mut [T]) -> bool {
    if nums.len() < 2 {
        return false;
    }

    // Rightmost i where nums[i] < nums[i + 1]
    let Some(pivot) = (0..nums.len() - 1).rev().find(|&i| nums[i] < nums[i + 1]) else {
        trace!(len = nums.len(), "greatest permutation, wrapping around");
        nums.reverse();
        return false;
    };

    // The suffix after the pivot is non-increasing, so this always exists
    let successor = (pivot + 1..nums.len())
        .rev()
        .find(|&j| nums[j] > nums[pivot])
        .unwrap_or(pivot + 1);

    nums.swap(pivot, successor);
    nums[pivot + 1..].reverse();

    true
}

/// Every distinct arrangement of a multiset, in lexicographic order.
pub struct Permutations<T> {
    current: Vec<T>,
    done: bool,
}

impl<T: Ord + Clone> Permutations<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort();
        Self {
            current: items,
            done: false,
        }
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.current.clone();
        self.done = !next_permutation(&mut self.current);
        Some(item)
    }
}
