use rustc_hash::FxHashMap;
use tinyvec::ArrayVec;
use tracing::{debug, trace};

use crate::error::{MajorityError, Result};

pub fn majority_element_over_third(nums: &[i32]) -> ArrayVec<[i32; 2]> {
    let mut result = ArrayVec::new();

    let (mut cand1, mut cand2) = (0i32, 0i32);
    let (mut count1, mut count2) = (0usize, 0usize);

    for &n in nums {
        if count1 > 0 && n == cand1 {
            count1 += 1;
        } else if count2 > 0 && n == cand2 {
            count2 += 1;
        } else if count1 == 0 {
            cand1 = n;
            count1 = 1;
        } else if count2 == 0 {
            cand2 = n;
            count2 = 1;
        } else {
            count1 -= 1;
            count2 -= 1;
        }
    }

    let threshold = nums.len() / 3;
    let occurrences = |candidate: i32| nums.iter().filter(|&&n| n == candidate).count();

    if count1 > 0 && occurrences(cand1) > threshold {
        result.push(cand1);
    }
    if count2 > 0 && occurrences(cand2) > threshold {
        result.push(cand2);
    }

    result
}

/// Sorted ascending. Tracks at most `k - 1` candidates while voting.
pub fn majority_elements(nums: &[i32], k: usize) -> Result<Vec<i32>> {
    if k < 2 {
        debug!(k, "rejected majority threshold");
        return Err(MajorityError::InvalidThreshold(k));
    }

    let slots = k - 1;
    let mut candidates: FxHashMap<i32, usize> = FxHashMap::default();
    candidates.reserve(slots.min(nums.len()));

    for &n in nums {
        if let Some(count) = candidates.get_mut(&n) {
            *count += 1;
        } else if candidates.len() < slots {
            candidates.insert(n, 1);
        } else {
            candidates.retain(|_, count| {
                *count -= 1;
                *count > 0
            });
        }
    }

    trace!(survivors = candidates.len(), "voting pass done");

    for count in candidates.values_mut() {
        *count = 0;
    }
    for n in nums {
        if let Some(count) = candidates.get_mut(n) {
            *count += 1;
        }
    }

    let threshold = nums.len() / k;
    let mut result: Vec<i32> = candidates
        .into_iter()
        .filter(|&(_, count)| count > threshold)
        .map(|(n, _)| n)
        .collect();
    result.sort_unstable();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sorted(mut v: Vec<i32>) -> Vec<i32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_case_1() {
        let input = vec![3, 2, 3];
        let expected = vec![3];

        let result = majority_element_over_third(&input);
        assert_eq!(sorted(result.to_vec()), expected);
    }

    #[test]
    fn test_case_2() {
        let input = vec![1, 1, 1, 3, 3, 2, 2, 2];
        let expected = vec![1, 2];

        let result = majority_element_over_third(&input);
        assert_eq!(sorted(result.to_vec()), expected);
    }

    #[test]
    fn test_case_3() {
        let input = vec![1];
        let expected = vec![1];

        let result = majority_element_over_third(&input);
        assert_eq!(sorted(result.to_vec()), expected);
    }

    #[test]
    fn empty() {
        assert!(majority_element_over_third(&[]).is_empty());
        assert_eq!(majority_elements(&[], 3), Ok(vec![]));
    }

    #[test]
    fn zero_valued_elements() {
        // 0 is also the initial candidate value, it must not be counted twice
        assert_eq!(majority_element_over_third(&[0, 0, 0]).to_vec(), vec![0]);
        assert!(majority_element_over_third(&[1, 2, 3]).is_empty());
        assert_eq!(sorted(majority_element_over_third(&[0, 1, 0, 1]).to_vec()), vec![0, 1]);
    }

    #[test]
    fn generic_threshold() {
        assert_eq!(majority_elements(&[3, 2, 3], 3), Ok(vec![3]));
        assert_eq!(majority_elements(&[1, 1, 1, 3, 3, 2, 2, 2], 3), Ok(vec![1, 2]));
        assert_eq!(majority_elements(&[2, 2, 1, 1, 1, 2, 2], 2), Ok(vec![2]));
        assert_eq!(majority_elements(&[1, 2, 3, 4, 1, 2, 1, 5], 4), Ok(vec![1]));
    }

    #[test]
    fn invalid_threshold() {
        assert_eq!(majority_elements(&[1], 0), Err(MajorityError::InvalidThreshold(0)));
        assert_eq!(majority_elements(&[1], 1), Err(MajorityError::InvalidThreshold(1)));
    }

    fn brute_force(nums: &[i32], k: usize) -> Vec<i32> {
        let mut counts: FxHashMap<i32, usize> = FxHashMap::default();
        for &n in nums {
            *counts.entry(n).or_insert(0) += 1;
        }
        let mut result: Vec<i32> = counts
            .into_iter()
            .filter(|&(_, c)| c > nums.len() / k)
            .map(|(n, _)| n)
            .collect();
        result.sort_unstable();
        result
    }

    proptest! {
        #[test]
        fn over_third_matches_brute_force(nums in prop::collection::vec(-3i32..3, 0..40)) {
            let result = sorted(majority_element_over_third(&nums).to_vec());
            prop_assert_eq!(result, brute_force(&nums, 3));
        }

        #[test]
        fn generic_matches_brute_force(nums in prop::collection::vec(-4i32..4, 0..40), k in 2usize..6) {
            prop_assert_eq!(majority_elements(&nums, k).unwrap(), brute_force(&nums, k));
        }
    }
}
