use tracing::debug;

use crate::error::{MajorityError, Result};

/// Assumes a majority exists, see [`majority_element_checked`] otherwise.
pub fn majority_element(nums: &[i32]) -> Result<i32> {
    if nums.is_empty() {
        return Err(MajorityError::EmptyInput);
    }

    let mut candidate = nums[0];
    let mut count: usize = 0;

    for &n in nums {
        if count == 0 {
            candidate = n;
        }

        if n == candidate {
            count += 1;
        } else {
            count -= 1;
        }
    }

    Ok(candidate)
}

pub fn majority_element_checked(nums: &[i32]) -> Result<i32> {
    let candidate = majority_element(nums)?;
    let occurrences = nums.iter().filter(|&&n| n == candidate).count();

    if occurrences > nums.len() / 2 {
        Ok(candidate)
    } else {
        debug!(candidate, occurrences, len = nums.len(), "candidate is not a majority");
        Err(MajorityError::NoMajority)
    }
}
