pub mod error;
pub mod lc;

pub use error::{Error, MajorityError, Result};
pub use lc::longest_consecutive_sequence::longest_consecutive;
pub use lc::majority_element::{majority_element, majority_element_checked};
pub use lc::majority_element_2::{majority_element_over_third, majority_elements};
pub use lc::next_permutation::{next_permutation, Permutations};
