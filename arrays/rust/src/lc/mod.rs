pub mod longest_consecutive_sequence;
pub mod majority_element;
pub mod majority_element_2;
pub mod next_permutation;
