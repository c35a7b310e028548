use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MajorityError {
    #[error("the input sequence is empty")]
    EmptyInput,
    #[error("no value occurs in more than half of the input")]
    NoMajority,
    #[error("threshold must be at least 2, got {0}")]
    InvalidThreshold(usize),
}

pub type Error = MajorityError;
pub type Result<T> = std::result::Result<T, Error>;
