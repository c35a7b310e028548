use anyhow::Result;
use arrays::{
    longest_consecutive, majority_element, majority_element_checked, majority_element_over_third, majority_elements,
    next_permutation, Permutations,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Run the array exercises on integers given as arguments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Length of the longest run of consecutive values
    LongestConsecutive {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
    /// Value occurring more than n/2 times
    Majority {
        /// Fail instead of returning an unverified candidate
        #[arg(long)]
        verify: bool,
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
    /// Values occurring more than n/3 times
    MajorityThird {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
    /// Values occurring more than n/k times
    MajorityK {
        #[arg(long, short)]
        k: usize,
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
    /// Next lexicographic permutation
    NextPermutation {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
    /// Every distinct permutation in lexicographic order
    Permutations {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(command = ?cli.command, "running");

    match cli.command {
        Command::LongestConsecutive { nums } => println!("{}", longest_consecutive(&nums)),
        Command::Majority { verify, nums } => {
            let value = if verify {
                majority_element_checked(&nums)?
            } else {
                majority_element(&nums)?
            };
            println!("{value}");
        }
        Command::MajorityThird { nums } => println!("{:?}", majority_element_over_third(&nums).as_slice()),
        Command::MajorityK { k, nums } => println!("{:?}", majority_elements(&nums, k)?),
        Command::NextPermutation { mut nums } => {
            next_permutation(&mut nums);
            println!("{nums:?}");
        }
        Command::Permutations { nums } => {
            for permutation in Permutations::new(nums) {
                println!("{permutation:?}");
            }
        }
    }

    Ok(())
}
