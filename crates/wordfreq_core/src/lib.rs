//! Word frequency core: pure map/shuffle/reduce stages and the result mapping.
mod frequency;
mod map;
mod normalize;
mod reduce;
mod shuffle;

pub use frequency::WordFrequencies;
pub use map::{map_token, Contribution};
pub use normalize::{normalize, strip_punctuation, TokenIter, Tokens};
pub use reduce::{reduce_group, FrequencyEntry};
pub use shuffle::{shuffle, Group};

/// Default number of entries handed to presentation.
pub const DEFAULT_TOP_N: usize = 20;

/// Runs every stage sequentially on the current thread.
///
/// The engine runs the same stages with parallel map and reduce; this is the
/// reference composition used where no runtime is available.
pub fn count_words(text: &str) -> WordFrequencies {
    let tokens = normalize(text);
    let contributions: Vec<Contribution> = tokens.iter().map(map_token).collect();
    shuffle(contributions)
        .into_iter()
        .map(reduce_group)
        .collect()
}
