/// A single `(word, 1)` emission of the map stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contribution {
    pub word: String,
    pub unit: u64,
}

impl Contribution {
    pub const UNIT: u64 = 1;
}

/// Maps one token to its contribution. Pure; depends on nothing but `token`.
pub fn map_token(token: &str) -> Contribution {
    Contribution {
        word: token.to_lowercase(),
        unit: Contribution::UNIT,
    }
}
