use crate::Group;

/// A word and its total number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

/// Sums one group's units. Pure; sees only its own group.
pub fn reduce_group(group: Group) -> FrequencyEntry {
    FrequencyEntry {
        count: group.units.iter().sum(),
        word: group.word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_units() {
        let entry = reduce_group(Group {
            word: "the".into(),
            units: vec![1, 1, 1],
        });
        assert_eq!(
            entry,
            FrequencyEntry {
                word: "the".into(),
                count: 3
            }
        );
    }
}
