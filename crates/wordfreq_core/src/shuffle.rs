use std::collections::HashMap;

use crate::Contribution;

/// All contribution units emitted for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub word: String,
    pub units: Vec<u64>,
}

/// Groups contributions by word in one pass over the complete set.
///
/// Groups come out in first-encounter order of their word.
pub fn shuffle(contributions: impl IntoIterator<Item = Contribution>) -> Vec<Group> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for Contribution { word, unit } in contributions {
        match index.get(&word) {
            Some(&slot) => groups[slot].units.push(unit),
            None => {
                index.insert(word.clone(), groups.len());
                groups.push(Group {
                    word,
                    units: vec![unit],
                });
            }
        }
    }

    groups
}
