//! Character → ambiguity-class table.
//!
//! Six letter groups share the six ambiguous buttons. Every character of a
//! dictionary word must belong to exactly one group, otherwise the word is
//! untranslatable and cannot be typed.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::settings::LayoutMode;

pub const NUM_CLASSES: usize = 6;

/// Letter groups in table order. The order inside each group is the
/// frequency-optimized label order.
pub const STANDARD_GROUPS: [&str; NUM_CLASSES] = ["me'gz", "trp-", "iskw", "lufcy", "banq", "ojhdvx"];

/// Index of one of the six ambiguous buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AmbiguityClass(u8);

impl AmbiguityClass {
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < NUM_CLASSES).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = AmbiguityClass> {
        (0..NUM_CLASSES as u8).map(AmbiguityClass)
    }
}

impl fmt::Display for AmbiguityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AmbiguityError {
    #[error("character {ch:?} appears in class {first} and class {second}")]
    Duplicate { ch: char, first: usize, second: usize },
    #[error("class {0} has no letters")]
    EmptyGroup(usize),
}

#[derive(Debug, Clone)]
pub struct AmbiguityMap {
    groups: [String; NUM_CLASSES],
    classes: HashMap<char, AmbiguityClass>,
}

impl AmbiguityMap {
    pub fn new(groups: [&str; NUM_CLASSES]) -> Result<Self, AmbiguityError> {
        let mut classes = HashMap::new();
        for (index, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(AmbiguityError::EmptyGroup(index));
            }
            let class = AmbiguityClass(index as u8);
            for ch in group.chars().flat_map(|c| c.to_lowercase().chain(c.to_uppercase())) {
                match classes.insert(ch, class) {
                    Some(prev) if prev != class => {
                        return Err(AmbiguityError::Duplicate {
                            ch,
                            first: prev.index(),
                            second: index,
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(Self {
            groups: groups.map(|g| g.to_lowercase()),
            classes,
        })
    }

    /// Shared default table.
    pub fn standard() -> &'static AmbiguityMap {
        static INSTANCE: OnceLock<AmbiguityMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            AmbiguityMap::new(STANDARD_GROUPS).expect("standard letter groups must be disjoint")
        })
    }

    /// Letter groups in table order, lower-cased.
    pub fn groups(&self) -> &[String; NUM_CLASSES] {
        &self.groups
    }

    pub fn class_of(&self, ch: char) -> Option<AmbiguityClass> {
        self.classes.get(&ch).copied()
    }

    /// Class sequence of `text`, or `None` if any character is untranslatable.
    pub fn translate(&self, text: &str) -> Option<Vec<AmbiguityClass>> {
        text.chars().map(|c| self.class_of(c)).collect()
    }

    /// Button label for a class: upper-cased letters in table order
    /// (optimized) or sorted (alphabetical).
    pub fn group_label(&self, class: AmbiguityClass, layout: LayoutMode) -> String {
        let mut letters: Vec<char> = self.groups[class.index()].chars().collect();
        if layout == LayoutMode::Alphabetical {
            // Letters first, punctuation after.
            letters.sort_by_key(|c| (!c.is_alphabetic(), *c));
        }
        letters.into_iter().flat_map(|c| c.to_uppercase()).collect()
    }
}

impl Default for AmbiguityMap {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(indices: &[u8]) -> Vec<AmbiguityClass> {
        indices.iter().map(|&i| AmbiguityClass::new(i).unwrap()).collect()
    }

    #[test]
    fn standard_table_matches_button_groups() {
        let map = AmbiguityMap::standard();
        assert_eq!(map.translate("cat"), Some(classes(&[3, 4, 1])));
        assert_eq!(map.translate("don't"), Some(classes(&[5, 5, 4, 0, 1])));
        assert_eq!(map.translate("x-ray"), Some(classes(&[5, 1, 1, 4, 3])));
    }

    #[test]
    fn upper_case_maps_like_lower_case() {
        let map = AmbiguityMap::standard();
        assert_eq!(map.translate("Cat"), map.translate("cat"));
        assert_eq!(map.class_of('Q'), map.class_of('q'));
    }

    #[test]
    fn untranslatable_characters() {
        let map = AmbiguityMap::standard();
        assert_eq!(map.translate("hi there"), None);
        assert_eq!(map.translate("caf\u{e9}"), None);
        assert_eq!(map.class_of('7'), None);
    }

    #[test]
    fn duplicate_letter_rejected() {
        let err = AmbiguityMap::new(["ab", "c", "d", "e", "f", "ga"]).unwrap_err();
        assert!(matches!(err, AmbiguityError::Duplicate { ch: 'a', first: 0, second: 5 }));
    }

    #[test]
    fn empty_group_rejected() {
        let err = AmbiguityMap::new(["ab", "", "d", "e", "f", "g"]).unwrap_err();
        assert!(matches!(err, AmbiguityError::EmptyGroup(1)));
    }

    #[test]
    fn class_index_bounds() {
        assert!(AmbiguityClass::new(5).is_some());
        assert!(AmbiguityClass::new(6).is_none());
        assert_eq!(AmbiguityClass::all().count(), NUM_CLASSES);
    }

    #[test]
    fn labels_follow_layout() {
        let map = AmbiguityMap::standard();
        let c0 = AmbiguityClass::new(0).unwrap();
        let c5 = AmbiguityClass::new(5).unwrap();
        assert_eq!(map.group_label(c0, LayoutMode::Optimized), "ME'GZ");
        assert_eq!(map.group_label(c0, LayoutMode::Alphabetical), "EGMZ'");
        assert_eq!(map.group_label(c5, LayoutMode::Alphabetical), "DHJOVX");
    }
}
