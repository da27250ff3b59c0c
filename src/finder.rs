use crate::loader::{SubstitutionMap, WordSet};

/// A discovered relationship between two dictionary entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Word the substitution was applied to.
    pub original: String,
    /// Its substitution image, also a dictionary member.
    pub shifted: String,
}

/// Apply the substitution table to every character of `word`, in order.
///
/// Characters without a rule pass through unchanged. A rule may rewrite a
/// character, expand it to several characters, or delete it outright.
pub fn shift_word(word: &str, subs: &SubstitutionMap) -> String {
    let mut shifted = String::with_capacity(word.len());
    for c in word.chars() {
        match subs.get(&c) {
            Some(replacement) => shifted.push_str(replacement),
            None => shifted.push(c),
        }
    }
    shifted
}

/// Collect every word whose substitution image is itself a dictionary
/// member.
///
/// A word that maps to itself yields a single self-pair; two words that are
/// mutual images yield one pair each. Pairs are ordered by descending
/// character count of the original word, then lexicographically on the
/// original so repeated runs produce identical output.
pub fn find_shiftable_pairs(words: &WordSet, subs: &SubstitutionMap) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for original in words {
        let shifted = shift_word(original, subs);
        if words.contains(&shifted) {
            pairs.push(Pair {
                original: original.clone(),
                shifted,
            });
        }
    }

    pairs.sort_unstable_by(|a, b| {
        let len_a = a.original.chars().count();
        let len_b = b.original.chars().count();
        len_b
            .cmp(&len_a)
            .then_with(|| a.original.cmp(&b.original))
    });

    pairs
}
