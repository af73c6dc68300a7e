use std::collections::HashSet;

/// Splits a comma separated ingredient list into trimmed, lowercase tokens.
///
/// Blank pieces are dropped, order and duplicates are kept.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Canonical stored form of an ingredient list.
pub fn normalize(raw: &str) -> String {
    tokenize(raw).join(",")
}

/// Distinct lowercase names of everything currently in the pantry.
#[derive(Debug, Default, Clone)]
pub struct PantrySet(HashSet<String>);

impl PantrySet {
    pub fn contains(&self, ingredient: &str) -> bool {
        self.0.contains(ingredient)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PantrySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        )
    }
}

pub fn pantry_set<I, S>(names: I) -> PantrySet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().collect()
}
