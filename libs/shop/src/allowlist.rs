use std::collections::HashSet;

/// The fixed set of Discord user ids allowed to run any command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allowlist {
    ids: HashSet<u64>,
}

impl Allowlist {
    /// Parse a comma-separated list of ids.
    /// Entries that are not plain unsigned integers are dropped without error.
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
            .filter_map(|s| s.parse::<u64>().ok())
            .collect()
    }

    pub fn is_allowed(&self, user_id: u64) -> bool {
        self.ids.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<u64> for Allowlist {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
