/// Criteria scored when the caller names none.
pub const DEFAULT_CRITERIA: &[&str] = &["clarity", "credibility", "cta"];

/// Ordered, duplicate-free list of criterion names for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria(Vec<String>);

impl Criteria {
    /// Apply the default set to a missing or empty list and drop repeats,
    /// keeping the first occurrence of each name.
    pub fn resolve(requested: Option<Vec<String>>) -> Self {
        let requested = requested.unwrap_or_default();
        if requested.is_empty() {
            return Self::default();
        }

        let mut names: Vec<String> = Vec::with_capacity(requested.len());
        for name in requested {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self(names)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self(DEFAULT_CRITERIA.iter().map(|c| c.to_string()).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for Criteria {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::resolve(Some(iter.into_iter().map(Into::into).collect()))
    }
}
