/// Declarative markers attached to a class or member.
///
/// Each entry is a tag (such as `gwt.exported`) with zero or more string values.
/// A tag may occur more than once; occurrences keep declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaData {
    entries: Vec<(String, Vec<String>)>,
}

impl MetaData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an occurrence of `tag` with the given values.
    pub fn push<I, S>(&mut self, tag: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((tag.into(), values.into_iter().map(Into::into).collect()));
    }

    /// Get every occurrence of `tag`, each as its list of values.
    pub fn get<'a, 't>(
        &'a self,
        tag: &'t str,
    ) -> impl Iterator<Item = &'a [String]> + use<'a, 't> {
        self.entries
            .iter()
            .filter(move |(t, _)| t == tag)
            .map(|(_, values)| values.as_slice())
    }

    /// Get the value of `tag` when it occurs exactly once with exactly one value.
    pub fn single_value(&self, tag: &str) -> Option<&str> {
        let mut occurrences = self.get(tag);
        let first = occurrences.next()?;
        if occurrences.next().is_some() {
            return None;
        }
        match first {
            [value] => Some(value.as_str()),
            _ => None,
        }
    }

    /// Check if `tag` occurs at all.
    pub fn has(&self, tag: &str) -> bool {
        self.entries.iter().any(|(t, _)| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
