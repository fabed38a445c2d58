use crate::{
    error::{Result, ShortFormError},
    segment,
};
use std::{
    collections::HashMap,
    hash::BuildHasher,
};
use tracing::debug;

/// Bidirectional mapping between identifiers and their short forms.
///
/// An identifier's short form is its lowercased last segment when that
/// segment occurs exactly once across every segment of every identifier.
/// Otherwise the whole lowercased identifier is used. The table is fixed at
/// construction, so the same identifiers always produce the same short forms.
#[derive(Clone, Debug, Default)]
pub struct ShortFormResolver {
    short_to_id: HashMap<String, String>, // short form -> identifier
    id_to_short: HashMap<String, String>, // identifier -> short form
}

impl ShortFormResolver {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let identifiers: Vec<S> = identifiers.into_iter().collect();

        // A segment is only usable as a short form if it occurs once anywhere,
        // not just once among last segments.
        let mut occurrences: HashMap<String, usize> = HashMap::new();
        for id in &identifiers {
            let normalized = segment::normalize(id.as_ref());
            for part in segment::segments(&normalized) {
                *occurrences.entry(part.to_string()).or_default() += 1;
            }
        }

        let mut short_to_id = HashMap::new();
        let mut id_to_short = HashMap::new();
        let mut fallbacks = 0;

        for id in &identifiers {
            let id = id.as_ref();
            let normalized = segment::normalize(id);
            let short = match segment::last_segment(&normalized) {
                Some(last) if occurrences.get(last) == Some(&1) => last.to_string(),
                _ => {
                    fallbacks += 1;
                    normalized
                }
            };

            short_to_id.insert(short.clone(), id.to_string());
            id_to_short.insert(id.to_string(), short);
        }

        debug!(
            identifiers = identifiers.len(),
            short_forms = short_to_id.len(),
            fallbacks,
            "Built short form table"
        );

        Self {
            short_to_id,
            id_to_short,
        }
    }

    /// All short forms, sorted ascending by code point.
    pub fn short_forms(&self) -> Vec<String> {
        let mut forms: Vec<String> = self.short_to_id.keys().cloned().collect();
        forms.sort();
        forms
    }

    /// Short form of an identifier, looked up in the exact case it was supplied.
    pub fn short_form(&self, id: &str) -> Option<&str> {
        self.id_to_short.get(id).map(String::as_str)
    }

    /// Identifier for a short form, compared case-insensitively.
    pub fn resolve(&self, short_form: &str) -> Option<&str> {
        self.short_to_id
            .get(&segment::normalize(short_form))
            .map(String::as_str)
    }

    /// Replaces the short form stored at `key` with its full identifier.
    ///
    /// A missing key is left alone. A value that does not resolve is an error
    /// and leaves the map untouched.
    pub fn expand_short_form<S: BuildHasher>(
        &self,
        map: &mut HashMap<String, String, S>,
        key: &str,
    ) -> Result<()> {
        let Some(value) = map.get_mut(key) else {
            return Ok(());
        };

        match self.resolve(value) {
            Some(id) => {
                *value = id.to_string();
                Ok(())
            }
            None => Err(ShortFormError::invalid_alias(key, value.as_str())),
        }
    }

    /// `(short form, identifier)` pairs in short form order.
    ///
    /// Collects and sorts the table on every call.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .short_to_id
            .iter()
            .map(|(short, id)| (short.as_str(), id.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.short_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.short_to_id.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ShortFormResolver {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
