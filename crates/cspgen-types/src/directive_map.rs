use crate::Directive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Directive name -> ordered source expressions.
///
/// Keys iterate in canonical [`Directive`] order. Values added through
/// [`DirectiveMap::extend_unique`] never contain duplicates; first occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectiveMap(BTreeMap<Directive, Vec<String>>);

impl DirectiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values for `directive`, or an empty slice when it is absent.
    pub fn get(&self, directive: Directive) -> &[String] {
        self.0.get(&directive).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, directive: Directive, token: &str) -> bool {
        self.get(directive).iter().any(|v| v == token)
    }

    /// Append every value not already present, preserving first occurrence.
    ///
    /// An empty iterator leaves the directive untouched (it is not created).
    pub fn extend_unique<I, S>(&mut self, directive: Directive, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = values.into_iter().peekable();
        if iter.peek().is_none() {
            return;
        }
        let entry = self.0.entry(directive).or_default();
        for value in iter {
            let value = value.as_ref();
            if !entry.iter().any(|existing| existing == value) {
                entry.push(value.to_string());
            }
        }
    }

    /// Replace the values for `directive` wholesale.
    pub fn insert(&mut self, directive: Directive, values: Vec<String>) {
        let mut deduped: Vec<String> = Vec::with_capacity(values.len());
        for v in values {
            if !deduped.contains(&v) {
                deduped.push(v);
            }
        }
        self.0.insert(directive, deduped);
    }

    /// Keep only the values of `directive` matching `keep`; returns the removed values.
    pub fn retain<F>(&mut self, directive: Directive, mut keep: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        let Some(values) = self.0.get_mut(&directive) else {
            return Vec::new();
        };
        let (kept, removed): (Vec<String>, Vec<String>) =
            values.drain(..).partition(|v| keep(v.as_str()));
        *values = kept;
        removed
    }

    /// Iterate non-empty directives in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Directive, &[String])> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(d, v)| (*d, v.as_slice()))
    }

    /// True when no directive carries a value.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

impl<S: AsRef<str>> FromIterator<(Directive, Vec<S>)> for DirectiveMap {
    fn from_iter<T: IntoIterator<Item = (Directive, Vec<S>)>>(iter: T) -> Self {
        let mut map = DirectiveMap::new();
        for (directive, values) in iter {
            map.extend_unique(directive, values);
        }
        map
    }
}
