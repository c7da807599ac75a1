// Form field normalization: a name seen once stays a scalar, a repeated
// name becomes an ordered list. Multi-select groups are tracked separately.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Multi-select group holding the selected style tags
pub const STYLE_GROUP: &str = "style";
/// Multi-select group holding the selected lighting tags
pub const LIGHTING_GROUP: &str = "lighting";

/// Value of a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(existing) => {
                let first = std::mem::take(existing);
                *self = FieldValue::Multiple(vec![first, value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }

    /// All raw values in encounter order
    pub fn values(&self) -> Vec<&str> {
        match self {
            FieldValue::Single(value) => vec![value.as_str()],
            FieldValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Normalized mapping of form field names to values for one generation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    fields: HashMap<String, FieldValue>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse raw name/value pairs, preserving the encounter order of
    /// repeated names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut field_set = Self::new();
        for (name, value) in pairs {
            field_set.insert(name, value);
        }
        field_set
    }

    /// Add one occurrence of a field
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.fields.entry(name.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(FieldValue::Single(value));
            }
        }
    }

    /// Builder-style variant of [`FieldSet::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Trimmed text of a field, or `None` when absent or blank.
    ///
    /// A multi-valued field reads as its non-blank values joined with `", "`.
    pub fn text(&self, name: &str) -> Option<String> {
        let value = self.fields.get(name)?;
        let joined = value
            .values()
            .into_iter()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        if joined.is_empty() { None } else { Some(joined) }
    }

    /// First non-blank text among several field names
    pub fn text_any(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.text(name))
    }

    /// Raw values of a field in encounter order, empty when absent
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .get(name)
            .map(FieldValue::values)
            .unwrap_or_default()
    }

    /// Checkbox-style flag: the field reads exactly `true`
    pub fn is_true(&self, name: &str) -> bool {
        self.text(name).as_deref() == Some("true")
    }
}

/// Ordered set of option labels selected in one multi-select group.
///
/// Insertion order is selection order; a label can only be present once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOptions {
    labels: Vec<String>,
}

impl SelectedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a label's selection; returns whether it is selected afterwards.
    /// Blank labels are never selected.
    pub fn toggle(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        if let Some(pos) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(pos);
            false
        } else {
            self.labels.push(label.to_string());
            true
        }
    }

    /// Select a label, keeping the original position if already selected
    pub fn select(&mut self, label: &str) {
        let label = label.trim();
        if !label.is_empty() && !self.contains(label) {
            self.labels.push(label.to_string());
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectedOptions {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut options = SelectedOptions::new();
        for label in iter {
            options.select(label.as_ref());
        }
        options
    }
}

/// Selected options keyed by multi-select group name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionGroups {
    groups: HashMap<String, SelectedOptions>,
}

impl SelectionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: select every label of a group
    pub fn with<I, S>(mut self, group: &str, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = self.group_mut(group);
        for label in labels {
            selected.select(label.as_ref());
        }
        self
    }

    pub fn group(&self, group: &str) -> &[String] {
        self.groups
            .get(group)
            .map(SelectedOptions::as_slice)
            .unwrap_or(&[])
    }

    pub fn group_mut(&mut self, group: &str) -> &mut SelectedOptions {
        self.groups.entry(group.to_string()).or_default()
    }

    pub fn toggle(&mut self, group: &str, label: &str) -> bool {
        self.group_mut(group).toggle(label)
    }

    pub fn styles(&self) -> &[String] {
        self.group(STYLE_GROUP)
    }

    pub fn lighting(&self) -> &[String] {
        self.group(LIGHTING_GROUP)
    }
}
