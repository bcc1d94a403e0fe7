use super::{METRIC_SCHEMA, MetricDef, MetricValue, schema_index};
use indexmap::IndexMap;

/// The values of one media item, one slot per [`METRIC_SCHEMA`] column.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedEntry {
    values: Vec<Option<MetricValue>>,
}

impl AggregatedEntry {
    /// An entry where every column is absent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: vec![None; METRIC_SCHEMA.len()],
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.values.get(schema_index(name)?)?.as_ref()
    }

    /// Text value of the column, if the column holds text.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(MetricValue::as_str)
    }

    /// Store `value` in the column called `name`.
    ///
    /// Returns `false` without touching the entry when `name` is not a schema column.
    pub fn set(&mut self, name: &str, value: Option<MetricValue>) -> bool {
        match schema_index(name).and_then(|idx| self.values.get_mut(idx)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Columns in schema order, paired with their value.
    pub fn iter(&self) -> impl Iterator<Item = (&'static MetricDef, Option<&MetricValue>)> {
        METRIC_SCHEMA.iter().zip(self.values.iter().map(Option::as_ref))
    }
}

impl Default for AggregatedEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregated entries keyed by media id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedMedia {
    entries: IndexMap<String, AggregatedEntry>,
}

impl AggregatedMedia {
    /// Add the entry for `media_id`, replacing any earlier entry for the same id in place.
    pub fn insert(&mut self, media_id: String, entry: AggregatedEntry) {
        let _ = self.entries.insert(media_id, entry);
    }

    #[must_use]
    pub fn get(&self, media_id: &str) -> Option<&AggregatedEntry> {
        self.entries.get(media_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AggregatedEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}
