use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::core::SeriesKey;
use crate::error::{ChartError, ChartResult};

fn default_show_in_legend() -> bool {
    true
}

/// Caller-supplied description of one line series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDefinition {
    pub key: SeriesKey,
    /// Style classes attached to the series path and its legend swatch.
    #[serde(default)]
    pub classes: String,
    #[serde(default)]
    pub legend_label: Option<String>,
    #[serde(default = "default_show_in_legend")]
    pub show_in_legend: bool,
}

impl SeriesDefinition {
    #[must_use]
    pub fn new(key: impl Into<SeriesKey>, classes: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            classes: classes.into(),
            legend_label: None,
            show_in_legend: true,
        }
    }

    #[must_use]
    pub fn with_legend_label(mut self, label: impl Into<String>) -> Self {
        self.legend_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn hidden_from_legend(mut self) -> Self {
        self.show_in_legend = false;
        self
    }

    /// Text shown next to the legend swatch.
    #[must_use]
    pub fn legend_text(&self) -> &str {
        self.legend_label
            .as_deref()
            .unwrap_or_else(|| self.key.as_str())
    }
}

/// Declared series of one chart, keyed and kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    definitions: IndexMap<SeriesKey, SeriesDefinition>,
}

impl SeriesSet {
    /// Builds the set, rejecting duplicate keys.
    pub fn new(definitions: impl IntoIterator<Item = SeriesDefinition>) -> ChartResult<Self> {
        let mut map = IndexMap::new();
        for definition in definitions {
            match map.entry(definition.key.clone()) {
                Entry::Occupied(entry) => {
                    return Err(ChartError::InvalidConfiguration(format!(
                        "duplicate series key `{}`",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(definition);
                }
            }
        }
        Ok(Self { definitions: map })
    }

    #[must_use]
    pub fn get(&self, key: &SeriesKey) -> Option<&SeriesDefinition> {
        self.definitions.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &SeriesKey) -> bool {
        self.definitions.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesDefinition> {
        self.definitions.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SeriesKey> {
        self.definitions.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
