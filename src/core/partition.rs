use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataPoint, SeriesDefinition, SeriesKey};

/// Points grouped by series, each group ordered by `x` ascending.
///
/// Groups follow declaration order and exist for every declared series even
/// when no point belongs to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionedData {
    series: IndexMap<SeriesKey, Vec<DataPoint>>,
    dropped: usize,
}

impl PartitionedData {
    #[must_use]
    pub fn get(&self, key: &SeriesKey) -> Option<&[DataPoint]> {
        self.series.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SeriesKey, &[DataPoint])> {
        self.series.iter().map(|(key, points)| (key, points.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &SeriesKey> {
        self.series.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of assigned points across all series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Number of input points whose `set` matched no declared series.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<SeriesKey, Vec<DataPoint>> {
        self.series
    }
}

/// Groups `points` by their `set` into one sequence per declared series.
///
/// Points naming an undeclared series are left out and counted in
/// [`PartitionedData::dropped`]. Sorting is stable, so points sharing an `x`
/// keep their input order.
pub fn partition<'a, I>(points: &[DataPoint], series: I) -> PartitionedData
where
    I: IntoIterator<Item = &'a SeriesDefinition>,
{
    let mut grouped: IndexMap<SeriesKey, Vec<DataPoint>> = series
        .into_iter()
        .map(|definition| (definition.key.clone(), Vec::new()))
        .collect();

    let mut dropped = 0usize;
    for point in points {
        match grouped.get_mut(&point.set) {
            Some(bucket) => bucket.push(point.clone()),
            None => dropped += 1,
        }
    }

    for bucket in grouped.values_mut() {
        bucket.sort_by_key(|point| OrderedFloat(point.x));
    }

    if dropped > 0 {
        warn!(
            dropped,
            total = points.len(),
            "dropped points referencing undeclared series"
        );
    }
    debug!(series = grouped.len(), points = points.len(), "partitioned data");

    PartitionedData {
        series: grouped,
        dropped,
    }
}
