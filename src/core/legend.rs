use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::{SeriesDefinition, SeriesKey};

/// Number of legend slots available above the plot.
pub const LEGEND_SLOT_COUNT: usize = 4;

/// Position of a legend swatch relative to the plot origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendSlot {
    pub x: f64,
    pub y: f64,
}

/// Fixed slot table: two rows on the left edge, then two rows a quarter of
/// the plot width in.
#[must_use]
pub fn legend_slots(plot_width: f64) -> [LegendSlot; LEGEND_SLOT_COUNT] {
    let quarter = plot_width / 4.0;
    [
        LegendSlot { x: -70.0, y: -65.0 },
        LegendSlot { x: -70.0, y: -45.0 },
        LegendSlot { x: quarter, y: -55.0 },
        LegendSlot { x: quarter, y: -35.0 },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: SeriesKey,
    pub label: String,
    pub classes: String,
    pub slot: LegendSlot,
}

/// Assigns legend slots to series in declaration order.
///
/// Series hidden from the legend do not consume a slot. Series left over once
/// the table is full are not placed.
pub fn layout_legend<'a, I>(
    series: I,
    plot_width: f64,
) -> SmallVec<[LegendEntry; LEGEND_SLOT_COUNT]>
where
    I: IntoIterator<Item = &'a SeriesDefinition>,
{
    let slots = legend_slots(plot_width);
    let mut next_slot = 0usize;
    let mut entries = SmallVec::new();

    for definition in series.into_iter().filter(|d| d.show_in_legend) {
        let Some(&slot) = slots.get(next_slot) else {
            warn!(
                key = %definition.key,
                slots = LEGEND_SLOT_COUNT,
                "legend is full, series not shown"
            );
            continue;
        };
        next_slot += 1;
        entries.push(LegendEntry {
            key: definition.key.clone(),
            label: definition.legend_text().to_owned(),
            classes: definition.classes.clone(),
            slot,
        });
    }

    entries
}
