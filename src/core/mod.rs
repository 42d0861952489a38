pub mod axis_labels;
pub mod domain;
pub mod legend;
pub mod partition;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod tick_factor;
pub mod types;

pub use axis_labels::{
    DEFAULT_TIME_AXIS_MAX_TICKS, TimeTick, format_y_tick_label, time_axis_ticks, y_tick_values,
};
pub use domain::{AxisDomain, AxisPlan, compute_axis_plan, derive_domain, round_up_to_factor};
pub use legend::{LEGEND_SLOT_COUNT, LegendEntry, LegendSlot, layout_legend, legend_slots};
pub use partition::{PartitionedData, partition};
pub use scale::LinearScale;
pub use series::{SeriesDefinition, SeriesSet};
pub use tick_factor::{
    MAX_TICK_COUNT, MIN_TICK_COUNT, TICK_DIVISORS, TICK_MULTIPLIERS, TickPlan, find_tick_factor,
};
pub use types::{DataPoint, SeriesKey, Viewport};
