use line_chart_rs::core::{LegendSlot, SeriesDefinition, layout_legend, legend_slots};

#[test]
fn slot_table_depends_on_plot_width() {
    let slots = legend_slots(160.0);
    assert_eq!(slots[0], LegendSlot { x: -70.0, y: -65.0 });
    assert_eq!(slots[1], LegendSlot { x: -70.0, y: -45.0 });
    assert_eq!(slots[2], LegendSlot { x: 40.0, y: -55.0 });
    assert_eq!(slots[3], LegendSlot { x: 40.0, y: -35.0 });
}

#[test]
fn hidden_series_do_not_consume_slots() {
    let series = vec![
        SeriesDefinition::new("a", "line__a").with_legend_label("Actual"),
        SeriesDefinition::new("b", "line__b").hidden_from_legend(),
        SeriesDefinition::new("c", "line__c"),
    ];

    let entries = layout_legend(&series, 160.0);
    let slots = legend_slots(160.0);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "Actual");
    assert_eq!(entries[0].classes, "line__a");
    assert_eq!(entries[0].slot, slots[0]);
    assert_eq!(entries[1].key.as_str(), "c");
    assert_eq!(entries[1].label, "c");
    assert_eq!(entries[1].slot, slots[1]);
}

#[test]
fn entries_beyond_slot_table_are_not_placed() {
    let series: Vec<SeriesDefinition> = (0..6)
        .map(|i| SeriesDefinition::new(format!("s{i}"), ""))
        .collect();

    let entries = layout_legend(&series, 100.0);

    assert_eq!(entries.len(), 4);
    let keys: Vec<&str> = entries.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, ["s0", "s1", "s2", "s3"]);
}
