use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};
use itertools::Itertools;

use crate::core::schedule::{Estimate, OneOffCosts};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

#[must_use]
pub fn build_schedule_table(estimate: &Estimate) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Period",
        "Advance",
        "Hours",
        "Consumption",
        "Management",
        "Fixed fees",
        "Period total",
    ]);
    for period in &estimate.periods {
        table.add_row(vec![
            Cell::new(format!("Month {}", period.month)),
            Cell::new(period.advance_percent.map_or_else(String::new, |pct| format!("{pct:.0}%")))
                .set_alignment(CellAlignment::Right),
            Cell::new(period.hours).set_alignment(CellAlignment::Right),
            Cell::new(period.consumption).set_alignment(CellAlignment::Right),
            Cell::new(period.management).set_alignment(CellAlignment::Right),
            Cell::new(period.fixed_fees).set_alignment(CellAlignment::Right),
            Cell::new(period.total)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

#[must_use]
pub fn build_one_off_table(one_off: &OneOffCosts) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Component", "Cost"]);
    for (component, cost) in [
        ("Infrastructure installation", one_off.installation),
        ("Initial mapping", one_off.mapping),
        ("Homologation", one_off.homologation),
    ] {
        table.add_row(vec![
            Cell::new(component),
            Cell::new(cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_profile_table(raw: &[f64], quantized: &[f64]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Period", "Raw", "Quantized"]);
    for (index, (raw_pct, quantized_pct)) in raw.iter().zip_eq(quantized).enumerate() {
        table.add_row(vec![
            Cell::new(format!("Month {}", index + 2)),
            Cell::new(format!("{raw_pct:.2}%"))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(format!("{quantized_pct:.0}%")).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
