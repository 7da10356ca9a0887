//! Text rendering of the normative lookup tables.

use crate::precision::{Precision, format_value};
use hn_calc::norms::{
    ENERGY_PERFORMANCE_TARGET_UNMAPPED, ENERGY_PERFORMANCE_TARGET_UNSELECTED, TableRow,
    energy_performance_table, uem_target_table,
};
use std::fmt::Write;

pub fn render_tables() -> String {
    let mut out = String::new();
    write_table(
        &mut out,
        "Normalized Uem,N [W/(m²·K)] by shape factor",
        &uem_target_table(),
        Precision::Shortest,
    );
    out.push('\n');

    let mut ep = energy_performance_table();
    ep.push(TableRow {
        key: "No category selected".to_string(),
        value: ENERGY_PERFORMANCE_TARGET_UNSELECTED,
    });
    ep.push(TableRow {
        key: "Other category".to_string(),
        value: ENERGY_PERFORMANCE_TARGET_UNMAPPED,
    });
    write_table(
        &mut out,
        "Energy-performance target Q_N,EP [kWh/(m²·a)] by category",
        &ep,
        Precision::Decimals(1),
    );
    out
}

fn write_table(out: &mut String, title: &str, rows: &[TableRow], precision: Precision) {
    let width = rows.iter().map(|r| r.key.chars().count()).max().unwrap_or(0);
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{title}");
    for row in rows {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>6}",
            row.key,
            format_value(Some(row.value), precision)
        );
    }
}
