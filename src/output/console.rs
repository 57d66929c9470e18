use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{DayRatio, ReportRow};
use crate::report::{self, format};

/// Print the report as a bordered grid. Headers show even when no coin
/// survived the filters.
pub fn print_report(rows: &[ReportRow], with_months: bool) {
    println!("{}", build_table(rows, with_months));
}

pub fn build_table(rows: &[ReportRow], with_months: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(report::headers(with_months));

    for row in rows {
        table.add_row(row_cells(row, with_months));
    }
    table
}

fn row_cells(row: &ReportRow, with_months: bool) -> Vec<Cell> {
    let mut cells = vec![
        Cell::new(&row.name),
        Cell::new(&row.symbol),
        number_cell(row.price),
        number_cell(row.market_cap),
        number_cell(row.volume_24h),
        metric_cell(row.potential_pct),
        metric_cell(row.popularity_pct),
        pair_cell(&row.ratio_1m),
        metric_cell(row.change_2y_pct),
    ];

    if with_months {
        cells.extend(format::month_cells(&row.monthly).into_iter().map(Cell::new));
        cells.push(Cell::new(if row.uptrend {
            format::UPTREND_LABEL
        } else {
            ""
        }));
    }
    cells
}

fn number_cell(value: f64) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

fn metric_cell(value: f64) -> Cell {
    let cell = Cell::new(format::percent_cell(value)).set_alignment(CellAlignment::Right);
    if format::needs_highlight(value) {
        cell.fg(Color::Green)
    } else {
        cell
    }
}

fn pair_cell(ratio: &DayRatio) -> Cell {
    let cell = Cell::new(format::ratio_cell(ratio));
    if format::needs_highlight(ratio.buy_pct) || format::needs_highlight(ratio.sell_pct) {
        cell.fg(Color::Green)
    } else {
        cell
    }
}
