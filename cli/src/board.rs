use tabled::settings::Style;
use tabled::{Table, Tabled};
use tallyboard_core::Projection;

#[derive(Tabled)]
struct BoardRow {
    #[tabled(rename = "Slot")]
    slot: u8,
    #[tabled(rename = "Color")]
    color: &'static str,
    #[tabled(rename = "Entries")]
    entries: String,
    #[tabled(rename = "Total")]
    total: String,
}

pub fn show_board(day_label: &str, projection: &Projection) {
    println!("{}", day_label);

    if projection.records.is_empty() {
        println!("No amounts recorded today.");
        return;
    }

    let rows: Vec<BoardRow> = projection
        .records
        .iter()
        .map(|record| BoardRow {
            slot: record.slot,
            color: record.color.name(),
            entries: record
                .amounts
                .iter()
                .map(|a| format!("¥{:.2}", a))
                .collect::<Vec<_>>()
                .join(" + "),
            total: format!("¥{:.2}", record.total),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "Grand total: ¥{:.2} across {} slot(s)",
        projection.grand_total, projection.active_slots
    );
}
