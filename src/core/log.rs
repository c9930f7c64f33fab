use crate::db::SqliteStore;
use crate::db::log::{LogRow, load_log};
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 48;

/// ANSI color for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "import" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Keep long file paths from blowing up the table.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

fn short_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%F %T").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(rows: &[LogRow]) -> String {
        if rows.is_empty() {
            return "Internal log is empty.\n".to_string();
        }

        let mut table = Table::new(vec![
            Column::right("ID"),
            Column::left("Date"),
            Column::left("Operation"),
            Column::left("Target"),
            Column::left("Message"),
        ]);

        for r in rows {
            table.add_row(vec![
                r.id.to_string(),
                short_date(&r.date),
                color_for_operation(&r.operation)
                    .paint(r.operation.as_str())
                    .to_string(),
                truncate(&r.target, MAX_TARGET_WIDTH),
                r.message.clone(),
            ]);
        }

        table.render()
    }

    pub fn print_log(store: &SqliteStore) -> AppResult<()> {
        let rows = store.with_conn(|conn| load_log(conn))?;
        println!("📜 Internal log:\n");
        print!("{}", Self::render(&rows));
        Ok(())
    }
}
