use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::models::{ConsumptionRecord, PurchaseRecord};
use crate::report::summary::RunSummary;
use crate::state::Ledgers;

/// Column headers of the purchase sheet, in record field order.
pub const PURCHASE_HEADERS: [&str; 7] = [
    "Дата",
    "Что купили",
    "Где купили",
    "Сколько купили",
    "Единица измерения",
    "Сколько уплачено",
    "Примечание",
];

/// Column headers of the consumption sheet, in record field order.
pub const CONSUMPTION_HEADERS: [&str; 6] = [
    "Дата",
    "Название продукта",
    "Откуда получено",
    "Сколько потреблено",
    "Единица измерения",
    "Примечание",
];

/// Files written for one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub purchases: PathBuf,
    pub consumption: PathBuf,
    pub summary: PathBuf,
}

impl ReportPaths {
    pub fn new(dir: &Path, date: NaiveDate) -> Self {
        let stem = format!("report_{}", date.format("%Y-%m-%d"));
        Self {
            purchases: dir.join(format!("{}_purchases.csv", stem)),
            consumption: dir.join(format!("{}_consumption.csv", stem)),
            summary: dir.join(format!("{}_summary.json", stem)),
        }
    }

    /// The first report file that already exists on disk, if any.
    pub fn existing(&self) -> Option<&Path> {
        [&self.purchases, &self.consumption, &self.summary]
            .into_iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
    }
}

/// Write records as CSV with a header row, even when there are no records.
fn write_sheet<W: Write, T: Serialize>(writer: W, headers: &[&str], records: &[T]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(headers)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_purchases<W: Write>(writer: W, records: &[PurchaseRecord]) -> Result<()> {
    write_sheet(writer, &PURCHASE_HEADERS, records)
}

pub fn write_consumptions<W: Write>(writer: W, records: &[ConsumptionRecord]) -> Result<()> {
    write_sheet(writer, &CONSUMPTION_HEADERS, records)
}

pub fn write_summary<W: Write>(mut writer: W, summary: &RunSummary) -> Result<()> {
    writer.write_all(serde_json::to_string_pretty(summary)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Save both sheets and the summary under `dir`, creating it if needed.
pub fn save_reports(
    dir: &Path,
    date: NaiveDate,
    ledgers: &Ledgers,
    summary: &RunSummary,
) -> Result<ReportPaths> {
    fs::create_dir_all(dir)?;
    let paths = ReportPaths::new(dir, date);

    write_purchases(BufWriter::new(File::create(&paths.purchases)?), ledgers.purchases())?;
    write_consumptions(
        BufWriter::new(File::create(&paths.consumption)?),
        ledgers.consumptions(),
    )?;
    write_summary(BufWriter::new(File::create(&paths.summary)?), summary)?;

    Ok(paths)
}
