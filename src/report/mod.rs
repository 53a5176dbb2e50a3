mod summary;
mod writer;

pub use summary::RunSummary;
pub use writer::{
    save_reports, write_consumptions, write_purchases, write_summary, ReportPaths,
    CONSUMPTION_HEADERS, PURCHASE_HEADERS,
};
