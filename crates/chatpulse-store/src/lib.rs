//! File storage for day inputs, rendered summaries and run history

mod day;
mod io;
mod types;

pub use day::{DayFile, read_day};
pub use io::{append_jsonl, atomic_write, read_jsonl, write_json_pretty};
pub use types::SummaryRecord;
