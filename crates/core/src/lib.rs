pub mod classify;
pub mod csv;
pub mod error;
pub mod fetch;
pub mod gaps;
pub mod library;
pub mod report;
pub mod takedown;

pub use classify::{ClassifiedResult, DMCA_DISPLAY_PERCENT, DetectionType, SUSPICIOUS_THRESHOLD, classify};
pub use error::{Result, StrikedownError};
pub use fetch::FetchConfig;
pub use gaps::{count_missing_chapters, missing_ratio};
pub use library::{LibraryClient, MANGADEX_SOURCE_ID, TitleRecord};
pub use report::{TITLE_DISPLAY_WIDTH, rank, render_table, to_csv, truncate_title};
pub use takedown::{TAKEDOWN_SHEET_GID, TAKEDOWN_SHEET_ID, TakedownClient, TakedownEntry, parse_entries, sheet_export_url};
