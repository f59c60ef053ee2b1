//! Takedown list client.
//!
//! The public takedown list is maintained as a Google Sheet; we pull its CSV
//! export and keep the rows that carry all three fields. The sheet has two
//! banner rows above the data, so parsing starts at the third row.

use reqwest::Client;
use url::Url;

use crate::csv;
use crate::fetch::{FetchConfig, build_client, map_request_error};
use crate::{Result, StrikedownError};

/// Sheet id of the public MangaDex takedown list.
pub const TAKEDOWN_SHEET_ID: &str = "1vxvAHxmLLgAEEq-jWbDw5fxHMdz1N_PNWe3OPXtrin0";

/// Tab id within the sheet.
pub const TAKEDOWN_SHEET_GID: &str = "0";

/// Rows above the data in the sheet export.
const HEADER_ROWS: usize = 2;

/// One takedown-affected title.
///
/// `uuid` is the join key: it appears as a path segment in the affected
/// title's upstream URL, so matching is substring containment, never exact
/// equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakedownEntry {
    pub display_title: String,
    pub original_title: String,
    pub uuid: String,
}

/// Builds the CSV export URL for a Google Sheet tab.
pub fn sheet_export_url(sheet_id: &str, gid: &str) -> Result<Url> {
    let raw = format!(
        "https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv&id={sheet_id}&gid={gid}"
    );
    Url::parse(&raw).map_err(|e| StrikedownError::InvalidUrl(e.to_string()))
}

/// Parses the sheet export into takedown entries.
///
/// The first [`HEADER_ROWS`] rows are skipped; rows with any of the three
/// required fields empty are discarded.
pub fn parse_entries(csv_text: &str) -> Result<Vec<TakedownEntry>> {
    let rows = csv::parse_records(csv_text)?;

    let mut entries = Vec::new();
    for row in rows.into_iter().skip(HEADER_ROWS) {
        let mut fields = row.into_iter();
        let (Some(display_title), Some(original_title), Some(uuid)) =
            (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };

        if display_title.is_empty() || original_title.is_empty() || uuid.is_empty() {
            continue;
        }

        entries.push(TakedownEntry { display_title, original_title, uuid });
    }

    Ok(entries)
}

/// Client for the takedown list export.
#[derive(Debug, Clone)]
pub struct TakedownClient {
    url: Url,
    client: Client,
    config: FetchConfig,
}

impl TakedownClient {
    pub fn new(url: Url, config: &FetchConfig) -> Result<Self> {
        let client = build_client(config)?;
        Ok(Self { url, client, config: config.clone() })
    }

    /// Fetches and parses the takedown list.
    ///
    /// A non-success HTTP status is an error; no partial list is returned.
    pub async fn fetch_entries(&self) -> Result<Vec<TakedownEntry>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| map_request_error(e, &self.config))?
            .error_for_status()?;

        let csv_text = response.text().await?;
        parse_entries(&csv_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_export_url() {
        let url = sheet_export_url(TAKEDOWN_SHEET_ID, TAKEDOWN_SHEET_GID).unwrap();
        assert_eq!(url.host_str(), Some("docs.google.com"));
        assert!(url.as_str().contains(TAKEDOWN_SHEET_ID));
        assert!(url.as_str().contains("format=csv"));
    }

    #[test]
    fn test_parse_skips_header_rows() {
        let csv = "Takedown list,,\nTitle,Original,UUID\nSome Manga,Orig,abc-123\n";
        let entries = parse_entries(csv).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].uuid, "abc-123");
    }

    #[test]
    fn test_parse_drops_incomplete_rows() {
        let csv = "banner,,\nheader,,\n\
                   Full,Orig,uuid-1\n\
                   ,Orig,uuid-2\n\
                   NoUuid,Orig,\n\
                   Short\n\
                   Other,Orig,uuid-3\n";
        let entries = parse_entries(csv).unwrap();
        let uuids: Vec<&str> = entries.iter().map(|e| e.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["uuid-1", "uuid-3"]);
    }

    #[test]
    fn test_parse_quoted_titles() {
        let csv = "x,,\ny,,\n\"Manga, With Comma\",Orig,uuid-9\n";
        let entries = parse_entries(csv).unwrap();
        assert_eq!(entries[0].display_title, "Manga, With Comma");
    }
}
