//! Dataset text ingestion.
//!
//! Reference datasets arrive as loosely structured delimited text with an
//! unknown delimiter and unknown headers. This crate turns that text into a
//! [`RawTable`] (header row plus data rows) without ever failing on malformed
//! content; schema decisions are left to `wind-map`.
//!
//! # Example
//!
//! ```
//! use wind_ingest::parse_table;
//!
//! let table = parse_table("Postcode;Altitude\nSW1A 1AA;20\n");
//! assert_eq!(table.headers, vec!["Postcode", "Altitude"]);
//! assert_eq!(table.cell(0, 1), "20");
//! ```

mod error;
mod reader;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Text Tables ===
pub use table::{DELIMITER_CANDIDATES, Delimiter, RawTable, detect_delimiter, parse_table, split_record};

// === File Reading ===
pub use reader::{
    MAX_DATASET_FILE_SIZE, decode_dataset_bytes, read_dataset_file, read_dataset_file_with_limit,
};
