//! Dataset file reading and text decoding.

use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::{IngestError, Result};

/// Maximum dataset file size (200 MB).
pub const MAX_DATASET_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Reads a dataset file into text.
///
/// This is a sync function meant to be called via `spawn_blocking` from async contexts.
pub fn read_dataset_file(path: &Path) -> Result<String> {
    read_dataset_file_with_limit(path, MAX_DATASET_FILE_SIZE)
}

/// Reads a dataset file, rejecting files larger than `max_size` bytes.
pub fn read_dataset_file_with_limit(path: &Path, max_size: u64) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| map_io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e))?;
    if let Some(encoding) = unsupported_bom(&bytes) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        });
    }

    let text = decode_dataset_bytes(&bytes);
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read dataset file");
    Ok(text)
}

/// Decodes dataset bytes as UTF-8, falling back to Windows-1252.
///
/// Spreadsheet exports are frequently saved as Windows-1252; such bytes are
/// rarely valid UTF-8, so a failed strict decode selects the legacy encoding.
/// A UTF-8 byte-order mark is removed.
pub fn decode_dataset_bytes(bytes: &[u8]) -> String {
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(
        bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes),
    ) {
        return text.into_owned();
    }
    tracing::debug!("Dataset is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}

fn unsupported_bom(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xFE, ..] => Some("UTF-16 LE"),
        [0xFE, 0xFF, ..] => Some("UTF-16 BE"),
        _ => None,
    }
}

fn map_io_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf8_and_strips_bom() {
        assert_eq!(decode_dataset_bytes(b"\xEF\xBB\xBFPostcode,Alt"), "Postcode,Alt");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // 0xB0 is the degree sign in Windows-1252 and invalid as a UTF-8 start byte.
        assert_eq!(decode_dataset_bytes(b"Temp \xB0C"), "Temp \u{b0}C");
    }

    #[test]
    fn detects_utf16_bom() {
        assert_eq!(unsupported_bom(&[0xFF, 0xFE, 0x50]), Some("UTF-16 LE"));
        assert_eq!(unsupported_bom(&[0xFE, 0xFF]), Some("UTF-16 BE"));
        assert_eq!(unsupported_bom(b"Postcode"), None);
    }
}
