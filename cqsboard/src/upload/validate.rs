use crate::error::{DashboardError, Result};

use super::UploadFile;

const CSV_MIME: &str = "text/csv";

/// Check that `file` looks like a CSV upload within the size limit.
///
/// The content itself is never parsed; binary formats are caught by sniffing
/// their magic bytes.
pub fn validate_csv(file: &UploadFile, max_size: usize) -> Result<()> {
    if file.bytes.is_empty() {
        return Err(DashboardError::Validation("File is empty".to_string()));
    }

    if file.bytes.len() > max_size {
        return Err(DashboardError::Validation(format!(
            "File too large: {} bytes (max {} bytes)",
            file.bytes.len(),
            max_size
        )));
    }

    if !is_csv(file) {
        return Err(DashboardError::Validation(
            "Only .csv files are allowed".to_string(),
        ));
    }

    if let Some(kind) = infer::get(&file.bytes) {
        return Err(DashboardError::Validation(format!(
            "File content looks like {}, not CSV",
            kind.mime_type()
        )));
    }

    Ok(())
}

fn is_csv(file: &UploadFile) -> bool {
    let declared = file
        .content_type
        .as_deref()
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim().eq_ignore_ascii_case(CSV_MIME))
        .unwrap_or(false);

    let guessed = mime_guess::from_path(&file.file_name)
        .iter()
        .any(|mime| mime.essence_str() == CSV_MIME);

    declared || guessed
}
