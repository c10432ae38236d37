use std::path::Path;

use reqwest::multipart::Part;

use crate::{BackendError, FailureKind};

const FALLBACK_MIME: &str = "application/octet-stream";

/// MIME type sent with an uploaded document, chosen by file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        _ => FALLBACK_MIME,
    }
}

/// Reads the whole file into a multipart part named after the file.
pub(crate) async fn file_part(path: &Path) -> Result<Part, BackendError> {
    let bytes = tokio::fs::read(path).await.map_err(|err| {
        BackendError::new(
            FailureKind::FileRead,
            format!("could not read {}: {err}", path.display()),
        )
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_for(path))
        .map_err(|err| BackendError::new(FailureKind::FileRead, err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::mime_for;

    #[test]
    fn known_extensions_map_to_document_types() {
        assert_eq!(mime_for(Path::new("report.pdf")), "application/pdf");
        assert_eq!(mime_for(Path::new("DATA.CSV")), "text/csv");
        assert_eq!(mime_for(Path::new("dir/items.json")), "application/json");
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(mime_for(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("Makefile")), "application/octet-stream");
    }
}
