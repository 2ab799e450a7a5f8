use serde::Serialize;

/// One uploaded multipart file part, buffered fully in memory for the
/// lifetime of the request. The filename and content type are
/// caller-supplied and untrusted.
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Reported only for files in which at least one keyword was found;
/// files without a match are dropped from the response entirely.
#[derive(Serialize)]
pub struct ScanResult {
    pub filename: String,
    #[serde(rename = "keywordFound")]
    pub keyword_found: bool,
}
