//! Local CV file validation
//!
//! A CV must be a PDF or a DOCX document no larger than 10 MiB. These checks
//! run before any request is built, so a rejected file never reaches the
//! network.

use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Content types the backend can extract interests from
pub const ACCEPTED_CV_TYPES: [&str; 2] = [PDF_MIME, DOCX_MIME];

/// Largest accepted CV, in bytes
pub const MAX_CV_BYTES: u64 = 10 * 1024 * 1024;

/// Bytes read for magic-number sniffing
const SNIFF_LEN: u64 = 8192;

/// Why a CV was refused locally
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please upload a PDF or DOCX file.")]
    UnsupportedType { content_type: String },

    #[error("File size must be less than 10MB.")]
    TooLarge { size: u64 },

    #[error("Could not read file: {0}")]
    Unreadable(String),
}

/// Check type first, then size
pub fn validate_cv(content_type: &str, size: u64) -> Result<(), UploadRejection> {
    if !ACCEPTED_CV_TYPES.contains(&content_type) {
        return Err(UploadRejection::UnsupportedType {
            content_type: content_type.to_string(),
        });
    }

    if size > MAX_CV_BYTES {
        return Err(UploadRejection::TooLarge { size });
    }

    Ok(())
}

/// Content type implied by the file extension alone
pub fn content_type_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(PDF_MIME),
        "docx" => Some(DOCX_MIME),
        _ => None,
    }
}

/// Sniff the content type from leading bytes, falling back to the extension
///
/// DOCX files are zip containers; when sniffing only sees a generic zip the
/// extension decides.
pub fn detect_content_type(path: &Path, head: &[u8]) -> String {
    match infer::get(head) {
        Some(kind) if kind.mime_type() != "application/zip" => kind.mime_type().to_string(),
        _ => content_type_from_extension(path)
            .unwrap_or("application/octet-stream")
            .to_string(),
    }
}

/// Read at most one byte past the limit, then check the real length
///
/// The length from metadata can be stale (a file still being written) or
/// meaningless (a pipe), so the bytes actually read decide.
fn read_capped<R: Read>(reader: R, content_type: &str) -> Result<Vec<u8>, UploadRejection> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_CV_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| UploadRejection::Unreadable(e.to_string()))?;
    validate_cv(content_type, bytes.len() as u64)?;
    Ok(bytes)
}

/// A CV that passed local validation and is ready to upload
#[derive(Debug, Clone)]
pub struct CvFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CvFile {
    /// Inspect and load a CV from disk
    ///
    /// Only the leading bytes are read before validation, so an oversized
    /// file is refused without loading it.
    pub fn from_path(path: &Path) -> Result<Self, UploadRejection> {
        let unreadable = |e: std::io::Error| UploadRejection::Unreadable(e.to_string());

        let size = std::fs::metadata(path).map_err(unreadable)?.len();

        let mut head = Vec::with_capacity(SNIFF_LEN as usize);
        std::fs::File::open(path)
            .map_err(unreadable)?
            .take(SNIFF_LEN)
            .read_to_end(&mut head)
            .map_err(unreadable)?;

        let content_type = detect_content_type(path, &head);
        validate_cv(&content_type, size)?;

        let file = std::fs::File::open(path).map_err(unreadable)?;
        let bytes = read_capped(file, &content_type)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cv".to_string());

        tracing::debug!(
            file = %file_name,
            content_type = %content_type,
            size = bytes.len(),
            "CV passed local validation"
        );

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_accepts_pdf_and_docx() {
        assert!(validate_cv(PDF_MIME, 1024).is_ok());
        assert!(validate_cv(DOCX_MIME, 1024).is_ok());
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_cv(PDF_MIME, MAX_CV_BYTES).is_ok());
        assert_eq!(
            validate_cv(PDF_MIME, MAX_CV_BYTES + 1),
            Err(UploadRejection::TooLarge { size: MAX_CV_BYTES + 1 })
        );
    }

    #[test]
    fn test_twelve_megabyte_pdf_rejected_with_size_message() {
        let err = validate_cv(PDF_MIME, 12 * 1024 * 1024).unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 10MB.");
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = validate_cv("application/msword", 50 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, UploadRejection::UnsupportedType { .. }));
        assert_eq!(err.to_string(), "Please upload a PDF or DOCX file.");
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(content_type_from_extension(Path::new("cv.PDF")), Some(PDF_MIME));
        assert_eq!(content_type_from_extension(Path::new("resume.docx")), Some(DOCX_MIME));
        assert_eq!(content_type_from_extension(Path::new("resume.doc")), None);
        assert_eq!(content_type_from_extension(Path::new("resume")), None);
    }

    #[test]
    fn test_sniffing_overrides_misleading_extension() {
        let png_header = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(detect_content_type(Path::new("cv.pdf"), &png_header), "image/png");
    }

    #[test]
    fn test_generic_zip_defers_to_extension() {
        let zip_header = [b'P', b'K', 0x03, 0x04, 0x14, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(detect_content_type(Path::new("cv.docx"), &zip_header), DOCX_MIME);

        let archive = detect_content_type(Path::new("cv.zip"), &zip_header);
        assert_eq!(archive, "application/octet-stream");
        assert!(matches!(
            validate_cv(&archive, 1024),
            Err(UploadRejection::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_read_capped_stops_past_limit() {
        // An endless source stands in for a file that keeps growing
        let err = read_capped(std::io::repeat(b'%'), PDF_MIME).unwrap_err();
        assert_eq!(err, UploadRejection::TooLarge { size: MAX_CV_BYTES + 1 });

        let bytes = read_capped(&b"%PDF-1.7\n"[..], PDF_MIME).unwrap();
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn test_from_path_loads_small_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"%PDF-1.7\n%fake cv body\n").unwrap();

        let cv = CvFile::from_path(&path).unwrap();
        assert_eq!(cv.file_name, "cv.pdf");
        assert_eq!(cv.content_type, PDF_MIME);
        assert!(cv.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_from_path_rejects_oversized_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.pdf");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"%PDF-1.7\n").unwrap();
        f.set_len(12 * 1024 * 1024).unwrap();

        let err = CvFile::from_path(&path).unwrap_err();
        assert_eq!(err, UploadRejection::TooLarge { size: 12 * 1024 * 1024 });
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = CvFile::from_path(Path::new("/nonexistent/cv.pdf")).unwrap_err();
        assert!(matches!(err, UploadRejection::Unreadable(_)));
    }
}
