//! Acceptance rules for files handed to the drop surface.

use crate::config::MAX_FILE_SIZE;
use crate::types::{WorkflowError, WorkflowResult};

use super::session::SelectedFile;

/// True when the declared MIME type is an image type.
pub fn accepts_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Check a selection before any session state is touched.
pub fn validate_selection(file: &SelectedFile) -> WorkflowResult<()> {
    if !accepts_mime(&file.mime) {
        return Err(WorkflowError::InvalidFileType(file.mime.clone()));
    }
    if file.size > MAX_FILE_SIZE {
        return Err(WorkflowError::FileTooLarge {
            size: file.size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_image_types() {
        assert!(accepts_mime("image/png"));
        assert!(accepts_mime("image/jpeg"));
        assert!(accepts_mime("IMAGE/TIFF"));
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["", "text/plain", "application/pdf", "video/mp4", "application/image", "imagex/png"] {
            assert!(!accepts_mime(mime), "{} should be rejected", mime);
        }
    }

    #[test]
    fn test_validate_selection_size_limit() {
        let big = SelectedFile::new("huge.png", "image/png", MAX_FILE_SIZE + 1);
        assert!(matches!(
            validate_selection(&big),
            Err(WorkflowError::FileTooLarge { .. })
        ));

        let ok = SelectedFile::new("tile.png", "image/png", 1024);
        assert!(validate_selection(&ok).is_ok());
    }
}
