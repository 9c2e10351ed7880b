//! Download artifact for the enhanced result.

use crate::config::DOWNLOAD_FILE_STEM;

use super::session::ResultImage;

/// File the browser saves when the user clicks Download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    pub fn from_result(result: &ResultImage) -> Self {
        Self {
            file_name: download_file_name(&result.mime),
            mime: result.mime.clone(),
            bytes: result.bytes.clone(),
        }
    }
}

/// Product-branded file name, extension derived from the MIME type.
///
/// Same table as the native client's `download_file_name`.
pub fn download_file_name(mime: &str) -> String {
    let ext = match mime {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        "image/gif" => "gif",
        "image/tiff" => "tiff",
        _ => "png",
    };
    format!("{}.{}", DOWNLOAD_FILE_STEM, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("image/png"), "ClearX_enhanced_satellite.png");
        assert_eq!(download_file_name("image/jpeg"), "ClearX_enhanced_satellite.jpg");
        assert_eq!(download_file_name("image/webp"), "ClearX_enhanced_satellite.webp");
        assert_eq!(download_file_name("image/bmp"), "ClearX_enhanced_satellite.bmp");
        assert_eq!(download_file_name("image/gif"), "ClearX_enhanced_satellite.gif");
        assert_eq!(download_file_name("image/tiff"), "ClearX_enhanced_satellite.tiff");
        assert_eq!(download_file_name("application/octet-stream"), "ClearX_enhanced_satellite.png");
    }
}
