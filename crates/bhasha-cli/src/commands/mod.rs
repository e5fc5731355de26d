//! Command implementations.

mod bulk;
mod check_url;
mod correct;
mod detect;
mod extract;
mod fact;
mod health;
mod policy;
mod summarize;
mod translate;

pub use bulk::execute_bulk_check;
pub use check_url::execute_check_url;
pub use correct::execute_correct;
pub use detect::execute_detect;
pub use extract::{execute_extract, execute_image_text};
pub use fact::execute_fact_check;
pub use health::execute_health;
pub use policy::{execute_image_policy, execute_policy};
pub use summarize::execute_summarize;
pub use translate::execute_translate;

use crate::error::{CliError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

/// Read an image file into a self-describing data URI.
pub(crate) fn image_data_uri(path: &Path) -> Result<String> {
    let mime = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => {
            return Err(CliError::InvalidInput(format!(
                "Unsupported image type: {} (expected png, jpg, webp, or gif)",
                path.display()
            )))
        }
    };

    let bytes = std::fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_image_data_uri_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0x89, 0x50, 0x4e, 0x47])
            .unwrap();

        let uri = image_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let result = image_data_uri(Path::new("document.pdf"));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
