use crate::error::{BackupError, Result};
use crate::types::{BlobRef, ResultMode};

/// Turns the put tool's stdout into the value recorded in the result log.
///
/// In strict mode the last non-empty line must be a `sha1-<hex>` blobref. Raw
/// mode keeps everything the tool printed, folded onto one line.
pub fn extract_result(dir: &str, output: &[u8], mode: ResultMode) -> Result<String> {
    let text = String::from_utf8_lossy(output);
    match mode {
        ResultMode::Strict => {
            let last = text
                .lines()
                .rev()
                .map(|l| l.trim_end())
                .find(|l| !l.is_empty())
                .unwrap_or("");
            last.parse::<BlobRef>()
                .map(|br| br.to_string())
                .map_err(|_| BackupError::MalformedResult {
                    dir: dir.to_string(),
                    output: text.trim_end().to_string(),
                })
        }
        ResultMode::Raw => Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_takes_last_line() {
        let out = b"sha1-1111\nsha1-0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33\n";
        assert_eq!(
            extract_result("/d", out, ResultMode::Strict).expect("blobref"),
            "sha1-0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33"
        );
    }

    #[test]
    fn strict_handles_crlf_and_trailing_blank_lines() {
        let out = b"sha1-abc123\r\n\r\n";
        assert_eq!(extract_result("/d", out, ResultMode::Strict).expect("blobref"), "sha1-abc123");
    }

    #[test]
    fn strict_rejects_unexpected_output() {
        for out in [&b""[..], b"uploaded 3 files\n", b"sha1-XYZ\n"] {
            let err = extract_result("/d", out, ResultMode::Strict).unwrap_err();
            assert!(matches!(err, BackupError::MalformedResult { .. }), "{}", err);
        }
    }

    #[test]
    fn raw_folds_output_onto_one_line() {
        let out = b"  sha1-abc\nsome note \n\n";
        assert_eq!(extract_result("/d", out, ResultMode::Raw).expect("raw"), "sha1-abc some note");
        assert_eq!(extract_result("/d", b"", ResultMode::Raw).expect("raw"), "");
    }
}
