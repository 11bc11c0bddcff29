use crate::error::DiscoveryError;
use std::fs;
use std::path::Path;

/// Read one firmware identity file and return its content verbatim.
///
/// No trimming or parsing: sysfs values are handed to the catalog exactly
/// as the kernel exposes them, trailing newline included.
pub(crate) fn read_metadata(path: &Path) -> Result<String, DiscoveryError> {
    fs::read_to_string(path).map_err(|source| DiscoveryError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn content_round_trips_exactly() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("VBNV");
        fs::write(&file, "v1.2\n").unwrap();

        assert_eq!(read_metadata(&file).unwrap(), "v1.2\n");
    }

    #[test]
    fn missing_file_is_a_file_read_error() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("timestamp");

        let err = read_metadata(&file).unwrap_err();
        match err {
            DiscoveryError::FileRead { path, .. } => assert_eq!(path, file),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }
}
