use crate::error::DiscoveryError;
use regex::Regex;
use std::fs;
use std::path::Path;

/// List `dir` and return the entry names matching `pattern`, in the order
/// the underlying directory listing provides (not guaranteed sorted).
pub(crate) fn scan_entries(dir: &Path, pattern: &Regex) -> Result<Vec<String>, DiscoveryError> {
    let entries = fs::read_dir(dir).map_err(|source| DiscoveryError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if pattern.is_match(&name) {
            names.push(name);
        }
    }
    Ok(names)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::paths::MGMT_PATTERN;
    use tempfile::tempdir;

    #[test]
    fn keeps_only_matching_entries() {
        let tmp = tempdir().unwrap();
        for name in ["xclmgmt0", "xclmgmt5", "ttyS0", "xclmgmt", "renderD128"] {
            fs::File::create(tmp.path().join(name)).unwrap();
        }

        let mut names = scan_entries(tmp.path(), &MGMT_PATTERN).unwrap();
        names.sort();
        assert_eq!(names, vec!["xclmgmt0".to_string(), "xclmgmt5".to_string()]);
    }

    #[test]
    fn missing_directory_is_a_directory_read_error() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("nope");

        let err = scan_entries(&gone, &MGMT_PATTERN).unwrap_err();
        match err {
            DiscoveryError::DirectoryRead { path, .. } => assert_eq!(path, gone),
            other => panic!("expected DirectoryRead, got {other:?}"),
        }
    }
}
