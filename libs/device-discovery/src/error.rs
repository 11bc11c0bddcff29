use std::path::PathBuf;

/// Errors for FPGA device discovery
///
/// Every variant is terminal for the current enumeration call: nothing is
/// retried or skipped, and no partial catalog is returned alongside an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("management entry has no decodable PCI address: {raw:?}")]
    InvalidAddressEncoding { raw: String },

    #[error("management function must be 1, got {function} (encoded address {raw:?})")]
    InvalidManagementFunction { raw: String, function: u32 },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_structured_context() {
        let err = DiscoveryError::InvalidManagementFunction {
            raw: "256".to_string(),
            function: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("got 0"));
        assert!(msg.contains("256"));

        let err = DiscoveryError::FileRead {
            path: PathBuf::from("/sys/bus/pci/devices/0000:01:00.0/device"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("0000:01:00.0/device"));
    }
}
