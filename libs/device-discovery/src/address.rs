use crate::error::DiscoveryError;
use crate::paths::MGMT_FUNCTION;

/// Decode the decimal address embedded in a management entry name into the
/// PCI bus/device pair, formatted `<bus>:<dev>` as lowercase zero-padded
/// two-digit hex (e.g. 257 -> "01:00").
///
/// The encoding packs the triple as `bus*256 + dev*8 + fun`. The management
/// node must sit on PCI function 1; anything else means the entry is not a
/// management endpoint and the call fails.
pub(crate) fn resolve_bus_device(raw: &str) -> Result<String, DiscoveryError> {
    let encoded: u32 = raw
        .parse()
        .map_err(|_| DiscoveryError::InvalidAddressEncoding {
            raw: raw.to_string(),
        })?;

    let bus = encoded / 256;
    let dev = (encoded - bus * 256) / 8;
    let fun = encoded - bus * 256 - dev * 8;
    if fun != MGMT_FUNCTION {
        return Err(DiscoveryError::InvalidManagementFunction {
            raw: raw.to_string(),
            function: fun,
        });
    }

    Ok(format!("{bus:02x}:{dev:02x}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bus_one_device_zero() {
        // 257 = 1*256 + 0*8 + 1
        assert_eq!(resolve_bus_device("257").unwrap(), "01:00");
    }

    #[test]
    fn rejects_non_management_function() {
        // 256 = 1*256 + 0*8 + 0
        let err = resolve_bus_device("256").unwrap_err();
        match err {
            DiscoveryError::InvalidManagementFunction { raw, function } => {
                assert_eq!(raw, "256");
                assert_eq!(function, 0);
            }
            other => panic!("expected InvalidManagementFunction, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = resolve_bus_device("mgmt").unwrap_err();
        match err {
            DiscoveryError::InvalidAddressEncoding { raw } => assert_eq!(raw, "mgmt"),
            other => panic!("expected InvalidAddressEncoding, got {other:?}"),
        }
    }

    #[test]
    fn formats_large_addresses_as_padded_hex() {
        // 65*256 + 3*8 + 1 = 16665 -> bus 0x41, dev 0x03
        assert_eq!(resolve_bus_device("16665").unwrap(), "41:03");
    }
}
