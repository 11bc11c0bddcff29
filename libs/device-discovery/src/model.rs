use std::path::PathBuf;

/// Health of a discovered device, as advertised to the device-plugin
/// consumer.
///
/// Discovery currently always reports [`HealthStatus::Healthy`]; there is no
/// live probing of temperature, power or fan state yet. `Unhealthy` exists
/// for the catalog's consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    /// Protocol string form (`"Healthy"` / `"Unhealthy"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Unhealthy => "Unhealthy",
        }
    }
}

/// The pair of device nodes backing one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceNodes {
    /// Control-plane node (PCI function 1), e.g. `/dev/xclmgmt257`.
    pub management: PathBuf,
    /// Compute/render node (PCI function 0), e.g. `/dev/dri/renderD128`.
    pub user: PathBuf,
}

/// One discovered FPGA card, fully populated or not created at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Sequential 1-based identifier in discovery order, stringified.
    /// Reflects scan order only, not anything device-intrinsic.
    pub index: String,
    /// Raw firmware/shell identity string (sysfs `VBNV`, untrimmed).
    pub shell_version: String,
    /// Raw firmware build-timestamp string (untrimmed).
    pub timestamp: String,
    /// User-facing PCI address, `<bus>:<dev>.0`.
    pub bus_device_function: String,
    /// Raw device-id string read from the user function (untrimmed).
    pub device_id: String,
    pub health: HealthStatus,
    pub nodes: DeviceNodes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_protocol_strings() {
        assert_eq!(HealthStatus::Healthy.as_str(), "Healthy");
        assert_eq!(HealthStatus::Unhealthy.as_str(), "Unhealthy");
    }
}
