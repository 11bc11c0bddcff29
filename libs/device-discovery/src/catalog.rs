use crate::address::resolve_bus_device;
use crate::error::DiscoveryError;
use crate::metadata::read_metadata;
use crate::model::{Device, DeviceNodes, HealthStatus};
use crate::paths::{
    DEVICE_ID_FILE, DEV_DIR, DRI_SUBDIR, MGMT_FUNCTION, MGMT_PATTERN, NON_DIGITS, ROM_PREFIX,
    SHELL_VERSION_FILE, SYSFS_DEVICES, TIMESTAMP_FILE, USER_FUNCTION, pci_dir_name,
};
use crate::peer::find_render_node;
use crate::scanner::scan_entries;
use std::path::{Path, PathBuf};

/// Stateless FPGA catalog builder.
///
/// Holds only the devfs and sysfs roots to scan; the defaults are the real
/// kernel mount points. Every [`discover`](Self::discover) call is an
/// independent snapshot of current filesystem state.
#[derive(Debug, Clone)]
pub struct DeviceDiscovery {
    dev_dir: PathBuf,
    sysfs_dir: PathBuf,
}

impl DeviceDiscovery {
    /// Discovery against the real `/dev` and `/sys/bus/pci/devices` roots.
    pub fn new() -> Self {
        Self {
            dev_dir: PathBuf::from(DEV_DIR),
            sysfs_dir: PathBuf::from(SYSFS_DEVICES),
        }
    }

    /// Discovery against alternate roots (chroots, test fixtures).
    pub fn with_roots(dev_dir: impl Into<PathBuf>, sysfs_dir: impl Into<PathBuf>) -> Self {
        Self {
            dev_dir: dev_dir.into(),
            sysfs_dir: sysfs_dir.into(),
        }
    }

    /// Enumerate all FPGA cards currently visible through the filesystem.
    ///
    /// Fail-fast: the first error for any candidate aborts the whole build
    /// and no devices are returned. A candidate whose render node is absent
    /// is not an error; its user node degrades to the bare `dri` directory.
    pub fn discover(&self) -> Result<Vec<Device>, DiscoveryError> {
        let candidates = scan_entries(&self.dev_dir, &MGMT_PATTERN)?;
        tracing::debug!(count = candidates.len(), "found management entries");

        let mut devices = Vec::new();
        for name in candidates {
            let device = self.assemble(&name, devices.len() + 1)?;
            tracing::debug!(
                index = %device.index,
                bdf = %device.bus_device_function,
                "assembled device"
            );
            devices.push(device);
        }
        Ok(devices)
    }

    /// Run the full pipeline for one management entry.
    fn assemble(&self, mgmt_name: &str, index: usize) -> Result<Device, DiscoveryError> {
        let digits = NON_DIGITS.replace_all(mgmt_name, "").into_owned();
        let bus_device = resolve_bus_device(&digits)?;

        let render = find_render_node(&self.sysfs_dir, &bus_device)?;
        if render.is_none() {
            tracing::warn!(entry = mgmt_name, "no render node paired with management entry");
        }

        let rom_dir = self
            .sysfs_dir
            .join(pci_dir_name(&bus_device, MGMT_FUNCTION))
            .join(format!("{ROM_PREFIX}{digits}"));
        let shell_version = read_metadata(&rom_dir.join(SHELL_VERSION_FILE))?;
        let timestamp = read_metadata(&rom_dir.join(TIMESTAMP_FILE))?;

        let user_dir = self.sysfs_dir.join(pci_dir_name(&bus_device, USER_FUNCTION));
        let device_id = read_metadata(&user_dir.join(DEVICE_ID_FILE))?;

        Ok(Device {
            index: index.to_string(),
            shell_version,
            timestamp,
            bus_device_function: format!("{bus_device}.{USER_FUNCTION}"),
            device_id,
            health: HealthStatus::Healthy,
            nodes: DeviceNodes {
                management: self.dev_dir.join(mgmt_name),
                user: user_node(&self.dev_dir, render.as_deref()),
            },
        })
    }
}

impl Default for DeviceDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

/// User node path under `<dev>/dri`; without a render name the path stays
/// the bare `dri` directory, mirroring a join with an empty component.
fn user_node(dev_dir: &Path, render: Option<&str>) -> PathBuf {
    let dri = dev_dir.join(DRI_SUBDIR);
    match render {
        Some(name) => dri.join(name),
        None => dri,
    }
}
