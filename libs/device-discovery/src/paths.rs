use regex::Regex;
use std::sync::LazyLock;

/// Default devfs root holding the management and render nodes.
pub(crate) const DEV_DIR: &str = "/dev";
/// Default sysfs root for PCI device directories.
pub(crate) const SYSFS_DEVICES: &str = "/sys/bus/pci/devices";

/// PCI domain prefix for every sysfs device directory.
pub(crate) const PCI_DOMAIN: &str = "0000";
/// PCI function exposing the card's control plane.
pub(crate) const MGMT_FUNCTION: u32 = 1;
/// PCI function exposing the card's compute/render resources.
pub(crate) const USER_FUNCTION: u32 = 0;

/// Render nodes live under `dri/` inside the devfs root.
pub(crate) const DRI_SUBDIR: &str = "dri";
/// DRM subsystem directory inside a sysfs device directory.
pub(crate) const DRM_SUBDIR: &str = "drm";
/// Firmware metadata directory name prefix, completed by the decimal
/// address suffix from the management entry name.
pub(crate) const ROM_PREFIX: &str = "rom.m.";
/// Shell/firmware identity file inside the rom directory.
pub(crate) const SHELL_VERSION_FILE: &str = "VBNV";
/// Firmware build-timestamp file inside the rom directory.
pub(crate) const TIMESTAMP_FILE: &str = "timestamp";
/// Device-id file inside the user-function sysfs directory.
pub(crate) const DEVICE_ID_FILE: &str = "device";

#[allow(clippy::expect_used)] // static regex, cannot panic
pub(crate) static MGMT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^xclmgmt[0-9]+$").expect("static regex should not panic")
});
#[allow(clippy::expect_used)] // static regex, cannot panic
pub(crate) static RENDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^renderD[0-9]+$").expect("static regex should not panic")
});
#[allow(clippy::expect_used)] // static regex, cannot panic
pub(crate) static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static regex should not panic"));

/// Sysfs directory name for one PCI function, e.g. `0000:01:00.1`.
pub(crate) fn pci_dir_name(bus_device: &str, function: u32) -> String {
    format!("{PCI_DOMAIN}:{bus_device}.{function}")
}
