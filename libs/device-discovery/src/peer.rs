use crate::error::DiscoveryError;
use crate::paths::{DRM_SUBDIR, RENDER_PATTERN, USER_FUNCTION, pci_dir_name};
use crate::scanner::scan_entries;
use std::path::Path;

/// Find the render node paired with a management endpoint: the first
/// `renderD*` entry under the DRM directory of the user-facing PCI function
/// at `bus_device`.
///
/// An unreadable DRM directory is an error; a readable directory with no
/// matching entry is `Ok(None)`. Absence of a render node is "not found",
/// not a failure.
pub(crate) fn find_render_node(
    sysfs_dir: &Path,
    bus_device: &str,
) -> Result<Option<String>, DiscoveryError> {
    let drm_dir = sysfs_dir
        .join(pci_dir_name(bus_device, USER_FUNCTION))
        .join(DRM_SUBDIR);
    let matches = scan_entries(&drm_dir, &RENDER_PATTERN)?;
    Ok(matches.into_iter().next())
}
