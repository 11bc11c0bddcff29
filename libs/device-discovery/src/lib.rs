//! FPGA Device Discovery Library
//!
//! This library enumerates Xilinx FPGA accelerator cards attached to the
//! host over PCI by scanning kernel-exposed filesystem entries (devfs and
//! sysfs) rather than touching hardware. For every management device node it
//! finds, it:
//! - decodes the PCI bus/device/function address embedded in the node name,
//! - locates the paired user-facing render node (the sibling PCI function),
//! - reads the static firmware identity files exposed through sysfs,
//!
//! and assembles the result into an ordered, immutable device catalog for a
//! device-plugin server to advertise.
//!
//! Discovery is a stateless snapshot: each call re-reads current filesystem
//! state, synchronously and single-threaded, and either returns the full
//! catalog or the first error encountered.

mod address;
mod metadata;
mod paths;
mod peer;
mod scanner;

pub mod error;
pub mod model;

mod catalog;

pub use catalog::DeviceDiscovery;
pub use error::DiscoveryError;
pub use model::*;
