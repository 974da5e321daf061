//! File I/O for serialized mappings.
//!
//! Most callers should use [`load_records`] and [`save_records`] (from [`unified`]), which:
//!
//! - auto-detect the load format by file extension (or you can force a format via
//!   [`IoOptions`])
//! - move records between disk and an in-memory [`crate::types::MappingList`]
//! - optionally report every load/save outcome to an [`IoObserver`]
//!
//! Format-specific functions are also available under:
//! - [`json`]: load/save mappings and mapping lists
//! - [`csv`]: load tabular data as a [`crate::types::Matrix`]
//!
//! The transform layer itself never touches the filesystem; these helpers exist so pipelines
//! have somewhere to start and end.

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, IoContext, IoEvent, IoObserver, IoOperation, IoSeverity,
    StdErrObserver,
};
pub use unified::{load_records, save_records, IoOptions, LoadFormat};
