//! Environment audit for the Transit Safety API.
//!
//! The audit answers one question: is this checkout ready to run? It
//! walks a fixed manifest of required files, importable packages, and
//! credential keys, then smoke-tests the application imports:
//! - Requirement tables in [`manifest`]
//! - File presence in [`files`]
//! - Package import probes in [`packages`]
//! - Entry-point and persistence import checks in [`probe`]
//! - Aggregated results in [`report`]

pub mod files;
pub mod manifest;
pub mod packages;
pub mod probe;
pub mod report;

pub use files::{check_files, missing_paths, FileCheck};
pub use manifest::{
    RequiredFile, RequiredPackage, ENTRYPOINT_IMPORT, PERSISTENCE_IMPORT, REQUIRED_FILES,
    REQUIRED_KEYS, REQUIRED_PACKAGES,
};
pub use packages::{missing_dists, PackageCheck, PackageChecker, PackageStatus};
pub use probe::{check_entrypoint, check_persistence, ImportCheck};
pub use report::DoctorReport;
