//! Registry document generators
//!
//! - [`scan`]: one record per icon file in a directory
//! - [`flags`]: one record per item of code→label metadata, after a default

pub mod flags;
pub mod scan;
