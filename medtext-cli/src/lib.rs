//! Support code for the `medtext` binary: inspection transforms and sample documents.

pub mod samples;
pub mod transforms;
