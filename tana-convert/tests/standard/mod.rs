//! Standard renderer tests
//!
//! End-to-end conversion of Markdown and plain prose through the public
//! `convert_to_tana` entry point.

mod dates;
mod fields;
mod outline;
