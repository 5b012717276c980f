//! JSON configuration files for the bundled tools.

pub mod degrid;
