//! Data-transfer shapes shared between the page renderer and the manager panel.

pub mod domain;
pub mod projections;
pub mod shared;
