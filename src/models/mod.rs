//! Domain model module declarations.

pub mod draft;
pub mod mention;
