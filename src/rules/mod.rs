//! Built-in configuration tables.
//!
//! Everything here is static data: letter classes, rule lists, syllable
//! templates and the glyph table. The engines in `crate::engine` never hard-code
//! a letter; they only read what [`Config`](crate::Config) hands them.

pub mod classes;
pub mod orthography;
pub mod phonemic;
pub mod script;

#[cfg(test)]
mod tests;
