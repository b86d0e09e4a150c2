/*
 * Glue shared between the parsers and the rest of the crate.
 * Example import from this file: `use rope_bridge::helpers::parse;`.
 */

pub mod parse;
