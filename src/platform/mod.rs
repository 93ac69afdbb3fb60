// CleanSlate - platform/mod.rs
//
// Platform abstraction layer: process invocation and config/data paths.
// Dependencies: standard library, directories crate, util.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod process;
