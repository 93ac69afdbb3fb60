// CleanSlate - core/mod.rs
//
// Core business logic layer: the three cleanup operations and their
// supporting model/table/sweep code.
// Dependencies: util, platform::process (the command seam only).
// Must NOT depend on: ui, app.

pub mod cleanup;
pub mod dns;
pub mod model;
pub mod sweep;
pub mod targets;
