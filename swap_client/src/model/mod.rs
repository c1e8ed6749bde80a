//! Output types printed by the client.
//!
//! - `report` — serializable quote and rate reports for `--json` output.
pub mod report;
