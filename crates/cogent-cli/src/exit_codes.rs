//! Unified exit codes for the Cogent CLI.
//! These codes are part of the public contract: CI pipelines gate on them.

pub const SUCCESS: i32 = 0;
pub const INCOHERENT: i32 = 1; // Judge returned makesSense: false
pub const USAGE_ERROR: i32 = 2; // Bad arguments, unreadable files, empty exchange
pub const INFRA_ERROR: i32 = 3; // Endpoint unreachable, HTTP failure, undecodable verdict
