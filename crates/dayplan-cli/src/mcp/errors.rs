//! Error handling utilities for MCP server

use dayplan_core::ScheduleError;
use rmcp::ErrorData;

/// Converts a core error into an MCP error. Caller mistakes become
/// `invalid_params` so clients can correct the request; anything else is an
/// internal error.
pub fn to_mcp_error(message: &str, error: &ScheduleError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_request_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
