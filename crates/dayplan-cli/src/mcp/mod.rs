//! MCP server implementation for dayplan
//!
//! Exposes schedule generation and editing to AI assistants over the Model
//! Context Protocol. One in-memory [`Session`] is shared by all tool calls of
//! a server process; nothing outlives it.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use dayplan_core::{params::GenerateSchedule, Preferences, Session};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

use handlers::{Generate, McpHandlers, McpResult, MoveBlock, RenameBlock};

const INSTRUCTIONS: &str = r#"dayplan turns a working window into a time-blocked agenda of equal work slots, short breaks and an optional lunch.

## Core Concepts
- **Window**: start and end of the working day as HH:MM (24-hour)
- **Slots**: equal work blocks; give either `slot_count` or `slot_length` (minutes), never both
- **Breaks**: `break_count` breaks of `break_length` minutes, spread evenly before and after lunch
- **Lunch**: placed at `lunch_start` when a slot spans that time, otherwise in the middle of the day

## Workflow
1. `generate_schedule` to lay out the day; this replaces any current schedule
2. `rename_block` to give slots task names (use the ID column)
3. `move_block` to reorder (use the Pos column, 0-indexed); every block is re-timed from the window start and keeps its duration
4. `show_schedule` to display the current agenda

Failed calls leave the current schedule unchanged. Schedules live only as long as this server process."#;

/// MCP server for dayplan
#[derive(Clone)]
pub struct DayplanMcpServer {
    session: Arc<Mutex<Session>>,
    defaults: Arc<GenerateSchedule>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DayplanMcpServer {
    /// Create a new dayplan MCP server
    pub fn new(preferences: Preferences) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            defaults: Arc::new(preferences.defaults),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.session.clone(), self.defaults.clone())
    }

    #[tool(
        name = "generate_schedule",
        description = "Partition a working window into equal work slots, breaks and an optional lunch, replacing the current schedule. Times are HH:MM (24-hour). Give either slot_count or slot_length (minutes), not both; if neither is given the user's configured default applies. Omitted fields default to 09:00-17:00, 1 break of 10 minutes and lunch at 12:30 for 60 minutes. Returns the schedule as a markdown table with positions and block IDs."
    )]
    async fn generate_schedule(&self, params: Parameters<Generate>) -> McpResult {
        self.handlers().generate_schedule(params).await
    }

    #[tool(
        name = "show_schedule",
        description = "Display the current schedule: every block with its time range, label, position (Pos, 0-indexed) and ID."
    )]
    async fn show_schedule(&self) -> McpResult {
        self.handlers().show_schedule().await
    }

    #[tool(
        name = "move_block",
        description = "Move the block at position `source` to position `destination` (both 0-indexed). The block is removed and reinserted, not swapped; afterwards all blocks are re-timed back to back from the window start, keeping their durations and labels."
    )]
    async fn move_block(&self, params: Parameters<MoveBlock>) -> McpResult {
        self.handlers().move_block(params).await
    }

    #[tool(
        name = "rename_block",
        description = "Change the label of the block with the given ID, for example to assign a task to a slot. Times and order are not affected. The label must not be blank."
    )]
    async fn rename_block(&self, params: Parameters<RenameBlock>) -> McpResult {
        self.handlers().rename_block(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DayplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(self.handlers().list_prompts())
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(&request)
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: DayplanMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting dayplan MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
