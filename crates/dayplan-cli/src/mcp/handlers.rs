//! MCP tool handlers implementation

use std::sync::Arc;

use dayplan_core::{
    display::{OperationStatus, ScheduleResult},
    params::{self as core, GenerateSchedule},
    Session,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        Prompt, PromptArgument, PromptMessage, PromptMessageContent, PromptMessageRole,
    },
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

/// Generic MCP wrapper for core parameter types with serde integration
///
/// The wrapper deserializes transparently into the core type and borrows its
/// JSON schema, so core parameter structs stay free of MCP concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Generate = McpParams<core::GenerateSchedule>;
pub type MoveBlock = McpParams<core::MoveBlock>;
pub type RenameBlock = McpParams<core::RenameBlock>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<Session>>,
    defaults: Arc<GenerateSchedule>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<Session>>, defaults: Arc<GenerateSchedule>) -> Self {
        Self { session, defaults }
    }

    pub async fn generate_schedule(&self, Parameters(params): Parameters<Generate>) -> McpResult {
        debug!("generate_schedule: {:?}", params);

        let mut params = params.as_ref().clone();
        if params.slot_count.is_none() && params.slot_length.is_none() {
            params.slot_count = self.defaults.slot_count;
            params.slot_length = self.defaults.slot_length;
        }

        let mut session = self.session.lock().await;
        let schedule = session
            .generate(&params)
            .map_err(|e| to_mcp_error("Failed to generate schedule", &e))?;

        let result = ScheduleResult::generated(schedule);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn show_schedule(&self) -> McpResult {
        debug!("show_schedule");

        let session = self.session.lock().await;
        let text = match session.current() {
            Some(schedule) => schedule.to_string(),
            None => OperationStatus::failure(
                "No schedule has been generated yet. Use 'generate_schedule' first.",
            )
            .to_string(),
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    pub async fn move_block(&self, Parameters(params): Parameters<MoveBlock>) -> McpResult {
        debug!("move_block: {:?}", params);

        let inner_params = params.as_ref();
        let mut session = self.session.lock().await;
        let schedule = session
            .move_block(inner_params)
            .map_err(|e| to_mcp_error("Failed to move block", &e))?;

        let result =
            ScheduleResult::moved(schedule, inner_params.source, inner_params.destination);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn rename_block(&self, Parameters(params): Parameters<RenameBlock>) -> McpResult {
        debug!("rename_block: {:?}", params);

        let mut session = self.session.lock().await;
        let block = session
            .rename_block(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to rename block", &e))?
            .clone();

        let text = match session.current() {
            Some(schedule) => ScheduleResult::renamed(schedule, &block).to_string(),
            None => OperationStatus::success(format!("Renamed block {}", block.id)).to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// List all available prompts
    pub fn list_prompts(&self) -> ListPromptsResult {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        ListPromptsResult {
            next_cursor: None,
            prompts,
        }
    }

    /// Get a specific prompt by name and apply arguments
    pub fn get_prompt(&self, request: &GetPromptRequestParam) -> Result<GetPromptResult, ErrorData> {
        debug!("get_prompt: {}", request.name);

        let template = get_prompt_templates()
            .into_iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| ErrorData::invalid_params("Prompt not found", None))?;

        let arguments = request.arguments.as_ref();
        let text = template
            .render(
                |name| {
                    arguments
                        .and_then(|args| args.get(name))
                        .and_then(|value| value.as_str())
                },
                "None given",
            )
            .map_err(|message| ErrorData::invalid_params(message, None))?;

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(text),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handlers() -> McpHandlers {
        McpHandlers::new(
            Arc::new(Mutex::new(Session::new())),
            Arc::new(GenerateSchedule::default()),
        )
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| content.as_text().map(|text| text.text.clone()))
            .collect()
    }

    fn generate_params(json: &str) -> Parameters<Generate> {
        Parameters(serde_json::from_str(json).expect("Failed to parse params"))
    }

    #[tokio::test]
    async fn test_generate_fills_slots_from_defaults() {
        let handlers = handlers();
        let result = handlers
            .generate_schedule(generate_params(r#"{"break_count": 0}"#))
            .await
            .unwrap();

        let text = text_of(&result);
        // 53-minute slots put the lunch start inside slot 4
        assert!(text.starts_with("Generated 10 blocks"));
        assert!(text.contains("| 3 | 11:39 – 12:30 | Slot 4 | 4 |"));
        assert!(text.contains("| 4 | 12:30 – 13:30 | Lunch | 5 |"));
    }

    #[tokio::test]
    async fn test_show_before_generate() {
        let result = handlers().show_schedule().await.unwrap();
        assert!(text_of(&result).starts_with("Error: No schedule"));
    }

    #[tokio::test]
    async fn test_move_without_schedule_is_invalid_params() {
        let params = Parameters(
            serde_json::from_str::<MoveBlock>(r#"{"source": 0, "destination": 1}"#).unwrap(),
        );
        let err = handlers().move_block(params).await.unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_rename_after_generate() {
        let handlers = handlers();
        handlers
            .generate_schedule(generate_params("{}"))
            .await
            .unwrap();

        let params = Parameters(
            serde_json::from_str::<RenameBlock>(r#"{"id": 1, "label": "Inbox zero"}"#).unwrap(),
        );
        let result = handlers.rename_block(params).await.unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("Renamed block 1 to 'Inbox zero'"));
        assert!(text.contains("| 0 | 09:00 – 09:52 | Inbox zero | 1 |"));
    }

    #[test]
    fn test_prompts() {
        let handlers = handlers();
        let listed = handlers.list_prompts();
        assert_eq!(listed.prompts.len(), 1);
        assert_eq!(listed.prompts[0].name, "plan_day");
    }
}
