//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

impl PromptTemplate {
    /// Substitutes `{name}` placeholders. Optional arguments that were not
    /// supplied are replaced with `fallback`.
    pub fn render<'a, F>(&self, lookup: F, fallback: &str) -> Result<String, String>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut text = self.template.clone();
        for arg in &self.arguments {
            let placeholder = format!("{{{}}}", arg.name);
            match lookup(&arg.name) {
                Some(value) => text = text.replace(&placeholder, value),
                None if arg.required => {
                    return Err(format!("Required argument '{}' is missing", arg.name));
                }
                None => text = text.replace(&placeholder, fallback),
            }
        }
        Ok(text)
    }
}

/// Get predefined prompt templates for day planning
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "plan_day".to_string(),
        description: "Lay out a working day and assign tasks to its slots using dayplan's MCP tools"
            .to_string(),
        template: r#"You are planning a working day with dayplan's MCP tools.

# Tasks
{tasks}

# Constraints
{constraints}

# Step 1: Generate the Skeleton
Call `generate_schedule`. Pick `start` and `end` (HH:MM) from the constraints, or leave the defaults. Give either `slot_count` or `slot_length`, never both. Size the slots so each task gets at least one, and set `break_count`/`break_length` and the lunch fields to match the constraints.

# Step 2: Assign Tasks
For every slot, call `rename_block` with the block ID from the ID column and a short task label. Leave breaks and lunch as they are unless a constraint says otherwise.

# Step 3: Order by Priority
Use `move_block` to move important or energy-heavy work earlier. Positions are the Pos column (0-indexed); a move removes the block and reinserts it at the destination, then re-times every block from the window start.

# Step 4: Review
Call `show_schedule` and present the final agenda as a table of time ranges and labels. If a tool reports an overconstrained window, reduce breaks, lunch length or slot count and try again."#
            .to_string(),
        arguments: vec![
            PromptTemplateArg {
                name: "tasks".to_string(),
                description: "The tasks to fit into the day, one per line or comma-separated"
                    .to_string(),
                required: true,
            },
            PromptTemplateArg {
                name: "constraints".to_string(),
                description: "Working hours, lunch preferences, fixed appointments".to_string(),
                required: false,
            },
        ],
    }]
}
