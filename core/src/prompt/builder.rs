use std::collections::BTreeMap;

use serde::Serialize;

use super::template::render;
use crate::task::{resolve_parameters, FileAttachment, TaskProfile, TaskRequest};

pub const VAR_PRIMARY_INPUT: &str = "primaryInput";
pub const VAR_CONVERSATION_CONTEXT: &str = "conversationContext";
pub const VAR_KNOWLEDGE_BASE: &str = "knowledgeBase";
pub const VAR_SCHEMA: &str = "schema";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Renders knowledge files as `---\nFile: <name>\n<content>\n` blocks joined by a blank line.
pub fn render_knowledge_base(files: &[FileAttachment]) -> String {
    files
        .iter()
        .map(|file| format!("---\nFile: {}\n{}\n", file.name, file.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pure templating over a profile. Empty inputs render as empty sections.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(profile: &TaskProfile, request: &TaskRequest) -> PromptPair {
        let params = resolve_parameters(profile.parameter_spec, &request.parameters);
        let knowledge_base = render_knowledge_base(&request.files);
        let schema = profile.output_schema.describe();
        let context = request.conversation_context.as_deref().unwrap_or_default();

        let mut vars: BTreeMap<&str, &str> = params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        vars.insert(VAR_PRIMARY_INPUT, request.primary_input.as_str());
        vars.insert(VAR_CONVERSATION_CONTEXT, context);
        vars.insert(VAR_KNOWLEDGE_BASE, knowledge_base.as_str());
        vars.insert(VAR_SCHEMA, schema.as_str());

        let lookup = |key: &str| vars.get(key).copied();
        let pair = PromptPair {
            system: render(profile.system_prompt_template, lookup).into_owned(),
            user: render(profile.user_prompt_template, lookup).into_owned(),
        };

        tracing::debug!(
            target: "taskgate.prompt",
            stage = "prompt.build",
            task_id = %profile.task_id,
            params = params.len(),
            files = request.files.len(),
            system_len = pair.system.len(),
            user_len = pair.user.len()
        );

        pair
    }
}
