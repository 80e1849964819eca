use std::collections::BTreeMap;

use super::params::ParamSpec;
use super::profiles::{ProfileDef, BUILTIN};
use super::schema::OutputSchema;

/// Static description of one supported operation. Built once at startup, then shared read-only.
#[derive(Debug, Clone)]
pub struct TaskProfile {
    pub task_id: &'static str,
    pub title: &'static str,
    pub upstream_model_id: String,
    pub system_prompt_template: &'static str,
    pub user_prompt_template: &'static str,
    pub output_schema: OutputSchema,
    pub parameter_spec: &'static [ParamSpec],
}

impl TaskProfile {
    fn from_def(def: &ProfileDef) -> Self {
        Self {
            task_id: def.task_id,
            title: def.title,
            upstream_model_id: def.model.to_string(),
            system_prompt_template: def.system_template,
            user_prompt_template: def.user_template,
            output_schema: def.schema,
            parameter_spec: def.params,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<TaskProfile>,
}

impl ProfileRegistry {
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN.iter().map(TaskProfile::from_def).collect(),
        }
    }

    /// Applies `[models]` overrides. Unknown task ids are reported and skipped.
    pub fn with_model_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (task_id, model) in overrides {
            let model = model.trim();
            if model.is_empty() {
                continue;
            }
            match self.profiles.iter_mut().find(|p| p.task_id == task_id.as_str()) {
                Some(profile) => {
                    tracing::debug!(
                        target: "taskgate.gateway",
                        task_id = %task_id,
                        model = %model,
                        "model override applied"
                    );
                    profile.upstream_model_id = model.to_string();
                }
                None => tracing::warn!(
                    target: "taskgate.gateway",
                    task_id = %task_id,
                    "ignoring model override for unknown task"
                ),
            }
        }
        self
    }

    pub fn get(&self, task_id: &str) -> Option<&TaskProfile> {
        self.profiles.iter().find(|p| p.task_id == task_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskProfile> {
        self.profiles.iter()
    }

    pub fn task_ids(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.task_id).collect()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::profiles::{
        CONTENT_GENERATOR, DEEPTHINK_ASSISTANT, MODEL_GEMINI_FLASH_THINKING, MODEL_GPT_4O_MINI,
        PROBLEM_SOLVER, QA_CHATBOT, RECIPE_GENERATOR,
    };
    use crate::task::schema::{FallbackPlan, FieldKind};

    #[test]
    fn test_builtin_has_five_profiles() {
        let registry = ProfileRegistry::builtin();
        assert_eq!(
            registry.task_ids(),
            vec![
                CONTENT_GENERATOR,
                QA_CHATBOT,
                PROBLEM_SOLVER,
                DEEPTHINK_ASSISTANT,
                RECIPE_GENERATOR
            ]
        );
    }

    #[test]
    fn test_primary_field_is_declared_in_every_schema() {
        for profile in ProfileRegistry::builtin().iter() {
            let schema = &profile.output_schema;
            let primary = schema
                .field(schema.primary)
                .unwrap_or_else(|| panic!("{} primary missing", profile.task_id));
            match schema.fallback {
                FallbackPlan::RawIntoPrimary => assert_eq!(primary.kind, FieldKind::Text),
                FallbackPlan::PlaceholderRecord { raw_field, .. } => {
                    assert!(matches!(primary.kind, FieldKind::Records(_)));
                    assert_eq!(schema.field(raw_field).unwrap().kind, FieldKind::Text);
                }
            }
        }
    }

    #[test]
    fn test_models_per_task() {
        let registry = ProfileRegistry::builtin();
        assert_eq!(
            registry.get(QA_CHATBOT).unwrap().upstream_model_id,
            MODEL_GPT_4O_MINI
        );
        assert_eq!(
            registry.get(RECIPE_GENERATOR).unwrap().upstream_model_id,
            MODEL_GEMINI_FLASH_THINKING
        );
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_model_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert(QA_CHATBOT.to_string(), "openai/gpt-4o".to_string());
        overrides.insert("unknown-task".to_string(), "x/y".to_string());
        overrides.insert(PROBLEM_SOLVER.to_string(), "  ".to_string());

        let registry = ProfileRegistry::builtin().with_model_overrides(&overrides);
        assert_eq!(
            registry.get(QA_CHATBOT).unwrap().upstream_model_id,
            "openai/gpt-4o"
        );
        assert_eq!(
            registry.get(PROBLEM_SOLVER).unwrap().upstream_model_id,
            MODEL_GEMINI_FLASH_THINKING
        );
    }
}
