use taskgate_core::api::{AppContext, CliError};

use crate::commands::cli::TasksArgs;
use crate::http::{TaskSummary, TasksResponse};

pub fn handle_tasks(args: TasksArgs, ctx: &AppContext) -> Result<(), CliError> {
    let tasks: Vec<TaskSummary> = ctx.registry().iter().map(TaskSummary::from).collect();

    if args.json {
        let out = serde_json::to_string_pretty(&TasksResponse { tasks })
            .map_err(|e| CliError::Command(format!("failed to render task list: {}", e)))?;
        println!("{out}");
        return Ok(());
    }

    print!("{}", render_table(&tasks));
    Ok(())
}

fn render_table(tasks: &[TaskSummary]) -> String {
    let id_width = tasks
        .iter()
        .map(|t| t.task_id.len())
        .max()
        .unwrap_or(0)
        .max("TASK".len());
    let model_width = tasks
        .iter()
        .map(|t| t.model.len())
        .max()
        .unwrap_or(0)
        .max("MODEL".len());

    let mut out = format!(
        "{:<id_width$}  {:<model_width$}  FIELDS / PARAMETERS\n",
        "TASK", "MODEL"
    );
    for task in tasks {
        out.push_str(&format!(
            "{:<id_width$}  {:<model_width$}  {}\n",
            task.task_id,
            task.model,
            task.fields.join(", ")
        ));
        if !task.parameters.is_empty() {
            out.push_str(&format!(
                "{:<id_width$}  {:<model_width$}  params: {}\n",
                "",
                "",
                task.parameters.join(", ")
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgate_core::api::ProfileRegistry;

    #[test]
    fn test_render_table_lists_every_task() {
        let tasks: Vec<TaskSummary> = ProfileRegistry::builtin()
            .iter()
            .map(TaskSummary::from)
            .collect();
        let table = render_table(&tasks);

        assert!(table.starts_with("TASK"));
        for id in [
            "content-generator",
            "qa-chatbot",
            "problem-solver",
            "deepthink-assistant",
            "recipe-generator",
        ] {
            assert!(table.contains(id), "{id} missing");
        }
        assert!(table.contains("answer, reasoning"));
        assert!(table.contains("params: problemType, errorInput"));
    }
}
