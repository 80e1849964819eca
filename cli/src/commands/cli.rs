use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "taskgate",
    version,
    about = "Task-oriented gateway in front of an LLM completion API"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Bind address; defaults to `[http_server].host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port; defaults to `[http_server].port`.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RunArgs {
    /// Task id, e.g. `qa-chatbot`. See `taskgate tasks`.
    #[arg(long)]
    pub task: String,

    #[arg(long, default_value = "")]
    pub input: String,

    /// Task parameter as KEY=VALUE. VALUE is read as JSON when it parses, else as text.
    /// Can be specified multiple times.
    #[arg(long = "param", action = clap::ArgAction::Append)]
    pub params: Vec<String>,

    /// Knowledge file to attach. Can be specified multiple times.
    #[arg(long = "file", action = clap::ArgAction::Append)]
    pub files: Vec<String>,

    #[arg(long)]
    pub context: Option<String>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TasksArgs {
    /// Print the same JSON as `GET /api/tasks`.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Run one task and print the JSON result.
    Run(RunArgs),
    /// List task profiles.
    Tasks(TasksArgs),
}
