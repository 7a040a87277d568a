use {
    std::{io::Write, process::ExitCode},
    anyhow::Result,
    clap::Parser,
    taskdb_common::{
        client::{ApiClient, ConnectionSettings},
        report::Report,
        utils::{init_logging, load_config},
    },
    crate::populate::populate,
};

pub mod populate;

/// Populate database with users and tasks
#[derive(Parser, Debug)]
#[command(name = "dbfill", version)]
struct Args {
    /// API URL (default: localhost)
    #[arg(short = 'u', long = "url")]
    url: Option<String>,

    /// API port (default: 3000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Number of users
    #[arg(short = 'n', long, default_value_t = 20)]
    users: usize,

    /// Number of tasks
    #[arg(short, long, default_value_t = 100)]
    tasks: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let mut report = Report::stdout();
    let result = run(args, &mut report).await;
    ExitCode::from(report.conclude(result))
}

async fn run<W: Write>(args: Args, report: &mut Report<W>) -> Result<()> {
    let settings = ConnectionSettings::from_config(&load_config()?)?
        .with_overrides(args.url, args.port);
    run_with(&settings, args.users, args.tasks, report).await
}

async fn run_with<W: Write>(settings: &ConnectionSettings, users: usize, tasks: usize, report: &mut Report<W>) -> Result<()> {
    let client = ApiClient::new(settings)?;
    populate(&client, users, tasks, &mut rand::thread_rng(), report).await?;
    Ok(())
}
