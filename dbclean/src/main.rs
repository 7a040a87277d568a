use {
    std::{io::Write, process::ExitCode},
    anyhow::Result,
    clap::Parser,
    taskdb_common::{
        client::{ApiClient, ConnectionSettings},
        report::Report,
        utils::{init_logging, load_config},
    },
    crate::clean::clean,
};

pub mod clean;

/// Clean all data from database
#[derive(Parser, Debug)]
#[command(name = "dbclean", version)]
struct Args {
    /// API URL (default: localhost)
    #[arg(short = 'u', long = "url")]
    url: Option<String>,

    /// API port (default: 3000)
    #[arg(short, long)]
    port: Option<u16>,
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
    run_with(&settings, report).await
}

async fn run_with<W: Write>(settings: &ConnectionSettings, report: &mut Report<W>) -> Result<()> {
    let client = ApiClient::new(settings)?;
    clean(&client, report).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        mockito::{Matcher, Server},
        super::*,
    };

    #[tokio::test]
    async fn failed_probe_exits_with_error_and_hint() {
        let mut server = Server::new_async().await;
        let _mock = server.mock("GET", "/api/").with_status(502).create_async().await;
        let listings = server.mock("GET", Matcher::Regex(r"^/api/(tasks|users)".to_owned())).expect(0).create_async().await;

        let address = server.host_with_port();
        let (host, port) = address.rsplit_once(':').unwrap();
        let settings = ConnectionSettings::new(host, port.parse().unwrap());

        let mut report = Report::new(Vec::new());
        let result = run_with(&settings, &mut report).await;
        let code = report.conclude(result);

        listings.assert_async().await;
        assert_eq!(code, 1);
        let output = String::from_utf8(report.into_inner()).unwrap();
        assert!(output.contains(&format!("\nError: Cannot connect to API at {}\n", address)));
        assert!(output.contains("Make sure your server is running with 'npm start'"));
        assert!(!output.contains("Database cleaned!"));
    }

    #[test]
    fn connection_flags_are_optional() {
        let args = Args::try_parse_from(["dbclean"]).unwrap();

        assert!(args.url.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn parses_url_and_port() {
        let args = Args::try_parse_from(["dbclean", "--url", "api.internal", "-p", "8080"]).unwrap();

        assert_eq!(args.url.as_deref(), Some("api.internal"));
        assert_eq!(args.port, Some(8080));
    }

    #[test]
    fn rejects_counts() {
        assert!(Args::try_parse_from(["dbclean", "-n", "5"]).is_err());
    }
}
