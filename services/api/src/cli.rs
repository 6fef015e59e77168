use crate::demo::{run_demo, run_track, DemoArgs, TrackArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dog_licensing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Franklin County Dog License Portal",
    about = "Run and demonstrate the Franklin County dog license portal from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Walk a sample application through the wizard end to end
    Demo(DemoArgs),
    /// Look up a submitted application by id
    Track(TrackArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
        Command::Track(args) => run_track(args),
    }
}
