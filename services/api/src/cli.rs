use crate::reports::{
    run_bookings_report, run_search, run_validate, BookingsArgs, SearchArgs, ValidateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use homestay::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Homestay",
    about = "Classify bookings, search listings and check stay requests from the command line",
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
    /// Group a guest's bookings into upcoming, current and past stays
    Bookings(BookingsArgs),
    /// Filter and sort a listing catalog
    Search(SearchArgs),
    /// Check a check-in/check-out pair and quote the stay
    Validate(ValidateArgs),
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
        Command::Bookings(args) => run_bookings_report(args),
        Command::Search(args) => run_search(args),
        Command::Validate(args) => run_validate(args),
    }
}
