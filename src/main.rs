mod cmd;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "budgetbuddy", version, about = "Track income and expenses")]
struct Cli {
    /// Currency symbol used when printing amounts
    #[arg(long, global = true, default_value = "$")]
    symbol: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show income, expense and unused totals
    Summary(cmd::summary::SummaryCommand),
    /// List incomes and expenses with their positions
    List(cmd::list::ListCommand),
    /// Show expense distribution and income usage shares
    Chart(cmd::chart::ChartCommand),
    /// Run a script of add/remove/report actions against one ledger
    Session(cmd::session::SessionCommand),
    /// Print the expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Summary(c) => c.exec(&cli.symbol),
        Command::List(c) => c.exec(&cli.symbol),
        Command::Chart(c) => c.exec(&cli.symbol),
        Command::Session(c) => c.exec(&cli.symbol),
        Command::Schema(c) => c.exec(),
    }
}
