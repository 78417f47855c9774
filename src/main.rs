use std::io;
use std::process::ExitCode;

use clap::Parser;

use payday::cli::{handle_calculate, CalculateArgs};
use payday::config::PaydayPaths;
use payday::logging::init_tracing;
use payday::models::HalfMonth;
use payday::PaydayResult;

#[derive(Parser)]
#[command(
    name = "payday",
    version,
    about = "Semimonthly payday budget calculator",
    long_about = "Works out the budget for one half of the month from a config of \
                  paydays, charities, expenses and bills: what to give, what to set \
                  aside, which bills are due, and what is left over to save."
)]
struct Cli {
    #[command(flatten)]
    args: CalculateArgs,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> PaydayResult<()> {
    let paths = PaydayPaths::new()?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    handle_calculate(
        &cli.args,
        &paths,
        HalfMonth::current(),
        stdin.lock(),
        io::stderr(),
        &mut stdout.lock(),
    )
}
