use clap::Parser;

use pr_title_check::cli::orchestration::{run_check, CheckArgs};
use pr_title_check::ui;

#[derive(clap::Parser)]
#[command(
    name = "pr-title-check",
    version,
    about = "Check that a pull request title follows the conventional commit format"
)]
struct Args {
    #[arg(help = "Pull request title")]
    pr_title: String,

    #[arg(long, help = "Regex pattern to match PR title")]
    pattern: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() {
    // Logs go to stderr so the result line on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let outcome = match run_check(CheckArgs {
        title: args.pr_title,
        pattern: args.pattern,
        config_path: args.config,
    }) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    ui::display_outcome(&outcome);
    if !outcome.matched {
        std::process::exit(1);
    }
}
