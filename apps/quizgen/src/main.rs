use clap::Parser;
use quizgen::cli::Cli;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    quizgen::run(cli)
}
