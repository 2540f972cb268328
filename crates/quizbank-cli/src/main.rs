use clap::Parser;
use quizbank_cli::{CliArgs, QuizbankCli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let cli = QuizbankCli::from_args("quizbank", &args)?;
    cli.run(args).await?;
    Ok(())
}
