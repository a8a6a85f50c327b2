use clap::Parser;
use tempconv::cli::{run_convert, Cli, Command};
use tempconv::config::Config;
use tempconv::logging::{init_stderr_tracing, init_tracing};
use tempconv::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Convert(args)) => {
            init_stderr_tracing();
            let stdout = std::io::stdout();
            run_convert(&args, &mut stdout.lock())?;
        }
        None => {
            init_tracing();
            let config = match cli.config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };
            runtime::run(&config)?;
        }
    }

    Ok(())
}
