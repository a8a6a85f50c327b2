use crate::conversion::{convert_text, Scale, NO_VALUE};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tempconv", version, about = "Celsius / Fahrenheit converter")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert one value and print the result
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Temperature text to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Scale the value is given in
    #[arg(long, value_enum, default_value_t = ScaleArg::Celsius)]
    pub from: ScaleArg,

    /// Print a JSON object instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// `--from` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    Celsius,
    Fahrenheit,
}

impl From<ScaleArg> for Scale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Celsius => Scale::Celsius,
            ScaleArg::Fahrenheit => Scale::Fahrenheit,
        }
    }
}

#[derive(Debug, Serialize)]
struct ConversionReport<'a> {
    input: &'a str,
    from: Scale,
    to: Scale,
    result: Option<String>,
}

/// Convert `args.value` and write the outcome to `out`.
///
/// Invalid input is not an error: plain output prints an empty line,
/// JSON output reports `"result": null`.
pub fn run_convert(args: &ConvertArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let from = Scale::from(args.from);
    let result = match convert_text(&args.value, from) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::debug!(error = %err, "input is not a number");
            None
        }
    };

    if args.json {
        let report = ConversionReport {
            input: &args.value,
            from,
            to: from.counterpart(),
            result,
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", result.as_deref().unwrap_or(NO_VALUE))?;
    }
    Ok(())
}
