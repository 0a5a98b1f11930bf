use std::{
    fmt::{Display, Write as _},
    io::{self, BufRead, Write},
    process::exit,
};

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use dobdecode::{decode, Error, ValidDate};

const PROMPT: &str = "enter the dob(mmddyyyy): ";

/// Decode a date of birth typed as MMDDYYYY
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// chrono strftime format for a valid date, e.g. "%Y-%m-%d"
    #[arg(short, long)]
    format: Option<String>,

    /// Date to decode; prompts on stdin when omitted
    dob: Option<String>,
}

fn unwrap_or_report<T, E: Display>(arg: Result<T, E>) -> T {
    match arg {
        Ok(value) => value,
        Err(msg) => {
            eprintln!("{}", msg);
            exit(1);
        }
    }
}

fn read_dob(
    dob: Option<String>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<String> {
    if let Some(dob) = dob {
        return Ok(dob);
    }

    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Unable to read from stdin")?;
    if read == 0 {
        bail!("No date entered");
    }

    Ok(line)
}

fn render(date: &ValidDate, format: Option<&str>) -> anyhow::Result<String> {
    let Some(format) = format else {
        return Ok(date.to_string());
    };

    let mut out = String::new();
    write!(out, "{}", date.to_chrono()?.format(format))
        .map_err(|_| anyhow!("Invalid format string: {format:?}"))?;

    Ok(out)
}

fn run(args: Args, mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    let entry = read_dob(args.dob, &mut input, &mut output)?;

    match decode(entry) {
        Ok(date) => writeln!(output, "{}", render(&date, args.format.as_deref())?)?,
        // an impossible date is an answer, not a failure
        Err(err @ Error::DayOutOfRange { .. }) => writeln!(output, "{err}")?,
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    unwrap_or_report(run(args, io::stdin().lock(), io::stdout().lock()));
}
