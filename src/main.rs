use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::LevelFilter;

use patex::regex::Regex;
use patex::{ExtractRc, Fragment, Kind, Pattern, extract_kinds_from};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract typed values using a pattern with jokers
    Extract {
        /// Pattern text, e.g. "id=$ name=$"
        pattern: String,

        /// Comma-separated value kinds: char, str, uint, int, bool, tail
        #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
        types: Vec<String>,

        /// Joker character
        #[arg(short, long, default_value_t = patex::DEFAULT_JOKER)]
        joker: char,

        /// Input file (stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<String>,
    },
    /// Match a {members:min:max} expression
    Search {
        /// Expression, e.g. "{a-z'_':1:}"
        regex: String,

        /// Scan forward for the first match instead of matching at the start
        #[arg(short, long)]
        scan: bool,

        /// Input file (stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    let mut contents = match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    if contents.ends_with('\n') {
        contents.pop();
        if contents.ends_with('\r') {
            contents.pop();
        }
    }
    Ok(contents)
}

fn parse_kinds(names: &[String]) -> Result<Vec<Kind>> {
    names
        .iter()
        .map(|name| match Kind::from_name(name.trim()) {
            Some(kind) => Ok(kind),
            None => bail!(
                "Unknown value kind '{}', expected one of: {}.",
                name.trim(),
                Kind::names().sorted().join(", ")
            ),
        })
        .collect()
}

fn run_extract(pattern: &str, types: &[String], joker: char, input: Option<&str>) -> Result<bool> {
    let kinds = parse_kinds(types)?;
    log::debug!("kinds: {}", kinds.iter().map(Kind::name).join(", "));
    let text = read_input(input)?;
    let chars: Vec<char> = text.chars().collect();
    let (rc, values) =
        extract_kinds_from(Fragment::new(&chars), Pattern::with_joker(pattern, joker), &kinds);
    if rc != ExtractRc::Ok {
        eprintln!("{rc}.");
        return Ok(false);
    }
    for value in values.iter().flatten() {
        println!("{}: {}", value.kind().name(), value);
    }
    Ok(true)
}

fn run_search(regex: &str, scan: bool, input: Option<&str>) -> Result<bool> {
    let text = read_input(input)?;
    let chars: Vec<char> = text.chars().collect();
    let result = Regex::parse(regex).and_then(|rx| {
        let input = Fragment::new(&chars);
        if scan { rx.find(input) } else { rx.match_at(input) }
    });
    match result {
        Ok(m) => {
            println!("{}", m.text);
            println!("offset={} len={} repetitions={}", m.offset, m.len, m.repetitions);
            Ok(true)
        }
        Err(rc) => {
            eprintln!("{rc}.");
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = match &args.command {
        Command::Extract {
            pattern,
            types,
            joker,
            input,
        } => run_extract(pattern, types, *joker, input.as_deref()),
        Command::Search { regex, scan, input } => run_search(regex, *scan, input.as_deref()),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_resolve_with_aliases() {
        let names = ["int".to_string(), " str".to_string(), "REST".to_string()];
        let kinds = parse_kinds(&names).unwrap();
        assert_eq!(kinds, vec![Kind::Signed, Kind::Str, Kind::Tail]);
    }

    #[test]
    fn unknown_kind_lists_the_accepted_names() {
        let err = parse_kinds(&["float".to_string()]).unwrap_err().to_string();
        assert_eq!(
            err,
            "Unknown value kind 'float', expected one of: \
             bool, char, i64, int, rest, str, string, tail, u64, uint."
        );
    }
}
