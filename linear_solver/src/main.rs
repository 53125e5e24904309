use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use linear_solver::matrix_file;

/// Solves a linear system read from a file and writes the result.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Augmented matrix to solve
    #[arg(long = "in", value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the solution
    #[arg(long = "out", value_name = "OUTPUT")]
    pub output: PathBuf,
}

// single-dash `-in`/`-out` spellings map onto clap's long flags
fn normalize_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-in") => OsString::from("--in"),
            Some("-out") => OsString::from("--out"),
            _ => arg,
        })
        .collect()
}

fn run_solver(args: &Args) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut system = matrix_file::parse_system(&text)
        .with_context(|| format!("parsing {}", args.input.display()))?;
    log::info!(
        "{} equation(s) in {} variable(s)",
        system.equation_count(),
        system.variable_count()
    );
    let solution = system.solve().context("solving linear system")?;
    let rendered = matrix_file::render_solution(&solution);
    log::info!("result:\n{}", rendered.trim_end());
    fs::write(&args.output, &rendered)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("results saved to {}", args.output.display());
    Ok(())
}

fn main() {
    let args = Args::parse_from(normalize_flags(std::env::args_os()));
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_solver(&args) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_dash_flags_are_accepted() {
        let raw = ["solver", "-in", "a.txt", "-out", "b.txt"].map(OsString::from);
        let args = Args::try_parse_from(normalize_flags(raw)).unwrap();
        assert_eq!(args.input, PathBuf::from("a.txt"));
        assert_eq!(args.output, PathBuf::from("b.txt"));
    }

    #[test]
    fn double_dash_flags_still_work() {
        let raw = ["solver", "--out", "b.txt", "--in", "a.txt"].map(OsString::from);
        let args = Args::try_parse_from(normalize_flags(raw)).unwrap();
        assert_eq!(args.input, PathBuf::from("a.txt"));
    }

    #[test]
    fn other_shapes_are_rejected() {
        for raw in [
            vec!["solver"],
            vec!["solver", "-in", "a.txt"],
            vec!["solver", "-in", "a.txt", "-out"],
            vec!["solver", "a.txt", "b.txt"],
            vec!["solver", "-in", "a.txt", "-out", "b.txt", "extra"],
        ] {
            let raw = raw.into_iter().map(OsString::from);
            assert!(Args::try_parse_from(normalize_flags(raw)).is_err());
        }
    }
}
