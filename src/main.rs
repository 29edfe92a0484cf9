/* Reads a serialized tree (from a file, or standard input) and prints it. */

use clap::Parser;

use sprig::{collect_stats, pretty_error_message, read_tree_file, read_tree_stdin, write_printed_tree, PrintOptions};

use std::path::PathBuf;
use std::process::ExitCode;

/// Print the syntax tree handed over by the parser.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON tree to print. Reads standard input when absent.
    input: Option<PathBuf>,

    /// Written once per level of depth in front of each line.
    #[arg(long, default_value = "| ")]
    indent: String,

    /// Also report node count and depth on standard error.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let loaded = match &args.input {
        Some(path) => read_tree_file(path),
        None => read_tree_stdin(),
    };

    let file = match loaded {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{}", pretty_error_message(&err));
            return ExitCode::FAILURE;
        }
    };

    if args.stats {
        let stats = collect_stats(&file);
        eprintln!("{} nodes, max depth {}, {} namespace segments", stats.nodes, stats.max_depth, stats.namespaces);
    }

    let options = PrintOptions { indent: args.indent };
    if let Err(err) = write_printed_tree(&mut std::io::stdout().lock(), &file, &options) {
        eprintln!("Error occurred while writing output:\n    {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
