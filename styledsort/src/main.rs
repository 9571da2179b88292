use clap::{Parser, ValueEnum};
use log::{error, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;
use styledsort_lib::document::text_document::Language;
use styledsort_lib::files::{sort_files, write_outcome};
use styledsort_lib::style::comparator::SortPolicy;
use styledsort_lib::style::groups::GroupOptions;
use styledsort_lib::SortOptions;

const STYLEDSORT_INTRO: &str = r#"
     _         _          _                _
 ___| |_ _   _| | ___  __| |  ___  ___  _ __| |_
/ __| __| | | | |/ _ \/ _` | / __|/ _ \| '__| __|
\__ \ |_| |_| | |  __/ (_| | \__ \ (_) | |  | |_
|___/\__|\__, |_|\___|\__,_| |___/\___/|_|   \__|
         |___/

    Sorts the CSS rules inside styled-components template literals.
"#;

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Interpolations, then declarations, then pseudo selectors.
    Category,
    /// Alphabetical with punctuation last, interpolations pulled to the top.
    Lexicographic,
}

impl From<Policy> for SortPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Category => SortPolicy::Category,
            Policy::Lexicographic => SortPolicy::NormalizedLexicographic,
        }
    }
}

#[derive(Parser)]
#[command(name = "styledsort")]
#[command(about = "Sort embedded style rules in JavaScript and TypeScript sources")]
struct Args {
    /// Source files to sort.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Report files that would change without writing them.
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the sorted sources instead of writing them.
    #[arg(long)]
    stdout: bool,

    /// Line ordering.
    #[arg(long, value_enum, default_value_t = Policy::Category)]
    policy: Policy,

    /// First line index that gets a blank line after an interpolation group.
    #[arg(long, default_value_t = 1)]
    group_gap_from: usize,

    /// Language identifier for every input, e.g. `typescriptreact`.
    #[arg(long, value_parser = parse_language)]
    language: Option<Language>,

    /// Log every sorted block.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_language(id: &str) -> Result<Language, String> {
    Language::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = Language::ALL.iter().map(|language| language.id()).collect();
        format!("unsupported language `{}` (expected one of {})", id, known.join(", "))
    })
}

fn main() -> ExitCode {
    // parse the args given in terminal
    let args: Args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    if !args.stdout {
        eprintln!("{}", STYLEDSORT_INTRO);
    }

    let options = SortOptions {
        policy: args.policy.into(),
        groups: GroupOptions {
            interpolation_gap_from: args.group_gap_from,
        },
    };

    let mut failed = false;
    for result in sort_files(&args.inputs, &options, args.language) {
        match result {
            Ok(outcome) if args.stdout => print!("{}", outcome.formatted),
            Ok(outcome) if args.check => {
                if outcome.changed() {
                    println!("would sort {}", outcome.path.display());
                    failed = true;
                }
            }
            Ok(outcome) => match write_outcome(&outcome) {
                Ok(true) => println!("sorted {}", outcome.path.display()),
                Ok(false) => {}
                Err(e) => {
                    error!("{}", e);
                    failed = true;
                }
            },
            Err(e) => {
                error!("{}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
