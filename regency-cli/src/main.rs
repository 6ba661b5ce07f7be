use std::process::ExitCode;

use clap::Parser;
use log::debug;

use regency_core::{Dictionary, Generator, GeneratorSettings};

/// Generate a random string from a regex-like pattern.
///
/// `\d` digit, `\w` word character, `\y` dictionary word,
/// `[a-z|0-9]` one character from a range, anything else is literal.
#[derive(Parser, Debug)]
#[command(name = "regency", author, version, about, long_about = None)]
struct Args {
    /// Pattern to generate from
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Print the compiled rules instead of generating
    #[arg(short = 'x', long)]
    dump: bool,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Word list used by `\y` (one word per line)
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<String>,

    /// Maximum candidates a single range may expand to
    #[arg(long, value_name = "N")]
    max_candidates: Option<usize>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Use the compiled-in words unless a file is given
    let dictionary = match &args.dictionary {
        Some(path) => Dictionary::load(path)?,
        None => Dictionary::builtin(),
    };
    debug!("dictionary has {} word(s)", dictionary.len());

    let mut settings = GeneratorSettings::default();
    settings.seed = args.seed;
    if let Some(max) = args.max_candidates {
        settings.set_max_candidates(max)?;
    }

    let mut rng = settings.random_source();
    let generator = Generator::new(dictionary).with_settings(settings);

    let rules = generator.compile(&args.pattern)?;
    if args.dump {
        print!("{rules}");
        return Ok(());
    }

    println!("{}", generator.generate_rules(&rules, &mut rng)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("regency: {e}");
            ExitCode::FAILURE
        }
    }
}
