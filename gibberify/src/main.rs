use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use gibberify::{
    convert_candidates, languages, read_message, DictFormat, DictionarySet, Engine,
    GibberifyConfig, Orientation, Reply, Session,
};

#[derive(Parser)]
#[command(name = "gibberify")]
#[command(about = "Translate text into constructed gibberish languages and back")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language to translate from
    #[arg(short = 'f', long = "from-lang")]
    from_lang: Option<String>,

    /// Language to translate into
    #[arg(short = 'l', long = "to-lang")]
    to_lang: Option<String>,

    /// Text to translate; `-` reads stdin, an existing file path reads the file
    #[arg(short, long, num_args = 1..)]
    message: Vec<String>,

    /// Start the interactive session
    #[arg(short, long)]
    interactive: bool,

    /// Seed for fallback syllable selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory containing dictionaries
    #[arg(long, global = true)]
    dicts: Option<PathBuf>,

    /// Configuration file (defaults to ./gibberify.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive REPL mode
    Repl,
    /// List available language pairs
    List,
    /// Build a dictionary pair from a JSON candidate table
    Convert {
        /// Candidate table (JSON object: syllable -> list of targets)
        #[arg(short, long)]
        input: PathBuf,
        /// Source language code
        #[arg(long)]
        from: String,
        /// Gibberish language code
        #[arg(long)]
        to: String,
        /// Output directory (defaults to the configured dictionary directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Format to write
        #[arg(long, value_enum, default_value_t = DictFormat::Bincode)]
        format: DictFormat,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dictionaries(dir: &Path) -> anyhow::Result<DictionarySet> {
    if dir.is_dir() {
        let dicts = DictionarySet::load_dir(dir)
            .with_context(|| format!("failed to load dictionaries from {}", dir.display()))?;
        if !dicts.is_empty() {
            return Ok(dicts);
        }
        warn!(dir = %dir.display(), "no dictionaries found, using demo dictionary");
    } else {
        warn!(dir = %dir.display(), "dictionary directory missing, using demo dictionary");
    }
    Ok(DictionarySet::demo())
}

fn run_once(
    engine: &Engine,
    dicts: &DictionarySet,
    config: &GibberifyConfig,
    message: &[String],
) -> anyhow::Result<()> {
    let text = read_message(message, io::stdin().lock())?;
    let output = engine.translate_pair(dicts, &config.lang_in, &config.lang_out, &text, None)?;
    println!("{}", output);
    Ok(())
}

fn run_repl(engine: &Engine, dicts: &DictionarySet, config: &GibberifyConfig) -> anyhow::Result<()> {
    let mut session = Session::new(
        config.lang_in.as_str(),
        config.lang_out.as_str(),
        engine.config().seed,
    );
    eprintln!(
        "gibberify: {} -> {}. Type text to translate, :lang <in> <out>, :seed <n|off>, :pairs, :quit.",
        languages::display_name(&session.lang_in),
        languages::display_name(&session.lang_out)
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", session.prompt());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        match session.handle_line(engine, dicts, &line?) {
            Reply::Output(text) => println!("{}", text),
            Reply::Notice(text) => eprintln!("{}", text),
            Reply::Empty => {}
            Reply::Quit => break,
        }
    }
    Ok(())
}

fn list_pairs(dicts: &DictionarySet) {
    for (lang_in, lang_out, orientation) in dicts.pairs() {
        let direction = match orientation {
            Orientation::Forward => "encode",
            Orientation::Reverse => "decode",
        };
        println!(
            "{}-{}\t{}\t{} -> {}",
            lang_in,
            lang_out,
            direction,
            languages::display_name(&lang_in),
            languages::display_name(&lang_out)
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = GibberifyConfig::resolve(cli.config.as_deref())?;
    if let Some(lang) = cli.from_lang {
        config.lang_in = lang;
    }
    if let Some(lang) = cli.to_lang {
        config.lang_out = lang;
    }
    if let Some(dir) = cli.dicts {
        config.dicts_dir = dir;
    }
    if cli.seed.is_some() {
        config.base_mut().seed = cli.seed;
    }

    let command = match cli.command {
        Some(Commands::Convert { input, from, to, out, format }) => {
            let out_dir = out.unwrap_or_else(|| config.dicts_dir.clone());
            let (forward, reverse) =
                convert_candidates(&input, &from, &to, &out_dir, format, config.base().seed)?;
            println!("wrote {}", forward.display());
            println!("wrote {}", reverse.display());
            return Ok(());
        }
        command => command,
    };

    let dicts = load_dictionaries(&config.dicts_dir)?;
    let engine = Engine::new(config.base().clone());

    match command {
        Some(Commands::List) => {
            list_pairs(&dicts);
            Ok(())
        }
        Some(Commands::Repl) => run_repl(&engine, &dicts, &config),
        _ if cli.interactive => run_repl(&engine, &dicts, &config),
        _ if !cli.message.is_empty() => run_once(&engine, &dicts, &config, &cli.message),
        // No message: translate stdin
        _ => run_once(&engine, &dicts, &config, &["-".to_string()]),
    }
}
