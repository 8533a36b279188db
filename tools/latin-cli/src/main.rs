use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use latin_morph::MemoryProvider;
use latin_protocol::Lexicon;
use latin_solver::{EntryPoint, Translator, TranslatorConfig};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Latin clause to English rendering")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON lexicon to an rkyv archive
    Compile(CompileArgs),
    /// Translate Latin clauses against a lexicon
    Translate(TranslateArgs),
}

#[derive(Args)]
struct CompileArgs {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

#[derive(Args)]
struct TranslateArgs {
    /// Lexicon file: `.json`, or an archive produced by `compile`
    #[arg(short, long, value_name = "FILE")]
    lexicon: PathBuf,

    /// Translator configuration (JSON). Flags below override it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Which provider capability resolves the words
    #[arg(long, value_enum)]
    entry: Option<EntryArg>,

    /// Skip preposition agreement
    #[arg(long)]
    no_prune: bool,

    /// Print roles and post-pruning readings as JSON
    #[arg(long)]
    explain: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Stop at the first sentence that cannot be resolved
    #[arg(long)]
    strict: bool,

    /// Latin text to translate. If omitted, reads one clause per line from stdin.
    text: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum EntryArg {
    Word,
    Sentence,
}

impl From<EntryArg> for EntryPoint {
    fn from(arg: EntryArg) -> Self {
        match arg {
            EntryArg::Word => EntryPoint::Word,
            EntryArg::Sentence => EntryPoint::Sentence,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compile(args) => compile(&args),
        Command::Translate(args) => translate(&args),
    }
}

fn compile(args: &CompileArgs) -> anyhow::Result<()> {
    println!("📖 Reading JSON from {:?}...", args.input);
    let input_data = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let lexicon: Lexicon = serde_json::from_str(&input_data).context("parsing lexicon JSON")?;
    let groups: usize = lexicon.entries.iter().map(|e| e.groups.len()).sum();
    println!(
        "⚙️  Compiling lexicon version {} with {} surfaces and {} analysis groups...",
        lexicon.version,
        lexicon.entries.len(),
        groups
    );

    let bytes = archive(&lexicon)?;
    fs::write(&args.output, &bytes).with_context(|| format!("writing {}", args.output.display()))?;

    println!("✅ Success! {} bytes written to {:?}", bytes.len(), args.output);
    Ok(())
}

fn archive(lexicon: &Lexicon) -> anyhow::Result<Vec<u8>> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| anyhow!("failed to archive lexicon: {e:?}"))?;
    Ok(serializer.into_serializer().into_inner().to_vec())
}

fn load_provider(path: &Path) -> anyhow::Result<MemoryProvider> {
    let is_json = path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    let provider = if is_json {
        let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        MemoryProvider::from_json(&json)?
    } else {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        MemoryProvider::from_archive(&bytes)?
    };
    Ok(provider)
}

fn load_config(args: &TranslateArgs) -> anyhow::Result<TranslatorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => TranslatorConfig::default(),
    };

    if let Some(entry) = args.entry {
        config.entry_point = entry.into();
    }
    if args.no_prune {
        config.prune_variants = false;
    }
    Ok(config)
}

fn translate(args: &TranslateArgs) -> anyhow::Result<()> {
    let provider = load_provider(&args.lexicon)?;
    let config = load_config(args)?;
    let translator = Translator::new(&provider, config);

    let lines: Vec<String> = match &args.text {
        Some(text) => vec![text.clone()],
        None => io::stdin()
            .lock()
            .lines()
            .collect::<Result<_, _>>()
            .context("reading stdin")?,
    };

    let mut failed = 0;
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        match translator.translate(line) {
            Ok(translation) if args.explain => {
                let json = if args.pretty {
                    serde_json::to_string_pretty(&translation)?
                } else {
                    serde_json::to_string(&translation)?
                };
                println!("{json}");
            }
            Ok(translation) => println!("{}", translation.text),
            Err(err) if args.strict => {
                return Err(err).with_context(|| format!("translating '{line}'"));
            }
            Err(err) => {
                // Batch mode: report and move on to the next clause
                warn!(position = ?err.position(), "skipping '{line}': {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("{failed} clause(s) could not be translated");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use latin_solver::TranslateError;

    const SAMPLE: &str = include_str!("../../../data/lexicon.json");

    #[test]
    fn test_sample_lexicon_translates() {
        let provider = MemoryProvider::from_json(SAMPLE).unwrap();
        let translator = Translator::new(&provider, TranslatorConfig::default());

        assert_eq!(translator.translate("nos sumus milites audaces").unwrap().text, "we are bold soldiers");
        assert_eq!(translator.translate("Puella bona rosam amat.").unwrap().text, "good girl loves rose");
        assert_eq!(translator.translate("cum puella ambulat").unwrap().text, "walks");
    }

    #[test]
    fn test_compiled_archive_loads() {
        let lexicon: Lexicon = serde_json::from_str(SAMPLE).unwrap();
        let bytes = archive(&lexicon).unwrap();

        let provider = MemoryProvider::from_archive(&bytes).unwrap();
        assert_eq!(provider.version(), lexicon.version);

        let translator = Translator::new(&provider, TranslatorConfig::default());
        assert!(matches!(
            translator.translate("nos sumus lupi"),
            Err(TranslateError::Word { position: 2, .. })
        ));
    }
}
