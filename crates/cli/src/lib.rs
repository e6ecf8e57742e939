mod lexicon;
mod tree;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "deptree",
    version,
    about = "Normalize dependency parses into mergeable semantic trees",
    long_about = "deptree turns the indexed dependencies and word annotations of a statistical \
                  parser into a rooted tree, collapses quotations and named entities into single \
                  nodes, and rewrites nouns and verbs into normalized noun lemmas."
)]
pub struct Cli {
    /// Pipeline configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mirror log output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and normalize the tree of every sentence in a parser result
    #[command(
        long_about = "Reads parser output (a document with a `sentences` array, or a single \
                            sentence object) and prints one rendering per sentence. Use `-` to \
                            read from stdin."
    )]
    Tree {
        /// Parser output in JSON
        #[arg(value_name = "PARSE_JSON")]
        input: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = Format::Dot)]
        format: Format,

        /// Skip morphological normalization
        #[arg(long)]
        no_normalize: bool,

        /// Skip quotation and named-entity merging
        #[arg(long)]
        no_merge: bool,
    },
    /// Lemmatize a word with the configured lexicon
    Lemma {
        word: String,

        /// Part of speech: n, v, a or r
        #[arg(long, short, default_value = "n")]
        pos: String,
    },
    /// Show the noun derived from a verb lemma, with the ranked candidates
    Nounify { verb: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Dot,
    Json,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = deptree_runtime::init_logging("cli", cli.verbose);

    let config = match &cli.config {
        Some(path) => deptree_core::PipelineConfig::load(path)?,
        None => deptree_core::PipelineConfig::default(),
    };

    match cli.command {
        Commands::Tree {
            input,
            format,
            no_normalize,
            no_merge,
        } => {
            let mut config = config;
            if no_normalize {
                config.normalize = false;
            }
            if no_merge {
                config.merge_quotations = false;
                config.merge_named_entities = false;
            }
            tree::run(&input, format, &config)
        }
        Commands::Lemma { word, pos } => lexicon::lemma(&word, &pos, &config),
        Commands::Nounify { verb } => lexicon::nounify(&verb, &config),
    }
}
