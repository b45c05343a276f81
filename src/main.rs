use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tf_idf_label_matcher::{
    config::{DEFAULT_LABEL_COLUMN, DEFAULT_MAX_VOCABULARY_SIZE, DEFAULT_TEXT_COLUMN, DEFAULT_TOP_N},
    loader::load_csv_path,
    LabelMatcher, LabelMetadata, MatchError, MatcherConfig, MbtiMetadata, ResultSet, StopWords,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "label-match", about = "Find the labels whose documents read most like your text")]
struct Args {
    /// CSV corpus file
    #[arg(short, long, env = "LABEL_MATCH_CORPUS")]
    corpus: PathBuf,

    /// Column holding the label
    #[arg(long, default_value = DEFAULT_LABEL_COLUMN)]
    label_column: String,

    /// Column holding the document text
    #[arg(long, default_value = DEFAULT_TEXT_COLUMN)]
    text_column: String,

    /// Number of distinct labels to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Vocabulary cap
    #[arg(long, default_value_t = DEFAULT_MAX_VOCABULARY_SIZE)]
    max_vocabulary: usize,

    /// Keep stop words in the vocabulary
    #[arg(long, default_value_t = false)]
    keep_stop_words: bool,

    /// Query text; reads one query per stdin line when omitted
    query: Option<String>,
}

fn print_result(result: &ResultSet, metadata: &impl LabelMetadata) {
    let mut entries = result.iter();
    let Some(best) = entries.next() else {
        println!("No match found.");
        return;
    };
    let info = metadata.describe(&best.label);
    println!("Most similar: {} ({:.4})", best.label, best.score);
    println!("  {}", info.expansion);
    if !info.description.is_empty() {
        println!("  {}", info.description);
    }

    let others: Vec<_> = entries.collect();
    if !others.is_empty() {
        println!("Other possible matches:");
        for entry in others {
            let info = metadata.describe(&entry.label);
            println!("  {} ({:.4}) - {}", entry.label, entry.score, info.expansion);
        }
    }
}

fn answer(matcher: &LabelMatcher, text: &str, top_n: usize) -> anyhow::Result<()> {
    match matcher.find_similar(text, top_n) {
        Ok(result) => print_result(&result, &MbtiMetadata),
        Err(MatchError::EmptyQuery) => eprintln!("Please enter a sentence to search for."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tf_idf_label_matcher=info")),
        )
        .init();

    let args = Args::parse();

    let stop_words = if args.keep_stop_words {
        StopWords::none()
    } else {
        StopWords::english()
    };
    let config = MatcherConfig::default()
        .with_max_vocabulary_size(args.max_vocabulary)
        .with_stop_words(stop_words)
        .with_top_n(args.top_n);

    let corpus = load_csv_path(&args.corpus, &args.label_column, &args.text_column)
        .with_context(|| format!("failed to load corpus {}", args.corpus.display()))?;
    let matcher: LabelMatcher = LabelMatcher::build(&corpus, config).context("failed to build model")?;

    if let Some(query) = args.query.as_deref() {
        return answer(&matcher, query, args.top_n);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        answer(&matcher, line.trim_end_matches(['\r', '\n']), args.top_n)?;
    }
    Ok(())
}
