use clap::Parser;
use golfseq::prelude::*;

/// Small tour of the lazy sequence engine over a piece of text.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Text to search.
    #[arg(default_value = "abbccbbdddbbb")]
    text: String,

    /// Substring to look for.
    #[arg(short, long, default_value = "bb")]
    pattern: String,

    /// Replacement for every occurrence of the pattern.
    #[arg(short, long, default_value = "xyz")]
    replacement: String,

    /// Size of the character combinations to list.
    #[arg(short, long, default_value_t = 2)]
    size: usize,

    /// How many squares to pull from the infinite sequence.
    #[arg(short, long, default_value_t = 8)]
    take: usize,
}

fn main() {
    let args = Args::parse();
    let text = GolfString::from_text(&args.text);

    let matches = text.find_substrings(args.pattern.as_str());
    println!("matches of {:?}: {:?}", args.pattern, matches.to_vec());

    let replaced = text.replace_substrings(args.pattern.as_str(), args.replacement.as_str(), None);
    println!("replaced: {replaced}");

    let words: Vec<String> = text
        .unique()
        .combinations(args.size)
        .iter()
        .map(|combination| combination.to_text())
        .collect();
    println!("combinations of {}: {}", args.size, words.join(" "));

    let squares = Sequence::integers(0).map(|x| x * x);
    println!("first squares: {:?}", squares.take(args.take).to_vec());
    println!("squares realized so far: {}", squares.realized());
}
