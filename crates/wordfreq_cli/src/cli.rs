use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_URL: &str = "https://txt2html.sourceforge.net/sample.txt";

/// Count word frequencies of plain-text documents fetched over HTTP
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
pub struct Cli {
    /// URLs of the documents to fetch; several are processed concurrently
    #[arg(default_value = DEFAULT_URL)]
    pub urls: Vec<String>,

    /// Number of most frequent words to print (default: 20)
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Request timeout in seconds (default: 30)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum number of concurrent map/reduce tasks (default: number of cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Path to a RON configuration file (default: ./wordfreq.ron if present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report to this directory, or to this file when it ends in .json
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Log file location (default: ./wordfreq.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Also write log lines to the terminal
    #[arg(long)]
    pub log_to_terminal: bool,

    /// Print the complete word -> count mapping as JSON
    #[arg(long)]
    pub full: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sample_document() {
        let cli = Cli::try_parse_from(["wordfreq"]).unwrap();
        assert_eq!(cli.urls, vec![DEFAULT_URL.to_string()]);
        assert_eq!(cli.top, None);
        assert!(!cli.full);
    }

    #[test]
    fn accepts_several_urls_and_flags() {
        let cli = Cli::try_parse_from([
            "wordfreq",
            "https://a.example/x.txt",
            "https://b.example/y.txt",
            "-n",
            "5",
            "--timeout",
            "3",
            "--output",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.urls.len(), 2);
        assert_eq!(cli.top, Some(5));
        assert_eq!(cli.timeout, Some(3));
        assert_eq!(cli.output, Some(PathBuf::from("out")));
    }
}
