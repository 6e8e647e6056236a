use std::fmt::Write;

use wordfreq_engine::{PipelineRun, RunOutcome};

/// Ranked plain-text listing of the `top_n` most frequent words of a run.
pub fn render_top(run: &PipelineRun, top_n: usize) -> String {
    let mut out = String::new();
    if let RunOutcome::AcquisitionFailed(err) = &run.outcome {
        let _ = writeln!(out, "{}: no words (fetch failed: {})", run.url, err);
        return out;
    }

    let frequencies = &run.frequencies;
    let _ = writeln!(
        out,
        "{}: {} words, {} distinct",
        run.url,
        frequencies.total(),
        frequencies.len()
    );
    let top = frequencies.top(top_n);
    let width = top.iter().map(|e| e.word.chars().count()).max().unwrap_or(0);
    for (rank, entry) in top.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}. {:<width$}  {}",
            rank + 1,
            entry.word,
            entry.count,
            width = width
        );
    }
    out
}
