use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wordfreq_core::count_words;
use wordfreq_engine::{
    is_report_file, report_filename, write_report, AtomicFileWriter, FailureKind, FetchError,
    FetchMetadata, PipelineRun, RunOutcome,
};

fn fetched_run(url: &str, text: &str) -> PipelineRun {
    PipelineRun {
        url: url.to_string(),
        outcome: RunOutcome::Fetched(FetchMetadata {
            original_url: url.to_string(),
            final_url: url.to_string(),
            redirect_count: 0,
            content_type: Some("text/plain".into()),
            encoding_label: "UTF-8".into(),
            byte_len: text.len() as u64,
        }),
        frequencies: count_words(text),
    }
}

#[test]
fn report_in_directory_uses_derived_name() {
    let temp = TempDir::new().unwrap();
    let url = "https://example.com/sample.txt";
    let run = fetched_run(url, "b a b");

    let path = write_report(&run, temp.path(), "2024-01-01T00:00:00Z").unwrap();
    assert_eq!(path, temp.path().join(report_filename(url)));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["status"], "fetched");
    assert_eq!(json["total_tokens"], 3);
    assert_eq!(json["distinct_words"], 2);
    assert_eq!(json["frequencies"]["b"], 2);
    assert_eq!(json["generated_utc"], "2024-01-01T00:00:00Z");
    assert!(json.get("error").is_none());
}

#[test]
fn report_to_explicit_json_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("out.json");
    let run = PipelineRun {
        url: "https://example.com/gone".into(),
        outcome: RunOutcome::AcquisitionFailed(FetchError {
            kind: FailureKind::HttpStatus(404),
            message: "404 Not Found".into(),
        }),
        frequencies: Default::default(),
    };

    let path = write_report(&run, &target, "2024-01-01T00:00:00Z").unwrap();
    assert_eq!(path, target);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["status"], "acquisition_failed");
    assert_eq!(json["error"], "http status 404: 404 Not Found");
    assert_eq!(json["frequencies"], serde_json::json!({}));
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("report.json", "{}").unwrap();
    let second = writer.write("report.json", "[]").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "[]");
}

#[test]
fn writing_into_a_file_path_fails() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path);
    assert!(writer.write("report.json", "{}").is_err());
}

#[test]
fn report_file_extension_is_case_insensitive() {
    assert!(is_report_file(Path::new("out.json")));
    assert!(is_report_file(Path::new("nested/out.JSON")));
    assert!(!is_report_file(Path::new("reports")));
    assert!(!is_report_file(Path::new("out.json.d")));
}

#[test]
fn uppercase_json_destination_is_written_as_a_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out.JSON");
    let run = fetched_run("https://example.com/a.txt", "alpha beta");

    let path = write_report(&run, &target, "2024-01-01T00:00:00Z").unwrap();
    assert_eq!(path, target);
    assert!(path.is_file());
}
