use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn submatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("submatch").expect("Failed to find submatch binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

const VALID_SRT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:01:58,000 --> 00:02:01,500\nBye\n";

// Directories below never contain video files, so no ffprobe run is needed.

#[test]
fn test_subtitles_only_prints_empty_table() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("clip.srt"), VALID_SRT)?;

    submatch_cmd()
        .arg(dir.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(contains("Subtitle matches"))
        .stdout(contains("Subtitle duration"))
        .stdout(contains(format!("Video path: {}", dir.path().display())));

    Ok(())
}

#[test]
fn test_separate_subtitle_paths_listed_in_caption() -> Result<(), Box<dyn Error>> {
    let videos = tempdir()?;
    let subs_a = tempdir()?;
    let subs_b = tempdir()?;
    fs::write(subs_a.path().join("a.srt"), VALID_SRT)?;

    submatch_cmd()
        .arg(videos.path())
        .arg(subs_a.path())
        .arg(subs_b.path())
        .assert()
        .success()
        .stdout(contains(format!(
            "Subtitle path: {}, {}",
            subs_a.path().display(),
            subs_b.path().display()
        )));

    Ok(())
}

#[test]
fn test_json_output() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("clip.srt"), VALID_SRT)?;

    let output = submatch_cmd()
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["rows"].as_array().map(Vec::len), Some(0));
    assert_eq!(report["tolerance_secs"], 2);
    assert_eq!(report["strategy"], "nearest");

    Ok(())
}

#[test]
fn test_nonexistent_video_directory() -> Result<(), Box<dyn Error>> {
    let missing = PathBuf::from("surely/this/does/not/exist/videos");

    submatch_cmd()
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("directory not found"));

    Ok(())
}

#[test]
fn test_nonexistent_subtitle_path_rejected() -> Result<(), Box<dyn Error>> {
    let videos = tempdir()?;

    submatch_cmd()
        .arg(videos.path())
        .arg("surely/this/does/not/exist/subs")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("does not exist"));

    Ok(())
}

#[test]
fn test_empty_subtitle_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("empty.srt"), "")?;

    submatch_cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("empty subtitle track"))
        .stderr(contains("empty.srt"));

    Ok(())
}

#[test]
fn test_malformed_subtitle_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("broken.srt"), "1\nnot a timing line\ntext\n")?;

    submatch_cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("subtitle parse error"))
        .stderr(contains("broken.srt"));

    Ok(())
}

#[test]
fn test_skip_errors_continues() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("empty.srt"), "")?;
    fs::write(dir.path().join("clip.srt"), VALID_SRT)?;

    submatch_cmd()
        .arg(dir.path())
        .arg("--skip-errors")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(contains("Skipped: 1 file(s)"))
        .stderr(contains("empty.srt"));

    Ok(())
}

#[test]
fn test_custom_subtitle_extension() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    // Would fail to parse if scanned as a subtitle
    fs::write(dir.path().join("broken.srt"), "garbage")?;

    submatch_cmd()
        .arg(dir.path())
        .arg("--subtitle-ext")
        .arg("sub")
        .assert()
        .success();

    Ok(())
}

#[test]
fn test_zero_tolerance_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    submatch_cmd()
        .arg(dir.path())
        .arg("--tolerance")
        .arg("0")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid configuration"));

    Ok(())
}

#[test]
fn test_help_succeeds() {
    submatch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--tolerance"));
}

#[test]
fn test_invalid_strategy_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    submatch_cmd()
        .arg(dir.path())
        .arg("--strategy")
        .arg("first")
        .assert()
        .failure()
        .code(1);

    Ok(())
}
