// submatch-core/tests/discovery_tests.rs

use submatch_core::discovery::{MediaKind, find_media_files};
use submatch_core::error::CoreError;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_find_media_files_filters_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("episode1.mp4"))?;
    File::create(input_dir.join("episode2.MP4"))?; // Case insensitive
    File::create(input_dir.join("episode1.srt"))?;
    File::create(input_dir.join("notes.txt"))?;
    fs::create_dir(input_dir.join("folder.mp4"))?; // Directories are skipped
    fs::create_dir(input_dir.join("subdir"))?;
    File::create(input_dir.join("subdir").join("nested.mp4"))?; // Not recursive

    let mut files = find_media_files(input_dir, &exts(&["mp4"]), MediaKind::Video)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path.file_name().unwrap(), "episode1.mp4");
    assert_eq!(files[1].path.file_name().unwrap(), "episode2.MP4"); // Original case preserved
    assert!(files.iter().all(|f| f.kind == MediaKind::Video));

    let subs = find_media_files(input_dir, &exts(&["srt"]), MediaKind::Subtitle)?;
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].kind, MediaKind::Subtitle);
    assert_eq!(subs[0].path, input_dir.join("episode1.srt"));

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_media_files_multiple_extensions() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("a.mp4"))?;
    File::create(dir.path().join("b.mkv"))?;
    File::create(dir.path().join("c.avi"))?;

    let files = find_media_files(dir.path(), &exts(&["mp4", "mkv"]), MediaKind::Video)?;
    assert_eq!(files.len(), 2);
    Ok(())
}

#[test]
fn test_find_media_files_empty_is_ok() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("readme.txt"))?;

    let files = find_media_files(dir.path(), &exts(&["mp4"]), MediaKind::Video)?;
    assert!(files.is_empty());
    Ok(())
}

#[test]
fn test_find_media_files_accepts_single_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("movie.srt");
    File::create(&file)?;
    let other = dir.path().join("movie.txt");
    File::create(&other)?;

    let files = find_media_files(&file, &exts(&["srt"]), MediaKind::Subtitle)?;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, file);

    let files = find_media_files(&other, &exts(&["srt"]), MediaKind::Subtitle)?;
    assert!(files.is_empty());
    Ok(())
}

#[test]
fn test_find_media_files_nonexistent_dir() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    let result = find_media_files(&non_existent_path, &exts(&["mp4"]), MediaKind::Video);
    match result {
        Err(CoreError::DirectoryNotFound { path, .. }) => assert_eq!(path, non_existent_path),
        other => panic!("Unexpected result: {:?}", other),
    }
}
