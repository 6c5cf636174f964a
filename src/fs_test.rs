use super::mock::MockFs;
use super::*;
use tempfile::TempDir;

#[test]
fn test_mock_fs_file_operations() {
    let fs = MockFs::new();

    // ファイル追加
    fs.add_file("/lib/data.json", "{}");
    assert!(fs.exists(Path::new("/lib/data.json")));
    assert!(!fs.is_dir(Path::new("/lib/data.json")));
    assert!(fs.is_dir(Path::new("/lib")));

    // 内容読み込み
    let content = fs.read_to_string(Path::new("/lib/data.json")).unwrap();
    assert_eq!(content, "{}");

    // 上書き
    fs.write(Path::new("/lib/data.json"), b"{\"groups\":[]}")
        .unwrap();
    let content = fs.read_to_string(Path::new("/lib/data.json")).unwrap();
    assert_eq!(content, "{\"groups\":[]}");
}

#[test]
fn test_mock_fs_create_new_keeps_existing_content() {
    let fs = MockFs::new();
    fs.add_file("/lib/description.md", "hand written");

    let created = fs
        .create_new(Path::new("/lib/description.md"), b"")
        .unwrap();

    assert!(!created);
    assert_eq!(
        fs.read_to_string(Path::new("/lib/description.md")).unwrap(),
        "hand written"
    );
}

#[test]
fn test_mock_fs_create_new_requires_parent() {
    let fs = MockFs::new();
    assert!(fs.create_new(Path::new("/missing/file.md"), b"").is_err());
}

#[test]
fn test_mock_fs_fail_writes_under() {
    let fs = MockFs::new();
    fs.fail_writes_under("/locked");

    assert!(fs.create_dir_all(Path::new("/locked/a")).is_err());
    assert!(fs.write(Path::new("/locked/a.txt"), b"x").is_err());
    assert!(fs.create_dir_all(Path::new("/open/a")).is_ok());
}

#[test]
fn test_real_fs_create_new() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("markup.html");

    assert!(RealFs.create_new(&path, b"first").unwrap());
    assert!(!RealFs.create_new(&path, b"second").unwrap());
    assert_eq!(RealFs.read_to_string(&path).unwrap(), "first");
}

#[test]
fn test_real_fs_write_creates_parent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("data.json");

    RealFs.write(&path, b"{}").unwrap();

    assert!(RealFs.is_dir(&temp.path().join("nested")));
    assert_eq!(RealFs.read_to_string(&path).unwrap(), "{}");
}
