mod common;

use tinyhttpd::store::FileStore;

#[tokio::test]
async fn test_store_write_then_read() {
    let store = FileStore::new(common::scratch_dir("store-rw"));

    store.write("notes.txt", b"hello store").await.unwrap();
    let contents = store.read("notes.txt").await.unwrap();

    assert_eq!(contents, b"hello store");
}

#[tokio::test]
async fn test_store_write_replaces_existing_contents() {
    let store = FileStore::new(common::scratch_dir("store-replace"));

    store.write("f", b"a much longer first version").await.unwrap();
    store.write("f", b"short").await.unwrap();

    assert_eq!(store.read("f").await.unwrap(), b"short");
}

#[tokio::test]
async fn test_store_read_missing_file() {
    let store = FileStore::new(common::scratch_dir("store-missing"));

    let err = store.read("nope").await.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_store_rejects_escaping_names() {
    let store = FileStore::new("/srv/files");

    for name in ["", "../etc/passwd", "a/../../b", "/etc/passwd", "./x", ".."] {
        let err = store.resolve(name).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput, "{name}");
    }
}

#[test]
fn test_store_resolves_nested_names_under_root() {
    let store = FileStore::new("/srv/files");

    let path = store.resolve("dir/file.bin").unwrap();
    assert_eq!(path, std::path::Path::new("/srv/files/dir/file.bin"));
    assert!(path.starts_with(store.root()));
}

#[cfg(unix)]
#[tokio::test]
async fn test_store_creates_files_with_open_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = common::scratch_dir("store-mode");
    let store = FileStore::new(&dir);
    store.write("shared", b"x").await.unwrap();

    let mode = std::fs::metadata(dir.join("shared")).unwrap().permissions().mode();
    // umask may strip group/other write, never owner rw
    assert_eq!(mode & 0o600, 0o600);
}
