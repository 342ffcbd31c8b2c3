use gallery_engine::{ensure_state_dir, AtomicFileWriter};

#[test]
fn writer_creates_and_replaces_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writer = AtomicFileWriter::new(dir.path().to_path_buf());

    let path = writer.write("prefs.ron", "(promo_dismissed: false)").expect("write");
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "(promo_dismissed: false)"
    );

    let path = writer.write("prefs.ron", "(promo_dismissed: true)").expect("rewrite");
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "(promo_dismissed: true)"
    );
}

#[test]
fn ensure_state_dir_creates_missing_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("state").join("gallery");
    ensure_state_dir(&nested).expect("create");
    assert!(nested.is_dir());
}

#[test]
fn ensure_state_dir_rejects_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("not_a_dir");
    std::fs::write(&file, "x").expect("write file");
    assert!(ensure_state_dir(&file).is_err());
}
