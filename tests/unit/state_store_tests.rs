use draft_watch::persistence::StateStore;

#[test]
fn missing_file_loads_as_empty() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = StateStore::new(temp.path().join("last_status.txt"));

    assert_eq!(store.load().expect("load"), "");
}

#[test]
fn load_trims_whitespace() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("last_status.txt");
    std::fs::write(&path, "\n  Giants are up  \n").expect("seed");

    assert_eq!(StateStore::new(&path).load().expect("load"), "Giants are up");
}

#[test]
fn first_message_counts_as_change() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = StateStore::new(temp.path().join("last_status.txt"));

    assert!(store.compare_and_update("Giants are up").expect("compare"));
    assert_eq!(store.load().expect("load"), "Giants are up");
}

#[test]
fn identical_message_is_not_a_change() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = StateStore::new(temp.path().join("last_status.txt"));
    store.save("Giants are up").expect("save");

    assert!(!store.compare_and_update("Giants are up").expect("compare"));
    assert!(!store.has_changed("Giants are up").expect("compare"));
}

#[test]
fn comparison_is_byte_exact() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = StateStore::new(temp.path().join("last_status.txt"));
    store.save("Giants are up").expect("save");

    assert!(store.has_changed("giants are up").expect("compare"));
    assert!(store.has_changed("Giants are up ").expect("compare"));
}

#[test]
fn has_changed_does_not_write() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("last_status.txt");
    let store = StateStore::new(&path);

    assert!(store.has_changed("Giants are up").expect("compare"));
    assert!(!path.exists());
}

#[test]
fn save_creates_parent_directories() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("nested").join("state").join("last_status.txt");
    let store = StateStore::new(&path);

    store.save("Rays are up").expect("save");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "Rays are up");
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn save_overwrites_previous_value() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = StateStore::new(temp.path().join("last_status.txt"));

    store.save("a much longer first message").expect("save");
    store.save("short").expect("save");
    assert_eq!(store.load().expect("load"), "short");
}

#[test]
fn unreadable_path_is_state_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    // A directory where the file should be cannot be read as text.
    let store = StateStore::new(temp.path());

    let err = store.load().expect_err("must fail");
    assert!(err.to_string().starts_with("state:"), "{err}");
}
