use preflight::control::{FsControl, UploadControl};

#[test]
fn fs_control_reads_name_and_size_at_call_time() {
    use std::fs::write;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("photo.png");
    write(&path, b"0123456789").unwrap();

    let control = FsControl::new(path.clone());
    let file = control.selected_file().unwrap();
    assert_eq!(file.name, "photo.png");
    assert_eq!(file.size_bytes, 10);

    // A rewrite between calls shows up on the next read.
    write(&path, b"01234").unwrap();
    let file = control.selected_file().unwrap();
    assert_eq!(file.size_bytes, 5);
}

#[test]
fn fs_control_clear_forgets_path_without_deleting() {
    use std::fs::write;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("track.gpx");
    write(&path, b"<gpx/>").unwrap();

    let control = FsControl::new(path.clone());
    control.clear_selection();
    assert!(control.selected_file().is_none());
    // The file itself is untouched.
    assert!(path.exists());
}

#[test]
fn fs_control_vanished_file_reports_no_selection() {
    use std::fs::{remove_file, write};
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.png");
    write(&path, b"x").unwrap();

    let control = FsControl::new(path.clone());
    assert!(control.selected_file().is_some());
    remove_file(&path).unwrap();
    assert!(control.selected_file().is_none());
}
