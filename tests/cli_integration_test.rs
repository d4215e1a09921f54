use std::path::Path;
use std::process::Command;
use std::process::Output;

use logbak::encode_record;
use logbak::RecordStore;
use logbak::SledRecordStore;
use logbak::StorageConfig;
use logbak::USAGE;

fn logbak(
    args: &[&str],
    cwd: &Path,
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logbak"))
        .args(args)
        .current_dir(cwd)
        .env_remove("LOGBAK_CONFIG_PATH")
        .output()
        .expect("failed to spawn logbak")
}

fn dir_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn usage_errors_exit_with_code_1_and_touch_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cases: Vec<Vec<&str>> = vec![
        vec![],
        vec!["b"],
        vec!["b", "app.log"],
        vec!["r", "app.log", "app.db", "extra"],
        vec!["b", "app.log", "app.db", "x", "y"],
        vec!["x", "app.log", "app.db"],
    ];

    for args in cases {
        let output = logbak(&args, dir.path());

        assert_eq!(output.status.code(), Some(1), "args {args:?}");
        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines, USAGE.to_vec(), "args {args:?}");
        assert_eq!(dir_entries(dir.path()), 0, "args {args:?}");
    }
}

#[test]
fn backup_then_restore_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.log"), b"|first\nsecond|\nthird").unwrap();

    let backup = logbak(&["b", "app.log", "app.db"], dir.path());
    assert!(backup.status.success(), "{backup:?}");
    assert_eq!(
        String::from_utf8(backup.stdout).unwrap(),
        "backup app.log to app.db\n"
    );

    let restore = logbak(&["r", "restored.log", "app.db"], dir.path());
    assert!(restore.status.success(), "{restore:?}");
    assert_eq!(
        String::from_utf8(restore.stdout).unwrap(),
        "restore restored.log from app.db\n"
    );

    assert_eq!(
        std::fs::read(dir.path().join("restored.log")).unwrap(),
        b"|first\nsecond|\nthird\n"
    );
}

#[test]
fn backup_of_missing_log_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let output = logbak(&["b", "missing.log", "app.db"], dir.path());

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.log"));
}

#[test]
fn restore_into_missing_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.log"), b"line\n").unwrap();
    assert!(logbak(&["b", "app.log", "app.db"], dir.path()).status.success());

    let output = logbak(&["r", "no_such_dir/out.log", "app.db"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no_such_dir"));
}

fn restore_with_order(
    dir: &Path,
    order: Option<&str>,
) -> Vec<u8> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_logbak"));
    cmd.args(["r", "out.log", "app.db"])
        .current_dir(dir)
        .env_remove("LOGBAK_CONFIG_PATH")
        .env_remove("LOGBAK__RESTORE__ORDER");
    if let Some(order) = order {
        cmd.env("LOGBAK__RESTORE__ORDER", order);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    std::fs::read(dir.join("out.log")).unwrap()
}

#[test]
fn restore_honours_order_from_environment() {
    let dir = tempfile::tempdir().unwrap();

    // Past 99999 lines the prefix grows to 6 digits and byte order diverges
    // from numeric order.
    let store =
        SledRecordStore::open(dir.path().join("app.db"), &StorageConfig::default()).unwrap();
    for (index, line) in [(99_999, b"early".as_slice()), (100_000, b"late".as_slice())] {
        let record = encode_record(index, line);
        store.put(&record, &record).unwrap();
    }
    store.close().unwrap();

    assert_eq!(restore_with_order(dir.path(), None), b"early\nlate\n");
    assert_eq!(
        restore_with_order(dir.path(), Some("numeric")),
        b"early\nlate\n"
    );
    assert_eq!(
        restore_with_order(dir.path(), Some("lexicographic")),
        b"late\nearly\n"
    );
}

#[test]
fn invalid_configuration_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.log"), b"a\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_logbak"))
        .args(["b", "app.log", "app.db"])
        .current_dir(dir.path())
        .env("LOGBAK__STORAGE__CACHE_CAPACITY", "0")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("app.db").exists());
}
