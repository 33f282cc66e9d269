use super::*;
use crate::core::{CommentExpression, Expression, LineKind};
use std::fs;
use tempfile::TempDir;

/// Helper: Creates a temporary script file for testing.
fn create_test_script(content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let script_path = temp_dir.path().join("main.ahk");
    fs::write(&script_path, content).unwrap();
    (temp_dir, script_path)
}

#[test]
fn test_load_script() {
    let (_temp_dir, script_path) =
        create_test_script(b"; Launchers\n#n::Run notepad\nMsgBox hi\n");

    let script = ScriptFile::load(&script_path).unwrap();

    assert_eq!(script.path(), script_path.as_path());
    assert_eq!(script.tree().len(), 2);
    assert_eq!(script.report().count(LineKind::Hotkey), 1);
    assert!(script
        .tree()
        .contains(&Expression::from(CommentExpression::new("; Launchers"))));
}

#[test]
fn test_load_script_with_crlf() {
    let (_temp_dir, script_path) = create_test_script(b"^k::\r\n; done\r\n");

    let script = ScriptFile::load(&script_path).unwrap();
    assert_eq!(script.tree().len(), 2);
    assert!(script.report().all_matched());
}

#[test]
fn test_load_script_with_byte_order_mark() {
    let (_temp_dir, script_path) = create_test_script(b"\xEF\xBB\xBF^k::\n#n::\n");

    let script = ScriptFile::load(&script_path).unwrap();
    assert_eq!(script.tree().len(), 2);
    assert!(script.report().all_matched());
    assert_eq!(script.report().lines()[0].text, "^k::");
}

#[test]
fn test_load_missing_script() {
    let temp_dir = TempDir::new().unwrap();
    let script_path = temp_dir.path().join("missing.ahk");

    match ScriptFile::load(&script_path) {
        Err(ScriptError::NotFound(path)) => assert_eq!(path, script_path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_load_non_utf8_script() {
    let (_temp_dir, script_path) = create_test_script(&[0xff, 0xfe, b';']);

    assert!(matches!(
        ScriptFile::load(&script_path),
        Err(ScriptError::InvalidEncoding(_))
    ));
}

#[test]
fn test_expand_path_without_tilde_is_unchanged() {
    let path = Path::new("/tmp/main.ahk");
    assert_eq!(expand_path(path).unwrap(), PathBuf::from("/tmp/main.ahk"));
}

#[test]
fn test_expand_path_with_tilde() {
    let expanded = expand_path(Path::new("~/main.ahk")).unwrap();
    assert!(!expanded.starts_with("~"));
    assert!(expanded.ends_with("main.ahk"));
}
