//! Edge case and error handling tests for explorer-tree

mod harness;

use harness::{TestDir, run_tree};
use std::fs;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_directory_is_followed() {
    use std::os::unix::fs::symlink;

    let dir = TestDir::new();
    dir.add_file("realdir/file.rs", "fn file() {}");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--mode", "all"]);
    assert!(success);
    assert!(stdout.contains("├─ linkdir\n│  └─ file.rs\n"), "{}", stdout);
    assert!(stdout.contains("└─ realdir\n   └─ file.rs\n"), "{}", stdout);
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    use std::os::unix::fs::symlink;

    let dir = TestDir::new();
    dir.add_file("subdir/file.rs", "fn file() {}");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--mode", "all"]);
    assert!(success, "should not hang on parent symlink");
    assert!(stdout.contains("subdir"));
    assert!(stdout.contains("parent"), "the link itself is listed");
    assert!(stdout.contains("file.rs"));
}

#[test]
#[cfg(unix)]
fn test_broken_symlink_is_skipped() {
    use std::os::unix::fs::symlink;

    let dir = TestDir::new();
    dir.add_file("real.rs", "fn real() {}");
    symlink("nonexistent.rs", dir.path().join("broken_link.rs"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--mode", "all"]);
    assert!(success, "should handle broken symlinks");
    assert!(stdout.contains("└─ real.rs"), "{}", stdout);
    assert!(!stdout.contains("broken_link.rs"));
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TestDir::new();
    dir.add_file("a_readable/file.rs", "fn readable() {}");
    dir.add_file("z_sibling.txt", "");

    let unreadable = dir.add_dir("m_unreadable");
    fs::write(unreadable.join("hidden.rs"), "fn hidden() {}").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");
    // Privileged users can still read it; nothing to check then
    let effective = fs::read_dir(&unreadable).is_err();

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--mode", "all"]);

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "should handle unreadable directories gracefully");
    if effective {
        assert!(stdout.contains("├─ m_unreadable\n└─ z_sibling.txt"), "{}", stdout);
        assert!(!stdout.contains("hidden.rs"));
    }
    assert!(stdout.contains("file.rs"), "should show readable file");
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("file with spaces.rs", "");
    dir.add_file("dir with spaces/nested.rs", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--mode", "all"]);
    assert!(success);
    assert!(stdout.contains("├─ dir with spaces\n"), "{}", stdout);
    assert!(stdout.contains("└─ file with spaces.rs\n"), "{}", stdout);
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.rs", "");
    dir.add_file("émoji_🎉.rs", "");
    dir.add_file("中文目录/文件.rs", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--mode", "all"]);
    assert!(success);
    assert!(stdout.contains("日本語.rs"));
    assert!(stdout.contains("émoji_🎉.rs"));
    assert!(stdout.contains("中文目录"));
    assert!(stdout.contains("文件.rs"));
}

#[test]
fn test_pattern_with_regex_characters_is_literal() {
    let dir = TestDir::new();
    dir.add_file("a+b.txt", "");
    dir.add_file("aab.txt", "");
    dir.add_file("[x].txt", "");
    dir.add_file("x.txt", "");

    let (stdout, _stderr, success) =
        run_tree(dir.path(), &["-I", "a+b.txt", "-I", "[x].txt", "--mode", "all"]);
    assert!(success);
    assert!(!stdout.contains("a+b.txt"), "{}", stdout);
    assert!(!stdout.contains("[x].txt"), "{}", stdout);
    assert!(stdout.contains("aab.txt"));
    assert!(stdout.contains("x.txt"));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_case_insensitive_ordering() {
    let dir = TestDir::new();
    dir.add_file("banana.txt", "");
    dir.add_file("Apple.txt", "");
    dir.add_file("cherry.txt", "");
    dir.add_dir("Zeta");
    dir.add_dir("alpha");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--mode", "all"]);
    assert!(success);
    let lines: Vec<_> = stdout.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec![
            "├─ alpha",
            "├─ Zeta",
            "├─ Apple.txt",
            "├─ banana.txt",
            "└─ cherry.txt",
        ]
    );
}

#[test]
fn test_output_is_stable_across_runs() {
    let dir = TestDir::new();
    for name in ["q", "B", "a", "C", "b.txt", "A.txt"] {
        dir.add_file(&format!("{}/inner.txt", name), "");
    }

    let (first, _, _) = run_tree(dir.path(), &["--mode", "all"]);
    let (second, _, _) = run_tree(dir.path(), &["--mode", "all"]);
    assert_eq!(first, second);
}

// ============================================================================
// Connectors
// ============================================================================

#[test]
fn test_exactly_one_last_connector_per_group() {
    let dir = TestDir::new();
    dir.add_file("one/a.txt", "");
    dir.add_file("one/b.txt", "");
    dir.add_file("two/c.txt", "");
    dir.add_file("root.txt", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--mode", "all"]);
    assert!(success);
    let expected_tail = "\
├─ one
│  ├─ a.txt
│  └─ b.txt
├─ two
│  └─ c.txt
└─ root.txt
";
    assert!(stdout.ends_with(expected_tail), "{}", stdout);
}

#[test]
fn test_empty_directory_root_only() {
    let dir = TestDir::new();
    let empty = dir.add_dir("empty");
    let (stdout, _stderr, success) = run_tree(&empty, &["--mode", "all"]);
    assert!(success);
    assert_eq!(stdout, "empty\n");
}

#[test]
fn test_root_listed_even_when_everything_is_excluded() {
    let dir = TestDir::new();
    dir.add_file("proj/a.txt", "");
    dir.add_file("proj/b/c.txt", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["proj", "-I", "*", "--mode", "all"]);
    assert!(success);
    assert_eq!(stdout, "proj\n");
}
