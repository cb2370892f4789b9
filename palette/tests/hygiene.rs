//! Hygiene — enforces coding standards at test time
//!
//! Scans the palette production sources for panic paths and silent error
//! discards. Budgets are zero and only ever ratchet down: to add an
//! occurrence of a pattern you must remove another first.

use std::fs;
use std::path::Path;

const BANNED: &[&str] = &[
    ".unwrap()",
    ".expect(",
    "panic!(",
    "unreachable!(",
    "todo!(",
    "unimplemented!(",
    "let _ =",
    ".ok()",
    "#[allow(dead_code)]",
];

struct SourceFile {
    path: String,
    content: String,
}

fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile {
                    path: path_str,
                    content,
                });
            }
        }
    }
}

#[test]
fn production_sources_contain_no_banned_patterns() {
    let files = production_sources();
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for file in &files {
        for pattern in BANNED {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if count > 0 {
                violations.push(format!("  {}: {count} x {pattern}", file.path));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "banned patterns found in production sources:\n{}",
        violations.join("\n")
    );
}
