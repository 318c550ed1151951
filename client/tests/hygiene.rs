//! Hygiene — enforces coding standards at test time
//!
//! Scans the client crate's production sources for patterns that panic or
//! silently drop errors. Every budget is zero; the layout has no fallible
//! paths, so any hit is a regression.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, budget, description)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "explicit panic"),
    ("unreachable!(", 0, "explicit panic"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "discards an error"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
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
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("site_layout.rs")),
        "hygiene scan did not reach src/components"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn page_modules_have_module_docs() {
    let undocumented: Vec<String> = source_files()
        .iter()
        .filter(|f| f.path.parent().is_some_and(|dir| dir.ends_with("pages")))
        .filter(|f| !f.content.trim_start().starts_with("//!"))
        .map(|f| f.path.display().to_string())
        .collect();
    assert!(undocumented.is_empty(), "page modules without a //! header:\n{}", undocumented.join("\n"));
}
