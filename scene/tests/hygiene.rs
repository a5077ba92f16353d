//! Hygiene: source-level budgets for the scene crate.
//!
//! The controller runs inside UI callbacks, so a panic takes the whole page
//! down. These checks scan `scene/src/` (sibling `*_test.rs` files excluded)
//! and fail when a pattern shows up more often than its budget allows.
//! Budgets only move down.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with `?` or fall back explicitly" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with `?` or fall back explicitly" },
    Budget { pattern: "panic!(", max: 0, why: "controller errors are recoverable" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the case in the type instead" },
    Budget { pattern: "todo!(", max: 0, why: "no stubs in shipped code" },
    Budget { pattern: "unimplemented!(", max: 0, why: "no stubs in shipped code" },
    Budget { pattern: "let _ =", max: 0, why: "inspect or log discarded results" },
    Budget { pattern: ".ok()", max: 0, why: "inspect or log discarded errors" },
    Budget { pattern: "println!(", max: 0, why: "log through the `log` facade" },
    Budget { pattern: "dbg!(", max: 0, why: "debug leftovers" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with("_test.rs"));
        if is_rust && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn hits(sources: &[(PathBuf, String)], pattern: &str) -> Vec<String> {
    sources
        .iter()
        .flat_map(|(path, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(move |(idx, line)| format!("  {}:{}: {}", path.display(), idx + 1, line.trim()))
        })
        .collect()
}

#[test]
fn production_sources_are_found() {
    assert!(
        production_sources().len() > 5,
        "hygiene scan found too few files; run from the crate root"
    );
}

#[test]
fn source_budgets_hold() {
    let sources = production_sources();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&sources, budget.pattern);
        if found.len() > budget.max {
            failures.push(format!(
                "`{}` found {} times (max {}): {}\n{}",
                budget.pattern,
                found.len(),
                budget.max,
                budget.why,
                found.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n\n"));
}
