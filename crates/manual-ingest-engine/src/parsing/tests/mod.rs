//! Property-style tests for the tree builder.
//!
//! `invariants` holds the reusable checks; the tests here drive them with
//! generated documents.


use crate::parsing::build_tree;

/// A ladder of numbered nodes, each one level deeper than the last.
fn ladder(depth: usize) -> Vec<String> {
    (0..depth)
        .flat_map(|level| {
            let pad = " ".repeat(level * 2);
            [
                format!("{pad}- {level}-1. step {level}"),
                format!("{pad}  : note {level}"),
            ]
        })
        .collect()
}

#[test]
fn deep_nesting_does_not_recurse() {
    let lines = ladder(2_000);
    let forest = build_tree(&lines);

    assert_eq!(forest.len(), 1);
    let depth = forest[0].walk().count();
    assert_eq!(depth, 2_000);
    invariants::check(&forest);
}

#[test]
fn every_note_lands_once() {
    let lines = ladder(50);
    let forest = build_tree(&lines);

    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    invariants::check_content_attribution(&refs, &forest);
}

#[test]
fn siblings_and_returns_keep_invariants() {
    let mut lines = Vec::new();
    for floor in 1..=5 {
        lines.push(format!("- Floor {floor}:"));
        lines.push(format!("  : floor {floor} summary"));
        for room in 1..=4 {
            lines.push(format!("  - {floor}-{room}. Room {floor}/{room}"));
            lines.push(format!("    : room {floor}/{room} text"));
            if room % 2 == 0 {
                lines.push(format!("    - {floor}-{room}-1. [열람 제한] Closet {floor}/{room}"));
            }
        }
        lines.push(format!("back at floor {floor}"));
    }

    let forest = build_tree(&lines);

    assert_eq!(forest.len(), 5);
    assert!(forest.iter().all(|floor| floor.children.len() == 4));
    assert!(forest[0].content.ends_with("back at floor 1"));
    invariants::check(&forest);

    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    invariants::check_content_attribution(&refs, &forest);
}
