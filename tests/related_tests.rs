//! Related engines window tests
//!
//! Checks the documented scenarios and the general window properties over
//! every target position of lists up to a dozen items.

use motorspec::catalog::EngineSummary;
use motorspec::related::{select_window, WindowPolicy};
use std::collections::HashSet;

fn list(ids: &[&str]) -> Vec<EngineSummary> {
    ids.iter()
        .map(|id| EngineSummary {
            id: id.to_string(),
            name: id.to_uppercase(),
        })
        .collect()
}

fn letters(n: usize) -> Vec<EngineSummary> {
    let ids: Vec<String> = (0..n).map(|i| ((b'A' + i as u8) as char).to_string()).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    list(&refs)
}

fn ids(window: &[&EngineSummary]) -> Vec<String> {
    window.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_documented_scenarios() {
    let l = letters(10);
    let policy = WindowPolicy::default();

    let cases = vec![
        ("E", "BCDFGHI"),
        ("A", "BCDEFGH"),
        ("J", "CDEFGHI"),
        ("Z", "ABCDEFG"),
    ];

    for (target, expected) in cases {
        let window = select_window(&l, target, policy);
        assert_eq!(ids(&window).concat(), expected, "target {}", target);
    }

    let short = letters(5);
    assert_eq!(ids(&select_window(&short, "C", policy)).concat(), "ABDE");

    let empty: Vec<EngineSummary> = Vec::new();
    assert!(select_window(&empty, "A", policy).is_empty());
}

#[test]
fn test_window_properties_exhaustive() {
    let policies = [
        WindowPolicy::default(),
        WindowPolicy::new(1, 1, 2),
        WindowPolicy::new(0, 0, 3),
        WindowPolicy::new(5, 2, 4),
        WindowPolicy::new(2, 2, 10),
    ];

    for policy in policies {
        for len in 0..=12 {
            let l = letters(len);
            let mut targets: Vec<String> = l.iter().map(|e| e.id.clone()).collect();
            targets.push("missing".to_string());

            for target in &targets {
                let window = select_window(&l, target, policy);
                let present = l.iter().any(|e| &e.id == target);

                let expected_len = policy.total.min(len - usize::from(present));
                assert_eq!(
                    window.len(),
                    expected_len,
                    "len {} target {} {:?}",
                    len,
                    target,
                    policy
                );

                assert!(window.iter().all(|e| &e.id != target));

                let unique: HashSet<&str> = window.iter().map(|e| e.id.as_str()).collect();
                assert_eq!(unique.len(), window.len());

                // Subsequence of the input in original order
                let positions: Vec<usize> = window
                    .iter()
                    .map(|w| l.iter().position(|e| e.id == w.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|p| p[0] < p[1]));
            }
        }
    }
}

#[test]
fn test_window_is_contiguous_around_target() {
    // With unique ids the window is one block on each side of the target
    let l = letters(12);
    for index in 0..l.len() {
        let target = l[index].id.clone();
        let window = select_window(&l, &target, WindowPolicy::default());
        let positions: Vec<usize> = window
            .iter()
            .map(|w| l.iter().position(|e| e.id == w.id).unwrap())
            .collect();
        let before: Vec<_> = positions.iter().filter(|p| **p < index).collect();
        let after: Vec<_> = positions.iter().filter(|p| **p > index).collect();

        if let Some(first) = before.first() {
            assert_eq!(**first + before.len(), index);
        }
        if let Some(first) = after.first() {
            assert_eq!(**first, index + 1);
        }
    }
}

#[test]
fn test_forward_growth_has_priority() {
    // Target at index 1: prev = [A], next = [C..F]; forward fills G, H
    let l = letters(10);
    let window = select_window(&l, "B", WindowPolicy::default());
    assert_eq!(ids(&window).concat(), "ACDEFGH");
}
