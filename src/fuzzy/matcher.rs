// File: src/fuzzy/matcher.rs
use crate::core::trie::{NodeId, Trie, ROOT};
use crate::core::types::Suggestion;

/// Matches reported before the search stops.
pub const MAX_FUZZY_RESULTS: usize = 10;

/// Approximate search over a trie with a per-path mismatch budget.
///
/// Depth-first from the root. An edge at depth `d` costs nothing when it
/// matches the query character at position `d` and one unit otherwise (or
/// when the query is already exhausted); a branch is abandoned once its
/// budget would go negative. A terminal node is reported when the remaining
/// budget still covers the unmatched tail of the query.
///
/// This is a depth-aligned substitution budget, not edit distance: there is
/// no credit for skipping a query character or realigning after an
/// insertion. Results come back in discovery order; callers re-rank.
pub fn search(trie: &Trie, query: &str, budget: i32) -> Vec<Suggestion> {
    let mut results = Vec::new();
    if budget < 0 {
        return results;
    }
    let query: Vec<char> = query.chars().collect();
    let mut current = String::new();
    walk(trie, ROOT, &query, 0, budget, &mut current, &mut results);
    results
}

fn walk(
    trie: &Trie,
    node: NodeId,
    query: &[char],
    depth: usize,
    remaining: i32,
    current: &mut String,
    results: &mut Vec<Suggestion>,
) {
    if results.len() >= MAX_FUZZY_RESULTS {
        return;
    }
    if trie.is_terminal(node) && query.len() as i32 <= depth as i32 + remaining {
        results.push(Suggestion::new(current.clone(), trie.frequency(node)));
    }
    let alphabet = trie.alphabet();
    for slot in 0..alphabet.width() {
        let Some(child) = trie.child(node, slot) else {
            continue;
        };
        let ch = alphabet.decode(slot);
        let cost = match query.get(depth) {
            Some(&expected) if expected == ch => 0,
            _ => 1,
        };
        if remaining - cost >= 0 {
            current.push(ch);
            walk(trie, child, query, depth + 1, remaining - cost, current, results);
            current.pop();
            if results.len() >= MAX_FUZZY_RESULTS {
                return;
            }
        }
    }
}
