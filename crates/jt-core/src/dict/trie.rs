use std::cmp::Reverse;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{rank_candidates, CandidateItem, CandidateKind, WordEntry};
use crate::ambiguity::{AmbiguityClass, AmbiguityMap, NUM_CLASSES};

/// Frequency given to user-saved words so they outrank dictionary words.
pub const CUSTOM_WORD_COUNT: u32 = 1000;
/// Part-of-speech marker for user-saved words.
pub const CUSTOM_WORD_POS: &str = "NNP";

pub(super) type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct Edge {
    pub(super) child: NodeId,
    /// Sum of the counts of every entry inserted through this edge.
    pub(super) aggregate: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct Node {
    pub(super) children: [Option<Edge>; NUM_CLASSES],
    pub(super) terminals: Vec<WordEntry>,
}

/// Per-call summary of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub inserted: usize,
    pub skipped: usize,
}

/// Multi-way trie over ambiguity classes.
///
/// Nodes live in a growable arena addressed by index and are never removed,
/// so ids stay valid for the lifetime of the trie. Node 0 is the root and
/// never holds terminals.
#[derive(Debug, Clone)]
pub struct DisambiguationTrie {
    pub(super) nodes: Vec<Node>,
    pub(super) map: AmbiguityMap,
}

impl DisambiguationTrie {
    pub fn new() -> Self {
        Self::with_map(AmbiguityMap::standard().clone())
    }

    pub fn with_map(map: AmbiguityMap) -> Self {
        Self {
            nodes: vec![Node::default()],
            map,
        }
    }

    pub fn ambiguity_map(&self) -> &AmbiguityMap {
        &self.map
    }

    /// Insert `entry` at the end of `keys`. Existing entries at that node are
    /// kept, including identical ones. Returns `false` for an empty key
    /// sequence, which would place a terminal on the root.
    pub fn insert(&mut self, keys: &[AmbiguityClass], entry: WordEntry) -> bool {
        if keys.is_empty() {
            return false;
        }
        let mut node = ROOT;
        for &key in keys {
            let next_id = self.nodes.len() as NodeId;
            let edge = self.nodes[node as usize].children[key.index()].get_or_insert(Edge {
                child: next_id,
                aggregate: 0,
            });
            edge.aggregate += u64::from(entry.count);
            let child = edge.child;
            if child == next_id {
                self.nodes.push(Node::default());
            }
            node = child;
        }
        self.nodes[node as usize].terminals.push(entry);
        true
    }

    /// Load `symbols;count[;pos[;output[;display]]]` lines. Malformed,
    /// rejected and untranslatable lines are skipped without aborting.
    pub fn bulk_load<I, S>(&mut self, lines: I, reject: &HashSet<String>) -> LoadStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = LoadStats::default();
        for line in lines {
            let line = line.as_ref();
            let inserted = match self.parse_line(line, reject) {
                Some((keys, entry)) => self.insert(&keys, entry),
                None => false,
            };
            if inserted {
                stats.inserted += 1;
            } else {
                trace!(line, "skipped dictionary line");
                stats.skipped += 1;
            }
        }
        debug!(
            inserted = stats.inserted,
            skipped = stats.skipped,
            nodes = self.nodes.len(),
            "bulk load complete"
        );
        stats
    }

    fn parse_line(
        &self,
        line: &str,
        reject: &HashSet<String>,
    ) -> Option<(Vec<AmbiguityClass>, WordEntry)> {
        let fields: Vec<&str> = line.trim().split(';').collect();
        if fields.len() < 2 {
            return None;
        }
        let symbols = fields[0];
        if reject.contains(&symbols.to_lowercase()) {
            return None;
        }
        let count: u32 = fields[1].trim().parse().ok()?;
        let keys = self.map.translate(symbols)?;

        let field = |i: usize| fields.get(i).copied().filter(|f| !f.is_empty());
        let entry = WordEntry {
            output: field(3).unwrap_or(symbols).to_string(),
            display: field(4).map(str::to_string),
            count,
            pos: field(2).map(str::to_string),
        };
        Some((keys, entry))
    }

    /// Insert a user word with elevated weight. Untranslatable words are
    /// ignored and reported as `false`.
    pub fn insert_custom_word(&mut self, word: &str) -> bool {
        let Some(keys) = self.map.translate(word) else {
            return false;
        };
        let entry = WordEntry::new(word, CUSTOM_WORD_COUNT).with_pos(CUSTOM_WORD_POS);
        self.insert(&keys, entry)
    }

    fn walk(&self, keys: &[AmbiguityClass]) -> Option<NodeId> {
        keys.iter().try_fold(ROOT, |node, key| {
            self.nodes[node as usize].children[key.index()].map(|e| e.child)
        })
    }

    /// Aggregate count on the last edge of `keys`, if the path exists.
    pub fn aggregate_count(&self, keys: &[AmbiguityClass]) -> Option<u64> {
        let (last, prefix) = keys.split_last()?;
        let parent = self.walk(prefix)?;
        self.nodes[parent as usize].children[last.index()].map(|e| e.aggregate)
    }

    /// Exact entries at `keys` (insertion order) followed by at most
    /// `max_completions` entries found strictly below it. Not ranked; see
    /// [`ranked_lookup`](Self::ranked_lookup).
    ///
    /// An empty key sequence yields nothing: searching completions from the
    /// root would enumerate the whole dictionary.
    pub fn lookup(&self, keys: &[AmbiguityClass], max_completions: usize) -> Vec<CandidateItem> {
        if keys.is_empty() {
            return Vec::new();
        }
        let Some(node) = self.walk(keys) else {
            return Vec::new();
        };

        let mut result: Vec<CandidateItem> = self.nodes[node as usize]
            .terminals
            .iter()
            .map(|e| CandidateItem::from_entry(CandidateKind::Exact, e))
            .collect();

        let mut completions = Vec::new();
        self.collect_completions(node, &mut completions, max_completions);
        completions.truncate(max_completions);
        result.extend(completions);
        result
    }

    /// `lookup` ordered for presentation.
    pub fn ranked_lookup(
        &self,
        keys: &[AmbiguityClass],
        max_completions: usize,
    ) -> Vec<CandidateItem> {
        let mut items = self.lookup(keys, max_completions);
        rank_candidates(&mut items);
        items
    }

    /// Depth-first walk below `node`, heaviest edge first (ties by class
    /// index). The limit is checked before entering each child.
    fn collect_completions(&self, node: NodeId, out: &mut Vec<CandidateItem>, max: usize) {
        let mut edges: Vec<Edge> = self.nodes[node as usize]
            .children
            .iter()
            .flatten()
            .copied()
            .collect();
        edges.sort_by_key(|e| Reverse(e.aggregate));

        for edge in edges {
            if out.len() >= max {
                return;
            }
            let child = &self.nodes[edge.child as usize];
            out.extend(
                child
                    .terminals
                    .iter()
                    .map(|e| CandidateItem::from_entry(CandidateKind::Completion, e)),
            );
            self.collect_completions(edge.child, out, max);
        }
    }

    /// Returns (node_count, entry_count).
    pub fn stats(&self) -> (usize, usize) {
        let entries = self.nodes.iter().map(|n| n.terminals.len()).sum();
        (self.nodes.len(), entries)
    }
}

impl Default for DisambiguationTrie {
    fn default() -> Self {
        Self::new()
    }
}
