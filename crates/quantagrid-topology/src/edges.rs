//! Complete-graph edge enumeration.
//!
//! Every unordered pair `{i, j}` of a mesh is connected exactly once and is
//! always reported as `(i, j)` with `i < j`. Pairs come out in lexicographic
//! order, so the sequence is identical on every call.

/// Iterator over the index pairs of a complete graph on `n` nodes.
#[derive(Debug, Clone)]
pub struct CompleteEdges {
    n: usize,
    i: usize,
    j: usize,
}

/// Enumerate all pairs `(i, j)` with `0 <= i < j < n`.
pub fn complete_edges(n: usize) -> CompleteEdges {
    CompleteEdges { n, i: 0, j: 1 }
}

impl Iterator for CompleteEdges {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i + 1 < self.n {
            if self.j < self.n {
                let pair = (self.i, self.j);
                self.j += 1;
                return Some(pair);
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = remaining_pairs(self.n, self.i, self.j);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CompleteEdges {}

/// Pairs left after the cursor `(i, j)`.
fn remaining_pairs(n: usize, i: usize, j: usize) -> usize {
    if i + 1 >= n {
        return 0;
    }
    // Rest of row i, then every full row after it
    let row = n.saturating_sub(j);
    let after = n - i - 1;
    row + after * (after - 1) / 2
}
