//! Lazy permutation generation.
//!
//! Iterative Heap's algorithm: each step is a single transposition, so the
//! next ordering is produced on demand from the previous one. Equal elements
//! are not deduplicated; a sequence of length `n` always yields `n!` items.

/// Iterator over every ordering of a sequence.
///
/// The first item is the input order itself.
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    cursor: usize,
    started: bool,
}

impl<T: Clone> Permutations<T> {
    /// Creates a generator over the orderings of `items`.
    pub fn new(items: Vec<T>) -> Self {
        let len = items.len();
        Permutations {
            items,
            counters: vec![0; len],
            cursor: 1,
            started: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }

        let len = self.items.len();
        while self.cursor < len {
            let i = self.cursor;
            if self.counters[i] < i {
                let k = if i % 2 == 1 { self.counters[i] } else { 0 };
                self.items.swap(i, k);
                self.counters[i] += 1;
                self.cursor = 1;
                return Some(self.items.clone());
            }
            self.counters[i] = 0;
            self.cursor += 1;
        }
        None
    }
}
