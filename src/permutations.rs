//! Ordered r-length permutations of a finite pool, without repetition.
//!
//! The iterator is the combinatorial backbone of the solver's search: it
//! emits permutations lazily, in lexicographic order relative to the input
//! order, treating elements as unique by position rather than by value.

/// Lazy generator of `r`-length permutations of a pool of `n` elements.
///
/// Uses the itertools-style cyclic algorithm: an index list of size `n` and
/// a cycle counter per emitted position. The first `r`-prefix is emitted
/// immediately; every subsequent call rotates the index list until a counter
/// stays positive or the whole scan is exhausted.
///
/// If `r > n` the sequence is empty. If `r == 0` the sequence consists of
/// exactly one empty permutation. The sequence is single-use and
/// forward-only; to restart it, construct a new one.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    r: usize,
    started: bool,
    exhausted: bool,
}

impl<T: Clone> Permutations<T> {
    /// Creates a generator of `r`-length permutations of `pool`.
    pub fn new(pool: Vec<T>, r: usize) -> Self {
        let n = pool.len();
        Self {
            indices: (0..n).collect(),
            cycles: (0..r).map(|i| n.saturating_sub(i)).collect(),
            pool,
            r,
            started: false,
            exhausted: false,
        }
    }

    /// Creates a generator of full-length permutations of `pool`.
    pub fn full(pool: Vec<T>) -> Self {
        let r = pool.len();
        Self::new(pool, r)
    }

    fn emit(&self) -> Vec<T> {
        self.indices[..self.r]
            .iter()
            .map(|&index| self.pool[index].clone())
            .collect()
    }
}

impl Permutations<char> {
    /// Creates a generator of `r`-length permutations of the characters of
    /// `source`.
    pub fn of_str(source: &str, r: usize) -> Self {
        Self::new(source.chars().collect(), r)
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            if self.r > self.pool.len() {
                self.exhausted = true;
                return None;
            }
            return Some(self.emit());
        }

        let n = self.pool.len();
        for i in (0..self.r).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] != 0 {
                self.indices.swap(i, n - self.cycles[i]);
                return Some(self.emit());
            }
            // Counter spent: rotate element i to the end and scan leftward.
            let index = self.indices.remove(i);
            self.indices.push(index);
            self.cycles[i] = n - i;
        }

        self.exhausted = true;
        None
    }
}

/// Number of `r`-length permutations of `n` elements, `n!/(n-r)!`.
///
/// Returns 0 when `r > n`. The result is exact for the pool sizes this crate
/// searches over (`n <= 20`); larger pools overflow `u64`.
pub fn permutation_count(n: usize, r: usize) -> u64 {
    if r > n {
        return 0;
    }
    ((n - r + 1)..=n).map(|factor| factor as u64).product()
}

/// Returns the permutation at `index` in the order [`Permutations`] emits
/// them, or `None` when `index` is out of range.
///
/// Unranks `index` in the falling-factorial basis, which lets a parallel
/// search partition the index space without generating the sequence
/// prefix-first.
pub fn nth_permutation<T: Clone>(pool: &[T], r: usize, index: u64) -> Option<Vec<T>> {
    let n = pool.len();
    if index >= permutation_count(n, r) {
        return None;
    }

    let mut available = pool.to_vec();
    let mut remainder = index;
    let mut permutation = Vec::with_capacity(r);

    for i in 0..r {
        let block = permutation_count(n - i - 1, r - i - 1);
        let position = (remainder / block) as usize;
        remainder %= block;
        permutation.push(available.remove(position));
    }

    Some(permutation)
}
