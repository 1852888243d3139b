// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards subsets enumeration.
use crate::Card;

/// Returns the binomial coefficient for n choose k.
pub fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    let mut result = 1usize;
    for i in 0..k {
        // Exact at every step, the partial product is divisible by i + 1.
        result = result * (n - i) / (i + 1);
    }

    result
}

/// Returns every k-cards subset of the given cards.
///
/// Subsets are enumerated in colexicographic index order (Algorithm L from
/// TAOCP 4a), so the output is deterministic for a fixed input order. The
/// degenerate cases are valid: `k = 0` yields a single empty subset and
/// `k = n` a single full subset, while `k > n` yields nothing.
pub fn combinations(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    let n = cards.len();
    if k > n {
        return Vec::new();
    }
    if k == 0 {
        return vec![Vec::new()];
    }

    let mut c = vec![0usize; k + 3];
    for (i, slot) in c.iter_mut().enumerate().take(k + 1).skip(1) {
        *slot = i - 1;
    }
    c[k + 1] = n;
    c[k + 2] = 0;

    let mut result = Vec::with_capacity(choose(n, k));
    loop {
        result.push(c[1..=k].iter().map(|&i| cards[i]).collect());

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }

    result
}
