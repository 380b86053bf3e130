use rand::seq::SliceRandom;
use rand::Rng;

/// The four large tiles, each available once per draw.
pub const BIG: [u64; 4] = [25, 50, 75, 100];

/// The small tiles: two of each value 1..=10.
pub const LITTLE: [u64; 20] = [
    1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10,
];

/// A random three-digit target.
pub fn draw_target<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(101..1000)
}

/// Draw `big` large and `little` small tiles without replacement, sorted
/// descending. Callers validate that the counts sum to six.
pub fn draw_numbers<R: Rng>(rng: &mut R, big: u32, little: u32) -> [u64; 6] {
    debug_assert_eq!(big + little, 6);
    let mut numbers: Vec<u64> = BIG
        .choose_multiple(rng, big as usize)
        .copied()
        .chain(LITTLE.choose_multiple(rng, little as usize).copied())
        .collect();
    numbers.sort_unstable_by(|a, b| b.cmp(a));
    let mut out = [0u64; 6];
    for (slot, number) in out.iter_mut().zip(numbers) {
        *slot = number;
    }
    out
}
