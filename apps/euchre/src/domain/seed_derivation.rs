//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Every shuffle in a game gets its own seed, derived from the single game
//! seed, so a whole game replays from one number.

/// Derive the seed for the `shuffle_no`-th shuffle of a game.
///
/// Shuffle 0 is the dealer-determination shuffle; each round's shuffle follows.
pub fn derive_shuffle_seed(game_seed: u64, shuffle_no: u32) -> u64 {
    // SplitMix64 finalizer over the combined input keeps neighbouring
    // shuffle numbers far apart.
    let mut z = game_seed.wrapping_add((shuffle_no as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
