//! Seeds and default bounds for the curve parameter search

/// Default ceiling for the generator scan (`x` runs over `2..X_MAX`)
pub const DEFAULT_X_MAX: u64 = 1000;

/// Default radius of the order search around p + 1
pub const DEFAULT_ORDER_SEARCH_RADIUS: u64 = 200;

/// Palindromic primes of three and five digits.
///
/// 14841 is kept on purpose: it is palindromic but composite (3 × 4947),
/// and searches must reject it as a modulus.
pub const PALINDROME_PRIMES: [u64; 41] = [
    101, 131, 151, 181, 191, // 3 digits
    313, 353, 373, 383, // 3 digits
    727, 757, 787, 797, // 3 digits
    919, 929, // 3 digits
    10301, 10501, 10601, // 5 digits
    11311, 11411, 12421, 12721, // 5 digits
    12821, 13331, 13831, 13931, // 5 digits
    14741, 14841, 15451, 15551, // 5 digits
    16061, 16361, 16561, 16661, // 5 digits
    17471, 17971, 18181, 18481, // 5 digits
    19391, 19891, 19991, // 5 digits
];

/// Coefficient bases `(base_a, base_b)`; curves use a = base_a², b = base_b
pub const CAPICUA_BASES: [(u64, u64); 8] = [
    (1, 1),
    (2, 2),
    (3, 3),
    (5, 5),
    (7, 7),
    (11, 7),
    (7, 11),
    (11, 11),
];
