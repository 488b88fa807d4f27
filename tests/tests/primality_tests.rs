use capicrypto::prelude::*;
use capicrypto_algorithms::primality::{
    miller_rabin, trial_division, MILLER_RABIN_DETERMINISTIC_BOUND, TRIAL_DIVISION_LIMIT,
};
use capicrypto_params::toy::search::PALINDROME_PRIMES;
use num_traits::One;
use proptest::prelude::*;

fn sieve(limit: usize) -> Vec<bool> {
    let mut prime = vec![true; limit];
    prime[0] = false;
    prime[1] = false;
    let mut i = 2;
    while i * i < limit {
        if prime[i] {
            let mut j = i * i;
            while j < limit {
                prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }
    prime
}

#[test]
fn test_is_prime_matches_sieve_across_the_method_switch() {
    let limit = TRIAL_DIVISION_LIMIT as usize + 50_000;
    let expected = sieve(limit);
    for (n, &prime) in expected.iter().enumerate() {
        assert_eq!(is_prime(&BigUint::from(n)), prime, "n = {n}");
    }
}

#[test]
fn test_strategies_agree_around_the_switch() {
    let strategies: [&dyn PrimalityTest; 3] = [&TrialDivision, &MillerRabin, &StandardPrimality];
    let start = TRIAL_DIVISION_LIMIT - 2_000;
    for n in start..TRIAL_DIVISION_LIMIT + 2_000 {
        let n = BigUint::from(n);
        let verdicts: Vec<bool> = strategies.iter().map(|s| s.is_prime(&n)).collect();
        assert!(
            verdicts.iter().all(|&v| v == verdicts[0]),
            "strategies disagree on {n}: {verdicts:?}"
        );
    }
}

#[test]
fn test_palindrome_seeds() {
    let composite: Vec<u64> = PALINDROME_PRIMES
        .iter()
        .copied()
        .filter(|&p| !is_prime(&BigUint::from(p)))
        .collect();
    assert_eq!(composite, vec![14841]);

    let f = factorize(&BigUint::from(14841u32), 1000);
    assert!(f.is_complete());
    assert_eq!(
        f.factors,
        vec![
            (BigUint::from(3u32), 2),
            (BigUint::from(17u32), 1),
            (BigUint::from(97u32), 1)
        ]
    );
}

#[test]
fn test_fifty_digit_numbers() {
    let base = BigUint::from(10u32).pow(49u32);
    let prime = &base + 9u32;
    let composite = &base + 11u32;

    assert_eq!(primality(&prime), Primality::ProbablePrime);
    assert_eq!(primality(&composite), Primality::Composite);
    assert!(miller_rabin(&prime));
    assert!(!miller_rabin(&composite));
}

#[test]
fn test_mersenne_numbers() {
    let mersenne = |e: u32| (BigUint::one() << e) - 1u32;

    // Exponents of Mersenne primes below 128
    let prime_exponents = [2u32, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127];
    for e in 2..=127u32 {
        assert_eq!(
            is_prime(&mersenne(e)),
            prime_exponents.contains(&e),
            "2^{e} - 1"
        );
    }
    assert_eq!(primality(&mersenne(61)), Primality::Prime);
    // Beyond the exact witness range
    assert_eq!(primality(&mersenne(89)), Primality::ProbablePrime);
    assert!(!primality(&mersenne(127)).is_certain());
}

#[test]
fn test_deterministic_bound() {
    let bound = BigUint::from(MILLER_RABIN_DETERMINISTIC_BOUND);
    assert_eq!(primality(&bound), Primality::ProbablePrime);

    // Both factors lie beyond the trial division limit, so the false
    // positive carries over into the factorisation
    let f = factorize(&bound, TRIAL_DIVISION_LIMIT);
    assert_eq!(f.factors, vec![(bound.clone(), 1)]);

    let p = BigUint::from(399_165_290_221u64);
    let q = BigUint::from(798_330_580_441u64);
    assert_eq!(&p * &q, bound);
    assert_eq!(primality(&p), Primality::Prime);
    assert_eq!(primality(&q), Primality::Prime);
}

#[test]
fn test_trial_division_beyond_words() {
    // 2^64 + 1 = 274177 · 67280421310721
    let n = (BigUint::one() << 64u32) + 1u32;
    assert!(!trial_division(&n));
    assert!(!is_prime(&n));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn products_are_composite(a in 2u64..1_000_000, b in 2u64..1_000_000) {
        let n = BigUint::from(a) * BigUint::from(b);
        prop_assert!(!is_prime(&n));
        prop_assert_eq!(primality(&n), Primality::Composite);
    }

    #[test]
    fn factorisation_multiplies_back(n in 1u64..10_000_000) {
        let n = BigUint::from(n);
        let f = factorize(&n, 10_000);
        prop_assert!(f.is_complete());
        let product = f
            .factors
            .iter()
            .fold(BigUint::one(), |acc, (p, e)| acc * p.pow(*e));
        prop_assert_eq!(product, n);
        prop_assert!(f.primes().iter().all(is_prime));
    }
}
