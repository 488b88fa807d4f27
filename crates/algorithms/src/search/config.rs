//! Search plans for [`search_curves`](super::search_curves)

use crate::ec::CurveOptions;
use capicrypto_params::toy::search::{
    CAPICUA_BASES, DEFAULT_ORDER_SEARCH_RADIUS, DEFAULT_X_MAX, PALINDROME_PRIMES,
};
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which curves to try and how hard to look at each.
///
/// Every candidate is `y² = x³ + base_a²·x + base_b` over 𝔽ₚ for each
/// modulus in `primes` and each pair in `bases`.
///
/// With the `serde` feature the plan (de)serializes with integers written
/// as decimal strings, so moduli wider than 64 bits survive formats such as
/// TOML and JSON. Plain integers are accepted on input as well.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Candidate moduli; composite entries are reported and skipped
    #[cfg_attr(feature = "serde", serde(with = "decimal::seq"))]
    pub primes: Vec<BigUint>,

    /// `(base_a, base_b)` pairs
    #[cfg_attr(feature = "serde", serde(with = "decimal::pairs"))]
    pub bases: Vec<(BigUint, BigUint)>,

    /// Generator scan ceiling
    #[cfg_attr(feature = "serde", serde(with = "decimal"))]
    pub x_max: BigUint,

    /// Order search radius around `p + 1`, clamped to the Hasse bound
    #[cfg_attr(feature = "serde", serde(with = "decimal"))]
    pub search_radius: BigUint,

    /// Skip candidates with `a ≡ 0` or `b ≡ 0`
    pub skip_zero_coefficients: bool,
}

impl SearchConfig {
    /// A plan over the given moduli and bases with default bounds
    pub fn new(primes: Vec<BigUint>, bases: Vec<(BigUint, BigUint)>) -> Self {
        Self {
            primes,
            bases,
            x_max: BigUint::from(DEFAULT_X_MAX),
            search_radius: BigUint::from(DEFAULT_ORDER_SEARCH_RADIUS),
            skip_zero_coefficients: true,
        }
    }

    /// Build a plan from machine words
    pub fn from_u64(primes: &[u64], bases: &[(u64, u64)]) -> Self {
        Self::new(
            primes.iter().copied().map(BigUint::from).collect(),
            bases
                .iter()
                .map(|&(a, b)| (BigUint::from(a), BigUint::from(b)))
                .collect(),
        )
    }

    /// Set the generator scan ceiling
    pub fn with_x_max(mut self, x_max: impl Into<BigUint>) -> Self {
        self.x_max = x_max.into();
        self
    }

    /// Set the order search radius
    pub fn with_search_radius(mut self, radius: impl Into<BigUint>) -> Self {
        self.search_radius = radius.into();
        self
    }

    /// Keep or skip candidates with a zero coefficient
    pub fn with_skip_zero_coefficients(mut self, skip: bool) -> Self {
        self.skip_zero_coefficients = skip;
        self
    }

    /// Number of `(p, base_a, base_b)` combinations in the plan
    pub fn candidate_count(&self) -> usize {
        self.primes.len() * self.bases.len()
    }

    /// The bounds of this plan as options for [`Curve::build`](crate::ec::Curve::build)
    pub fn curve_options(&self) -> CurveOptions {
        CurveOptions {
            x_max: self.x_max.clone(),
            search_radius: self.search_radius.clone(),
            allow_approximate_order: false,
        }
    }
}

impl Default for SearchConfig {
    /// The palindromic primes and coefficient bases with the default bounds
    fn default() -> Self {
        Self::from_u64(&PALINDROME_PRIMES, &CAPICUA_BASES)
    }
}

#[cfg(feature = "serde")]
mod decimal {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// An integer as written in a config file
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(u64),
        Text(String),
    }

    impl Repr {
        fn parse<E: serde::de::Error>(self) -> Result<BigUint, E> {
            match self {
                Repr::Number(n) => Ok(BigUint::from(n)),
                Repr::Text(s) => s
                    .trim()
                    .parse::<BigUint>()
                    .map_err(|e| E::custom(format!("invalid integer {s:?}: {e}"))),
            }
        }
    }

    pub fn serialize<S: Serializer>(n: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(n)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        Repr::deserialize(deserializer)?.parse()
    }

    pub mod seq {
        use super::*;

        pub fn serialize<S: Serializer>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(values.iter().map(|n| n.to_string()))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<BigUint>, D::Error> {
            Vec::<Repr>::deserialize(deserializer)?
                .into_iter()
                .map(Repr::parse)
                .collect()
        }
    }

    pub mod pairs {
        use super::*;

        pub fn serialize<S: Serializer>(
            values: &[(BigUint, BigUint)],
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            let text: Vec<(String, String)> = values
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect();
            text.serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<(BigUint, BigUint)>, D::Error> {
            Vec::<(Repr, Repr)>::deserialize(deserializer)?
                .into_iter()
                .map(|(a, b)| Ok((a.parse::<D::Error>()?, b.parse::<D::Error>()?)))
                .collect::<Result<_, D::Error>>()
        }
    }
}
