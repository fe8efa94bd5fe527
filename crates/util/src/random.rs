use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use thiserror::Error;

/// Default identifier length.
pub const DEFAULT_SIZE: usize = 8;

/// Default identifier alphabet: ASCII alphanumerics plus `_` and `-`.
pub const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("identifier alphabet is empty")]
    EmptyAlphabet,
}

/// Options for identifier generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdOptions {
    /// Number of characters per identifier. Default is 8.
    pub size: usize,
    /// Characters identifiers are drawn from.
    pub alphabet: String,
}

impl Default for IdOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

/// Produce a random string of `size` characters drawn uniformly from `alphabet`.
///
/// Uses the thread-local RNG; not suitable for anything security related.
/// An empty alphabet yields an empty string.
///
/// # Examples
///
/// ```
/// use webstrates_util::random::{random_string, DEFAULT_ALPHABET};
///
/// let id = random_string(8, DEFAULT_ALPHABET);
/// assert_eq!(id.chars().count(), 8);
/// assert!(id.chars().all(|c| DEFAULT_ALPHABET.contains(c)));
/// ```
pub fn random_string(size: usize, alphabet: &str) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    draw(&mut rand::thread_rng(), size, &chars)
}

fn draw<R: Rng>(rng: &mut R, size: usize, chars: &[char]) -> String {
    (0..size).map(|_| chars[rng.gen_range(0..chars.len())]).collect()
}

/// A reusable identifier generator.
///
/// Uses the xoshiro256** PRNG, so a seeded generator yields a reproducible
/// sequence of identifiers.
///
/// # Examples
///
/// ```
/// use webstrates_util::random::{IdGenerator, IdOptions};
///
/// let mut ids = IdGenerator::new(IdOptions::default(), None).unwrap();
/// let id = ids.next_id();
/// assert_eq!(id.len(), 8);
/// ```
pub struct IdGenerator {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    size: usize,
    alphabet: Vec<char>,
    rng: Xoshiro256StarStar,
}

impl IdGenerator {
    /// Create a generator.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(options: IdOptions, seed: Option<[u8; 32]>) -> Result<Self, IdError> {
        let alphabet: Vec<char> = options.alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(IdError::EmptyAlphabet);
        }
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Ok(Self {
            seed,
            size: options.size,
            alphabet,
            rng: Xoshiro256StarStar::from_seed(seed),
        })
    }

    /// Generate the next identifier.
    pub fn next_id(&mut self) -> String {
        draw(&mut self.rng, self.size, &self.alphabet)
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator")
            .field("size", &self.size)
            .field("alphabet", &self.alphabet.iter().collect::<String>())
            .finish_non_exhaustive()
    }
}
