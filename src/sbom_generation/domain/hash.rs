use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a composite `algorithm:digest` hash string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashParseError {
    #[error("hash '{0}' has no 'algorithm:' prefix")]
    MissingAlgorithm(String),

    #[error("unknown hash algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("digest of '{0}' is empty or not hexadecimal")]
    InvalidDigest(String),
}

/// Hash algorithms recognised by CycloneDX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b256,
    Blake2b384,
    Blake2b512,
    Blake3,
}

impl HashAlgorithm {
    /// Name as written in a CycloneDX `hashes[].alg` field
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
            HashAlgorithm::Blake2b256 => "BLAKE2b-256",
            HashAlgorithm::Blake2b384 => "BLAKE2b-384",
            HashAlgorithm::Blake2b512 => "BLAKE2b-512",
            HashAlgorithm::Blake3 => "BLAKE3",
        }
    }

    /// Resolves the prefix of a composite hash (`sha256`, `SHA-256`, `sha3_512`,
    /// `blake2b-256`, ...). Case, `-` and `_` are ignored.
    fn from_prefix(prefix: &str) -> Option<Self> {
        let normalized: String = prefix
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        let algorithm = match normalized.as_str() {
            "md5" => HashAlgorithm::Md5,
            "sha1" => HashAlgorithm::Sha1,
            "sha256" => HashAlgorithm::Sha256,
            "sha384" => HashAlgorithm::Sha384,
            "sha512" => HashAlgorithm::Sha512,
            "sha3256" => HashAlgorithm::Sha3_256,
            "sha3384" => HashAlgorithm::Sha3_384,
            "sha3512" => HashAlgorithm::Sha3_512,
            "blake2b256" => HashAlgorithm::Blake2b256,
            "blake2b384" => HashAlgorithm::Blake2b384,
            "blake2b512" => HashAlgorithm::Blake2b512,
            "blake3" => HashAlgorithm::Blake3,
            _ => return None,
        };
        Some(algorithm)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed hash: algorithm plus lowercase hex digest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashValue {
    algorithm: HashAlgorithm,
    content: String,
}

impl HashValue {
    /// Parses `algorithm:digest` as found in lock file `hash` fields.
    ///
    /// # Examples
    /// ```
    /// use poetry_sbom::sbom_generation::domain::{HashAlgorithm, HashValue};
    ///
    /// let hash = HashValue::from_composite_str("sha256:ABCDEF01").unwrap();
    /// assert_eq!(hash.algorithm(), HashAlgorithm::Sha256);
    /// assert_eq!(hash.content(), "abcdef01");
    /// ```
    pub fn from_composite_str(composite: &str) -> Result<Self, HashParseError> {
        let (prefix, digest) = composite
            .split_once(':')
            .ok_or_else(|| HashParseError::MissingAlgorithm(composite.to_string()))?;

        let algorithm = HashAlgorithm::from_prefix(prefix.trim())
            .ok_or_else(|| HashParseError::UnknownAlgorithm(prefix.to_string()))?;

        let digest = digest.trim();
        if digest.is_empty() || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HashParseError::InvalidDigest(composite.to_string()));
        }

        Ok(Self {
            algorithm,
            content: digest.to_ascii_lowercase(),
        })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
