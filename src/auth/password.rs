use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hashing(String),
}

/// Salted one-way password hashing backed by bcrypt. The work factor is
/// injected at construction; tests run at the minimum cost.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Produce a salted digest. bcrypt salts per call, so repeated hashing of
    /// the same input yields different stored hashes.
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    /// Check a presented password against a stored hash. Malformed stored
    /// hashes count as a mismatch rather than an error.
    pub fn verify(&self, stored_hash: &str, plaintext: &str) -> bool {
        bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
    }
}
