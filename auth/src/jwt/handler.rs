use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;

/// Algorithms a token may declare. Issued tokens always use HS256; validation
/// admits the whole HMAC family and nothing else, so a token declaring an
/// asymmetric algorithm is rejected before its signature is ever examined.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Issues and validates bearer tokens under a single shared secret.
///
/// The secret is injected at construction and read-only afterwards, so one
/// handler can serve every request task without synchronization.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtHandler {
    /// Create a handler signing with `secret`.
    ///
    /// The secret should be at least 256 bits for HS256. Expiry is checked
    /// with zero leeway.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for `subject_id`, expiring 24 hours from now.
    ///
    /// # Errors
    /// * `SigningFailed` - the claims could not be serialized and signed
    pub fn issue(&self, subject_id: impl ToString) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject_id))
    }

    /// Sign an arbitrary claims payload with HS256.
    ///
    /// # Errors
    /// * `SigningFailed` - the claims could not be serialized and signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// Checks run in a fixed order, each short-circuiting: structure, declared
    /// algorithm, signature, expiry. The subject comes back as parsed claims,
    /// never extracted from an unverified payload.
    ///
    /// # Errors
    /// * `Malformed` - not parseable as a token, or claims of the wrong shape
    /// * `AlgorithmMismatch` - declared algorithm outside the HMAC family
    /// * `SignatureInvalid` - signature does not verify under the secret
    /// * `Expired` - expiry is not in the future
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(token_data.claims)
    }
}
