//! Signing and verification keys for session tokens

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use ag_shared::config::auth::check_token_settings;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// HMAC keys plus the decode rules every token must pass
///
/// Expiry is not part of `validation`: the session validator
/// checks it against an explicit clock after the signature is verified.
pub struct JwtKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
}

impl JwtKeys {
    /// Build keys from configuration
    ///
    /// # Errors
    /// The same secret, lifetime and leeway rules as startup validation:
    /// a misconfigured issuer is fatal before any token is signed.
    pub fn new(config: &TokenConfig) -> Result<Self, DomainError> {
        check_token_settings(
            &config.jwt_secret,
            config.token_ttl_seconds,
            config.leeway_seconds,
            config.production,
        )
        .map_err(|e| DomainError::internal(e.to_string()))?;

        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            header: Header::new(config.algorithm),
            validation,
        })
    }

    /// Sign a claim set
    pub fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verify signature, algorithm, issuer and audience, then return the claims
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::InvalidSignature => "invalid signature",
                    ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                        "unexpected algorithm"
                    }
                    ErrorKind::InvalidIssuer => "wrong issuer",
                    ErrorKind::InvalidAudience => "wrong audience",
                    ErrorKind::MissingRequiredClaim(_) => "missing claim",
                    ErrorKind::Json(_) | ErrorKind::Utf8(_) | ErrorKind::Base64(_) => {
                        "undecodable segment"
                    }
                    _ => "invalid token structure",
                };
                TokenError::malformed(reason)
            })
    }
}
