//! Symmetric key generation for CAS crypto settings
//!
//! CAS signs and encrypts its ticket-granting cookie and webflow state with
//! keys supplied through configuration properties. Each key is random bytes
//! from the operating system RNG, encoded as unpadded base64url (the JWK
//! octet-key form CAS reads).

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{Error, Result};

/// Bit length used when a spec names no size
pub const DEFAULT_BITS: usize = 512;

/// Largest bit length a spec may request
pub const MAX_BITS: usize = 8192;

/// A configuration property and the size of the key it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub property: String,
    pub bits: usize,
}

impl KeySpec {
    pub fn new(property: impl Into<String>, bits: usize) -> Self {
        Self {
            property: property.into(),
            bits,
        }
    }

    /// Parse `property` or `property:bits`.
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |message: &str| Error::KeySpec {
            spec: spec.to_string(),
            message: message.to_string(),
        };

        let (property, bits) = match spec.rsplit_once(':') {
            Some((property, bits)) => {
                let bits = bits
                    .parse::<usize>()
                    .map_err(|_| invalid("bit length must be a number"))?;
                (property, bits)
            }
            None => (spec, DEFAULT_BITS),
        };

        if property.trim().is_empty() {
            return Err(invalid("property name is empty"));
        }
        if bits == 0 || bits % 8 != 0 {
            return Err(invalid("bit length must be a positive multiple of 8"));
        }
        if bits > MAX_BITS {
            return Err(invalid(&format!("bit length must not exceed {}", MAX_BITS)));
        }
        Ok(Self::new(property.trim(), bits))
    }
}

/// The keys a fresh CAS deployment needs
pub fn default_key_specs() -> Vec<KeySpec> {
    vec![
        KeySpec::new("cas.tgc.crypto.signing.key", 512),
        KeySpec::new("cas.tgc.crypto.encryption.key", 256),
        KeySpec::new("cas.webflow.crypto.signing.key", 512),
        KeySpec::new("cas.webflow.crypto.encryption.key", 128),
    ]
}

/// A generated key, rendered as a properties line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    pub property: String,
    pub value: String,
}

impl fmt::Display for GeneratedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.property, self.value)
    }
}

pub fn generate(spec: &KeySpec) -> GeneratedKey {
    let mut bytes = vec![0u8; spec.bits / 8];
    OsRng.fill_bytes(&mut bytes);
    GeneratedKey {
        property: spec.property.clone(),
        value: URL_SAFE_NO_PAD.encode(&bytes),
    }
}
