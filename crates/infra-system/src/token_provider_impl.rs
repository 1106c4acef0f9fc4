// Session token provider implementation
use rand::RngCore;
use sha2::{Digest, Sha256};

use tally_core::port::TokenProvider;

const TOKEN_BYTES: usize = 32;

/// 256-bit random tokens, hex encoded; stored as their SHA-256 digest
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenProvider;

impl RandomTokenProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TokenProvider for RandomTokenProvider {
    fn generate_token(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    fn digest(&self, token: &str) -> String {
        hex::encode(Sha256::digest(token.as_bytes()))
    }
}
