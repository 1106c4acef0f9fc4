// Session Token Provider Port

/// Session token source (allows deterministic tokens in tests)
pub trait TokenProvider: Send + Sync {
    /// Generate a new unguessable session token
    fn generate_token(&self) -> String;

    /// Digest stored server-side in place of the raw token
    fn digest(&self, token: &str) -> String;
}
