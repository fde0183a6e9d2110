// --- File: crates/promptdeck_auth/src/token.rs ---
use promptdeck_common::AuthError;

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively.
pub fn extract_bearer_token(authorization_header: &str) -> Result<&str, AuthError> {
    let (scheme, token) = authorization_header
        .trim()
        .split_once(' ')
        .ok_or_else(|| AuthError::Unauthorized("Authorization header is not a bearer token".into()))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::Unauthorized(format!(
            "Unsupported authorization scheme '{}'",
            scheme
        )));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthorized("Bearer token is empty".into()));
    }
    Ok(token)
}
