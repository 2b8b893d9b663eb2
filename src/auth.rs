use axum::http::{header, HeaderMap};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

pub const SESSION_COOKIE_NAME: &str = "session_token";

type HmacSha256 = Hmac<Sha256>;

/// Who is practicing. Ephemeral learners (demo or guest sessions) have no stored identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Learner {
    Registered { id: i64, tier_id: i64 },
    Ephemeral { tier_id: i64 },
}

impl Learner {
    pub fn tier_id(&self) -> i64 {
        match self {
            Learner::Registered { tier_id, .. } | Learner::Ephemeral { tier_id } => *tier_id,
        }
    }

    pub fn registered_id(&self) -> Option<i64> {
        match self {
            Learner::Registered { id, .. } => Some(*id),
            Learner::Ephemeral { .. } => None,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Learner::Ephemeral { .. })
    }
}

/// Per-request session state, decoded from the session token and handed to every core call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub session_id: String,
    pub learner: Learner,
    pub username: String,
    #[serde(default)]
    pub age: Option<i64>,
}

impl SessionContext {
    pub fn registered(id: i64, tier_id: i64, username: impl Into<String>, age: Option<i64>) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            learner: Learner::Registered { id, tier_id },
            username: username.into(),
            age,
        }
    }

    pub fn ephemeral(tier_id: i64, username: impl Into<String>) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            learner: Learner::Ephemeral { tier_id },
            username: username.into(),
            age: None,
        }
    }

    pub fn tier_id(&self) -> i64 {
        self.learner.tier_id()
    }

    pub fn is_ephemeral(&self) -> bool {
        self.learner.is_ephemeral()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("session expired")]
    Expired,
    #[error("invalid SESSION_EXPIRES_IN")]
    InvalidExpiresIn,
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    session: SessionContext,
    iat: i64,
    exp: i64,
}

pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = get_cookie(headers, SESSION_COOKIE_NAME) {
        return Some(token);
    }

    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())?;

    auth_header
        .strip_prefix("Bearer ")
        .map(|value| value.to_string())
}

pub fn sign_session_token(
    session: &SessionContext,
    secret: &str,
    ttl_ms: i64,
) -> Result<(String, DateTime<Utc>), AuthError> {
    let issued_at = Utc::now();
    let expires_at = issued_at
        .checked_add_signed(chrono::Duration::milliseconds(ttl_ms))
        .ok_or(AuthError::InvalidExpiresIn)?;

    let claims = SessionClaims {
        session: session.clone(),
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };

    let header_json = serde_json::json!({ "alg": "HS256", "typ": "JWT" });
    let header_b64 = URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(&header_json).map_err(|_| AuthError::InvalidToken)?);
    let payload_b64 =
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).map_err(|_| AuthError::InvalidToken)?);
    let signing_input = format!("{header_b64}.{payload_b64}");

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::InvalidToken)?;
    mac.update(signing_input.as_bytes());
    let sig_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok((format!("{signing_input}.{sig_b64}"), expires_at))
}

pub fn verify_session_token(token: &str, secret: &str) -> Result<SessionContext, AuthError> {
    let mut parts = token.split('.');
    let header_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    let payload_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    let sig_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    if parts.next().is_some() {
        return Err(AuthError::InvalidToken);
    }

    let sig_bytes = URL_SAFE_NO_PAD
        .decode(sig_b64.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::InvalidToken)?;
    mac.update(format!("{header_b64}.{payload_b64}").as_bytes());
    mac.verify_slice(&sig_bytes)
        .map_err(|_| AuthError::InvalidToken)?;

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_b64.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;
    let header_json: serde_json::Value =
        serde_json::from_slice(&header_bytes).map_err(|_| AuthError::InvalidToken)?;
    if header_json.get("alg").and_then(|value| value.as_str()) != Some("HS256") {
        return Err(AuthError::InvalidToken);
    }

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_b64.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;
    let claims: SessionClaims =
        serde_json::from_slice(&payload_bytes).map_err(|_| AuthError::InvalidToken)?;

    if Utc::now().timestamp() >= claims.exp {
        return Err(AuthError::Expired);
    }

    Ok(claims.session)
}

pub fn parse_expires_in_ms(value: &str) -> Result<i64, AuthError> {
    let trimmed = value.trim();
    let (split, unit) = trimmed
        .char_indices()
        .last()
        .ok_or(AuthError::InvalidExpiresIn)?;
    let digits = &trimmed[..split];

    let amount: i64 = digits.parse().map_err(|_| AuthError::InvalidExpiresIn)?;
    if amount <= 0 {
        return Err(AuthError::InvalidExpiresIn);
    }

    let unit_ms: i64 = match unit {
        's' => 1000,
        'm' => 60 * 1000,
        'h' => 60 * 60 * 1000,
        'd' => 24 * 60 * 60 * 1000,
        _ => return Err(AuthError::InvalidExpiresIn),
    };
    amount
        .checked_mul(unit_ms)
        .ok_or(AuthError::InvalidExpiresIn)
}

pub fn session_cookie(token: &str, ttl_ms: i64) -> String {
    format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl_ms / 1000
    )
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trips_learner_variant() {
        let session = SessionContext::registered(7, 4, "ada", Some(12));
        let (token, _) = sign_session_token(&session, SECRET, 60_000).unwrap();
        let decoded = verify_session_token(&token, SECRET).unwrap();
        assert_eq!(decoded, session);
        assert_eq!(decoded.learner.registered_id(), Some(7));
    }

    #[test]
    fn ephemeral_session_has_no_learner_id() {
        let session = SessionContext::ephemeral(2, "Demo User");
        let (token, _) = sign_session_token(&session, SECRET, 60_000).unwrap();
        let decoded = verify_session_token(&token, SECRET).unwrap();
        assert!(decoded.is_ephemeral());
        assert_eq!(decoded.learner.registered_id(), None);
        assert_eq!(decoded.tier_id(), 2);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let session = SessionContext::ephemeral(3, "Demo User");
        let (token, _) = sign_session_token(&session, "other", 60_000).unwrap();
        assert_eq!(
            verify_session_token(&token, SECRET),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let session = SessionContext::ephemeral(3, "Demo User");
        let (token, _) = sign_session_token(&session, SECRET, 60_000).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = URL_SAFE_NO_PAD.encode(br#"{"sessionId":"x","learner":{"kind":"registered","id":1,"tier_id":6},"username":"x","iat":0,"exp":99999999999}"#);
        parts[1] = &forged;
        assert_eq!(
            verify_session_token(&parts.join("."), SECRET),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let session = SessionContext::ephemeral(3, "Demo User");
        let (token, _) = sign_session_token(&session, SECRET, -1_000).unwrap();
        assert_eq!(verify_session_token(&token, SECRET), Err(AuthError::Expired));
    }

    #[test]
    fn parses_expires_in_units() {
        assert_eq!(parse_expires_in_ms("30s"), Ok(30_000));
        assert_eq!(parse_expires_in_ms("24h"), Ok(86_400_000));
        assert_eq!(parse_expires_in_ms("2d"), Ok(172_800_000));
        assert!(parse_expires_in_ms("h").is_err());
        assert!(parse_expires_in_ms("0m").is_err());
        assert!(parse_expires_in_ms("5w").is_err());
        assert!(parse_expires_in_ms("").is_err());
    }

    #[test]
    fn rejects_non_ascii_unit_and_overflowing_amount() {
        assert_eq!(parse_expires_in_ms("24é"), Err(AuthError::InvalidExpiresIn));
        assert_eq!(parse_expires_in_ms("é"), Err(AuthError::InvalidExpiresIn));
        assert_eq!(
            parse_expires_in_ms("9223372036854775807d"),
            Err(AuthError::InvalidExpiresIn)
        );
        assert_eq!(
            parse_expires_in_ms("9223372036854775s"),
            Ok(9_223_372_036_854_775_000)
        );
    }

    #[test]
    fn extracts_token_from_cookie_before_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session_token=abc"),
        );
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));
        assert_eq!(extract_token(&headers).as_deref(), Some("abc"));

        headers.remove(header::COOKIE);
        assert_eq!(extract_token(&headers).as_deref(), Some("xyz"));
    }
}
