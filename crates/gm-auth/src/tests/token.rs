use crate::{AuthError, Claims, TokenService};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn service() -> TokenService {
    TokenService::new(SECRET, 900, 604_800)
}

fn sign_claims(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

#[test]
fn given_issued_token_when_verified_then_returns_subject() {
    let tokens = service();
    let token = tokens.issue("alice", 900).unwrap();

    let claims = tokens.verify(&token).unwrap();

    assert_eq!(claims.sub, "alice");
    assert!(claims.exp > claims.iat);
}

#[test]
fn given_empty_token_when_verified_then_empty_error() {
    let tokens = service();

    assert!(matches!(
        tokens.verify(""),
        Err(AuthError::EmptyToken { .. })
    ));
    assert!(matches!(
        tokens.verify("   "),
        Err(AuthError::EmptyToken { .. })
    ));
}

#[test]
fn given_garbage_when_verified_then_malformed_error() {
    let tokens = service();

    let result = tokens.verify("not-a-token");

    assert!(matches!(result, Err(AuthError::MalformedToken { .. })));
}

#[test]
fn given_token_signed_with_other_secret_when_verified_then_bad_signature() {
    let tokens = service();
    let claims = Claims {
        sub: "alice".to_string(),
        iat: chrono::Utc::now().timestamp(),
        exp: chrono::Utc::now().timestamp() + 3600,
        jti: "tamper-test".to_string(),
    };
    let forged = sign_claims(&claims, b"another-secret-key-of-32-bytes!!");

    let result = tokens.verify(&forged);

    assert!(matches!(result, Err(AuthError::BadSignature { .. })));
}

#[test]
fn given_expired_token_when_verified_then_expired_error() {
    let tokens = service();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "alice".to_string(),
        iat: now - 120,
        exp: now - 1,
        jti: "expired-test".to_string(),
    };
    let token = sign_claims(&claims, SECRET);

    let result = tokens.verify(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_empty_subject_when_verified_then_invalid_claim() {
    let tokens = service();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: String::new(),
        iat: now,
        exp: now + 3600,
        jti: "empty-sub".to_string(),
    };
    let token = sign_claims(&claims, SECRET);

    let result = tokens.verify(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[test]
fn given_two_issues_for_same_subject_then_token_strings_differ() {
    let tokens = service();

    let first = tokens.issue_access("alice").unwrap();
    let second = tokens.issue_access("alice").unwrap();

    assert_ne!(first, second);
}

#[test]
fn given_refresh_token_when_refreshed_then_new_access_token_keeps_subject() {
    let tokens = service();
    let refresh_token = tokens.issue_refresh("alice").unwrap();

    let access_token = tokens.refresh(&refresh_token).unwrap();

    assert_ne!(access_token, refresh_token);
    let claims = tokens.verify(&access_token).unwrap();
    assert_eq!(claims.sub, "alice");
}

#[test]
fn given_refresh_after_a_delay_then_expiry_moves_forward() {
    let tokens = service();
    let original = tokens.issue_access("alice").unwrap();
    let original_exp = tokens.verify(&original).unwrap().exp;

    std::thread::sleep(std::time::Duration::from_millis(1100));

    let refresh_token = tokens.issue_refresh("alice").unwrap();
    let renewed = tokens.refresh(&refresh_token).unwrap();
    let renewed_claims = tokens.verify(&renewed).unwrap();

    assert!(renewed_claims.exp > original_exp);
    assert_ne!(renewed, original);
}

#[test]
fn given_expired_refresh_token_when_refreshed_then_expired_error() {
    let tokens = service();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "alice".to_string(),
        iat: now - 120,
        exp: now - 1,
        jti: "expired-refresh".to_string(),
    };
    let stale = sign_claims(&claims, SECRET);

    let result = tokens.refresh(&stale);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_access_ttl_then_it_is_reflected_in_exp() {
    let tokens = service();
    let before = chrono::Utc::now().timestamp();

    let token = tokens.issue_access("alice").unwrap();
    let claims = tokens.verify(&token).unwrap();

    // exp lands within a second of iat + ttl
    assert!(claims.exp >= before + 900);
    assert!(claims.exp <= before + 902);
}
