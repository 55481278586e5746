use crate::core::{AppError, AppState};
use axum::extract::State;
use axum::{Error, body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    // Expiry time of the token, i token della piattaforma possono non averla
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
    #[serde(default)]
    pub iat: usize, // Issued at time of the token
    #[serde(rename = "userId")]
    pub user_id: i32,
}

/// Utente autenticato, inserito nelle extension della richiesta dal middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

#[instrument(skip(secret), fields(user_id = %user_id))]
pub fn encode_jwt(user_id: i32, secret: &str) -> Result<String, Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(24);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;
    let claim = Claims {
        iat,
        exp: Some(exp),
        user_id,
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map(|token| {
        info!("JWT token encoded successfully");
        token
    })
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        Error::new("Error in encoding jwt token")
    })
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
    debug!("Decoding JWT token");
    // exp viene verificata solo se presente
    let mut validation = Validation::default();
    validation.required_spec_claims.clear();

    decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
    .map(|data| {
        debug!("JWT token decoded successfully for user: {}", data.claims.user_id);
        data
    })
    .map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e);
        Error::new("Error in decoding jwt token")
    })
}

/// Estrae il token da un header `Authorization: Bearer <token>`
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    // 1. Leggere l'header Authorization, se manca -> 401
    // 2. Estrarre il token dal formato "Bearer <token>"
    // 3. Decodificare il JWT con il segreto configurato
    // 4. Verificare che esista una sessione con esattamente quel token
    // 5. Inserire l'utente autenticato nelle extension
    let auth_header = match req.headers().get(http::header::AUTHORIZATION) {
        Some(header) => header.to_str().map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::unauthorized("Invalid authorization header")
        })?,
        None => {
            warn!("Missing authorization header");
            return Err(AppError::unauthorized(
                "Please add the JWT token to the header",
            ));
        }
    };

    let token = bearer_token(auth_header)
        .ok_or_else(|| {
            warn!("Authorization header is not a bearer token");
            AppError::unauthorized("Expected a Bearer token")
        })?
        .to_string();

    let token_data = decode_jwt(&token, &state.jwt_secret)
        .map_err(|_| AppError::unauthorized("Unable to decode token"))?;

    let session = match state.sessions.find_by_token(&token).await? {
        Some(session) => session,
        None => {
            warn!("No session for user {}", token_data.claims.user_id);
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
    };

    info!("User authenticated: {}", session.user_id);
    req.extensions_mut().insert(AuthenticatedUser {
        user_id: session.user_id,
    });
    Ok(next.run(req).await)
}
