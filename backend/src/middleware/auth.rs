use crate::auth::verify_jwt;
use crate::config::Config;
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct AuthMiddleware;

/// Pure function to extract and validate club_id from authorization header
fn extract_club_id(auth_header: Option<&str>, jwt_secret: &str) -> Option<Uuid> {
    auth_header
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .and_then(|token| verify_jwt(token, jwt_secret).ok())
        .and_then(|claims| claims.club_id().ok())
}

pub async fn auth_middleware(
    config: axum::extract::State<Config>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract authorization header value
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    // Extract and validate club_id using pure function
    let club_id = extract_club_id(auth_header, &config.jwt_secret);

    // Transform request by adding club_id to extensions
    // Note: This mutation is unavoidable with Axum's design, but isolated
    let (mut parts, body) = req.into_parts();
    parts.extensions.insert(club_id);
    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
