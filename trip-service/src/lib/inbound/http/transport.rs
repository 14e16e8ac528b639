use auth::TokenPair;
use auth::ACCESS_TOKEN_TTL_SECS;
use auth::REFRESH_TOKEN_TTL_SECS;
use axum::extract::Request;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use serde::Deserialize;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// How clients deliver session tokens back to the service.
///
/// Exactly one strategy is active per process, chosen from configuration
/// at startup. Supporting both at once would widen the attack surface
/// (cookie delivery without CSRF defences, plus header delivery), so the
/// inactive transport is never consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenTransport {
    /// `Authorization: Bearer <token>` header. The default; suited to
    /// programmatic clients.
    #[default]
    Bearer,

    /// httpOnly `access_token` / `refresh_token` cookies. Suited to
    /// browser clients.
    Cookie,
}

impl TokenTransport {
    /// Extract the access token from a request, if present.
    pub fn extract(&self, req: &Request) -> Option<String> {
        match self {
            TokenTransport::Bearer => bearer_token(req).map(|t| t.to_string()),
            TokenTransport::Cookie => cookie_value(req, ACCESS_TOKEN_COOKIE),
        }
    }

    /// Headers a successful signup/login response must carry.
    ///
    /// Empty in bearer mode, where the tokens travel in the response body
    /// only.
    pub fn session_headers(&self, tokens: &TokenPair) -> Vec<(HeaderName, HeaderValue)> {
        match self {
            TokenTransport::Bearer => Vec::new(),
            TokenTransport::Cookie => vec![
                (
                    header::SET_COOKIE,
                    session_cookie(ACCESS_TOKEN_COOKIE, &tokens.access_token, ACCESS_TOKEN_TTL_SECS),
                ),
                (
                    header::SET_COOKIE,
                    session_cookie(
                        REFRESH_TOKEN_COOKIE,
                        &tokens.refresh_token,
                        REFRESH_TOKEN_TTL_SECS,
                    ),
                ),
            ],
        }
    }

    /// Headers a logout response must carry to drop the session.
    pub fn clear_headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        match self {
            TokenTransport::Bearer => Vec::new(),
            TokenTransport::Cookie => vec![
                (header::SET_COOKIE, session_cookie(ACCESS_TOKEN_COOKIE, "", 0)),
                (header::SET_COOKIE, session_cookie(REFRESH_TOKEN_COOKIE, "", 0)),
            ],
        }
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

fn session_cookie(name: &str, value: &str, max_age: i64) -> HeaderValue {
    let cookie = format!("{name}={value}; Max-Age={max_age}; Path=/; HttpOnly; SameSite=Lax");

    // Tokens are base64url, always a valid header value
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with_header(name: header::HeaderName, value: &str) -> Request {
        Request::builder()
            .header(name, value)
            .body(Body::empty())
            .expect("Failed to build request")
    }

    #[test]
    fn test_bearer_extraction() {
        let transport = TokenTransport::Bearer;

        let req = request_with_header(header::AUTHORIZATION, "Bearer abc.def.ghi");
        assert_eq!(transport.extract(&req), Some("abc.def.ghi".to_string()));

        let req = request_with_header(header::AUTHORIZATION, "Basic abc");
        assert_eq!(transport.extract(&req), None);

        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(transport.extract(&req), None);
    }

    #[test]
    fn test_cookie_extraction() {
        let transport = TokenTransport::Cookie;

        let req = request_with_header(
            header::COOKIE,
            "theme=dark; access_token=abc.def.ghi; refresh_token=zzz",
        );
        assert_eq!(transport.extract(&req), Some("abc.def.ghi".to_string()));

        // Cookie transport ignores the Authorization header entirely
        let req = request_with_header(header::AUTHORIZATION, "Bearer abc.def.ghi");
        assert_eq!(transport.extract(&req), None);
    }

    #[test]
    fn test_bearer_sets_no_cookies() {
        let tokens = TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        };

        assert!(TokenTransport::Bearer.session_headers(&tokens).is_empty());
        assert!(TokenTransport::Bearer.clear_headers().is_empty());
    }

    #[test]
    fn test_cookie_session_headers() {
        let tokens = TokenPair {
            access_token: "acc".to_string(),
            refresh_token: "ref".to_string(),
        };

        let headers = TokenTransport::Cookie.session_headers(&tokens);
        assert_eq!(headers.len(), 2);

        let access = headers[0].1.to_str().unwrap();
        assert!(access.contains("access_token=acc"));
        assert!(access.contains("Max-Age=900"));
        assert!(access.contains("HttpOnly"));

        let refresh = headers[1].1.to_str().unwrap();
        assert!(refresh.contains("refresh_token=ref"));
        assert!(refresh.contains("Max-Age=604800"));
    }
}
