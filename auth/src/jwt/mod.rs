pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use claims::TokenType;
pub use claims::ACCESS_TOKEN_TTL_SECS;
pub use claims::REFRESH_TOKEN_TTL_SECS;
pub use errors::TokenError;
pub use handler::JwtHandler;
