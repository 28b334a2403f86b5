pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::UserClaims;
pub use errors::JwtError;
pub use handler::JwtHandler;

pub use jsonwebtoken::Algorithm;
