pub mod error;
pub mod identity;
pub mod role;
pub mod token;

pub use error::DecodeError;
pub use identity::Identity;
pub use role::{Role, UnknownRole, ROLE_ADMIN, ROLE_STUDENT, ROLE_TEACHER};
pub use token::decode_identity;
