mod bcrypt_hasher;
mod hmac_session_tokens;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use hmac_session_tokens::HmacSessionTokens;
