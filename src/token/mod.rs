mod decoder;
mod encoder;
mod header;
#[allow(clippy::module_inception)]
mod token;

pub use decoder::{decode, decode_unverified, decode_verified, Decoder};
pub use encoder::{encode, encode_with_algorithm, Encoder};
pub use header::{Header, TOKEN_TYPE};
pub use token::TokenData;
