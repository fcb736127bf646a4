//! # Ceremony Types
//!
//! Rust type definitions for the client side of a webauthn ceremony:
//!
//! * [`encoding`], the codec every opaque binary value goes through before it touches the wire,
//! * [`webauthn`], the options handed to a platform authenticator and the credentials it returns,
//! * [`wire`], the JSON bodies exchanged with the Relying Party's start and finish endpoints.

mod utils;

pub mod webauthn;
pub mod wire;

// Re-exports
pub use utils::{bytes::Bytes, encoding};
