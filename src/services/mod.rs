pub mod push_service;
pub mod signer;
pub mod transport;
