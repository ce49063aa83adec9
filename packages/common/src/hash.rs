//! Message id derivation shared by the bridge and the endpoint.
//!
//! The endpoint stamps every outbound packet with a globally unique id:
//!
//! ```text
//! guid = keccak256(sequence ‖ src_domain ‖ sender ‖ dst_domain ‖ receiver)
//! ```
//!
//! # Byte Layout (80 bytes total, packed, big-endian)
//! - Bytes 0-7:   sequence (u64)
//! - Bytes 8-11:  source domain (u32)
//! - Bytes 12-43: sender identifier (32 bytes)
//! - Bytes 44-47: destination domain (u32)
//! - Bytes 48-79: receiver identifier (32 bytes)

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the message id an endpoint assigns to an outbound packet.
pub fn compute_message_id(
    sequence: u64,
    src_domain: u32,
    sender: &[u8; 32],
    dst_domain: u32,
    receiver: &[u8; 32],
) -> [u8; 32] {
    let mut data = [0u8; 80];
    data[0..8].copy_from_slice(&sequence.to_be_bytes());
    data[8..12].copy_from_slice(&src_domain.to_be_bytes());
    data[12..44].copy_from_slice(sender);
    data[44..48].copy_from_slice(&dst_domain.to_be_bytes());
    data[48..80].copy_from_slice(receiver);
    keccak256(&data)
}

/// Convert 32-byte value to a 0x-prefixed hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
