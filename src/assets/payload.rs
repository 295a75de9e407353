//! The embedded placeholder payload.
//!
//! Every generated icon file receives these exact bytes. The payload is a
//! complete 1x1 RGBA PNG (signature, IHDR, one IDAT chunk, IEND), the
//! smallest image browsers accept in an extension icon slot. It is never
//! decoded or resized; size labels only influence the output filename.

/// Minimal valid PNG written to every icon slot.
///
/// Byte-for-byte stable: tests and the generation report compare output files
/// against this constant exactly, which is what makes reruns idempotent.
pub const PLACEHOLDER_PNG: &[u8] = &[
    // PNG signature
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
    // IHDR: 1x1, 8-bit depth, RGBA
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89,
    // IDAT: one zlib-deflated scanline
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0x7C,
    0xFF, 0xFF, 0x3F, 0x03, 0x00, 0x08, 0xFC, 0x02, 0xFE, 0x8D, 0xFB, 0x9B,
    0xD2,
    // IEND
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Eight-byte signature that opens every PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Whether `bytes` starts with the PNG signature.
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.len() >= PNG_SIGNATURE.len() && bytes[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}
