//! Token Field Limits
//!
//! Defines limits and format markers for token metadata fields.

// ===== Field Limits =====

/// Maximum length of a token symbol (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 9;

/// Maximum length of a token display name (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum length of an encoded logo data URI (bytes)
pub const MAX_LOGO_LENGTH: usize = 65_536;

// ===== Logo Format =====

/// Required scheme and type prefix of a logo data URI
pub const LOGO_URI_PREFIX: &str = "data:image/";

/// Separator between the media type and the base64 payload
pub const LOGO_BASE64_MARKER: &str = ";base64,";
