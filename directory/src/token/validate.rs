// Token Field Validation
//
// Format checks applied at creation and on every correction or update.
// The logo check validates structure (scheme, media type, base64 payload),
// not just the character set.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::constants::{
    LOGO_BASE64_MARKER, LOGO_URI_PREFIX, MAX_LOGO_LENGTH, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH,
};
use super::types::CreatePayload;
use crate::error::{DirectoryError, DirectoryResult};

/// Validate a ticker symbol.
///
/// Both cases are admitted: capitalization changes are a legal update, and
/// uniqueness is case-sensitive anyway.
pub fn validate_symbol(symbol: &str) -> DirectoryResult<()> {
    if symbol.is_empty() {
        return Err(DirectoryError::SymbolEmpty);
    }
    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(DirectoryError::SymbolTooLong);
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DirectoryError::SymbolInvalidChar);
    }
    Ok(())
}

/// Validate a display name.
pub fn validate_name(name: &str) -> DirectoryResult<()> {
    if name.is_empty() {
        return Err(DirectoryError::NameEmpty);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(DirectoryError::NameTooLong);
    }
    Ok(())
}

/// Validate a logo: `data:image/<subtype>;base64,<payload>` with a
/// decodable payload.
pub fn validate_logo(logo: &str) -> DirectoryResult<()> {
    if logo.len() > MAX_LOGO_LENGTH {
        return Err(DirectoryError::LogoTooLarge);
    }

    let rest = logo
        .strip_prefix(LOGO_URI_PREFIX)
        .ok_or(DirectoryError::LogoNotDataUri)?;
    let (subtype, payload) = rest
        .split_once(LOGO_BASE64_MARKER)
        .ok_or(DirectoryError::LogoNotDataUri)?;

    if subtype.is_empty()
        || !subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return Err(DirectoryError::LogoNotDataUri);
    }

    STANDARD
        .decode(payload)
        .map_err(|_| DirectoryError::LogoInvalidBase64)?;

    Ok(())
}

impl CreatePayload {
    /// Validate all fields of a registration payload.
    pub fn validate(&self) -> DirectoryResult<()> {
        validate_symbol(&self.symbol)?;
        validate_name(&self.name)?;
        validate_logo(&self.logo)?;
        Ok(())
    }
}
