//! Error types
//!
//! Errors are organized by domain:
//! - [`CatalogError`]: lookups against the register catalog
//! - [`CommandError`]: command-sequence generation failures
//! - [`SessionError`]: session editing and snapshot restore failures
//!
//! The unified [`Error`] enum wraps both domains and is returned by the
//! fallible entry points. Parsing ([`crate::word::parse_word`]) is
//! deliberately infallible (malformed numeric input decays to 0 so partial
//! typing never errors) and field insertion truncates rather than failing,
//! so neither shows up here.

use crate::catalog::RegisterSpace;

/// Convenience alias for results using the crate [`Error`] type
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Catalog Errors
// =============================================================================

/// Register catalog lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// No register at this address in the given space/page
    UnknownRegister {
        /// Register space the lookup was made against
        space: RegisterSpace,
        /// Requested register address
        addr: u8,
    },
}

impl core::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogError::UnknownRegister { space, addr } => {
                write!(f, "no register 0x{addr:02X} in {space}")
            }
        }
    }
}

// =============================================================================
// Command Generation Errors
// =============================================================================

/// Command-sequence generation errors
///
/// Generation fails loudly instead of emitting a plausible-looking command
/// for a register that does not exist; a malformed sequence pasted into a
/// bootloader console can corrupt switch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Port number outside the chip's 0–8 range
    InvalidPort,
    /// Register address does not fit the 5-bit MDIO register field
    InvalidRegAddr,
    /// A port parameter was given for a space that has none (Global1/Global2)
    PortNotApplicable,
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CommandError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CommandError::InvalidPort => "invalid port number",
            CommandError::InvalidRegAddr => "register address exceeds 5 bits",
            CommandError::PortNotApplicable => "space takes no port parameter",
        }
    }
}

// =============================================================================
// Session Errors
// =============================================================================

/// Session editing and snapshot errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// Named field does not exist in the selected register
    UnknownField,
    /// A stored snapshot line fits neither the selection nor the value shape
    MalformedSnapshot,
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SessionError::UnknownField => f.write_str("no such field in selected register"),
            SessionError::MalformedSnapshot => f.write_str("malformed session snapshot"),
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// Unified error type wrapping all domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Register catalog lookup error
    Catalog(CatalogError),
    /// Command generation error
    Command(CommandError),
    /// Session error
    Session(SessionError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Catalog(e) => write!(f, "catalog error: {e}"),
            Error::Command(e) => write!(f, "command error: {e}"),
            Error::Session(e) => write!(f, "session error: {e}"),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(e: CatalogError) -> Self {
        Error::Catalog(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

impl From<SessionError> for Error {
    fn from(e: SessionError) -> Self {
        Error::Session(e)
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    #[test]
    fn catalog_error_displays_space_and_addr() {
        let err = Error::from(CatalogError::UnknownRegister {
            space: RegisterSpace::PhyPage5,
            addr: 0x1F,
        });
        assert_eq!(err.to_string(), "catalog error: no register 0x1F in PHY page 5");
    }

    #[test]
    fn command_error_round_trips_through_unified_type() {
        let err: Error = CommandError::InvalidPort.into();
        assert_eq!(err, Error::Command(CommandError::InvalidPort));
        assert_eq!(
            err.to_string(),
            "command error: invalid port number"
        );
    }
}
