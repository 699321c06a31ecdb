//! Centralized Constants
//!
//! Single source of truth for the 88E632x MDIO addressing scheme. Command
//! word bit layouts live in [`crate::smi`]; per-register bit definitions
//! live in [`crate::catalog`].
//!
//! # Bus layout
//!
//! Everything below is an address *on the MDIO bus itself* (5 bits), not a
//! register inside the chip. The switch occupies the upper half of the bus:
//! port MACs at `0x11..=0x19`, Global1 at `0x1B`, Global2 at `0x1C`.

// =============================================================================
// Direct MII Addresses
// =============================================================================

/// MII address of switch port 0; port N answers at `PORT_MII_BASE + N`
pub const PORT_MII_BASE: u8 = 0x11;

/// Highest valid switch port number (ports 0–8 map to 0x11–0x19)
pub const MAX_PORT: u8 = 8;

/// MII address of the Global1 register block
pub const GLOBAL1_MII_ADDR: u8 = 0x1B;

/// MII address of the Global2 register block
pub const GLOBAL2_MII_ADDR: u8 = 0x1C;

// =============================================================================
// Indirect (SMI PHY) Access
// =============================================================================

/// MII address of the indirect-access controller (Global2)
pub const SMI_CTRL_MII_ADDR: u8 = GLOBAL2_MII_ADDR;

/// SMI PHY Command register offset within Global2
pub const SMI_CMD_REG: u8 = 0x18;

/// SMI PHY Data register offset within Global2
pub const SMI_DATA_REG: u8 = 0x19;

/// PHY register selecting the active page (Clause-22 register 22)
pub const PHY_PAGE_REG: u8 = 0x16;

/// Page the PHY powers up on, and the page `Generator::reset` returns to
pub const DEFAULT_PAGE: u8 = 0;

// =============================================================================
// Field Widths
// =============================================================================

/// Maximum valid 5-bit device/port address on the bus
pub const MAX_DEV_ADDR: u8 = 31;

/// Maximum valid 5-bit register address
pub const MAX_REG_ADDR: u8 = 31;
