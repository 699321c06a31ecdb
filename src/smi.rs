//! SMI Command-Word Encodings
//!
//! The 88E632x reaches its internal PHYs through an indirect controller:
//! a 16-bit command word written to the SMI PHY Command register (Global2
//! offset 0x18) triggers a bus cycle, with data staged in the SMI PHY Data
//! register (0x19).
//!
//! Two encodings live here and they are **not interchangeable**, even
//! though they coincide numerically for a Clause-22 read:
//!
//! - [`indirect_smi_word`]: the SMI PHY Command register layout, with a
//!   two-bit opcode at bits 11:10 (`01` = write data, `10` = read data);
//! - [`top_level_mii_word`]: the simplified single-opcode-bit layout
//!   (bit 11 = read, bit 10 = write) used by the standalone command
//!   builder.
//!
//! Keep them as separate functions; unifying them on the strength of the
//! read-opcode coincidence would silently break writes.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::constants::{SMI_CMD_REG, SMI_CTRL_MII_ADDR, SMI_DATA_REG};
use crate::word::format_hex;

// =============================================================================
// Command Word Bit Layout (SMI PHY Command register, Global2 0x18)
// =============================================================================

/// SMI PHY Command register bits
pub mod smi_cmd {
    /// Busy flag; set to issue, self-clears when the cycle completes
    pub const BUSY: u16 = 1 << 15;
    /// Mode flag: 1 = Clause 22, 0 = Clause 45
    pub const CLAUSE_22: u16 = 1 << 12;
    /// Opcode field mask (bits 11:10)
    pub const OP_MASK: u16 = 0b11 << 10;
    /// Opcode shift
    pub const OP_SHIFT: u8 = 10;
    /// Clause-22 write-data opcode
    pub const OP_WRITE: u16 = 0b01 << 10;
    /// Clause-22 read-data opcode
    pub const OP_READ: u16 = 0b10 << 10;
    /// Device (port) address field mask (bits 9:5)
    pub const DEV_MASK: u16 = 0x1F << 5;
    /// Device address shift
    pub const DEV_SHIFT: u8 = 5;
    /// Register address field mask (bits 4:0)
    pub const REG_MASK: u16 = 0x1F;
}

/// Top-level MII builder word bits (distinct layout: one opcode bit each)
pub mod mii_cmd {
    /// Busy flag
    pub const BUSY: u16 = 0x8000;
    /// Clause-22 mode flag
    pub const CLAUSE_22: u16 = 0x1000;
    /// Read opcode bit
    pub const OP_READ: u16 = 0x0800;
    /// Write opcode bit
    pub const OP_WRITE: u16 = 0x0400;
}

// =============================================================================
// Direction
// =============================================================================

/// Bus cycle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Read a register
    Read,
    /// Write a register
    Write,
}

// =============================================================================
// Composers
// =============================================================================

/// Compose the SMI PHY Command word for one indirect register access.
///
/// Layout: Busy | Clause-22 | opcode (bits 11:10) | device (9:5) |
/// register (4:0). Reads carry opcode `10` (word base 0x9800), writes
/// opcode `01` (0x9400). Device and register addresses are masked to
/// their 5-bit fields.
///
/// ```
/// use mv88e632x_mii::smi::{indirect_smi_word, Direction};
///
/// assert_eq!(indirect_smi_word(Direction::Read, 4, 2), 0x9882);
/// assert_eq!(indirect_smi_word(Direction::Write, 0, 0), 0x9400);
/// ```
pub const fn indirect_smi_word(direction: Direction, port: u8, reg_addr: u8) -> u16 {
    let op = match direction {
        Direction::Read => smi_cmd::OP_READ,
        Direction::Write => smi_cmd::OP_WRITE,
    };
    smi_cmd::BUSY
        | smi_cmd::CLAUSE_22
        | op
        | (((port & 0x1F) as u16) << smi_cmd::DEV_SHIFT)
        | ((reg_addr & 0x1F) as u16)
}

/// Compose the top-level MII builder word.
///
/// Same shape as [`indirect_smi_word`] but with single opcode bits
/// (0x0800 = read, 0x0400 = write) instead of a two-bit field. The two
/// encodings agree for Clause-22 reads by accident of the bit values;
/// they differ for nothing else and must stay separate.
pub const fn top_level_mii_word(direction: Direction, phy_addr: u8, reg_addr: u8) -> u16 {
    let op = match direction {
        Direction::Read => mii_cmd::OP_READ,
        Direction::Write => mii_cmd::OP_WRITE,
    };
    mii_cmd::BUSY
        | mii_cmd::CLAUSE_22
        | op
        | (((phy_addr & 0x1F) as u16) << 5)
        | ((reg_addr & 0x1F) as u16)
}

// =============================================================================
// Decoder
// =============================================================================

/// Decoded view of an SMI PHY Command word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmiCommand {
    /// Busy flag state
    pub busy: bool,
    /// True for Clause 22, false for Clause 45
    pub clause_22: bool,
    /// Raw two-bit opcode (bits 11:10)
    pub opcode: u8,
    /// Device / port address (bits 9:5)
    pub dev_addr: u8,
    /// Register address (bits 4:0)
    pub reg_addr: u8,
}

impl SmiCommand {
    /// Break a raw command word into its fields.
    pub const fn decode(word: u16) -> Self {
        Self {
            busy: word & smi_cmd::BUSY != 0,
            clause_22: word & smi_cmd::CLAUSE_22 != 0,
            opcode: ((word & smi_cmd::OP_MASK) >> smi_cmd::OP_SHIFT) as u8,
            dev_addr: ((word & smi_cmd::DEV_MASK) >> smi_cmd::DEV_SHIFT) as u8,
            reg_addr: (word & smi_cmd::REG_MASK) as u8,
        }
    }

    /// Human label of the opcode under the active clause's encoding.
    pub const fn op_label(&self) -> &'static str {
        if self.clause_22 {
            match self.opcode {
                0b01 => "Write Data",
                0b10 => "Read Data",
                _ => "Reserved",
            }
        } else {
            match self.opcode {
                0b00 => "Write Addr",
                0b01 => "Write Data",
                0b10 => "Read Data+",
                _ => "Read Data",
            }
        }
    }
}

// =============================================================================
// Standalone Command Builder Sequence
// =============================================================================

/// Build the standalone indirect read/write sequence for one register,
/// using the top-level MII word encoding.
///
/// This is the "raw" builder with no catalog lookup and no page
/// handling; the caller provides a bare PHY/register address pair. For
/// catalog-checked, page-aware generation use [`crate::command::Generator`].
pub fn top_level_sequence(
    direction: Direction,
    phy_addr: u8,
    reg_addr: u8,
    data: u16,
) -> Vec<String> {
    let cmd = top_level_mii_word(direction, phy_addr, reg_addr);
    let ctrl = format_hex(SMI_CTRL_MII_ADDR as u16, 2);
    let mut out = Vec::new();
    if matches!(direction, Direction::Write) {
        out.push(format!(
            "mii write 0x{ctrl} 0x{} 0x{}",
            format_hex(SMI_DATA_REG as u16, 2),
            format_hex(data, 4)
        ));
    }
    out.push(format!(
        "mii write 0x{ctrl} 0x{} 0x{}",
        format_hex(SMI_CMD_REG as u16, 2),
        format_hex(cmd, 4)
    ));
    if matches!(direction, Direction::Read) {
        out.push(format!(
            "mii read 0x{ctrl} 0x{}",
            format_hex(SMI_DATA_REG as u16, 2)
        ));
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indirect_read_word() {
        // assert the formula, not a hand-picked constant
        assert_eq!(
            indirect_smi_word(Direction::Read, 4, 2),
            0x9800 | (4 << 5) | 2
        );
        assert_eq!(indirect_smi_word(Direction::Read, 0, 0), 0x9800);
    }

    #[test]
    fn indirect_write_word() {
        assert_eq!(indirect_smi_word(Direction::Write, 0, 0), 0x9400);
        assert_eq!(
            indirect_smi_word(Direction::Write, 4, 0x16),
            0x9400 | (4 << 5) | 0x16
        );
    }

    #[test]
    fn indirect_word_masks_addresses() {
        assert_eq!(
            indirect_smi_word(Direction::Read, 0x3F, 0xFF),
            indirect_smi_word(Direction::Read, 0x1F, 0x1F)
        );
    }

    #[test]
    fn top_level_word_formula() {
        assert_eq!(
            top_level_mii_word(Direction::Read, 4, 2),
            0x8000 | 0x1000 | 0x0800 | (4 << 5) | 2
        );
        assert_eq!(
            top_level_mii_word(Direction::Write, 4, 2),
            0x8000 | 0x1000 | 0x0400 | (4 << 5) | 2
        );
    }

    #[test]
    fn encodings_coincide_only_by_accident() {
        // The Clause-22 opcodes happen to land on the same constants in
        // both layouts. Assert each against its own formula so a change
        // to either layout is caught even though the values agree today.
        for (port, reg) in [(0u8, 0u8), (4, 2), (7, 3), (0x1F, 0x1F)] {
            assert_eq!(
                indirect_smi_word(Direction::Read, port, reg),
                0x8000 | 0x1000 | (0b10 << 10) | ((port as u16) << 5) | reg as u16
            );
            assert_eq!(
                top_level_mii_word(Direction::Read, port, reg),
                0x8000 | 0x1000 | 0x0800 | ((port as u16) << 5) | reg as u16
            );
        }
    }

    #[test]
    fn decode_recovers_fields() {
        let cmd = SmiCommand::decode(indirect_smi_word(Direction::Read, 4, 2));
        assert!(cmd.busy);
        assert!(cmd.clause_22);
        assert_eq!(cmd.opcode, 0b10);
        assert_eq!(cmd.dev_addr, 4);
        assert_eq!(cmd.reg_addr, 2);
        assert_eq!(cmd.op_label(), "Read Data");

        let cmd = SmiCommand::decode(indirect_smi_word(Direction::Write, 0x1F, 0x1F));
        assert_eq!(cmd.opcode, 0b01);
        assert_eq!(cmd.op_label(), "Write Data");
        assert_eq!(cmd.dev_addr, 0x1F);
        assert_eq!(cmd.reg_addr, 0x1F);
    }

    #[test]
    fn decode_clause45_labels() {
        let cmd = SmiCommand::decode(0x8000 | (0b11 << 10));
        assert!(!cmd.clause_22);
        assert_eq!(cmd.op_label(), "Read Data");
        let cmd = SmiCommand::decode(0x8000);
        assert_eq!(cmd.op_label(), "Write Addr");
    }

    #[test]
    fn top_level_read_sequence() {
        let lines = top_level_sequence(Direction::Read, 4, 2, 0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "mii write 0x1C 0x18 0x9882");
        assert_eq!(lines[1], "mii read 0x1C 0x19");
    }

    #[test]
    fn top_level_write_sequence() {
        let lines = top_level_sequence(Direction::Write, 4, 2, 0xBEEF);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "mii write 0x1C 0x19 0xBEEF");
        assert_eq!(lines[1], "mii write 0x1C 0x18 0x9482");
    }
}
