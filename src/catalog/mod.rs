//! Bit-Field Catalog
//!
//! Declarative description of every register this tool knows about, keyed
//! by [`RegisterSpace`] and 5-bit address. The tables are `static`, built
//! once at compile time, and never mutated; everything else in the crate
//! treats them as read-only reference data.
//!
//! # Register spaces
//!
//! | Space | Registers | Source |
//! |-------|-----------|--------|
//! | [`RegisterSpace::PhyPage0`] | basic control/status, IDs, copper control | PHY reference, page 0 |
//! | [`RegisterSpace::PhyPage2`] | MAC specific control | PHY reference, page 2 |
//! | [`RegisterSpace::PhyPage5`] | advanced VCT | PHY reference, page 5 |
//! | [`RegisterSpace::PhyPage6`] | packet generation/checking | PHY reference, page 6 |
//! | [`RegisterSpace::PhyPage7`] | cable diagnostics | PHY reference, page 7 |
//! | [`RegisterSpace::SwitchPort`] | per-port registers 0x00–0x1F | switch register reference |
//! | [`RegisterSpace::Global1`] | ATU/VTU/stats machinery at MII 0x1B | Global1 reference |
//! | [`RegisterSpace::Global2`] | interrupts, tables, SMI PHY unit at MII 0x1C | Global2 reference |
//!
//! Catalog lookups only drive *decoding and display*; command generation
//! is parametric over (space, port, address) and consults the catalog
//! solely to refuse addresses that do not exist: a mistyped address must
//! not turn into a plausible write.

mod global1;
mod global2;
mod phy;
mod port;

use crate::error::CatalogError;
use crate::field::BitField;

// =============================================================================
// Register Space
// =============================================================================

/// One logical register space of the 88E632x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSpace {
    /// PHY page 0, basic control and status
    PhyPage0,
    /// PHY page 2, MAC specific control
    PhyPage2,
    /// PHY page 5, advanced VCT
    PhyPage5,
    /// PHY page 6, packet generation and checking
    PhyPage6,
    /// PHY page 7, cable diagnostics
    PhyPage7,
    /// Per-port switch registers, direct at MII `0x11 + port`
    SwitchPort,
    /// Global1 block, direct at MII 0x1B
    Global1,
    /// Global2 block, direct at MII 0x1C
    Global2,
}

impl RegisterSpace {
    /// Every space, in catalog order
    pub const ALL: [RegisterSpace; 8] = [
        RegisterSpace::PhyPage0,
        RegisterSpace::PhyPage2,
        RegisterSpace::PhyPage5,
        RegisterSpace::PhyPage6,
        RegisterSpace::PhyPage7,
        RegisterSpace::SwitchPort,
        RegisterSpace::Global1,
        RegisterSpace::Global2,
    ];

    /// PHY page number, for the paged spaces
    pub const fn page(self) -> Option<u8> {
        match self {
            RegisterSpace::PhyPage0 => Some(0),
            RegisterSpace::PhyPage2 => Some(2),
            RegisterSpace::PhyPage5 => Some(5),
            RegisterSpace::PhyPage6 => Some(6),
            RegisterSpace::PhyPage7 => Some(7),
            _ => None,
        }
    }

    /// The space describing a given PHY page, if the chip documents it
    pub const fn phy_page(page: u8) -> Option<Self> {
        match page {
            0 => Some(RegisterSpace::PhyPage0),
            2 => Some(RegisterSpace::PhyPage2),
            5 => Some(RegisterSpace::PhyPage5),
            6 => Some(RegisterSpace::PhyPage6),
            7 => Some(RegisterSpace::PhyPage7),
            _ => None,
        }
    }

    /// Whether this space is reached through the indirect SMI PHY unit
    pub const fn is_phy(self) -> bool {
        self.page().is_some()
    }

    /// Whether access is parameterized by a port number
    pub const fn takes_port(self) -> bool {
        !matches!(self, RegisterSpace::Global1 | RegisterSpace::Global2)
    }

    /// Datasheet-style display name of the space
    pub const fn name(self) -> &'static str {
        match self {
            RegisterSpace::PhyPage0 => "PHY page 0",
            RegisterSpace::PhyPage2 => "PHY page 2",
            RegisterSpace::PhyPage5 => "PHY page 5",
            RegisterSpace::PhyPage6 => "PHY page 6",
            RegisterSpace::PhyPage7 => "PHY page 7",
            RegisterSpace::SwitchPort => "switch port",
            RegisterSpace::Global1 => "Global1",
            RegisterSpace::Global2 => "Global2",
        }
    }
}

impl core::fmt::Display for RegisterSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Register Descriptor
// =============================================================================

/// One addressable register and its field decomposition
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register {
    /// 5-bit register address within the space
    pub addr: u8,
    /// Datasheet register name
    pub name: &'static str,
    /// Fields in datasheet order (MSB first)
    pub fields: &'static [BitField],
}

impl Register {
    /// Look up a field by exact datasheet name
    pub fn field(&self, name: &str) -> Option<&'static BitField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// =============================================================================
// Lookup API
// =============================================================================

/// All register spaces, in catalog order
pub fn spaces() -> &'static [RegisterSpace] {
    &RegisterSpace::ALL
}

/// The registers documented for a space, in ascending address order
pub fn registers(space: RegisterSpace) -> &'static [Register] {
    match space {
        RegisterSpace::PhyPage0 => phy::PAGE0,
        RegisterSpace::PhyPage2 => phy::PAGE2,
        RegisterSpace::PhyPage5 => phy::PAGE5,
        RegisterSpace::PhyPage6 => phy::PAGE6,
        RegisterSpace::PhyPage7 => phy::PAGE7,
        RegisterSpace::SwitchPort => port::REGISTERS,
        RegisterSpace::Global1 => global1::REGISTERS,
        RegisterSpace::Global2 => global2::REGISTERS,
    }
}

/// Look up one register; fails loudly for addresses the space does not
/// document.
pub fn register(
    space: RegisterSpace,
    addr: u8,
) -> Result<&'static Register, CatalogError> {
    registers(space)
        .iter()
        .find(|r| r.addr == addr)
        .ok_or(CatalogError::UnknownRegister { space, addr })
}

/// The field list of one register
pub fn fields(
    space: RegisterSpace,
    addr: u8,
) -> Result<&'static [BitField], CatalogError> {
    register(space, addr).map(|r| r.fields)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Every table obeys the structural invariants the accessors rely on.
    #[test]
    fn catalog_structural_invariants() {
        for &space in spaces() {
            let regs = registers(space);
            assert!(!regs.is_empty(), "{space} has no registers");

            let mut last_addr = None;
            for reg in regs {
                assert!(reg.addr <= 31, "{space} 0x{:02X}: address > 31", reg.addr);
                if let Some(prev) = last_addr {
                    assert!(reg.addr > prev, "{space}: addresses not ascending");
                }
                last_addr = Some(reg.addr);

                assert!(!reg.fields.is_empty(), "{space} {}: no fields", reg.name);
                let mut covered: u16 = 0;
                for field in reg.fields {
                    let span = field.span;
                    assert!(span.high() <= 15, "{space} {}/{}: bit > 15", reg.name, field.name);
                    assert!(
                        span.high() >= span.low(),
                        "{space} {}/{}: inverted range",
                        reg.name,
                        field.name
                    );
                    assert_eq!(
                        covered & field.mask(),
                        0,
                        "{space} {}/{}: overlapping span",
                        reg.name,
                        field.name
                    );
                    covered |= field.mask();
                }
                // together the spans may not exceed 16 bits; `covered`
                // being a u16 makes that structural, but a register must
                // also not describe the same bit twice (checked above)
            }
        }
    }

    /// Fields are listed MSB-first as in the datasheet.
    #[test]
    fn fields_listed_msb_first() {
        for &space in spaces() {
            for reg in registers(space) {
                let mut last_high = None;
                for field in reg.fields {
                    if let Some(prev) = last_high {
                        assert!(
                            field.span.high() < prev,
                            "{space} {}/{}: fields out of order",
                            reg.name,
                            field.name
                        );
                    }
                    last_high = Some(field.span.high());
                }
            }
        }
    }

    /// Accessor round-trips hold for every field actually in the catalog.
    #[test]
    fn accessor_round_trips_across_catalog() {
        for &space in spaces() {
            for reg in registers(space) {
                for field in reg.fields {
                    for v in [0u16, 0xFFFF, 0xA5A5, 0x5A5A] {
                        // set(get) is the identity
                        assert_eq!(field.set(v, field.get(v)), v);
                        // get(set(x)) recovers x masked to the field width
                        for x in [0u16, 1, 0xFFFF] {
                            let stored = field.get(field.set(v, x));
                            assert_eq!(stored, x & (field.mask() >> field.span.low()));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn known_registers_resolve() {
        assert_eq!(
            register(RegisterSpace::PhyPage0, 0x00).unwrap().name,
            "Copper Control Register"
        );
        assert_eq!(
            register(RegisterSpace::SwitchPort, 0x03).unwrap().name,
            "Switch Identifier Register"
        );
        assert_eq!(
            register(RegisterSpace::Global2, 0x18).unwrap().name,
            "SMI PHY Command Register"
        );
    }

    #[test]
    fn unknown_register_is_an_error() {
        assert_eq!(
            register(RegisterSpace::PhyPage2, 0x00).err(),
            Some(CatalogError::UnknownRegister {
                space: RegisterSpace::PhyPage2,
                addr: 0x00
            })
        );
        assert!(register(RegisterSpace::Global1, 0x10).is_err());
        assert!(register(RegisterSpace::Global2, 0x1E).is_err());
    }

    #[test]
    fn space_helpers() {
        assert_eq!(RegisterSpace::PhyPage5.page(), Some(5));
        assert_eq!(RegisterSpace::SwitchPort.page(), None);
        assert_eq!(RegisterSpace::phy_page(7), Some(RegisterSpace::PhyPage7));
        assert_eq!(RegisterSpace::phy_page(3), None);
        assert!(RegisterSpace::PhyPage0.is_phy());
        assert!(!RegisterSpace::Global1.takes_port());
        assert!(RegisterSpace::SwitchPort.takes_port());
    }

    #[test]
    fn field_lookup_by_name() {
        let reg = register(RegisterSpace::PhyPage0, 0x00).unwrap();
        let field = reg.field("Power Down").unwrap();
        assert_eq!(field.span.high(), 11);
        assert!(reg.field("No Such Field").is_none());
    }
}
