//! Command Sequence Generator
//!
//! Turns a validated [`CommandRequest`] into the exact `mii` console lines
//! that perform the access, handling the chip's three access shapes:
//!
//! - direct reads/writes for switch ports (`0x11 + port`), Global1 (0x1B)
//!   and Global2 (0x1C);
//! - indirect PHY access through the SMI PHY Command/Data pair;
//! - the page-select preamble for PHY pages other than the current one.
//!
//! [`Generator`] is stateful for one reason only: it remembers the last
//! PHY page it switched to, so back-to-back requests against the same page
//! are not preceded by redundant preambles. The state is advisory (the
//! hardware's real page register may drift if the operator types their own
//! commands); [`Generator::reset`] resyncs the model to the power-on page.
//!
//! Generation fails loudly for out-of-range ports, 5-bit overflow on
//! register addresses, and addresses the catalog does not document. A
//! plausible-looking sequence for a mistyped register is worse than an
//! error, because the output is destined for a pasted console session.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::{self, RegisterSpace};
use crate::constants::{
    DEFAULT_PAGE, GLOBAL1_MII_ADDR, GLOBAL2_MII_ADDR, MAX_PORT, MAX_REG_ADDR, PHY_PAGE_REG,
    PORT_MII_BASE, SMI_CMD_REG, SMI_CTRL_MII_ADDR, SMI_DATA_REG,
};
use crate::error::{CommandError, Result};
use crate::smi::{indirect_smi_word, Direction};
use crate::word::format_hex;

// =============================================================================
// Request
// =============================================================================

/// One register access to generate commands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandRequest {
    /// Target register space
    pub space: RegisterSpace,
    /// Port number for the per-port and PHY spaces; must be `None` for
    /// Global1/Global2
    pub port: Option<u8>,
    /// 5-bit register address within the space
    pub reg_addr: u8,
    /// Access direction, with the word to write for writes
    pub operation: Operation,
}

/// Requested access direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// Read the register
    Read,
    /// Write the given word to the register
    Write(u16),
}

impl CommandRequest {
    /// Read request against a ported space (PHY page or switch port)
    pub const fn read(space: RegisterSpace, port: u8, reg_addr: u8) -> Self {
        Self { space, port: Some(port), reg_addr, operation: Operation::Read }
    }

    /// Write request against a ported space (PHY page or switch port)
    pub const fn write(space: RegisterSpace, port: u8, reg_addr: u8, value: u16) -> Self {
        Self { space, port: Some(port), reg_addr, operation: Operation::Write(value) }
    }

    /// Read request against Global1 or Global2
    pub const fn global_read(space: RegisterSpace, reg_addr: u8) -> Self {
        Self { space, port: None, reg_addr, operation: Operation::Read }
    }

    /// Write request against Global1 or Global2
    pub const fn global_write(space: RegisterSpace, reg_addr: u8, value: u16) -> Self {
        Self { space, port: None, reg_addr, operation: Operation::Write(value) }
    }

    /// Direction of the access
    pub const fn direction(&self) -> Direction {
        match self.operation {
            Operation::Read => Direction::Read,
            Operation::Write(_) => Direction::Write,
        }
    }

    /// Validate addressing and resolve the port, without consulting the
    /// catalog.
    fn checked_port(&self) -> Result<u8> {
        if self.reg_addr > MAX_REG_ADDR {
            return Err(CommandError::InvalidRegAddr.into());
        }
        if self.space.takes_port() {
            match self.port {
                Some(p) if p <= MAX_PORT => Ok(p),
                _ => Err(CommandError::InvalidPort.into()),
            }
        } else {
            match self.port {
                None => Ok(0),
                Some(_) => Err(CommandError::PortNotApplicable.into()),
            }
        }
    }
}

// =============================================================================
// Script
// =============================================================================

/// An ordered list of console lines ready to paste
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandScript {
    lines: Vec<String>,
}

impl CommandScript {
    /// All lines, comments included
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Only the executable `mii` lines, skipping `#` comments
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|l| !l.starts_with('#'))
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the script is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl core::fmt::Display for CommandScript {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for line in &self.lines {
            if !first {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Stateful, catalog-checked command sequence generator
///
/// Construct with [`Generator::new`], optionally enable comment lines
/// with [`Generator::with_comments`], then feed it [`CommandRequest`]s.
#[derive(Debug, Clone)]
pub struct Generator {
    last_page: u8,
    comments: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator synced to the PHY power-on page, comments off
    pub const fn new() -> Self {
        Self { last_page: DEFAULT_PAGE, comments: false }
    }

    /// Emit `#` comment lines describing each step
    #[must_use]
    pub const fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    /// Page the generator believes the PHY is on
    pub const fn current_page(&self) -> u8 {
        self.last_page
    }

    /// Resync the page model to the power-on default.
    ///
    /// Call after the operator has issued commands of their own, or after
    /// a PHY reset; the next paged request will re-emit its preamble.
    pub fn reset(&mut self) {
        self.last_page = DEFAULT_PAGE;
    }

    /// Generate the console lines for one request.
    ///
    /// Validates the port and register address, refuses registers the
    /// catalog does not document, and for PHY spaces prepends a
    /// page-select preamble when the target page differs from the last
    /// page switched to. The page model is only updated on success.
    pub fn generate(&mut self, request: &CommandRequest) -> Result<CommandScript> {
        let port = request.checked_port()?;
        catalog::register(request.space, request.reg_addr)?;

        let script = match request.space.page() {
            Some(page) => self.generate_phy(request, port, page),
            None => Self::generate_direct(request, port),
        };

        #[cfg(feature = "log")]
        log::debug!(
            "generated {} line(s) for {} reg 0x{:02X}",
            script.len(),
            request.space,
            request.reg_addr
        );

        Ok(script)
    }

    /// Indirect access through the SMI PHY unit, with page preamble.
    fn generate_phy(&mut self, request: &CommandRequest, port: u8, page: u8) -> CommandScript {
        let mut script = CommandScript::default();
        let ctrl = format_hex(SMI_CTRL_MII_ADDR as u16, 2);
        let cmd_reg = format_hex(SMI_CMD_REG as u16, 2);
        let data_reg = format_hex(SMI_DATA_REG as u16, 2);

        if page != self.last_page {
            if self.comments {
                script.push(format!("# Set page to {page}"));
            }
            script.push(format!(
                "mii write 0x{ctrl} 0x{data_reg} 0x{}",
                format_hex(page as u16, 4)
            ));
            let page_cmd = indirect_smi_word(Direction::Write, port, PHY_PAGE_REG);
            script.push(format!(
                "mii write 0x{ctrl} 0x{cmd_reg} 0x{}",
                format_hex(page_cmd, 4)
            ));
        }

        let reg = format_hex(request.reg_addr as u16, 2);
        match request.operation {
            Operation::Read => {
                if self.comments {
                    script.push(format!("# Read register 0x{reg}"));
                }
                let cmd = indirect_smi_word(Direction::Read, port, request.reg_addr);
                script.push(format!(
                    "mii write 0x{ctrl} 0x{cmd_reg} 0x{}",
                    format_hex(cmd, 4)
                ));
                script.push(format!("mii read 0x{ctrl} 0x{data_reg}"));
            }
            Operation::Write(value) => {
                let value = format_hex(value, 4);
                if self.comments {
                    script.push(format!("# Write 0x{value} to register 0x{reg}"));
                }
                script.push(format!("mii write 0x{ctrl} 0x{data_reg} 0x{value}"));
                let cmd = indirect_smi_word(Direction::Write, port, request.reg_addr);
                script.push(format!(
                    "mii write 0x{ctrl} 0x{cmd_reg} 0x{}",
                    format_hex(cmd, 4)
                ));
            }
        }

        self.last_page = page;
        script
    }

    /// Direct access for switch ports and the global blocks.
    fn generate_direct(request: &CommandRequest, port: u8) -> CommandScript {
        let mii_addr = match request.space {
            RegisterSpace::SwitchPort => PORT_MII_BASE + port,
            RegisterSpace::Global1 => GLOBAL1_MII_ADDR,
            _ => GLOBAL2_MII_ADDR,
        };
        let addr = format_hex(mii_addr as u16, 2);
        let reg = format_hex(request.reg_addr as u16, 2);

        let mut script = CommandScript::default();
        match request.operation {
            Operation::Read => {
                script.push(format!("mii read 0x{addr} 0x{reg}"));
            }
            Operation::Write(value) => {
                script.push(format!("mii write 0x{addr} 0x{reg} 0x{}", format_hex(value, 4)));
            }
        }
        script
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, Error};
    extern crate std;
    use alloc::format;
    use std::string::ToString;
    use std::vec::Vec;

    #[test]
    fn phy_page0_read_needs_no_preamble() {
        let mut generator = Generator::new();
        let script = generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage0, 4, 0x01))
            .unwrap();
        let expected = 0x9800 | (4 << 5) | 0x01;
        assert_eq!(script.lines().len(), 2);
        assert_eq!(
            script.lines()[0],
            format!("mii write 0x1C 0x18 0x{expected:04X}")
        );
        assert_eq!(script.lines()[1], "mii read 0x1C 0x19");
    }

    #[test]
    fn phy_write_stages_data_before_command() {
        let mut generator = Generator::new();
        let script = generator
            .generate(&CommandRequest::write(RegisterSpace::PhyPage0, 0, 0x00, 0x8000))
            .unwrap();
        assert_eq!(script.lines().len(), 2);
        assert_eq!(script.lines()[0], "mii write 0x1C 0x19 0x8000");
        assert_eq!(script.lines()[1], "mii write 0x1C 0x18 0x9400");
    }

    #[test]
    fn page_switch_emits_preamble_once() {
        let mut generator = Generator::new();
        let first = generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage5, 4, 0x17))
            .unwrap();
        // page select: data word 0x0005, then write command targeting
        // PHY register 0x16 on port 4
        let page_cmd = 0x9400 | (4 << 5) | 0x16;
        assert_eq!(first.lines()[0], "mii write 0x1C 0x19 0x0005");
        assert_eq!(
            first.lines()[1],
            format!("mii write 0x1C 0x18 0x{page_cmd:04X}")
        );
        assert_eq!(first.lines().len(), 4);

        // same page again: no preamble
        let second = generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage5, 4, 0x17))
            .unwrap();
        assert_eq!(second.lines().len(), 2);
        assert_eq!(generator.current_page(), 5);
    }

    #[test]
    fn returning_to_page0_also_needs_a_preamble() {
        let mut generator = Generator::new();
        generator.generate(&CommandRequest::read(RegisterSpace::PhyPage6, 2, 0x10))
            .unwrap();
        let back = generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage0, 2, 0x00))
            .unwrap();
        assert_eq!(back.lines()[0], "mii write 0x1C 0x19 0x0000");
        assert_eq!(back.lines().len(), 4);
    }

    #[test]
    fn reset_forgets_the_page() {
        let mut generator = Generator::new();
        generator.generate(&CommandRequest::read(RegisterSpace::PhyPage7, 0, 0x15))
            .unwrap();
        assert_eq!(generator.current_page(), 7);
        generator.reset();
        assert_eq!(generator.current_page(), DEFAULT_PAGE);
        let script = generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage7, 0, 0x15))
            .unwrap();
        // preamble re-emitted
        assert_eq!(script.lines().len(), 4);
    }

    #[test]
    fn failed_generation_leaves_page_state_untouched() {
        let mut generator = Generator::new();
        // PhyPage5 only documents register 0x17
        assert!(generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage5, 0, 0x10))
            .is_err());
        assert_eq!(generator.current_page(), DEFAULT_PAGE);
    }

    #[test]
    fn switch_port_access_is_direct() {
        let mut generator = Generator::new();
        let script = generator
            .generate(&CommandRequest::write(RegisterSpace::SwitchPort, 3, 0x04, 0x4003))
            .unwrap();
        assert_eq!(script.lines(), ["mii write 0x14 0x04 0x4003"]);

        let script = generator
            .generate(&CommandRequest::read(RegisterSpace::SwitchPort, 8, 0x00))
            .unwrap();
        assert_eq!(script.lines(), ["mii read 0x19 0x00"]);
    }

    #[test]
    fn global_access_is_direct() {
        let mut generator = Generator::new();
        let script = generator
            .generate(&CommandRequest::global_read(RegisterSpace::Global1, 0x0B))
            .unwrap();
        assert_eq!(script.lines(), ["mii read 0x1B 0x0B"]);

        let script = generator
            .generate(&CommandRequest::global_write(RegisterSpace::Global2, 0x19, 0xBEEF))
            .unwrap();
        assert_eq!(script.lines(), ["mii write 0x1C 0x19 0xBEEF"]);
    }

    #[test]
    fn port_out_of_range_is_refused() {
        let mut generator = Generator::new();
        let err = generator
            .generate(&CommandRequest::read(RegisterSpace::SwitchPort, 9, 0x00))
            .unwrap_err();
        assert_eq!(err, Error::Command(CommandError::InvalidPort));
    }

    #[test]
    fn reg_addr_over_five_bits_is_refused() {
        let mut generator = Generator::new();
        let err = generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage0, 0, 0x20))
            .unwrap_err();
        assert_eq!(err, Error::Command(CommandError::InvalidRegAddr));
    }

    #[test]
    fn port_on_global_space_is_refused() {
        let mut generator = Generator::new();
        let err = generator
            .generate(&CommandRequest::read(RegisterSpace::Global1, 0, 0x00))
            .unwrap_err();
        assert_eq!(err, Error::Command(CommandError::PortNotApplicable));
    }

    #[test]
    fn undocumented_register_is_refused() {
        let mut generator = Generator::new();
        let err = generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage0, 0, 0x04))
            .unwrap_err();
        assert_eq!(
            err,
            Error::Catalog(CatalogError::UnknownRegister {
                space: RegisterSpace::PhyPage0,
                addr: 0x04
            })
        );
    }

    #[test]
    fn comments_annotate_each_step() {
        let mut generator = Generator::new().with_comments(true);
        let script = generator
            .generate(&CommandRequest::write(RegisterSpace::PhyPage5, 1, 0x17, 0x8000))
            .unwrap();
        assert_eq!(script.lines()[0], "# Set page to 5");
        assert_eq!(script.lines()[3], "# Write 0x8000 to register 0x17");

        let commands: Vec<&str> = script.commands().collect();
        assert_eq!(commands.len(), 4);
        assert!(commands.iter().all(|l| l.starts_with("mii ")));
    }

    #[test]
    fn display_joins_lines_with_newlines() {
        let mut generator = Generator::new();
        let script = generator
            .generate(&CommandRequest::read(RegisterSpace::PhyPage0, 4, 0x01))
            .unwrap();
        let text = script.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.ends_with('\n'));
    }
}
