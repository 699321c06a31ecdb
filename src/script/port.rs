//! Per-port configuration script

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::word::format_hex;

/// Spanning-tree port state, carried at bits 3:2 of the emitted data
/// word (`0x0400 | state << 2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortState {
    /// Port disabled
    Disabled = 0,
    /// Blocking / listening
    Blocking = 1,
    /// Learning
    Learning = 2,
    /// Forwarding
    #[default]
    Forwarding = 3,
}

impl PortState {
    /// Label used in script comments
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Blocking => "Blocking",
            Self::Learning => "Learning",
            Self::Forwarding => "Forwarding",
        }
    }
}

/// Basic bring-up sequence for one switch port.
///
/// Writes the Port Control state, the default VID and optionally the trunk
/// enable bit, all through the indirect SMI window at Global2. The device
/// address used in the command words is the PHY address, while the port
/// number only appears in the header comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSetup {
    phy_addr: u8,
    port: u8,
    state: PortState,
    vid: u16,
    trunk: bool,
}

impl PortSetup {
    /// Setup for `port` reached through `phy_addr`, defaulting to
    /// forwarding state on VID 1 with trunking off.
    pub const fn new(phy_addr: u8, port: u8) -> Self {
        Self {
            phy_addr: phy_addr & 0x1F,
            port: port & 0x07,
            state: PortState::Forwarding,
            vid: 1,
            trunk: false,
        }
    }

    /// Spanning-tree state to program
    #[must_use]
    pub const fn with_state(mut self, state: PortState) -> Self {
        self.state = state;
        self
    }

    /// Default VID (masked to 12 bits)
    #[must_use]
    pub const fn with_vid(mut self, vid: u16) -> Self {
        self.vid = vid & 0x0FFF;
        self
    }

    /// Enable trunk membership for this port
    #[must_use]
    pub const fn with_trunk(mut self, trunk: bool) -> Self {
        self.trunk = trunk;
        self
    }

    /// Render the configuration sequence.
    pub fn build(&self) -> Vec<String> {
        let pa = u16::from(self.phy_addr);
        let mut lines = Vec::new();
        lines.push(format!("# ---- Port {} Configuration ----", self.port));

        lines.push(format!("# Set port state to {}", self.state.name()));
        let state_word = 0x0400 | ((self.state as u16) << 2);
        lines.push(format!("mii write 0x1C 0x19 0x{}", format_hex(state_word, 4)));
        lines.push(format!(
            "mii write 0x1C 0x18 0x{}",
            format_hex(0x9400 | (pa << 5) | 0x04, 4)
        ));

        lines.push(String::new());
        lines.push(format!("# Set VLAN ID to {}", self.vid));
        lines.push(format!("mii write 0x1C 0x19 0x{}", format_hex(self.vid, 4)));
        lines.push(format!(
            "mii write 0x1C 0x18 0x{}",
            format_hex(0x9400 | (pa << 5) | 0x06, 4)
        ));

        if self.trunk {
            lines.push(String::new());
            lines.push(String::from("# Enable trunk mode"));
            lines.push(String::from("mii write 0x1C 0x19 0x8000"));
            lines.push(format!(
                "mii write 0x1C 0x18 0x{}",
                format_hex(0x9400 | (pa << 5) | 0x08, 4)
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarding_setup_writes_state_and_vid() {
        let lines = PortSetup::new(0x11, 0).with_vid(100).build();
        assert_eq!(
            lines,
            [
                "# ---- Port 0 Configuration ----",
                "# Set port state to Forwarding",
                "mii write 0x1C 0x19 0x040C",
                "mii write 0x1C 0x18 0x9624",
                "",
                "# Set VLAN ID to 100",
                "mii write 0x1C 0x19 0x0064",
                "mii write 0x1C 0x18 0x9626",
            ]
        );
    }

    #[test]
    fn trunk_enable_appends_a_third_block() {
        let lines = PortSetup::new(0x12, 1).with_trunk(true).build();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[9], "# Enable trunk mode");
        assert_eq!(lines[10], "mii write 0x1C 0x19 0x8000");
        assert_eq!(lines[11], "mii write 0x1C 0x18 0x9648");
    }

    #[test]
    fn each_state_encodes_in_bits_3_2() {
        for (state, word) in [
            (PortState::Disabled, 0x0400u16),
            (PortState::Blocking, 0x0404),
            (PortState::Learning, 0x0408),
            (PortState::Forwarding, 0x040C),
        ] {
            let lines = PortSetup::new(0, 0).with_state(state).build();
            assert_eq!(lines[2], format!("mii write 0x1C 0x19 0x{word:04X}"));
        }
    }

    #[test]
    fn addresses_are_masked_on_construction() {
        let lines = PortSetup::new(0x31, 0x09).build();
        assert_eq!(lines[0], "# ---- Port 1 Configuration ----");
        // 0x31 & 0x1F = 0x11
        assert_eq!(lines[3], "mii write 0x1C 0x18 0x9624");
    }
}
