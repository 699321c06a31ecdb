//! Port statistics readout script

use alloc::format;
use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::word::format_hex;

/// Counter slots read by the sequence, in emission order.
const COUNTERS: &[(u16, &str, &str)] = &[
    (0, "RX Good Frames", "RX_GOOD"),
    (1, "TX Good Frames", "TX_GOOD"),
    (2, "RX Errors", "RX_ERR"),
    (3, "Collisions", "COLL"),
];

/// Shell sequence that captures the four basic counters of one port.
///
/// Each counter is selected with an indirect stats command word
/// (`0x9C00 | (phy << 5) | counter`) and the result is read back from the
/// SMI PHY Data register into a shell variable. As with [`PortSetup`], the
/// command words carry the PHY address and the port number is informational.
///
/// [`PortSetup`]: super::PortSetup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsReadout {
    phy_addr: u8,
    port: u8,
}

impl StatsReadout {
    /// Readout for `port` reached through `phy_addr`.
    pub const fn new(phy_addr: u8, port: u8) -> Self {
        Self {
            phy_addr: phy_addr & 0x1F,
            port: port & 0x07,
        }
    }

    /// Render the capture sequence.
    pub fn build(&self) -> Vec<String> {
        let pa = u16::from(self.phy_addr);
        let mut lines = Vec::new();
        lines.push(format!("# ---- Port {} Statistics ----", self.port));
        lines.push("echo 'Reading port statistics...'".to_string());
        for (counter, label, var) in COUNTERS {
            lines.push(String::new());
            lines.push(format!("# {label}"));
            lines.push(format!(
                "mii write 0x1C 0x18 0x{}",
                format_hex(0x9C00 | (pa << 5) | counter, 4)
            ));
            lines.push(format!("{var}=$(mii read 0x1C 0x19 | tail -n1)"));
            lines.push(format!("echo \"{label}: ${var}\""));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_covers_all_four_counters() {
        let lines = StatsReadout::new(0x11, 0).build();
        assert_eq!(lines.len(), 2 + 4 * 5);
        assert_eq!(lines[0], "# ---- Port 0 Statistics ----");
        assert_eq!(lines[3], "# RX Good Frames");
        assert_eq!(lines[4], "mii write 0x1C 0x18 0x9E20");
        assert_eq!(lines[5], "RX_GOOD=$(mii read 0x1C 0x19 | tail -n1)");
        assert_eq!(lines[6], "echo \"RX Good Frames: $RX_GOOD\"");
        assert_eq!(lines[18], "# Collisions");
        assert_eq!(lines[19], "mii write 0x1C 0x18 0x9E23");
        assert_eq!(lines[20], "COLL=$(mii read 0x1C 0x19 | tail -n1)");
    }

    #[test]
    fn command_words_track_the_phy_address() {
        let lines = StatsReadout::new(0x13, 2).build();
        assert_eq!(lines[4], "mii write 0x1C 0x18 0x9E60");
        assert_eq!(lines[9], "mii write 0x1C 0x18 0x9E61");
    }

    #[test]
    fn inputs_are_masked_on_construction() {
        let lines = StatsReadout::new(0x33, 0x0B).build();
        assert_eq!(lines[0], "# ---- Port 3 Statistics ----");
        // 0x33 & 0x1F = 0x13
        assert_eq!(lines[4], "mii write 0x1C 0x18 0x9E60");
    }
}
