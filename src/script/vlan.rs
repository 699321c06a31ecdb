//! VLAN table configuration script

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::word::format_hex;

/// Ports a VLAN mask can cover (0 through 6)
const PORT_COUNT: u8 = 7;

/// VLAN table entry configuration
///
/// Member and tagged ports are stored as bit masks (bit N = port N). The
/// builder masks the VID to 12 bits on construction; tagged ports that
/// are not also members are legal here and left to the operator, matching
/// the original tool's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanConfig {
    vid: u16,
    name: String,
    member_mask: u16,
    tagged_mask: u16,
}

impl VlanConfig {
    /// Entry for the given VID (masked to 12 bits), no ports, no name
    pub fn new(vid: u16) -> Self {
        Self {
            vid: vid & 0x0FFF,
            name: String::new(),
            member_mask: 0,
            tagged_mask: 0,
        }
    }

    /// Human-readable VLAN name for the script header
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = String::from(name);
        self
    }

    /// Mark a port as a member; ports above 6 are ignored
    #[must_use]
    pub const fn with_member(mut self, port: u8) -> Self {
        if port < PORT_COUNT {
            self.member_mask |= 1 << port;
        }
        self
    }

    /// Mark a port's egress as tagged; ports above 6 are ignored
    #[must_use]
    pub const fn with_tagged(mut self, port: u8) -> Self {
        if port < PORT_COUNT {
            self.tagged_mask |= 1 << port;
        }
        self
    }

    /// Member port mask (bit N = port N)
    pub const fn member_mask(&self) -> u16 {
        self.member_mask
    }

    /// Tagged port mask (bit N = port N)
    pub const fn tagged_mask(&self) -> u16 {
        self.tagged_mask
    }

    /// Render the configuration sequence.
    pub fn build(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!(
            "# ---- VLAN {} ({}) Configuration ----",
            self.vid, self.name
        ));
        lines.push(format!("# Member ports: {}", port_list(self.member_mask)));
        lines.push(format!("# Tagged ports: {}", port_list(self.tagged_mask)));
        lines.push(String::new());
        lines.push(String::from("# Set VLAN Table Entry"));
        lines.push(format!("mii write 0x1C 0x19 0x{}", format_hex(self.vid, 4)));
        lines.push(String::from("mii write 0x1C 0x18 0x9500"));
        lines.push(format!(
            "mii write 0x1C 0x19 0x{}",
            format_hex(self.member_mask, 4)
        ));
        lines.push(String::from("mii write 0x1C 0x18 0x9502"));
        lines.push(format!(
            "mii write 0x1C 0x19 0x{}",
            format_hex(self.tagged_mask, 4)
        ));
        lines.push(String::from("mii write 0x1C 0x18 0x9503"));
        lines
    }
}

/// Comma-separated port numbers in a mask, or `none`
fn port_list(mask: u16) -> String {
    let mut out = String::new();
    for port in 0..PORT_COUNT {
        if mask & (1 << port) != 0 {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&format!("{port}"));
        }
    }
    if out.is_empty() {
        String::from("none")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_accumulate_per_port() {
        let vlan = VlanConfig::new(100)
            .with_member(0)
            .with_member(2)
            .with_member(5)
            .with_tagged(5);
        assert_eq!(vlan.member_mask(), 0b0010_0101);
        assert_eq!(vlan.tagged_mask(), 0b0010_0000);
    }

    #[test]
    fn out_of_range_ports_are_ignored() {
        let vlan = VlanConfig::new(1).with_member(7).with_tagged(15);
        assert_eq!(vlan.member_mask(), 0);
        assert_eq!(vlan.tagged_mask(), 0);
    }

    #[test]
    fn vid_is_masked_to_12_bits() {
        let lines = VlanConfig::new(0x1234).build();
        assert_eq!(lines[5], "mii write 0x1C 0x19 0x0234");
    }

    #[test]
    fn script_writes_entry_member_and_tagged_words() {
        let lines = VlanConfig::new(100)
            .with_name("Management")
            .with_member(0)
            .with_member(1)
            .with_tagged(1)
            .build();
        assert_eq!(lines[0], "# ---- VLAN 100 (Management) Configuration ----");
        assert_eq!(lines[1], "# Member ports: 0, 1");
        assert_eq!(lines[2], "# Tagged ports: 1");
        assert_eq!(lines[5], "mii write 0x1C 0x19 0x0064");
        assert_eq!(lines[6], "mii write 0x1C 0x18 0x9500");
        assert_eq!(lines[7], "mii write 0x1C 0x19 0x0003");
        assert_eq!(lines[8], "mii write 0x1C 0x18 0x9502");
        assert_eq!(lines[9], "mii write 0x1C 0x19 0x0002");
        assert_eq!(lines[10], "mii write 0x1C 0x18 0x9503");
    }

    #[test]
    fn empty_masks_render_as_none() {
        let lines = VlanConfig::new(1).build();
        assert_eq!(lines[1], "# Member ports: none");
        assert_eq!(lines[2], "# Tagged ports: none");
    }
}
