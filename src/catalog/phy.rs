//! PHY register tables, per page
//!
//! Transcribed from the 88E6321 PHY register reference. Only the pages the
//! chip documents for the copper PHYs are present (0, 2, 5, 6, 7).

use crate::field::{Access as A, BitField};

use super::Register;

/// Page 0, basic PHY control and status
pub(super) static PAGE0: &[Register] = &[
    Register {
        addr: 0x00,
        name: "Copper Control Register",
        fields: &[
            BitField::bit(15, "Copper Reset", A::RW_SC, "1=PHY reset, 0=Normal operation"),
            BitField::bit(14, "Loopback", A::RW, "1=Enable loopback, 0=Disable loopback"),
            BitField::bit(13, "Speed Select LSB", A::RW_UPDATE, "Combined with bit 6 for speed"),
            BitField::bit(12, "Auto-Negotiation Enable", A::RW_UPDATE, "1=Enable auto-neg, 0=Disable"),
            BitField::bit(11, "Power Down", A::RWR, "1=Power down, 0=Normal operation"),
            BitField::bit(10, "Isolate", A::RO, "No effect"),
            BitField::bit(9, "Restart Auto-Negotiation", A::RW_SC, "1=Restart auto-neg, 0=Normal"),
            BitField::bit(8, "Duplex Mode", A::RW_UPDATE, "1=Full-duplex, 0=Half-duplex"),
            BitField::bit(7, "Collision Test", A::RO, "No effect"),
            BitField::bit(6, "Speed Selection MSB", A::RW_UPDATE, "Combined with bit 13"),
            BitField::bits(5, 0, "Reserved", A::RO, "Always 000000"),
        ],
    },
    Register {
        addr: 0x01,
        name: "Copper Status Register",
        fields: &[
            BitField::bit(15, "100BASE-T4", A::RO, "Always 0 (not available)"),
            BitField::bit(14, "100BASE-X Full-Duplex", A::RO, "Always 1 (capable)"),
            BitField::bit(13, "100BASE-X Half-Duplex", A::RO, "Always 1 (capable)"),
            BitField::bit(12, "10 Mbps Full-Duplex", A::RO, "Always 1 (capable)"),
            BitField::bit(11, "10 Mbps Half-Duplex", A::RO, "Always 1 (capable)"),
            BitField::bit(10, "100BASE-T2 Full-Duplex", A::RO, "Always 0 (not available)"),
            BitField::bit(9, "100BASE-T2 Half-Duplex", A::RO, "Always 0 (not available)"),
            BitField::bit(8, "Extended Status", A::RO, "Always 1 (Register 15 has extended status)"),
            BitField::bit(7, "Reserved", A::RO, "Always 0"),
            BitField::bit(6, "MF Preamble Suppression", A::RO, "Always 1 (accepts suppressed preamble)"),
            BitField::bit(5, "Auto-Negotiation Complete", A::RO, "1=Complete, 0=Not complete"),
            BitField::bit(4, "Remote Fault", A::RO_LH, "1=Remote fault detected, 0=No fault"),
            BitField::bit(3, "Auto-Negotiation Ability", A::RO, "Always 1 (capable)"),
            BitField::bit(2, "Link Status", A::RO_LL, "1=Link up, 0=Link down (latching low)"),
            BitField::bit(1, "Jabber Detect", A::RO_LH, "1=Jabber detected, 0=No jabber"),
            BitField::bit(0, "Extended Capability", A::RO, "Always 1 (has extended registers)"),
        ],
    },
    Register {
        addr: 0x02,
        name: "PHY Identifier 1",
        fields: &[BitField::bits(15, 0, "OUI Bits 3:18", A::RO, "Marvell OUI bits 3-18 (0x0141)")],
    },
    Register {
        addr: 0x03,
        name: "PHY Identifier 2",
        fields: &[
            BitField::bits(15, 10, "OUI LSB", A::RO, "OUI bits 19-24 (000011)"),
            BitField::bits(9, 0, "Reserved", A::RO, "Reserved"),
        ],
    },
    Register {
        addr: 0x10,
        name: "Copper Specific Control Register 1",
        fields: &[
            BitField::bit(15, "Disable Link Pulses", A::RW, "1=Disable link pulse, 0=Enable"),
            BitField::bits(14, 12, "Downshift Counter", A::RW_UPDATE, "000=1x, 001=2x, 010=3x, 011=4x, 100=5x, 101=6x, 110=7x, 111=8x"),
            BitField::bit(11, "Downshift Enable", A::RW_UPDATE, "1=Enable downshift, 0=Disable"),
            BitField::bit(10, "Force Link Good", A::RWR, "1=Force link good, 0=Normal"),
            BitField::bits(9, 7, "Energy Detect", A::RW_UPDATE, "Energy detect modes"),
            BitField::bits(6, 5, "MDI Crossover Mode", A::RW_UPDATE, "00=Manual MDI, 01=Manual MDIX, 11=Auto crossover"),
            BitField::bit(4, "Energy Detect Wake Up", A::RW_SC, "Wake up control"),
            BitField::bit(3, "Transmitter Disable", A::RWR, "1=Disable, 0=Enable"),
            BitField::bit(2, "Power Down", A::RWR, "1=Power down, 0=Normal"),
            BitField::bit(1, "Polarity Reversal Disable", A::RWR, "1=Disabled, 0=Enabled"),
            BitField::bit(0, "Disable Jabber", A::RWR, "1=Disable jabber, 0=Enable"),
        ],
    },
    Register {
        addr: 0x11,
        name: "Copper Specific Status Register 1",
        fields: &[
            BitField::bits(15, 14, "Speed", A::RO.union(A::RETAIN), "11=Reserved, 10=1000Mbps, 01=100Mbps, 00=10Mbps"),
            BitField::bit(13, "Duplex", A::RO.union(A::RETAIN), "1=Full-duplex, 0=Half-duplex"),
            BitField::bit(12, "Page Received", A::RO_LH, "1=Page received, 0=Not received"),
            BitField::bit(11, "Speed/Duplex Resolved", A::RO, "1=Resolved, 0=Not resolved"),
            BitField::bit(10, "Link Status (real time)", A::RO, "1=Link up, 0=Link down"),
            BitField::bit(9, "TX Pause Enabled", A::RO, "1=TX pause enabled, 0=Disabled"),
            BitField::bit(8, "RX Pause Enabled", A::RO, "1=RX pause enabled, 0=Disabled"),
            BitField::bit(7, "Reserved", A::RO, "Reserved"),
            BitField::bit(6, "MDI Crossover Status", A::RO.union(A::RETAIN), "1=MDIX, 0=MDI"),
            BitField::bit(5, "Downshift Status", A::RO, "1=Downshift occurred, 0=No downshift"),
            BitField::bit(4, "Energy Detect Status", A::RO, "1=Sleep, 0=Active"),
            BitField::bit(3, "Global Link Status", A::RO, "1=Link up, 0=Link down"),
            BitField::bit(2, "DTE Power Status", A::RO, "1=Partner needs DTE power, 0=Not needed"),
            BitField::bit(1, "Polarity (real time)", A::RO, "1=Reversed, 0=Normal"),
            BitField::bit(0, "Jabber (real time)", A::RO, "1=Jabber, 0=No jabber"),
        ],
    },
    Register {
        addr: 0x12,
        name: "Copper Specific Interrupt Enable Register",
        fields: &[
            BitField::bit(15, "Auto-Neg Error Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(14, "Speed Changed Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(13, "Duplex Changed Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(12, "Page Received Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(11, "Auto-Neg Complete Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(10, "Link Status Changed Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(9, "Symbol Error Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(8, "False Carrier Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(7, "Reserved", A::RWR, "Reserved"),
            BitField::bit(6, "MDI Crossover Changed Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(5, "Downshift Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(4, "Energy Detect Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(3, "FLP Exchange Complete Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(2, "Reserved", A::RWR, "Must be 0"),
            BitField::bit(1, "Polarity Changed Int Enable", A::RWR, "1=Enable, 0=Disable"),
            BitField::bit(0, "Jabber Int Enable", A::RWR, "1=Enable, 0=Disable"),
        ],
    },
    Register {
        addr: 0x13,
        name: "Copper Interrupt Status Register",
        fields: &[
            BitField::bit(15, "Auto-Neg Error", A::RO_LH, "1=Error occurred, 0=No error"),
            BitField::bit(14, "Speed Changed", A::RO_LH, "1=Speed changed, 0=No change"),
            BitField::bit(13, "Duplex Changed", A::RO_LH, "1=Duplex changed, 0=No change"),
            BitField::bit(12, "Page Received", A::RO_LH, "1=Page received, 0=Not received"),
            BitField::bit(11, "Auto-Neg Completed", A::RO_LH, "1=Completed, 0=Not completed"),
            BitField::bit(10, "Link Status Changed", A::RO_LH, "1=Changed, 0=No change"),
            BitField::bit(9, "Symbol Error", A::RO_LH, "1=Error occurred, 0=No error"),
            BitField::bit(8, "False Carrier", A::RO_LH, "1=False carrier, 0=No false carrier"),
            BitField::bit(7, "Reserved", A::RO, "Always 0"),
            BitField::bit(6, "MDI Crossover Changed", A::RO_LH, "1=Changed, 0=No change"),
            BitField::bit(5, "Downshift", A::RO_LH, "1=Downshift detected, 0=No downshift"),
            BitField::bit(4, "Energy Detect Changed", A::RO_LH, "1=State changed, 0=No change"),
            BitField::bit(3, "FLP Exchange Complete but no Link", A::RO_LH, "1=Event detected, 0=No event"),
            BitField::bit(2, "DTE Power Status Changed", A::RO_LH, "1=Changed, 0=No change"),
            BitField::bit(1, "Polarity Changed", A::RO_LH, "1=Changed, 0=No change"),
            BitField::bit(0, "Jabber", A::RO_LH, "1=Jabber detected, 0=No jabber"),
        ],
    },
    Register {
        addr: 0x16,
        name: "Page Address",
        fields: &[
            BitField::bits(15, 14, "Reserved", A::RWR, "Must be 0"),
            BitField::bits(13, 8, "Reserved", A::RO, "Reserved"),
            BitField::bits(7, 0, "Page Select", A::RWR, "Page number (0x00-0xFF)"),
        ],
    },
];

/// Page 2, MAC specific control
pub(super) static PAGE2: &[Register] = &[Register {
    addr: 0x10,
    name: "MAC Specific Control Register 1",
    fields: &[
        BitField::bits(15, 14, "TX FIFO Depth", A::RWR, "00=1518B, 01=9K, 10=18K, 11=27K packets"),
        BitField::bits(13, 11, "Reserved", A::RWR, "Reserved"),
        BitField::bit(10, "RCLK Enable", A::RWR, "1=Enable RCLK, 0=Disable"),
        BitField::bits(9, 8, "Reserved", A::RWR, "Reserved"),
        BitField::bit(7, "Copper Ref Clock Source", A::RW_UPDATE, "1=SE_SCLK, 0=XTAL_IN as 25MHz source"),
        BitField::bit(6, "Pass Odd Nibble Preambles", A::RW_UPDATE, "0=Pad, 1=Pass as is"),
        BitField::bit(5, "DPLL Ref Clock Source", A::RWR, "1=SE_SCLK, 0=XTAL_IN for DPLL"),
        BitField::bit(4, "Reserved", A::RWR, "Write 0"),
        BitField::bit(3, "MAC Interface Power Down", A::RW_UPDATE, "1=Always power up, 0=Can power down"),
        BitField::bits(2, 0, "Reserved", A::RWR, "Reserved"),
    ],
}];

/// Page 5, advanced VCT
pub(super) static PAGE5: &[Register] = &[Register {
    addr: 0x17,
    name: "Advanced VCT Control",
    fields: &[
        BitField::bit(15, "Enable Test", A::RW_SC, "0=Disable, 1=Enable test (self-clears)"),
        BitField::bit(14, "Test Status", A::RO, "0=Not started/in progress, 1=Completed"),
        BitField::bits(13, 11, "TX Channel Select", A::RW, "000=Normal, 100=TX0 to all RX, 101=TX1 to all RX, etc."),
        BitField::bits(10, 8, "Sample Averaged", A::RWR, "0=2 samples, 1=4, ..., 7=256 samples"),
        BitField::bits(7, 6, "Mode", A::RWR, "00=Max peak, 01=First/last peak, 10=Offset, 11=Sample point"),
        BitField::bits(5, 0, "Peak Detection Hysteresis", A::RWR, "0x00=0mV, 0x01=7.81mV, ..., 0x3F=492mV"),
    ],
}];

/// Page 6, packet generation and checking
pub(super) static PAGE6: &[Register] = &[Register {
    addr: 0x10,
    name: "Copper Port Packet Generation",
    fields: &[
        BitField::bits(15, 8, "Packet Burst", A::RWR, "0x00=Continuous, 0x01-0xFF=Burst 1-255 packets"),
        BitField::bit(7, "Packet Generator TX Trigger", A::RWR, "Trigger control for packet transmission"),
        BitField::bit(6, "Packet Generator Enable Self Clear", A::RWR, "0=Bit 3 self-clears, 1=Stays high"),
        BitField::bit(5, "Reserved", A::RWR, "Reserved"),
        BitField::bit(4, "Enable CRC Checker", A::RWR, "1=Enable, 0=Disable"),
        BitField::bit(3, "Enable Packet Generator", A::RWR, "1=Enable, 0=Disable"),
        BitField::bit(2, "Payload Type", A::RWR, "0=Pseudo-random, 1=A5,5A,A5,5A pattern"),
        BitField::bit(1, "Packet Length", A::RWR, "1=1518 bytes, 0=64 bytes"),
        BitField::bit(0, "Transmit Errored Packet", A::RWR, "1=TX with CRC/symbol errors, 0=No error"),
    ],
}];

/// Page 7, cable diagnostics
pub(super) static PAGE7: &[Register] = &[Register {
    addr: 0x15,
    name: "PHY Cable Diagnostics Control",
    fields: &[
        BitField::bit(15, "Run Immediately", A::RW_SC, "0=No action, 1=Run VCT now"),
        BitField::bit(14, "Run At Auto-Neg Cycle", A::RWR, "0=Don't run, 1=Run at auto-neg"),
        BitField::bit(13, "Disable Cross Pair Check", A::RWR, "0=Enable, 1=Disable cross pair check"),
        BitField::bit(12, "Run After Break Link", A::RW_SC, "0=No action, 1=Run VCT after breaking link"),
        BitField::bit(11, "Cable Diagnostics Status", A::RO.union(A::RETAIN), "0=Complete, 1=In progress"),
        BitField::bit(10, "Cable Length Unit", A::RWR, "0=Centimeters, 1=Meters"),
        BitField::bits(9, 0, "Reserved", A::RO, "Reserved"),
    ],
}];
