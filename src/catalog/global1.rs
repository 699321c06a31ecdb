//! Global1 register table (MII device 0x1B)
//!
//! ATU, VTU and statistics machinery plus the global status and control
//! words. Addresses 0x10 through 0x17 are not documented for this device
//! and deliberately absent.

use crate::field::{Access as A, BitField};

use super::Register;

pub(super) static REGISTERS: &[Register] = &[
    Register {
        addr: 0x00,
        name: "Switch Global Status Register",
        fields: &[
            BitField::bit(15, "PPUState", A::RO, "PPU Polling Unit State. 0=PPU Disabled, 1=PPU Polling"),
            BitField::bits(14, 12, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(11, "InitReady", A::RO, "Switch Ready. 1=ATU, VTU, Queue Controller and Statistics Controller completed initialization"),
            BitField::bits(10, 9, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(8, "AVBInt", A::RO, "AVB Interrupt. Set if any of the per-port PTPInt bits are set"),
            BitField::bit(7, "DeviceInt", A::RO, "Device Interrupt. Set to 1 when any device interrupts have at least one active interrupt"),
            BitField::bit(6, "StatsDone", A::LH, "Statistics Done Interrupt. Set whenever STATBusy transitions from 1 to 0. Cleared when read"),
            BitField::bit(5, "VTUProb", A::RO, "VLAN Table Problem/Violation Interrupt. Cleared when all pending VTU Violations have been serviced"),
            BitField::bit(4, "VTUDone", A::LH, "VTU Done Interrupt. Set whenever VTUBusy transitions from 1 to 0. Cleared when read"),
            BitField::bit(3, "ATUProb", A::RO, "ATU Problem/Violation Interrupt. Set if the ATU cannot load or learn a new mapping or an ATU Violation is detected"),
            BitField::bit(2, "ATUDone", A::LH, "ATU Done Interrupt. Set whenever ATUBusy transitions from 1 to 0. Cleared when read"),
            BitField::bit(1, "TCAMInt", A::ROC, "TCAM Interrupt. Set whenever the TCAM gets a hit where the Action Int bit is set (88E6321 only)"),
            BitField::bit(0, "EEInt", A::LH, "EEPROM Done Interrupt. Set after the EEPROM is done loading registers or an EEPROM operation is done"),
        ],
    },
    Register {
        addr: 0x01,
        name: "ATU FID Register",
        fields: &[
            BitField::bits(15, 12, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(11, 0, "FID", A::RWR, "ATU MAC Address Forwarding Information Database (FID) number used on Database supported commands"),
        ],
    },
    Register {
        addr: 0x02,
        name: "VTU FID Register",
        fields: &[
            BitField::bits(15, 13, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(12, "VIDPolicy", A::RWR, "VID Policy. Frames with this VID are trapped to TrapDest, monitored to MirrorDest or discarded"),
            BitField::bits(11, 0, "FID", A::RWR, "VTU FID number used in VTU Load and VTU GetNext operations"),
        ],
    },
    Register {
        addr: 0x03,
        name: "VTU SID Register",
        fields: &[
            BitField::bits(15, 6, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(5, 0, "SID", A::RWR, "802.1s Port State Information Database (SID) number for VTU Load and GetNext operations"),
        ],
    },
    Register {
        addr: 0x04,
        name: "Switch Global Control Register",
        fields: &[
            BitField::bit(15, "SWReset", A::SC, "Switch Software Reset. Resets the QC and MAC state machines. Register values are not modified"),
            BitField::bit(14, "Reserved", A::RWS, "Reserved for future use. Must be set to 1"),
            BitField::bit(13, "DiscardExcessive", A::RWR, "Discard frames that encounter 16 consecutive collisions"),
            BitField::bit(12, "ARPwoBC", A::RWR, "ARP detection without Broadcast checking"),
            BitField::bits(11, 10, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(9, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(8, "AVBIntEn", A::RO, "AVB Interrupt Enable. Allows active AVB interrupts to drive the INTn pin low"),
            BitField::bit(7, "DevIntEn", A::RWR, "Device Interrupt Enable. Allows the Device Interrupt to drive the INTn pin low"),
            BitField::bit(6, "StatsDoneIntEn", A::RWR, "Statistics Operation Done Interrupt Enable"),
            BitField::bit(5, "VTUProbIntEn", A::RWR, "VLAN Problem/Violation Interrupt Enable"),
            BitField::bit(4, "VTUDoneIntEn", A::RWR, "VLAN Table Operation Done Interrupt Enable"),
            BitField::bit(3, "ATUProbIntEn", A::RWR, "ATU Problem/Violation Interrupt Enable"),
            BitField::bit(2, "ATUDoneIntEn", A::RWR, "ATU Operation Done Interrupt Enable"),
            BitField::bit(1, "TCAMIntEn", A::RWR, "TCAM Int Interrupt Enable (88E6321 only)"),
            BitField::bit(0, "EEIntEn", A::RWS, "EEPROM Done Interrupt Enable"),
        ],
    },
    Register {
        addr: 0x05,
        name: "VTU Operation Register",
        fields: &[
            BitField::bit(15, "VTUBusy", A::SC, "VLAN Table Unit Busy. Set to 1 to start a VTU operation. Cleared automatically on completion"),
            BitField::bits(14, 12, "VTUOp", A::RWR, "001=Flush All, 011=VTU Load/Purge, 100=VTU Get Next, 101=STU Load/Purge, 110=STU Get Next, 111=Get/Clear Violation Data"),
            BitField::bits(11, 7, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(6, "MemberViolation", A::RO, "Returned set on Get/Clear Violation Data if the violation is an 802.1Q Member Violation"),
            BitField::bit(5, "MissViolation", A::RO, "Returned set on Get/Clear Violation Data if the violation is an 802.1Q Miss Violation"),
            BitField::bit(4, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(3, 0, "SPID", A::RO, "Source Port ID of the port that caused the violation, on Get Violation Data"),
        ],
    },
    Register {
        addr: 0x06,
        name: "VTU VID Register",
        fields: &[
            BitField::bits(15, 13, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(12, "Valid", A::RWR, "Entry's Valid bit. On Get Next, 0 with all-ones VID/SID indicates the end of the list"),
            BitField::bits(11, 0, "VID", A::RWR, "VLAN Identifier used in VTU Load or GetNext operations"),
        ],
    },
    Register {
        addr: 0x07,
        name: "VTU/STU Data Register Ports 0 to 3 for VTU Operations",
        fields: &[
            BitField::bits(15, 14, "Reserved", A::RES, "Reserved for future use. Returns 0x0 on STU GetNext"),
            BitField::bits(13, 12, "MemberTagP3", A::RWR, "Membership and Egress Tagging for Port 3"),
            BitField::bits(11, 10, "Reserved", A::RES, "Reserved for future use. Returns 0x0 on STU GetNext"),
            BitField::bits(9, 8, "MemberTagP2", A::RWR, "Membership and Egress Tagging for Port 2"),
            BitField::bits(7, 6, "Reserved", A::RES, "Reserved for future use. Returns 0x0 on STU GetNext"),
            BitField::bits(5, 4, "MemberTagP1", A::RWR, "Membership and Egress Tagging for Port 1"),
            BitField::bits(3, 2, "Reserved", A::RES, "Reserved for future use. Returns 0x0 on STU GetNext"),
            BitField::bits(1, 0, "MemberTagP0", A::RWR, "00=egress unmodified, 01=egress Untagged, 10=egress Tagged, 11=not a member of this VLAN"),
        ],
    },
    Register {
        addr: 0x08,
        name: "VTU/STU Data Register Ports 4 to 5 for VTU Operations",
        fields: &[
            BitField::bits(15, 10, "Reserved", A::RES, "Reserved for future use. Returns 0x0 on STU GetNext"),
            BitField::bits(9, 8, "MemberTagP6", A::RWR, "Ingress and Egress Membership and Egress Tagging for Port 6"),
            BitField::bits(7, 6, "Reserved", A::RES, "Reserved for future use. Returns 0x0 on STU GetNext"),
            BitField::bits(5, 4, "MemberTagP5", A::RWR, "Membership and Egress Tagging for Port 5"),
            BitField::bits(3, 2, "Reserved", A::RES, "Reserved for future use. Returns 0x0 on STU GetNext"),
            BitField::bits(1, 0, "MemberTagP4", A::RWR, "Membership and Egress Tagging for Port 4"),
        ],
    },
    Register {
        addr: 0x09,
        name: "VTU/STU Data Register for VTU Operations",
        fields: &[
            BitField::bit(15, "VIDPRIOverride", A::RWR, "When set, the VIDPRI bits override the priority on any frame associated with this VID"),
            BitField::bits(14, 12, "VIDPRI", A::RWR, "VID Priority bits, used when VIDPRIOverride is set"),
            BitField::bits(11, 0, "Reserved", A::RES, "Reserved for future use. Returns 0x0 on STU GetNext"),
        ],
    },
    Register {
        addr: 0x0A,
        name: "ATU Control Register",
        fields: &[
            BitField::bit(15, "MACAVB", A::RWR, "ATU MAC entries operate in AVB mode when set, NRL mode when clear"),
            BitField::bits(14, 12, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(11, 4, "AgeTime", A::RWS, "ATU Age Time before an entry is purged since its last access as a source address (default 0x16)"),
            BitField::bit(3, "Learn2All", A::RWR, "Learn to All devices in a multi-chip switch"),
            BitField::bit(2, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(1, 0, "HashSel", A::RWR, "Hash Select. 01=Default, 11=Direct Method (no hash), test purposes only"),
        ],
    },
    Register {
        addr: 0x0B,
        name: "ATU Operation Register",
        fields: &[
            BitField::bit(15, "ATUBusy", A::SC, "Address Translation Unit Busy. Set to 1 to start an ATU operation. Cleared automatically on completion"),
            BitField::bits(14, 12, "ATUOp", A::RWR, "001=Flush All, 010=Flush Non-Static, 011=Load/Purge in FID, 100=Get Next from FID, 101=Flush All in FID, 110=Flush Non-Static in FID, 111=Get/Clear Violation Data"),
            BitField::bit(11, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(10, 8, "MACPri", A::RWR, "MAC Priority bits, used to override priority when the EntryState allows it"),
            BitField::bit(7, "AgeOutViolation", A::RO, "Returned set on Get/Clear Violation Data if a non-static entry aged out with EntryState 0x1"),
            BitField::bit(6, "MemberViolation", A::RO, "Returned set on Get/Clear Violation Data for a Source Address hit without the Ingress port in ATUData"),
            BitField::bit(5, "MissViolation", A::RO, "Returned set on Get/Clear Violation Data for a Source Address miss on Locked ports"),
            BitField::bit(4, "ATUFullViolation", A::RO, "Returned set when a Load or automatic learn could not store the desired entry"),
            BitField::bits(3, 0, "Reserved", A::RES, "Reserved for future use"),
        ],
    },
    Register {
        addr: 0x0C,
        name: "ATU Data Register",
        fields: &[
            BitField::bit(15, "Trunk", A::RWR, "Trunk Mapped Address. When set, PortVec bits [3:0] hold the Trunk ID for this address"),
            BitField::bits(14, 12, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(11, 4, "PortVec", A::RWR, "Port Vector for ATU Load operations, and the resulting vector from Get Next"),
            BitField::bits(3, 0, "EntryState", A::RWR, "ATU Entry State. 0x0 makes the ATUOp a Purge or Flush, non-zero a Load or Move"),
        ],
    },
    Register {
        addr: 0x0D,
        name: "ATU MAC Address Register Bytes 0 & 1",
        fields: &[
            BitField::bits(15, 8, "ATUByte0", A::RWR, "MAC Address Byte 0 (bits 47:40) for ATU Load, Purge or Get Next operations"),
            BitField::bits(7, 0, "ATUByte1", A::RWR, "MAC Address Byte 1 (bits 39:32) for ATU Load, Purge or Get Next operations"),
        ],
    },
    Register {
        addr: 0x0E,
        name: "ATU MAC Address Register Bytes 2 & 3",
        fields: &[
            BitField::bits(15, 8, "ATUByte2", A::RWR, "MAC Address Byte 2 (bits 31:24) for ATU Load, Purge or Get Next operations"),
            BitField::bits(7, 0, "ATUByte3", A::RWR, "MAC Address Byte 3 (bits 23:16) for ATU Load, Purge or Get Next operations"),
        ],
    },
    Register {
        addr: 0x0F,
        name: "ATU MAC Address Register Bytes 4 & 5",
        fields: &[
            BitField::bits(15, 8, "ATUByte4", A::RWR, "MAC Address Byte 4 (bits 15:8) for ATU Load, Purge or Get Next operations"),
            BitField::bits(7, 0, "ATUByte5", A::RWR, "MAC Address Byte 5 (bits 7:0) for ATU Load, Purge or Get Next operations"),
        ],
    },
    Register {
        addr: 0x18,
        name: "IEEE-PRI Register",
        fields: &[
            BitField::bits(15, 14, "Tag_0x7", A::RWS, "Frame priority for IEEE Tag value 7 (default 0x3)"),
            BitField::bits(13, 12, "Tag_0x6", A::RWS, "Frame priority for IEEE Tag value 6 (default 0x3)"),
            BitField::bits(11, 10, "Tag_0x5", A::RWS, "Frame priority for IEEE Tag value 5 (default 0x2)"),
            BitField::bits(9, 8, "Tag_0x4", A::RWS, "Frame priority for IEEE Tag value 4 (default 0x2)"),
            BitField::bits(7, 6, "Tag_0x3", A::RWS, "Frame priority for IEEE Tag value 3 (default 0x1)"),
            BitField::bits(5, 4, "Tag_0x2", A::RWS, "Frame priority for IEEE Tag value 2 (default 0x1)"),
            BitField::bits(3, 2, "Tag_0x1", A::RWR, "Frame priority for IEEE Tag value 1"),
            BitField::bits(1, 0, "Tag_0x0", A::RWR, "Frame priority for IEEE Tag value 0"),
        ],
    },
    Register {
        addr: 0x19,
        name: "IP Mapping Table",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Data. Loads bits 7:0 into the IP Mapping register selected by the Pointer bits"),
            BitField::bit(14, "UseIPFPri", A::RWR, "Use IP Frame Priorities from this table instead of ignoring the IP_FPRI data"),
            BitField::bits(13, 8, "Pointer", A::RWR, "Pointer selecting one of 64 IP mapping registers for both read and write operations"),
            BitField::bit(7, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(6, 4, "IP_FPRI", A::RWS, "Initial FPRI for IPv4/IPv6 frames when the port's InitialPri and TagIfBoth use IP FPRIs"),
            BitField::bits(3, 2, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(1, 0, "IP_QPRI", A::RWS, "Initial QPRI for IPv4/IPv6 frames when the port's InitialPri and TagIfBoth use IP QPRIs"),
        ],
    },
    Register {
        addr: 0x1A,
        name: "Monitor Control",
        fields: &[
            BitField::bits(15, 12, "IngressMonitorDest", A::RWS, "Ingress Monitor Destination Port for Ingress Monitor frames"),
            BitField::bits(11, 8, "EgressMonitorDest", A::RWS, "Egress Monitor Destination Port for Egress Monitor frames"),
            BitField::bits(7, 4, "CPUDest", A::RWS, "CPU Destination Port, used by frame processing modes that need the CPU's location"),
            BitField::bits(3, 0, "MirrorDest", A::RWS, "Mirror Destination Port for policy mirrored frames"),
        ],
    },
    Register {
        addr: 0x1B,
        name: "Total Free Counter",
        fields: &[
            BitField::bits(15, 10, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(9, 0, "FreeQSize", A::RO, "Current number of unallocated buffers available for all the ports"),
        ],
    },
    Register {
        addr: 0x1C,
        name: "Global Control 2",
        fields: &[
            BitField::bits(15, 14, "HeaderType", A::RWR, "Egress Header contents. 00=Original Header, 01=Single chip MGMT Header, 10=Trunk Header, 11=Reserved"),
            BitField::bits(13, 12, "RMUMode", A::RWR, "Remote Management Unit Mode. 0x0=disabled, 0x1=Port 4, 0x2=Port 5, 0x3=Port 6 is the RMU port"),
            BitField::bit(11, "DACheck", A::RWR, "Require the DA of Remote Management frames to be a Static ATU entry"),
            BitField::bits(10, 6, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(5, "CtrMode", A::RWR, "Debug counter mode. 0=RxBad/RxGood frames, 1=Collisions/Tx Transmitted frames"),
            BitField::bits(4, 0, "DeviceNumber", A::RWS, "Device Number matched against the Trg_Dev field of From_CPU frames in multi-chip systems"),
        ],
    },
    Register {
        addr: 0x1D,
        name: "Stats Operation Register",
        fields: &[
            BitField::bit(15, "StatsBusy", A::SC, "Statistics Unit Busy. Set to 1 to start a Stats operation. Cleared automatically on completion"),
            BitField::bits(14, 12, "StatsOp", A::RWR, "001=Flush All Counters, 010=Flush Counters for a Port, 100=Read a Captured or Direct Counter, 101=Capture All Counters for a Port"),
            BitField::bits(11, 10, "HistogramMode", A::RES, "01=Count received frames only, 10=Count transmitted only, 11=Count both (default 0x3)"),
            BitField::bit(9, "StatsBank", A::RWR, "0=MAC based MIBs (Bank 0), 1=Policy based MIBs (Bank 1) on Read a Counter StatsOps"),
            BitField::bits(8, 5, "StatsPort", A::RWR, "Port selector. 0x0 accesses the captured counters, 0x1 the counters for Port 0, etc."),
            BitField::bits(4, 0, "StatsPtr", A::RWR, "Statistics Pointer, the counter to read for the Read a Counter StatsOp (0x00 to 0x1F)"),
        ],
    },
    Register {
        addr: 0x1E,
        name: "Stats Counter Register Bytes 3 & 2",
        fields: &[
            BitField::bits(15, 8, "StatsByte3", A::RO, "Bits 31:24 of the last stat counter read via the Read a Counter StatsOp"),
            BitField::bits(7, 0, "StatsByte2", A::RO, "Bits 23:16 of the last stat counter read via the Read a Counter StatsOp"),
        ],
    },
    Register {
        addr: 0x1F,
        name: "Stats Counter Register Bytes 1 & 0",
        fields: &[
            BitField::bits(15, 8, "StatsByte1", A::RO, "Bits 15:8 of the last stat counter read via the Read a Counter StatsOp"),
            BitField::bits(7, 0, "StatsByte0", A::RO, "Bits 7:0 of the last stat counter read via the Read a Counter StatsOp"),
        ],
    },
];
