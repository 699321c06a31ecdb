//! Global2 register table (MII device 0x1C)
//!
//! Interrupt routing, indirect tables and the SMI PHY unit the indirect
//! PHY access sequences drive. Addresses 0x10 through 0x13 and 0x1E are
//! not documented for this device and deliberately absent.

use crate::field::{Access as A, BitField};

use super::Register;

pub(super) static REGISTERS: &[Register] = &[
    Register {
        addr: 0x00,
        name: "Interrupt Source Register",
        fields: &[
            BitField::bit(15, "WatchDog Int", A::RO, "WatchDog interrupt"),
            BitField::bit(14, "JamLimit", A::ROC, "Jam Limit interrupt"),
            BitField::bit(13, "Duplex Mismatch", A::ROC, "Duplex Mismatch interrupt"),
            BitField::bit(12, "WakeEvent", A::RO, "Wake Event interrupt"),
            BitField::bits(11, 5, "Reserved", A::RES, "Reserved"),
            BitField::bits(4, 3, "PHYInt", A::RO, "PHY layer core interrupt bit"),
            BitField::bit(2, "Reserved", A::RES, "Reserved"),
            BitField::bits(1, 0, "SERDES Int", A::RO, "SERDES layer core interrupt bit"),
        ],
    },
    Register {
        addr: 0x01,
        name: "Interrupt Mask Register",
        fields: &[
            BitField::bit(15, "WatchDog IntEn", A::RWR, "WatchDog interrupt enable"),
            BitField::bit(14, "JamLimitEn", A::ROC, "Jam Limit interrupt enable"),
            BitField::bit(13, "Duplex Mismatch Error", A::RWR, "Duplex Mismatch interrupt enable"),
            BitField::bit(12, "WakeEventEn", A::RWR, "Wake Event interrupt enable"),
            BitField::bits(11, 5, "Reserved", A::RES, "Reserved"),
            BitField::bits(4, 3, "PHYIntEn", A::RWR, "PHY layer core interrupt enable bit"),
            BitField::bit(2, "Reserved", A::RES, "Reserved"),
            BitField::bits(1, 0, "SERDES IntEn", A::RWR, "SERDES layer core interrupt enable bit"),
        ],
    },
    Register {
        addr: 0x02,
        name: "MGMT Enable Register 2x",
        fields: &[BitField::bits(15, 0, "Rsvd2CPU Enables 2x", A::RWS, "Reserved DA Enables 2x. Form: 01:80:C2:00:00:2x where x maps to bit position")],
    },
    Register {
        addr: 0x03,
        name: "MGMT Enable Register 0x",
        fields: &[BitField::bits(15, 0, "Rsvd2CPU Enables 0x", A::RWS, "Reserved DA Enables 0x. Form: 01:80:C2:00:00:0x where x maps to bit position")],
    },
    Register {
        addr: 0x04,
        name: "Flow Control Delay Register",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update FC Delay Time data"),
            BitField::bits(14, 13, "SPD", A::RWR, "Speed Number (00=10M, 01=100M, 10=1000M)"),
            BitField::bits(12, 0, "FC Delay Time", A::RWS, "Flow Control Delay Time"),
        ],
    },
    Register {
        addr: 0x05,
        name: "Switch Management Register",
        fields: &[
            BitField::bit(15, "Loopback Filter", A::RWR, "Loopback filter"),
            BitField::bit(14, "Reserved", A::RES, "Reserved"),
            BitField::bit(13, "Flow Control Message", A::RWR, "Enable Flow Control Messages"),
            BitField::bit(12, "FloodBC", A::RWR, "Flood Broadcast"),
            BitField::bit(11, "Remove 1PTag", A::RWR, "Remove One Provider Tag"),
            BitField::bit(10, "ATUAge IntEn", A::RWS, "ATU Age Violation Interrupt Enable"),
            BitField::bit(9, "Tag Flow Control", A::RWR, "Use and generate source port Flow Control"),
            BitField::bit(8, "Reserved", A::RES, "Reserved"),
            BitField::bit(7, "ForceFlowControlPri", A::RWS, "Force Flow Control Priority"),
            BitField::bits(6, 4, "FC Pri", A::RWS, "Flow Control Priority"),
            BitField::bit(3, "Rsvd2CPU", A::RWR, "Reserved multicast frames to CPU"),
            BitField::bits(2, 0, "MGMT Pri", A::RWS, "MGMT Priority"),
        ],
    },
    Register {
        addr: 0x06,
        name: "Device Mapping Table Register",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Target Device Routing data"),
            BitField::bits(14, 13, "Reserved", A::RES, "Reserved"),
            BitField::bits(12, 8, "Trg_Dev Value", A::RWR, "Target Device Value"),
            BitField::bits(7, 4, "Reserved", A::RES, "Reserved"),
            BitField::bits(3, 0, "Trg_Dev Port", A::RWS, "Target Device Port number"),
        ],
    },
    Register {
        addr: 0x07,
        name: "Trunk Mask Table Register",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Trunk Mask data"),
            BitField::bits(14, 12, "MaskNum", A::RWR, "Mask Number (0-7)"),
            BitField::bit(11, "HashTrunk", A::RWR, "Hash DA & SA for TrunkMask selection"),
            BitField::bits(10, 7, "Reserved", A::RES, "Reserved"),
            BitField::bits(6, 0, "TrunkMask", A::RWS, "Trunk Mask bits"),
        ],
    },
    Register {
        addr: 0x08,
        name: "Trunk Mapping Table Register",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Trunk Routing data"),
            BitField::bits(14, 11, "Trunk ID", A::RWR, "Trunk Identifier (0-15)"),
            BitField::bits(10, 7, "Reserved", A::RES, "Reserved"),
            BitField::bits(6, 0, "TrunkMap", A::RWR, "Trunk Map bits"),
        ],
    },
    Register {
        addr: 0x09,
        name: "Ingress Rate Command Register",
        fields: &[
            BitField::bit(15, "IRLBusy", A::SC, "Ingress Rate Limit unit Busy"),
            BitField::bits(14, 12, "IRLOp", A::RWR, "001=Init all resources, 010=Init selected resource, 011=Write to selected resource, 100=Read selected resource"),
            BitField::bits(11, 8, "IRLPort", A::RWR, "Ingress rate limiting port"),
            BitField::bits(7, 5, "IRLRes", A::RWR, "Ingress rate limit resource"),
            BitField::bit(4, "Reserved", A::RWR, "Reserved"),
            BitField::bits(3, 0, "IRLReg", A::RWR, "Ingress Rate Limit register"),
        ],
    },
    Register {
        addr: 0x0A,
        name: "Ingress Rate Data Register",
        fields: &[BitField::bits(15, 0, "IRLData", A::RWR, "Ingress Rate Limit Data")],
    },
    Register {
        addr: 0x0B,
        name: "Cross-chip Port VLAN Register",
        fields: &[
            BitField::bit(15, "PVTBusy", A::SC, "Port VLAN Table Busy"),
            BitField::bits(14, 12, "PVTOp", A::RWR, "001=Init PVT Table to all ones, 011=Write PVLAN Data, 100=Read selected register"),
            BitField::bits(11, 9, "Reserved", A::RES, "Reserved"),
            BitField::bits(8, 0, "Pointer", A::RWR, "Pointer to desired entry (0-511)"),
        ],
    },
    Register {
        addr: 0x0C,
        name: "Cross-chip Port VLAN Data Register",
        fields: &[
            BitField::bits(15, 7, "Reserved", A::RES, "Reserved"),
            BitField::bits(6, 0, "PVLAN Data", A::RWS, "Cross-chip Port VLAN Data bit mask"),
        ],
    },
    Register {
        addr: 0x0D,
        name: "Switch MAC/WoL/WoF Register",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Data"),
            BitField::bits(14, 13, "Reserved", A::RES, "Reserved"),
            BitField::bits(12, 8, "Pointer", A::RWR, "Pointer to desired octet. 0x00-0x05: Switch MAC, 0x0C-0x0F: Wake on Frame, 0x10-0x1F: Wake on LAN"),
            BitField::bits(7, 0, "Data", A::RWR, "Octet Data"),
        ],
    },
    Register {
        addr: 0x0E,
        name: "ATU Stats Register",
        fields: &[
            BitField::bits(15, 14, "Bin", A::RWR, "Bin selector bits (0-3)"),
            BitField::bits(13, 12, "CountMode", A::RWR, "00=all valid entries, 01=valid non-static only, 10=valid in defined FID, 11=valid non-static in defined FID"),
            BitField::bits(11, 0, "ActiveBin Ctr", A::RO, "Active ATU Bin Entry Counter"),
        ],
    },
    Register {
        addr: 0x0F,
        name: "Priority Override Table",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Data"),
            BitField::bits(14, 13, "Reserved", A::RES, "Reserved"),
            BitField::bit(12, "FPriSet", A::RWR, "When 0=QPri access, When 1=FPri access"),
            BitField::bits(11, 8, "Pointer", A::RWR, "Pointer to desired entry (0-15)"),
            BitField::bit(7, "QpriAvbEn", A::RWR, "QpriAvb override enable"),
            BitField::bit(6, "Reserved", A::RES, "Reserved"),
            BitField::bits(5, 4, "DataAvb", A::RWR, "Queue Priority Override Data for AVB ports"),
            BitField::bit(3, "QPriEn/FPriEn", A::RWR, "QPri/FPri enable"),
            BitField::bits(2, 0, "Data", A::RWR, "Priority Override Data"),
        ],
    },
    Register {
        addr: 0x14,
        name: "EEPROM Command",
        fields: &[
            BitField::bit(15, "EEBusy", A::SC, "EEPROM Unit Busy"),
            BitField::bits(14, 12, "EEOp", A::RWR, "011=Write EEPROM, 100=Read EEPROM, 110=Restart Register Load execution"),
            BitField::bit(11, "Running", A::RO, "Register Loader Running"),
            BitField::bit(10, "WriteEn", A::RO, "EEPROM Write Enable"),
            BitField::bits(9, 8, "Reserved", A::RES, "Reserved"),
            BitField::bits(7, 0, "Addr", A::RWR, "EEPROM Address"),
        ],
    },
    Register {
        addr: 0x15,
        name: "EEPROM Data",
        fields: &[BitField::bits(15, 0, "Data", A::RWR, "EEPROM data")],
    },
    Register {
        addr: 0x16,
        name: "AVB Command Register",
        fields: &[
            BitField::bit(15, "AVBBusy", A::SC, "AVB unit Busy"),
            BitField::bits(14, 12, "AVBOp", A::RWR, "011=Write to register, 100=Read from register, 110=Read with post increment"),
            BitField::bits(11, 8, "AVBPort", A::RWR, "Physical port (0xF=Global, 0xE=TAI Global)"),
            BitField::bits(7, 5, "AVBBlock", A::RWR, "0x0=PTP register space, 0x1=AVB Policy register space, 0x2=Qav register space"),
            BitField::bits(4, 0, "AVBAddr", A::RWR, "Address bits for register operation"),
        ],
    },
    Register {
        addr: 0x17,
        name: "AVB Data Register",
        fields: &[BitField::bits(15, 0, "AVBData", A::RWR, "AVB Data bits")],
    },
    Register {
        addr: 0x18,
        name: "SMI PHY Command Register",
        fields: &[
            BitField::bit(15, "SMIBusy", A::SC, "SMI PHY Unit Busy"),
            BitField::bits(14, 13, "Reserved", A::RES, "Reserved"),
            BitField::bit(12, "SMIMode", A::RWR, "SMI PHY Mode (0=Clause 45, 1=Clause 22)"),
            BitField::bits(11, 10, "SMIOp", A::RWR, "SMI PHY Opcode"),
            BitField::bits(9, 5, "DevAddr", A::RWR, "SMI PHY Device Address"),
            BitField::bits(4, 0, "RegAddr", A::RWR, "SMI PHY Register Address"),
        ],
    },
    Register {
        addr: 0x19,
        name: "SMI PHY Data Register",
        fields: &[BitField::bits(15, 0, "SMIData", A::RWR, "SMI PHY Data register")],
    },
    Register {
        addr: 0x1A,
        name: "Scratch and Misc. Register",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Data"),
            BitField::bits(14, 8, "Pointer", A::RWR, "Pointer to desired octet. 0x00-0x01: Scratch Bytes, 0x0B-0x0F: EEE, 0x20-0x3F: GPIO Port Stall Vectors, 0x60-0x6F: GPIO registers, 0x70-0x7F: CONFIG reads"),
            BitField::bits(7, 0, "Data", A::RWR, "Scratch and Misc. Control data"),
        ],
    },
    Register {
        addr: 0x1B,
        name: "Watch Dog Control Register",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Data"),
            BitField::bits(14, 8, "Pointer", A::RWR, "Pointer to desired octet. 0x00: Watch Dog Interrupt Source, 0x10-0x13: Data Path Watch Dog Interrupts, 0x40: Auto Fixing Enables"),
            BitField::bits(7, 0, "Data", A::RWR, "Watch Dog Control data"),
        ],
    },
    Register {
        addr: 0x1C,
        name: "QoS Weights Register",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Data. Loads bits 7:0 into the QoS Weights octet register selected by the Pointer bits, then self clears"),
            BitField::bit(14, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(13, 8, "Pointer", A::RWR, "Selects one of 32 QoS Weight Data registers or the QoS Weight Length register"),
            BitField::bits(7, 0, "Data", A::RWS, "Octet Data. 0x00 to 0x1F = QoS Weight Table Data, 0x20 = QoS Weight Table Length"),
        ],
    },
    Register {
        addr: 0x1D,
        name: "Misc Register",
        fields: &[
            BitField::bit(15, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(14, "5 Bit Port", A::RWR, "Use 5 bits for Port data in the Port VLAN Table addressing"),
            BitField::bit(13, "NoEgr Policy", A::RWR, "No Egress Policy. Egress 802.1Q Secure and Check discards are not performed"),
            BitField::bits(12, 0, "Reserved", A::RES, "Reserved for future use"),
        ],
    },
    Register {
        addr: 0x1F,
        name: "Misc Register (Cut Through)",
        fields: &[
            BitField::bits(15, 13, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(12, 8, "Cut Through Hold", A::RWR, "Octets a Cut Through connection is held after the last bytes of a frame's CRC (88E6321 only)"),
            BitField::bits(7, 0, "Reserved", A::RES, "Reserved for future use"),
        ],
    },
];
