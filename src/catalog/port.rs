//! Per-port switch register table
//!
//! Transcribed from the 88E632x per-port switch register reference. The
//! reserved slots are kept so dumps and decoders can render a full 0x00
//! through 0x1F address map.

use crate::field::{Access as A, BitField};

use super::Register;

static RESERVED_WORD: &[BitField] =
    &[BitField::bits(15, 0, "Reserved", A::RES, "Reserved for future use")];

pub(super) static REGISTERS: &[Register] = &[
    Register {
        addr: 0x00,
        name: "Port Status Register",
        fields: &[
            BitField::bit(15, "PauseEn", A::RO, "Pause enabled bit indicates full-duplex flow control"),
            BitField::bit(14, "MyPause", A::RO, "My Pause bit sent to PHY during PHY Polling Unit initialization"),
            BitField::bit(13, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(12, "PHYDetect", A::RWR, "802.3 PHY Detected. Set if PPU finds a non-all-one's value"),
            BitField::bit(11, "Link", A::RO, "Link Status. 0=Link down, 1=Link up"),
            BitField::bit(10, "Duplex", A::RO, "Duplex mode. 0=Half-duplex, 1=Full-duplex"),
            BitField::bits(9, 8, "Speed", A::RO, "Speed mode. 00=10Mbps, 01=100/200Mbps, 10=1000Mbps, 11=Reserved"),
            BitField::bit(7, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(6, "EEE Enabled", A::RO, "EEE (Energy Efficient Ethernet) Enabled from PHY"),
            BitField::bit(5, "TxPaused", A::RO, "Transmitter Paused. Set when Rx MAC receives Pause frame"),
            BitField::bit(4, "FlowCtrl", A::RO, "Flow Control. Set when Rx MAC determines no more data should enter"),
            BitField::bits(3, 0, "C_Mode", A::RO.union(A::RW), "Config Mode. Current interface type configuration mode"),
        ],
    },
    Register {
        addr: 0x01,
        name: "Physical Control Register",
        fields: &[
            BitField::bit(15, "RGMII Rx Timing", A::RWR, "RGMII Receive Timing Control. Changes disruptive to normal operation"),
            BitField::bit(14, "RGMII Tx Timing", A::RWR, "RGMII Transmit Timing Control. Changes disruptive to normal operation"),
            BitField::bit(13, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(12, "200BASE", A::RWR, "200 BASE Mode. For Port2,5,6 when C_Mode is 0x0 or 0x1"),
            BitField::bit(11, "MII PHY", A::RWR, "MII PHY Mode. Configure for connection to MAC device or PHY"),
            BitField::bits(10, 8, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(7, "FCValue", A::RWR, "Flow Control's Forced value. Force flow control when enabled"),
            BitField::bit(6, "ForcedFC", A::RWR, "Force Flow Control. Enable forced flow control"),
            BitField::bit(5, "LinkValue", A::RWR, "Link's Forced value. Force link up or down"),
            BitField::bit(4, "ForcedLink", A::RWR, "Force Link. Enable forced link state"),
            BitField::bit(3, "DpxValue", A::RWR, "Duplex's Forced value. Force full or half-duplex"),
            BitField::bit(2, "ForcedDpx", A::RWR, "Force Duplex. Enable forced duplex mode"),
            BitField::bits(1, 0, "ForceSpd", A::RWS, "Force Speed, defaults to 0x3. 00=10Mbps, 01=100/200Mbps, 10=1000Mbps, 11=Reserved"),
        ],
    },
    Register {
        addr: 0x02,
        name: "Jamming Control Register",
        fields: &[
            BitField::bits(15, 8, "LimitOut", A::RWS, "Limit the number of continuous Pause refresh frames transmitted, defaults to 0xFF"),
            BitField::bits(7, 0, "LimitIn", A::RWR, "Limit the number of continuous Pause refresh frames received"),
        ],
    },
    Register {
        addr: 0x03,
        name: "Switch Identifier Register",
        fields: &[
            BitField::bits(15, 4, "Product Num", A::RO, "Product Number or identifier. 88E6321=0x310, 88E6320=0x115"),
            BitField::bits(3, 0, "Rev", A::RO, "Revision Identifier. Initial version has Rev of 0x0"),
        ],
    },
    Register {
        addr: 0x04,
        name: "Port Control Register",
        fields: &[
            BitField::bits(15, 14, "SA Filtering", A::RWR, "Source Address Filtering controls. 00=Disabled, 01=Drop On Lock, 10=Drop On Unlock, 11=Drop to CPU"),
            BitField::bits(13, 12, "Egress Mode", A::RWR, "Egress Mode determines frame look when egressing. Frame Mode bits control effect"),
            BitField::bit(11, "Header", A::RWR, "Ingress & Egress Header Mode. Enable Marvell 2-byte Egress Header"),
            BitField::bit(10, "IGMP/MLD Snoop", A::RWR, "IGMP and MLD Snooping. Enable frame switching to CPU"),
            BitField::bits(9, 8, "Frame Mode", A::RWR, "Frame Mode defines expected Ingress and Egress tagging format. 00=Normal, 01=DSA, 10=Provider, 11=Ether Type DSA"),
            BitField::bit(7, "VLAN Tunnel", A::RWR, "VLAN Tunnel. Clear to zero for port based VLANs"),
            BitField::bit(6, "TagIfBoth", A::RWS, "Use Tag information for initial QPri assignment if frame is both tagged and IPv4/IPv6"),
            BitField::bits(5, 4, "InitialPri", A::RWS, "Initial Priority assignment, defaults to 0x3. Frame Priority and Queue Priority"),
            BitField::bits(3, 2, "Egress Floods", A::RWS, "Egress Flooding mode, defaults to 0x3. DA search in ATU for frame destination"),
            BitField::bits(1, 0, "PortState", A::RWR, "Port State. 00=Disabled, 01=Blocking/Listening, 10=Learning, 11=Forwarding"),
        ],
    },
    Register {
        addr: 0x05,
        name: "Port Control 1",
        fields: &[
            BitField::bit(15, "Message Port", A::RWR, "Message Port. Enable generation of learning message frames"),
            BitField::bit(14, "Trunk Port", A::RWR, "Trunk Port. Consider port as member of a Trunk"),
            BitField::bits(13, 12, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(11, 8, "Trunk ID", A::RWR, "Trunk ID. Define which trunk this port is associated with"),
            BitField::bits(7, 0, "FID", A::RWR, "Port's Default Filtering Information Database (FID) bits 11:4"),
        ],
    },
    Register {
        addr: 0x06,
        name: "Port Based VLAN Map",
        fields: &[
            BitField::bits(15, 12, "FID[3:0]", A::RWR, "Port's Default Filtering Information Database (FID) bits 3:0"),
            BitField::bit(11, "ForceMap", A::RWR, "Force Mapping. All received frames considered MGMT and mapped to port"),
            BitField::bits(10, 7, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(6, 0, "VLANTable", A::RWS, "In Chip Port based VLAN Table, defaults to all ones. Restrict output ports for frames"),
        ],
    },
    Register {
        addr: 0x07,
        name: "Default Port VLAN ID & Priority",
        fields: &[
            BitField::bits(15, 13, "DefPri", A::RWR, "Default Frame Priority. Default ingress priority when no priority info available"),
            BitField::bit(12, "Force DefaultVID", A::RWR, "Force to use Default VID when 802.1Q is enabled"),
            BitField::bits(11, 0, "DefaultVID", A::RWS, "Default VLAN Identifier for IEEE Tagged VID, defaults to 0x001"),
        ],
    },
    Register {
        addr: 0x08,
        name: "Port Control 2 Register",
        fields: &[
            BitField::bit(15, "ForceGoodFCS", A::RWR, "Force good FCS in frame. Overwrite with good CRC"),
            BitField::bit(14, "AllowBadFCS", A::RWR, "Allow receiving frames with bad FCS. Disable CRC error discard"),
            BitField::bits(13, 12, "Jumbo Mode", A::RWS, "JumboMode bits determine maximum frame size (MTU) allowed. 0x0=1522, 0x1=2048, 0x2=10240, 0x3=Reserved"),
            BitField::bits(11, 10, "802.1QMode", A::RWR, "IEEE 802.1Q Mode for port. Determine if 802.1Q based VLANs are used"),
            BitField::bit(9, "Discard Tagged", A::RWR, "Discard Tagged Frames. Discard all non-MGMT frames processed as tagged"),
            BitField::bit(8, "Discard Untagged", A::RWR, "Discard Untagged Frames. Discard all non-MGMT frames processed as untagged"),
            BitField::bit(7, "MapDA", A::RWS, "Map using DA hits. Use frame's DA to direct frame to correct ports"),
            BitField::bit(6, "ARP Mirror", A::RWR, "ARP Mirror enable. Mirror non-filtered Tagged/Untagged frames with Ethertype 0x0806"),
            BitField::bit(5, "Egress Monitor Source", A::RWR, "Egress Monitor Source Port. Enable egress monitoring"),
            BitField::bit(4, "Ingress Monitor Source", A::RWR, "Ingress Monitor Source Port. Enable ingress monitoring"),
            BitField::bit(3, "Use Def Qpri", A::RWR, "Use Default Queue Priority. Use port's DefQPri for initial Queue Priority assignment"),
            BitField::bits(2, 1, "DefQPri", A::RWR, "Default Queue Priority. Port's default queue priority"),
            BitField::bit(0, "Reserved", A::RES, "Reserved for future use"),
        ],
    },
    Register {
        addr: 0x09,
        name: "Egress Rate Control",
        fields: &[
            BitField::bits(15, 12, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(11, 8, "Frame Overhead", A::RWR, "Egress Rate Frame Overhead adjustment. Compensate for protocol mismatch"),
            BitField::bit(7, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(6, 0, "Egress Dec", A::RWS, "Egress Rate Decrement value, defaults to 0x01. Determine egress rate counter decrement"),
        ],
    },
    Register {
        addr: 0x0A,
        name: "Egress Rate Control 2",
        fields: &[
            BitField::bits(15, 14, "Count Mode", A::RWS, "Egress rate limiting count mode, defaults to 0x2. 00=Frame based, 01=Layer 1 bytes, 10=Layer 2 bytes, 11=Layer 3 bytes"),
            BitField::bits(13, 12, "Schedule", A::RWR, "Port's Scheduling mode. 00=Weighted round robin, 01=Strict priority 3 and weighted round robin for priorities 2,1,0"),
            BitField::bits(11, 0, "Egress Rate", A::RWR, "Egress data rate shaping. Modify port's effective transmission rate"),
        ],
    },
    Register {
        addr: 0x0B,
        name: "Port Association Vector",
        fields: &[
            BitField::bit(15, "HoldAt1", A::RWR, "Hold Aging ATU Entries at Entry State of 1. Prevent aging down"),
            BitField::bit(14, "IntOn AgeOut", A::RWR, "Interrupt on Age Out. Generate interrupt when aging is enabled"),
            BitField::bit(13, "LockedPort", A::RWR, "Locked Port. Enable CPU directed learning and disable automatic SA learning"),
            BitField::bit(12, "Ignore WrongData", A::RWR, "Ignore Wrong Data. Mask ATU Member Violation error"),
            BitField::bit(11, "Refresh Locked", A::RWR, "Auto Refresh known addressed when port is Locked"),
            BitField::bits(10, 7, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(6, 0, "PAV", A::RWS, "Port Association Vector for ATU learning, defaults to all zeros. Set up port trunking"),
        ],
    },
    Register {
        addr: 0x0C,
        name: "Port ATU Control",
        fields: &[
            BitField::bit(15, "Read LearnCnt", A::RWR, "Read current number of 'active' unicast MAC addresses associated with port"),
            BitField::bit(14, "Limit Reached", A::RO, "Limit Reached. Set when port can no longer auto learn more MAC addresses"),
            BitField::bit(13, "OverLimit IntEn", A::RWR, "Over Limit Interrupt Enable. Generate ATU Miss Violation interrupt"),
            BitField::bit(12, "KeepOldLearnLimit", A::RWR, "Keep Old Learn Limit. Allow ReadLearnCnt bit to toggle without modifying LearnLimit"),
            BitField::bits(11, 10, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(9, 0, "LearnLimit/LearnCnt", A::RWR.union(A::RO), "Port's Auto Learning Limit or current Auto Learning count"),
        ],
    },
    Register {
        addr: 0x0D,
        name: "Priority Override Register",
        fields: &[
            BitField::bits(15, 14, "DAPri Override", A::RWR, "DA Priority Override. Enable frame priority override when DA ATU priority override occurs"),
            BitField::bits(13, 12, "SAPri Override", A::RWR, "SA Priority Override. Enable frame priority override when SA ATU priority override occurs"),
            BitField::bits(11, 10, "VTUPri Override", A::RWR, "VTU Priority Override. Enable frame priority override when determined VID results in VID with VIDPRIOverride"),
            BitField::bit(9, "Mirror SA Miss", A::RWR, "Mirror Source Address Misses to the MirrorDest port"),
            BitField::bit(8, "Mirror VTU Miss", A::RWR, "Mirror VLAN Identifier Misses to the MirrorDest port"),
            BitField::bit(7, "Trap DA Miss", A::RWR, "Trap Destination Address Misses to CPU"),
            BitField::bit(6, "Trap SA Miss", A::RWR, "Trap Source Address Misses to CPU"),
            BitField::bit(5, "Trap VTU Miss", A::RWR, "Trap VLAN Identifier Misses to CPU"),
            BitField::bit(4, "Trap TCAM Miss", A::RWR, "Trap TCAM Misses to CPU (88E6321 only)"),
            BitField::bits(3, 2, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(1, 0, "TCAM Mode", A::RWR, "TCAM Mode (88E6321 only). 00=TCAM disabled, 01=TCAM enabled for 48 byte searches only"),
        ],
    },
    Register {
        addr: 0x0E,
        name: "Policy Control Register",
        fields: &[
            BitField::bits(15, 14, "DA Policy", A::RWR, "DA Policy Mapping. Enable frame switching based on destination address policy"),
            BitField::bits(13, 12, "SA Policy", A::RWR, "SA Policy Mapping. Enable frame switching based on source address policy"),
            BitField::bits(11, 10, "VTU Policy", A::RWR, "VTU Policy Mapping. Enable frame switching based on VTU policy"),
            BitField::bits(9, 8, "EType Policy", A::RWR, "EType Policy Mapping. Enable frame switching based on Ethernet Type"),
            BitField::bits(7, 6, "PPPoE Policy", A::RWR, "PPPoE Policy Mapping. Enable frame switching based on PPPoE Ethertype"),
            BitField::bits(5, 4, "VBAS Policy", A::RWR, "VBAS Policy Mapping. Enable frame switching based on VBAS Ethertype"),
            BitField::bits(3, 2, "Opt82 Policy", A::RWR, "DHCP Option 82 Policy Mapping. Enable frame switching based on DHCP Option 82"),
            BitField::bits(1, 0, "UDP Policy", A::RWR, "UDP Policy Mapping. Enable frame switching based on UDP port numbers"),
        ],
    },
    Register {
        addr: 0x0F,
        name: "Port E Type",
        fields: &[BitField::bits(15, 0, "Port EType", A::RWS, "Port's Special Ether Type, defaults to 0x9100. Used for many features depending on port mode")],
    },
    Register { addr: 0x10, name: "Reserved", fields: RESERVED_WORD },
    Register { addr: 0x11, name: "Reserved", fields: RESERVED_WORD },
    Register { addr: 0x12, name: "Reserved", fields: RESERVED_WORD },
    Register { addr: 0x13, name: "Reserved", fields: RESERVED_WORD },
    Register { addr: 0x14, name: "Reserved", fields: RESERVED_WORD },
    Register { addr: 0x15, name: "Reserved", fields: RESERVED_WORD },
    Register {
        addr: 0x16,
        name: "LED Control",
        fields: &[
            BitField::bit(15, "Update", A::SC, "Update Data. Load data into LED Control register selected by Pointer bits"),
            BitField::bits(14, 12, "Pointer", A::RWR, "Pointer to desired LED Control register. Select register for read/write operations"),
            BitField::bit(11, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(10, 0, "Data", A::RWR, "LED Control data read or written to register pointed to by Pointer bits"),
        ],
    },
    Register { addr: 0x17, name: "Reserved", fields: RESERVED_WORD },
    Register {
        addr: 0x18,
        name: "Port IEEE Priority Remapping Registers - Register 1",
        fields: &[
            BitField::bit(15, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(14, 12, "TagRemap3", A::RWS, "Tag Remap 3, defaults to 0x3. IEEE tagged frames with priority 3 get this register's value"),
            BitField::bit(11, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(10, 8, "TagRemap2", A::RWS, "Tag Remap 2, defaults to 0x2. IEEE tagged frames with priority 2 get this register's value"),
            BitField::bit(7, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(6, 4, "TagRemap1", A::RWS, "Tag Remap 1, defaults to 0x1. IEEE tagged frames with priority 1 get this register's value"),
            BitField::bit(3, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(2, 0, "TagRemap0", A::RWR, "Tag Remap 0. IEEE tagged frames with priority 0 get this register's value"),
        ],
    },
    Register {
        addr: 0x19,
        name: "Port IEEE Priority Remapping Registers - Register 2",
        fields: &[
            BitField::bit(15, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(14, 12, "TagRemap7", A::RWS, "Tag Remap 7, defaults to 0x7. IEEE tagged frames with priority 7 get this register's value"),
            BitField::bit(11, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(10, 8, "TagRemap6", A::RWS, "Tag Remap 6, defaults to 0x6. IEEE tagged frames with priority 6 get this register's value"),
            BitField::bit(7, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(6, 4, "TagRemap5", A::RWS, "Tag Remap 5, defaults to 0x5. IEEE tagged frames with priority 5 get this register's value"),
            BitField::bit(3, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(2, 0, "TagRemap4", A::RWS, "Tag Remap 4, defaults to 0x4. IEEE tagged frames with priority 4 get this register's value"),
        ],
    },
    Register { addr: 0x1A, name: "Reserved", fields: RESERVED_WORD },
    Register {
        addr: 0x1B,
        name: "Queue Counter Registers",
        fields: &[
            BitField::bits(15, 12, "Mode", A::RWS, "Mode, defaults to 0x8. Setting determines content of Data field. 0x0-0x3=Queue Size Counters, 0x4-0x7=Queue Size Counters mirror, 0x8=Egress Total Queue Size, 0x9=Ingress Reserved Queue Size"),
            BitField::bit(11, "Self Inc", A::RWR, "Self Increment Mode. Allow automatic increment of Mode bits after each read"),
            BitField::bits(10, 9, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(8, 0, "Data", A::RO, "Data. Content controlled by Mode bits above"),
        ],
    },
    Register { addr: 0x1C, name: "Reserved", fields: RESERVED_WORD },
    Register { addr: 0x1D, name: "Reserved", fields: RESERVED_WORD },
    Register {
        addr: 0x1E,
        name: "Debug Counter",
        fields: &[
            BitField::bits(15, 8, "RxBad Frames/Tx Collisions", A::RO, "Bad Counter. Increment each time frame enters port with error or transmit collision"),
            BitField::bits(7, 0, "RxGood Frames/Tx Transmit Frames", A::RO, "Good Counter. Increment each time good frame enters or is transmitted from port"),
        ],
    },
    Register {
        addr: 0x1F,
        name: "Cut Through Register",
        fields: &[
            BitField::bits(15, 12, "Enable Select", A::RWS, "Port Enable Select. Select Px_ENABLE pin for cut through control"),
            BitField::bits(11, 9, "Reserved", A::RES, "Reserved for future use"),
            BitField::bit(8, "Cut Through", A::RWR, "Cut Through enable. Enable frames to cut through from Ingress to Egress port"),
            BitField::bits(7, 4, "Reserved", A::RES, "Reserved for future use"),
            BitField::bits(3, 0, "Cut Through Queue", A::RWR, "Cut Through Queues. Allow frames to cut through to Egress port"),
        ],
    },
];
