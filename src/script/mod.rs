//! Ready-Made Script Builders
//!
//! Higher-level generators that assemble multi-step console or shell
//! scripts from the command layer's encodings: a full register dump, VLAN
//! table configuration, per-port setup, and a statistics readout.
//!
//! Each builder is a config struct with `with_*` methods and a `build`
//! that returns the script as lines. The builders are pure; nothing here
//! touches hardware or tracks state between builds.

mod dump;
mod port;
mod stats;
mod vlan;

pub use dump::{DumpKind, DumpScript};
pub use port::{PortSetup, PortState};
pub use stats::StatsReadout;
pub use vlan::VlanConfig;
