//! Marvell 88E6320/88E6321 Register Model and MII Command Generator
//!
//! A `no_std` (+`alloc`) Rust model of the 88E632x switch/PHY register map
//! with a deterministic generator for the `mii read`/`mii write` console
//! sequences used to reach those registers from a bootloader prompt.
//!
//! # Architecture
//!
//! The crate is organized into small, pure layers:
//!
//! 1. **Word Codec** ([`word`]): permissive text ↔ 16-bit word conversion
//! 2. **Bit-Field Accessor** ([`field`]): extract/insert named fields
//! 3. **Address Composer** ([`smi`]): the chip's SMI command-word encodings
//! 4. **Bit-Field Catalog** ([`catalog`]): per-page/per-address register
//!    descriptions for the PHY pages, per-port, Global1 and Global2 blocks
//! 5. **Command Sequence Generator** ([`command`]): page-switch preambles,
//!    indirect access sequencing, and direct per-port/global access
//! 6. **Script builders** ([`script`]): ready-made dump/VLAN/port/stats
//!    scripts assembled from the layers above
//!
//! # Register access on this chip family
//!
//! The 88E632x hangs several register blocks off one MDIO bus:
//!
//! | Block | MII address | Access |
//! |-------|-------------|--------|
//! | Switch port N (0–8) | `0x11 + N` | direct |
//! | Global1 | `0x1B` | direct |
//! | Global2 | `0x1C` | direct |
//! | PHY pages 0/2/5/6/7 | via Global2 `0x18`/`0x19` | indirect, paged |
//!
//! PHY registers sit behind the SMI PHY Command/Data pair (Global2 offsets
//! `0x18`/`0x19`); pages other than 0 additionally require writing the page
//! number to PHY register `0x16` first. [`command::Generator`] takes care of
//! both, tracking the last page it switched to so redundant preambles are
//! skipped.
//!
//! # Example
//!
//! ```
//! use mv88e632x_mii::catalog::RegisterSpace;
//! use mv88e632x_mii::command::{CommandRequest, Generator};
//!
//! let mut generator = Generator::new();
//! let script = generator
//!     .generate(&CommandRequest::read(RegisterSpace::PhyPage0, 4, 0x01))
//!     .unwrap();
//!
//! assert_eq!(script.lines()[0], "mii write 0x1C 0x18 0x9881");
//! assert_eq!(script.lines()[1], "mii read 0x1C 0x19");
//! ```
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types
//! - `log`: Trace generated sequences through the `log` facade
//!
//! # Scope
//!
//! Output is advisory console text; the crate performs no MDIO transfers.
//! Persistence and export are collaborator seams ([`session`]) the host
//! application implements.

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

extern crate alloc;

// =============================================================================
// Modules
// =============================================================================

pub mod catalog;
pub mod command;
pub mod constants;
pub mod error;
pub mod field;
pub mod script;
pub mod session;
pub mod smi;
pub mod word;

#[cfg(test)]
mod test_utils;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use catalog::{Register, RegisterSpace};
pub use command::{CommandRequest, CommandScript, Generator};
pub use error::{CatalogError, CommandError, Error, Result, SessionError};
pub use field::{Access, BitField, FieldSpan};
pub use session::{ExportSink, PersistenceProvider, Session};
pub use smi::{Direction, SmiCommand};
