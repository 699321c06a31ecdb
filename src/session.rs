//! Editing session: selection, working values, persistence and export
//!
//! A [`Session`] tracks which register is currently selected, keeps a
//! working 16-bit value per `(space, address)` pair and owns the
//! [`Generator`] whose page bookkeeping spans the whole session. The host
//! supplies storage and output through the [`PersistenceProvider`] and
//! [`ExportSink`] seams; this crate ships no implementation of either.
//!
//! Snapshots are plain text so they survive any string-keyed store: one
//! `selection=` line followed by one `space:addr=value` line per stored
//! register, values in 4-digit uppercase hex.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::catalog::{self, RegisterSpace};
use crate::command::{CommandRequest, CommandScript, Generator, Operation};
use crate::error::{Result, SessionError};
use crate::word::format_hex;

// =============================================================================
// Collaborator Seams
// =============================================================================

/// String-keyed store the host provides for session snapshots.
pub trait PersistenceProvider {
    /// Fetch the value previously saved under `key`, if any
    fn load(&mut self, key: &str) -> Option<String>;

    /// Save `value` under `key`
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Destination for finished scripts (clipboard, file, console)
pub trait ExportSink {
    /// Hand the rendered text to the host
    fn export(&mut self, contents: &str) -> Result<()>;
}

// =============================================================================
// Session
// =============================================================================

/// One register-editing session.
///
/// Created selecting PHY page 0 register 0x00 on port 0, with every
/// working value defaulting to 0 until written.
#[derive(Debug)]
pub struct Session {
    space: RegisterSpace,
    port: Option<u8>,
    reg_addr: u8,
    values: BTreeMap<(RegisterSpace, u8), u16>,
    generator: Generator,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// New session with the default selection
    pub const fn new() -> Self {
        Self {
            space: RegisterSpace::PhyPage0,
            port: Some(0),
            reg_addr: 0,
            values: BTreeMap::new(),
            generator: Generator::new(),
        }
    }

    /// Enable `#` comment lines in generated sequences
    #[must_use]
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.generator = self.generator.with_comments(comments);
        self
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select a register in a ported space
    pub fn select(&mut self, space: RegisterSpace, port: u8, reg_addr: u8) {
        self.space = space;
        self.port = Some(port);
        self.reg_addr = reg_addr;
    }

    /// Select a register in Global1 or Global2
    pub fn select_global(&mut self, space: RegisterSpace, reg_addr: u8) {
        self.space = space;
        self.port = None;
        self.reg_addr = reg_addr;
    }

    /// Currently selected `(space, port, register address)`
    pub const fn selection(&self) -> (RegisterSpace, Option<u8>, u8) {
        (self.space, self.port, self.reg_addr)
    }

    /// Page the generator last switched to
    pub const fn current_page(&self) -> u8 {
        self.generator.current_page()
    }

    /// Forget the tracked page, as after a chip reset
    pub fn reset_page_tracking(&mut self) {
        self.generator.reset();
    }

    // -------------------------------------------------------------------------
    // Working values
    // -------------------------------------------------------------------------

    /// Working value of the selected register (0 until set)
    pub fn value(&self) -> u16 {
        self.value_at(self.space, self.reg_addr)
    }

    /// Working value of any register (0 until set)
    pub fn value_at(&self, space: RegisterSpace, reg_addr: u8) -> u16 {
        self.values.get(&(space, reg_addr)).copied().unwrap_or(0)
    }

    /// Replace the working value of the selected register
    pub fn set_value(&mut self, value: u16) {
        self.values.insert((self.space, self.reg_addr), value);
    }

    /// Flip one bit of the selected register's working value
    pub fn toggle_bit(&mut self, bit: u8) {
        let value = crate::field::toggle_bit(self.value(), bit);
        self.set_value(value);
    }

    /// Store a named field into the selected register's working value.
    ///
    /// The field is looked up in the catalog for the selected register.
    pub fn set_field(&mut self, name: &str, field_value: u16) -> Result<()> {
        let reg = catalog::register(self.space, self.reg_addr)?;
        let field = reg
            .field(name)
            .ok_or(SessionError::UnknownField)?;
        self.set_value(field.set(self.value(), field_value));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Generation
    // -------------------------------------------------------------------------

    /// Generate the read sequence for the selected register
    pub fn read_selected(&mut self) -> Result<CommandScript> {
        self.generator.generate(&CommandRequest {
            space: self.space,
            port: self.port,
            reg_addr: self.reg_addr,
            operation: Operation::Read,
        })
    }

    /// Generate the write sequence carrying the selected register's
    /// working value
    pub fn write_selected(&mut self) -> Result<CommandScript> {
        self.generator.generate(&CommandRequest {
            space: self.space,
            port: self.port,
            reg_addr: self.reg_addr,
            operation: Operation::Write(self.value()),
        })
    }

    /// Render `script` through the host's export sink
    pub fn export<S: ExportSink>(&self, sink: &mut S, script: &CommandScript) -> Result<()> {
        sink.export(&script.to_string())
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Serialize selection and working values to the snapshot format
    pub fn snapshot(&self) -> String {
        let mut out = String::from("selection=");
        out.push_str(space_token(self.space));
        out.push(':');
        out.push_str(&format_hex(u16::from(self.reg_addr), 2));
        if let Some(port) = self.port {
            out.push(':');
            out.push_str(&format_hex(u16::from(port), 2));
        }
        for (&(space, addr), &value) in &self.values {
            out.push('\n');
            out.push_str(space_token(space));
            out.push(':');
            out.push_str(&format_hex(u16::from(addr), 2));
            out.push('=');
            out.push_str(&format_hex(value, 4));
        }
        out
    }

    /// Save the session under `key` in the host's store
    pub fn save<P: PersistenceProvider>(&self, provider: &mut P, key: &str) -> Result<()> {
        provider.save(key, &self.snapshot())
    }

    /// Restore a session saved under `key`.
    ///
    /// Returns `Ok(None)` when the store has nothing for `key`. A snapshot
    /// with lines that fit neither the `selection=` nor the
    /// `space:addr=value` shape is rejected whole.
    pub fn restore<P: PersistenceProvider>(
        provider: &mut P,
        key: &str,
    ) -> Result<Option<Self>> {
        let Some(text) = provider.load(key) else {
            return Ok(None);
        };
        let mut session = Self::new();
        let mut values = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(sel) = line.strip_prefix("selection=") {
                let (space, port, reg_addr) =
                    parse_selection(sel).ok_or(SessionError::MalformedSnapshot)?;
                session.space = space;
                session.port = port;
                session.reg_addr = reg_addr;
            } else {
                values.push(parse_value_line(line).ok_or(SessionError::MalformedSnapshot)?);
            }
        }
        for (space, addr, value) in values {
            session.values.insert((space, addr), value);
        }
        Ok(Some(session))
    }
}

// =============================================================================
// Snapshot Format
// =============================================================================

const fn space_token(space: RegisterSpace) -> &'static str {
    match space {
        RegisterSpace::PhyPage0 => "phy0",
        RegisterSpace::PhyPage2 => "phy2",
        RegisterSpace::PhyPage5 => "phy5",
        RegisterSpace::PhyPage6 => "phy6",
        RegisterSpace::PhyPage7 => "phy7",
        RegisterSpace::SwitchPort => "port",
        RegisterSpace::Global1 => "global1",
        RegisterSpace::Global2 => "global2",
    }
}

fn space_from_token(token: &str) -> Option<RegisterSpace> {
    Some(match token {
        "phy0" => RegisterSpace::PhyPage0,
        "phy2" => RegisterSpace::PhyPage2,
        "phy5" => RegisterSpace::PhyPage5,
        "phy6" => RegisterSpace::PhyPage6,
        "phy7" => RegisterSpace::PhyPage7,
        "port" => RegisterSpace::SwitchPort,
        "global1" => RegisterSpace::Global1,
        "global2" => RegisterSpace::Global2,
        _ => return None,
    })
}

fn parse_hex_u8(text: &str) -> Option<u8> {
    u8::from_str_radix(text, 16).ok()
}

/// `space:addr` or `space:addr:port`
fn parse_selection(text: &str) -> Option<(RegisterSpace, Option<u8>, u8)> {
    let mut parts = text.split(':');
    let space = space_from_token(parts.next()?)?;
    let reg_addr = parse_hex_u8(parts.next()?)?;
    let port = match parts.next() {
        Some(p) => Some(parse_hex_u8(p)?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((space, port, reg_addr))
}

/// `space:addr=value`
fn parse_value_line(line: &str) -> Option<(RegisterSpace, u8, u16)> {
    let (key, value) = line.split_once('=')?;
    let (token, addr) = key.split_once(':')?;
    let space = space_from_token(token)?;
    let addr = parse_hex_u8(addr)?;
    let value = u16::from_str_radix(value, 16).ok()?;
    Some((space, addr, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::{MockSink, MockStore};

    #[test]
    fn selection_defaults_and_updates() {
        let mut session = Session::new();
        assert_eq!(session.selection(), (RegisterSpace::PhyPage0, Some(0), 0));
        session.select(RegisterSpace::SwitchPort, 3, 0x04);
        assert_eq!(
            session.selection(),
            (RegisterSpace::SwitchPort, Some(3), 0x04)
        );
        session.select_global(RegisterSpace::Global1, 0x0B);
        assert_eq!(session.selection(), (RegisterSpace::Global1, None, 0x0B));
    }

    #[test]
    fn values_default_to_zero_per_register() {
        let mut session = Session::new();
        assert_eq!(session.value(), 0);
        session.set_value(0x1140);
        session.select(RegisterSpace::PhyPage0, 0, 0x01);
        assert_eq!(session.value(), 0);
        assert_eq!(session.value_at(RegisterSpace::PhyPage0, 0x00), 0x1140);
    }

    #[test]
    fn toggle_and_field_edits_land_in_the_working_value() {
        let mut session = Session::new();
        session.toggle_bit(15);
        assert_eq!(session.value(), 0x8000);
        session.set_field("Power Down", 1).unwrap();
        assert_eq!(session.value(), 0x8800);
        assert!(matches!(
            session.set_field("No Such Field", 1),
            Err(Error::Session(SessionError::UnknownField))
        ));
    }

    #[test]
    fn generation_uses_the_selection_and_working_value() {
        let mut session = Session::new();
        session.select(RegisterSpace::PhyPage0, 4, 0x00);
        session.set_value(0x8000);
        let script = session.write_selected().unwrap();
        assert_eq!(
            script.lines(),
            ["mii write 0x1C 0x19 0x8000", "mii write 0x1C 0x18 0x9480"]
        );
        let script = session.read_selected().unwrap();
        assert_eq!(
            script.lines(),
            ["mii write 0x1C 0x18 0x9880", "mii read 0x1C 0x19"]
        );
    }

    #[test]
    fn page_tracking_spans_requests() {
        let mut session = Session::new();
        session.select(RegisterSpace::PhyPage5, 2, 0x17);
        session.read_selected().unwrap();
        assert_eq!(session.current_page(), 5);
        session.reset_page_tracking();
        assert_eq!(session.current_page(), 0);
    }

    #[test]
    fn snapshot_round_trips_through_a_store() {
        let mut session = Session::new();
        session.select(RegisterSpace::PhyPage0, 4, 0x00);
        session.set_value(0x1140);
        session.select_global(RegisterSpace::Global2, 0x18);
        session.set_value(0x9880);

        let mut store = MockStore::new();
        session.save(&mut store, "bench").unwrap();
        let restored = Session::restore(&mut store, "bench").unwrap().unwrap();
        assert_eq!(restored.selection(), (RegisterSpace::Global2, None, 0x18));
        assert_eq!(restored.value_at(RegisterSpace::PhyPage0, 0x00), 0x1140);
        assert_eq!(restored.value_at(RegisterSpace::Global2, 0x18), 0x9880);
    }

    #[test]
    fn snapshot_format_is_stable() {
        let mut session = Session::new();
        session.select(RegisterSpace::SwitchPort, 2, 0x04);
        session.set_value(0x007F);
        assert_eq!(session.snapshot(), "selection=port:04:02\nport:04=007F");
    }

    #[test]
    fn missing_key_restores_to_none() {
        let mut store = MockStore::new();
        assert!(Session::restore(&mut store, "absent").unwrap().is_none());
    }

    #[test]
    fn malformed_snapshot_is_rejected() {
        let mut store = MockStore::new();
        store.seed("bad", "selection=phy0:00\nnot a line");
        assert!(matches!(
            Session::restore(&mut store, "bad"),
            Err(Error::Session(SessionError::MalformedSnapshot))
        ));
    }

    #[test]
    fn export_joins_script_lines() {
        let mut session = Session::new();
        session.select(RegisterSpace::SwitchPort, 1, 0x03);
        let script = session.read_selected().unwrap();
        let mut sink = MockSink::new();
        session.export(&mut sink, &script).unwrap();
        assert_eq!(sink.exports(), ["mii read 0x12 0x03"]);
    }
}
