//! # Port Specification Model
//!
//! Turns the textual `--ports` argument into a concrete sequence of ports.
//!
//! Two forms are accepted:
//! * **Range**: `"start-end"`, inclusive, ascending (e.g. `20-25`).
//! * **List**: `"p1,p2,..."`, kept in the given order (e.g. `80,443,8080`).
//!
//! Parsing is pure; nothing here touches the network.

use std::str::FromStr;

use crate::error::ScanError;

/// A TCP port number. Values produced by [`PortSpec`] are always in `1..=65535`.
pub type Port = u16;

pub const MIN_PORT: u64 = 1;
pub const MAX_PORT: u64 = Port::MAX as u64;

/// A validated port specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortSpec {
    /// Inclusive range, `start <= end`.
    Range { start: Port, end: Port },
    /// Discrete ports in input order. Duplicates are kept.
    List(Vec<Port>),
}

impl PortSpec {
    /// Expands the specification into the ports to probe.
    pub fn ports(&self) -> Vec<Port> {
        match self {
            PortSpec::Range { start, end } => (*start..=*end).collect(),
            PortSpec::List(ports) => ports.clone(),
        }
    }

    pub fn port_count(&self) -> usize {
        match self {
            PortSpec::Range { start, end } => usize::from(*end - *start) + 1,
            PortSpec::List(ports) => ports.len(),
        }
    }
}

impl FromStr for PortSpec {
    type Err = ScanError;

    /// Parses a string into a `PortSpec`.
    ///
    /// Anything containing a `-` is treated as a range, everything else as
    /// a comma separated list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((start_str, end_str)) = s.split_once('-') {
            return parse_range(start_str, end_str, s);
        }
        parse_list(s)
    }
}

fn parse_range(start_str: &str, end_str: &str, original_s: &str) -> Result<PortSpec, ScanError> {
    let start: Port = parse_port(start_str, original_s)?;
    let end: Port = parse_port(end_str, original_s)?;

    if start > end {
        return Err(ScanError::invalid_spec(
            original_s,
            format!("range start {start} is greater than its end {end}"),
        ));
    }

    Ok(PortSpec::Range { start, end })
}

fn parse_list(s: &str) -> Result<PortSpec, ScanError> {
    let ports: Vec<Port> = s
        .split(',')
        .map(|token| parse_port(token, s))
        .collect::<Result<Vec<Port>, _>>()?;

    Ok(PortSpec::List(ports))
}

/// Parses one token and checks it against `MIN_PORT..=MAX_PORT`.
fn parse_port(token: &str, original_s: &str) -> Result<Port, ScanError> {
    let token = token.trim();
    let value: u64 = token.parse().map_err(|_| {
        ScanError::invalid_spec(original_s, format!("'{token}' is not a port number"))
    })?;

    if !(MIN_PORT..=MAX_PORT).contains(&value) {
        return Err(ScanError::invalid_spec(
            original_s,
            format!("{value} is outside {MIN_PORT}-{MAX_PORT}"),
        ));
    }

    Ok(value as Port)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
