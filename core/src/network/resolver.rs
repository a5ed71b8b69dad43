use std::net::{IpAddr, SocketAddr};

use portr_common::ScanError;
use tokio::net::lookup_host;
use tracing::debug;

/// Turns an IP literal or a host name into a single address.
///
/// Literals (including bracketed IPv6 such as `[::1]`) never hit the
/// resolver. For names an IPv4 answer is preferred, otherwise the first
/// IPv6 answer is used.
pub async fn resolve_host(host: &str) -> Result<IpAddr, ScanError> {
    let trimmed: &str = host.trim();
    if trimmed.is_empty() {
        return Err(ScanError::resolution(host, "empty host name"));
    }

    if let Some(addr) = parse_literal(trimmed) {
        return Ok(addr);
    }

    let answers: Vec<SocketAddr> = lookup_host((trimmed, 0))
        .await
        .map_err(|e| ScanError::resolution(trimmed, e.to_string()))?
        .collect();

    let addr: IpAddr = pick_address(&answers)
        .ok_or_else(|| ScanError::resolution(trimmed, "no addresses found"))?;

    debug!("{trimmed} resolved to {addr} ({} answers)", answers.len());
    Ok(addr)
}

fn parse_literal(host: &str) -> Option<IpAddr> {
    let unbracketed: &str = host
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(host);
    unbracketed.parse::<IpAddr>().ok()
}

fn pick_address(answers: &[SocketAddr]) -> Option<IpAddr> {
    answers
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| answers.first())
        .map(SocketAddr::ip)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[tokio::test]
    async fn literals_skip_lookup() {
        assert_eq!(
            resolve_host("10.0.0.7").await,
            Ok(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7)))
        );
        assert_eq!(resolve_host("::1").await, Ok(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(resolve_host("[::1]").await, Ok(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(
            resolve_host(" 127.0.0.1 ").await,
            Ok(IpAddr::V4(Ipv4Addr::LOCALHOST))
        );
    }

    #[tokio::test]
    async fn empty_and_unknown_hosts_fail() {
        assert!(matches!(
            resolve_host("  ").await,
            Err(ScanError::ResolutionFailure { .. })
        ));
        assert!(matches!(
            resolve_host("no-such-host.invalid").await,
            Err(ScanError::ResolutionFailure { .. })
        ));
    }

    #[test]
    fn ipv4_answers_win() {
        let v6: SocketAddr = "[2001:db8::1]:0".parse().unwrap();
        let v4: SocketAddr = "192.0.2.1:0".parse().unwrap();
        assert_eq!(pick_address(&[v6, v4]), Some(v4.ip()));
        assert_eq!(pick_address(&[v6]), Some(v6.ip()));
        assert_eq!(pick_address(&[]), None);
    }
}
