use colored::*;
use portr_common::services::Service;
use portr_core::scanner::OpenPort;

use crate::terminal::colors;

pub fn port_key(port: u16) -> String {
    format!("{port}/tcp")
}

pub fn service_value(service: &Service) -> ColoredString {
    if service.is_known() {
        service.name().color(colors::SERVICE_KNOWN).bold()
    } else {
        service.name().color(colors::SERVICE_UNKNOWN)
    }
}

pub fn open_port_to_detail(open: &OpenPort) -> (String, ColoredString) {
    (port_key(open.port), service_value(&open.service))
}

/// Widest key among `keys`, used to align result columns.
pub fn key_width<'a>(keys: impl Iterator<Item = &'a String>) -> usize {
    keys.map(|key| key.len()).max().unwrap_or(0)
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

    #[test]
    fn detail_uses_port_and_service_name() {
        let open = OpenPort::new(22, Service::lookup(22));
        let (key, value) = open_port_to_detail(&open);
        assert_eq!(key, "22/tcp");
        assert_eq!(&*value, "SSH");
    }

    #[test]
    fn key_width_is_longest_key() {
        let keys = vec![port_key(22), port_key(3389), port_key(80)];
        assert_eq!(key_width(keys.iter()), "3389/tcp".len());
        assert_eq!(key_width(Vec::<String>::new().iter()), 0);
    }
}
