use portr_common::services::Service;

use crate::terminal::{format, print};

pub fn services() {
    let entries: Vec<(String, Service)> = Service::all()
        .map(|(port, service)| (format::port_key(port), service))
        .collect();

    print::set_key_width(format::key_width(entries.iter().map(|(key, _)| key)));
    for (key, service) in entries {
        print::aligned_line(&key, format::service_value(&service));
    }
    print::aligned_line("other", format::service_value(&Service::unknown()));
}
