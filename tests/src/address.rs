#![cfg(test)]
use ipcodec_common::{AddressError, Candidate, ErrorKind, IpAddress, Ipv4, Ipv6, NetAddress};

#[test]
fn ipv4_embedded_port_round_trip() {
    let ip = Ipv4::new(Some("192.168.0.1:8080"), None).unwrap();
    assert_eq!(ip.port(), Some(8080));
    assert_eq!(ip.to_string(), "192.168.0.1:8080");
}

/// The port written in the text is kept even when another one is passed.
#[test]
fn embedded_port_precedence() {
    let ip = Ipv4::new(Some("192.168.0.1:8080"), Some(9090)).unwrap();
    assert_eq!(ip.port(), Some(8080));

    let ip = Ipv6::new(Some("[2001:db8::1]:8080"), Some(9090)).unwrap();
    assert_eq!(ip.port(), Some(8080));
    assert_eq!(ip.to_string(), "[2001:db8::1]:8080");
}

#[test]
fn integer_address_equals_text() {
    let address = IpAddress::new(0x7F00_0001, None);
    assert_eq!(address, "127.0.0.1");
    assert_eq!(address, Ipv4::new(Some("127.0.0.1"), None).unwrap());
}

#[test]
fn port_setter_bounds() {
    let mut ip = Ipv4::new(Some("10.0.0.1"), Some(80)).unwrap();

    let err = ip.set_port(65536).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = ip.set_port(-1).unwrap_err();
    assert_eq!(err, AddressError::PortOutOfRange("-1".into()));

    let err = ip.set_port("8080").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);

    assert_eq!(ip.port(), Some(80));

    ip.set_port(Candidate::Absent).unwrap();
    assert_eq!(ip.port(), None);
    assert_eq!(ip.to_string(), "10.0.0.1");
}

#[test]
fn cross_family_views() {
    let address = IpAddress::new(0xC0A8_0001, Some(443));
    assert_eq!(address.as_ipv4().to_string(), "192.168.0.1:443");
    assert_eq!(address.as_ipv6().to_string(), "[0:0:0:0:0:0:C0A8:1]:443");
    assert_eq!(*address.as_ipv4(), *address.as_ipv6());

    let ip: Ipv6 = "::1".parse().unwrap();
    assert_eq!(ip.as_ipv4().to_string(), "0.0.0.1");
    assert_eq!(ip.as_hex(), "0x1");
}

#[test]
fn large_integers_render_as_ipv6() {
    let address = IpAddress::new(0x2001_0DB8_0000_0000_0000_0000_0000_0001, None);
    assert_eq!(address.to_string(), "2001:DB8:0:0:0:0:0:1");
    assert_eq!(address.num_to_ipv6(true, true), "2001:DB8::1");
    assert_eq!(address.num_to_ipv4(), "0.0.0.1");
}
