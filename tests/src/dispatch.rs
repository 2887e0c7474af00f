#![cfg(test)]
use ipcodec_common::{Address, AddressError, ErrorKind, NetAddress};

#[test]
fn dispatch_by_shape() {
    let v4: Address = "10.0.0.1".parse().unwrap();
    assert!(matches!(v4, Address::V4(_)));
    assert_eq!(v4.num(), 0x0A00_0001);

    let v6: Address = "::1".parse().unwrap();
    assert!(matches!(v6, Address::V6(_)));
    assert_eq!(v6.num(), 1);
}

#[test]
fn dispatch_keeps_port_and_text() {
    let v4 = Address::parse("10.0.0.1:22", None).unwrap();
    assert_eq!(v4.address(), "10.0.0.1");
    assert_eq!(v4.port(), Some(22));

    let v6 = Address::parse("[fe80::1]:22", None).unwrap();
    assert_eq!(v6.address(), "fe80::1");
    assert_eq!(v6.to_string(), "[fe80::1]:22");
}

#[test]
fn dispatch_errors_come_from_family_codec() {
    let err = Address::parse("1.2.3", None).unwrap_err();
    assert_eq!(err, AddressError::Ipv4SegmentCount(3));
    assert_eq!(err.kind(), ErrorKind::Format);

    let err = Address::parse("::1::", None).unwrap_err();
    assert_eq!(err, AddressError::MultipleElisions);
}

#[test]
fn dispatched_addresses_compare_across_families() {
    let v4: Address = "0.0.0.1".parse().unwrap();
    let v6: Address = "::1".parse().unwrap();
    assert_eq!(v4, v6);

    let other: Address = "::2".parse().unwrap();
    assert_ne!(v4, other);
}
