#![cfg(test)]
use ipcodec_common::AddressError;
use ipcodec_common::network::codec::{ipv4_to_num, ipv6_to_num, num_to_ipv4, num_to_ipv6};
use ipcodec_common::network::validate::{validate_ipv4, validate_ipv6};

/// Every valid dotted-decimal text survives the trip through its integer.
#[test]
fn ipv4_round_trip() {
    let samples = [
        "0.0.0.0",
        "127.0.0.1",
        "10.20.30.40",
        "192.168.255.1",
        "255.255.255.255",
        "1.0.0.255",
    ];

    for text in samples {
        let num = ipv4_to_num(text).unwrap();
        assert_eq!(num_to_ipv4(num), text, "round trip failed for {text}");
    }
}

/// Fully written hextets come back unchanged when shortening is off.
#[test]
fn ipv6_expanded_round_trip() {
    let samples = [
        "0000:0000:0000:0000:0000:0000:0000:0000",
        "2001:0DB8:85A3:0000:0000:8A2E:0370:7334",
        "FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF",
        "FE80:0000:0000:0000:0202:B3FF:FE1E:8329",
        "0001:0002:0003:0004:0005:0006:0007:0008",
    ];

    for text in samples {
        let num = ipv6_to_num(text).unwrap();
        assert_eq!(num_to_ipv6(num, false, false), text, "round trip failed for {text}");
    }
}

/// Compressed text parses to the same integer as its elided rendering.
#[test]
fn ipv6_elided_rendering_parses_back() {
    let samples = ["::", "::1", "1::", "2001:db8::ff00:42:8329", "fe80::1:0:0:1"];

    for text in samples {
        let num = ipv6_to_num(text).unwrap();
        let rendered = num_to_ipv6(num, true, true);
        assert_eq!(ipv6_to_num(&rendered).unwrap(), num, "{text} rendered as {rendered}");
    }
}

#[test]
fn zero_run_elision() {
    assert_eq!(num_to_ipv6(0, true, true), "::");
    assert_eq!(
        num_to_ipv6(0x2001_0000_0000_0000_0000_0000_0000_0001, true, true),
        "2001::1"
    );

    // Equal runs: the one nearer the least significant end is elided
    assert_eq!(
        num_to_ipv6(0x2001_0DB8_0000_0000_0001_0000_0000_0001, true, true),
        "2001:DB8:0:0:1::1"
    );
}

#[test]
fn strict_and_lenient_ipv4() {
    assert!(!validate_ipv4("256.1.1.1", true));
    assert!(validate_ipv4("256.1.1.1", false));
}

#[test]
fn double_elision_fails_codec_but_not_validator() {
    let text = "2001::db8::1";
    assert_eq!(ipv6_to_num(text), Err(AddressError::MultipleElisions));
    assert!(!validate_ipv6(text, true));
    assert!(!validate_ipv6(text, false));
}

/// Lenient validation checks form only, however wide the integers get.
#[test]
fn lenient_validation_ignores_magnitude() {
    let ipv4 = format!("{}.1.1.1", "9".repeat(40));
    assert!(validate_ipv4(ipv4.as_str(), false));
    assert!(!validate_ipv4(ipv4.as_str(), true));

    let hextet = "F".repeat(34);
    let ipv6 = format!("1:2:3:4:5:6:7:{hextet}");
    assert!(validate_ipv6(ipv6.as_str(), false));
    assert!(!validate_ipv6(ipv6.as_str(), true));
    assert_eq!(ipv6_to_num(&ipv6), Err(AddressError::SegmentTooLarge(hextet)));
}
