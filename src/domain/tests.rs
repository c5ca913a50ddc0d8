// Hostname normalization tests.

use super::*;

#[test]
fn test_encode_plain_hostname() {
    assert_eq!(encode_hostname("example.com"), "example.com");
}

#[test]
fn test_encode_trims_whitespace() {
    assert_eq!(encode_hostname("  example.com \t"), "example.com");
}

#[test]
fn test_encode_lowercases() {
    assert_eq!(encode_hostname("WWW.Example.COM"), "www.example.com");
}

#[test]
fn test_encode_internationalized_name() {
    assert_eq!(encode_hostname("münchen.de"), "xn--mnchen-3ya.de");
    assert_eq!(encode_hostname("bücher.example"), "xn--bcher-kva.example");
}

#[test]
fn test_encode_keeps_punycode() {
    assert_eq!(encode_hostname("xn--mnchen-3ya.de"), "xn--mnchen-3ya.de");
}

#[test]
fn test_encode_ip_literal() {
    assert_eq!(encode_hostname("192.0.2.1"), "192.0.2.1");
}

#[test]
fn test_encode_falls_back_on_forbidden_characters() {
    // Spaces are not allowed in a host, so the trimmed input is used
    assert_eq!(encode_hostname(" bad host.example "), "bad host.example");
}

#[test]
fn test_encode_empty_input() {
    assert_eq!(encode_hostname("   "), "");
}

#[test]
fn test_encode_keeps_numeric_labels() {
    // Numeric labels are ordinary DNS labels, not shorthand IPv4 addresses
    assert_eq!(encode_hostname("123"), "123");
    assert_eq!(encode_hostname("1.2.3"), "1.2.3");
    assert_eq!(encode_hostname("0x7f.1"), "0x7f.1");
    assert_eq!(encode_hostname("10.example"), "10.example");
}

#[test]
fn test_to_ascii_hostname_rejects_url_delimiters() {
    assert!(to_ascii_hostname("example.com/path").is_err());
    assert!(to_ascii_hostname("[::1]").is_err());
}
