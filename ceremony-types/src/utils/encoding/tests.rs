use super::*;

fn sample(len: usize) -> Vec<u8> {
    // walk the whole byte range so both `+` and `/` would show up in plain base64
    (0..len)
        .map(|i| u8::try_from((i * 37 + 251) % 256).unwrap())
        .collect()
}

#[test]
fn roundtrip_every_length() {
    for len in 0..=96 {
        let bytes = sample(len);
        let token = base64url(&bytes);
        assert_eq!(
            try_from_base64url(&token).expect("token from this codec must decode"),
            bytes,
            "length {len}"
        );
    }
}

#[test]
fn tokens_are_url_safe() {
    for len in 0..=96 {
        let token = base64url(&sample(len));
        assert!(
            !token.contains(['+', '/', '=']),
            "{token} is not url safe"
        );
    }
    assert_eq!(base64url(&[0xfb, 0xff]), "-_8");
    assert_eq!(base64url(&[]), "");
}

#[test]
fn known_tokens() {
    assert_eq!(base64url(&[0x01]), "AQ");
    assert_eq!(base64url(&[0x02]), "Ag");
    assert_eq!(base64url(&[0x01, 0x02]), "AQI");
    assert_eq!(base64url(&[0xAA]), "qg");
    assert_eq!(base64url(&[0xBB]), "uw");

    assert_eq!(try_from_base64url("AQI").unwrap(), vec![0x01, 0x02]);
    assert_eq!(try_from_base64url("-_8").unwrap(), vec![0xfb, 0xff]);
}

#[test]
fn padding_is_restored_per_remainder() {
    assert_eq!(restore_padding(""), "");
    assert_eq!(restore_padding("A"), "A===");
    assert_eq!(restore_padding("AQ"), "AQ==");
    assert_eq!(restore_padding("AQI"), "AQI=");
    assert_eq!(restore_padding("AQID"), "AQID");
    assert_eq!(restore_padding("AQIDBA"), "AQIDBA==");
}

#[test]
fn existing_padding_is_tolerated() {
    assert_eq!(restore_padding("AQ="), "AQ==");
    assert_eq!(restore_padding("AQ=="), "AQ==");
    assert_eq!(try_from_base64url("AQ==").unwrap(), vec![0x01]);
    assert_eq!(try_from_base64url("AQ=").unwrap(), vec![0x01]);
    assert_eq!(try_from_base64url("AQI=").unwrap(), vec![0x01, 0x02]);
}

#[test]
fn codec_tokens_reencode_identically() {
    for len in 0..=32 {
        let token = base64url(&sample(len));
        let decoded = try_from_base64url(&token).unwrap();
        assert_eq!(base64url(&decoded), token);
    }
}

#[test]
fn non_zero_trailing_bits_are_tolerated() {
    // "AR" carries a non-canonical trailing bit, browsers still decode it to 0x01
    assert_eq!(try_from_base64url("AR").unwrap(), vec![0x01]);
}

#[test]
fn characters_outside_the_alphabet_fail() {
    try_from_base64url("A+Q").expect_err("`+` is not part of base64url");
    try_from_base64url("AQ/").expect_err("`/` is not part of base64url");
    try_from_base64url("!!!!").expect_err("`!` is not part of base64url");
    try_from_base64url("AQ I").expect_err("whitespace is not part of base64url");

    let err = try_from_base64url("AQ*I").unwrap_err();
    assert_eq!(err.position, 2);
}

#[test]
fn impossible_lengths_fail() {
    try_from_base64url("A").expect_err("a single character cannot encode a byte");
    try_from_base64url("AQIDB").expect_err("five characters cannot be padded into a quantum");
}
