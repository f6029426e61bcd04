use imagecodec::{decode, decode_with_limits, detect_format, DecodeError, Image, ImageFormat, Limits};

#[test]
fn unknown_signature_fails() {
    let input = b"XYZW0123456789ABCDEFGH";
    assert!(input.len() >= 18);
    let mut out = [0u8; 16];
    let mut image = Image::new(&mut out);
    assert!(decode(&mut image, input).is_err());
    assert_eq!(detect_format(input), None);
}

#[test]
fn detect_format_identifies_netpbm() {
    assert_eq!(detect_format(b"P6\n1 1\n255\n\x00\x00\x00"), Some(ImageFormat::NetPbm));
}

#[test]
fn limits_reject_oversized_width_before_pixel_work() {
    let input = b"P2\n2 2\n255\n0 128 200 255\n";
    let mut out = [0u8; 4];
    let mut image = Image::new(&mut out);
    let limits = Limits {
        max_width: Some(1),
        ..Limits::default()
    };
    assert_eq!(
        decode_with_limits(&mut image, input, &limits),
        Err(DecodeError::LimitExceeded)
    );
}

#[test]
fn limits_allow_within_bounds() {
    let input = b"P2\n2 2\n255\n0 128 200 255\n";
    let mut out = [0u8; 4];
    let mut image = Image::new(&mut out);
    let limits = Limits {
        max_width: Some(4),
        max_height: Some(4),
        max_pixels: Some(100),
    };
    decode_with_limits(&mut image, input, &limits).unwrap();
    assert_eq!(image.width, 2);
}
