use imagecodec::{decode, DecodeError, Image};

fn build_tga(image_type: u8, width: u16, height: u16, bpp: u8, id: &[u8], pixels: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(id.len() as u8); // id length
    buf.push(0); // color map type
    buf.push(image_type);
    buf.extend_from_slice(&[0u8; 5]); // color map spec
    buf.extend_from_slice(&[0u8; 4]); // x/y origin
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
    buf.push(bpp);
    buf.push(0); // image descriptor
    buf.extend_from_slice(id);
    buf.extend_from_slice(pixels);
    buf
}

#[test]
fn tga_type2_truecolor_24bit() {
    let pixels = [
        0x00, 0x00, 0xFF, // BGR -> red
        0x00, 0xFF, 0x00, // BGR -> green
    ];
    let file = build_tga(2, 2, 1, 24, &[], &pixels);
    let mut out = [0u8; 6];
    let mut image = Image::new(&mut out);
    decode(&mut image, &file).unwrap();
    assert_eq!(image.stride, 3);
    assert_eq!(&image.pixels[..6], &[255, 0, 0, 0, 255, 0]);
}

#[test]
fn tga_type3_grayscale_8bit() {
    let pixels = [10u8, 20, 30, 40];
    let file = build_tga(3, 2, 2, 8, &[], &pixels);
    let mut out = [0u8; 4];
    let mut image = Image::new(&mut out);
    decode(&mut image, &file).unwrap();
    assert_eq!(image.stride, 1);
    assert_eq!(&image.pixels[..4], &pixels);
}

#[test]
fn tga_32bit_discards_alpha() {
    let pixels = [0x00, 0x00, 0xFF, 0x80]; // BGRA, alpha dropped
    let file = build_tga(2, 1, 1, 32, &[], &pixels);
    let mut out = [0u8; 3];
    let mut image = Image::new(&mut out);
    decode(&mut image, &file).unwrap();
    assert_eq!(image.stride, 3);
    assert_eq!(&image.pixels[..3], &[255, 0, 0]);
}

#[test]
fn tga_id_field_is_skipped() {
    let pixels = [0u8, 0, 0xFF];
    let file = build_tga(2, 1, 1, 24, b"hello", &pixels);
    let mut out = [0u8; 3];
    let mut image = Image::new(&mut out);
    decode(&mut image, &file).unwrap();
    assert_eq!(&image.pixels[..3], &[255, 0, 0]);
}

#[test]
fn tga_unsupported_bpp_fails() {
    let file = build_tga(2, 1, 1, 16, &[], &[0, 0]);
    let mut out = [0u8; 3];
    let mut image = Image::new(&mut out);
    assert_eq!(decode(&mut image, &file), Err(DecodeError::UnsupportedBitDepth(16)));
}

#[test]
fn tga_truncated_fails() {
    let file = build_tga(2, 2, 2, 24, &[], &[0; 4]); // need 12 bytes, only 4 present
    let mut out = [0u8; 12];
    let mut image = Image::new(&mut out);
    assert_eq!(decode(&mut image, &file), Err(DecodeError::TruncatedData));
}
