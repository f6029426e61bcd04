use imagecodec::{decode, DecodeError, Image};

fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}
fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// A minimal single-entry ICO wrapping one 24-bit BMP payload.
fn build_ico(bmp: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    push_u16(&mut buf, 0); // reserved
    push_u16(&mut buf, 1); // type = icon
    push_u16(&mut buf, 1); // one directory entry
    buf.push(0); // width (0 = 256)
    buf.push(0); // height
    buf.push(0); // color count
    buf.push(0); // reserved
    push_u16(&mut buf, 1); // planes
    push_u16(&mut buf, 24); // bpp
    push_u32(&mut buf, bmp.len() as u32); // payload size
    push_u32(&mut buf, 22); // payload offset, right after this 22-byte header
    buf.extend_from_slice(bmp);
    buf
}

fn build_bmp_24(pixels: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"BM");
    buf.extend_from_slice(&(54 + pixels.len() as u32).to_le_bytes());
    buf.extend_from_slice(&[0u8; 4]);
    buf.extend_from_slice(&54u32.to_le_bytes());
    buf.extend_from_slice(&40u32.to_le_bytes());
    buf.extend_from_slice(&1i32.to_le_bytes()); // width
    buf.extend_from_slice(&(-1i32).to_le_bytes()); // height, top-down
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&24u16.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&(pixels.len() as u32).to_le_bytes());
    buf.extend_from_slice(&[0u8; 8]);
    buf.extend_from_slice(&[0u8; 8]);
    buf.extend_from_slice(pixels);
    buf
}

#[test]
fn ico_delegates_to_bmp() {
    let bmp = build_bmp_24(&[0x00, 0x00, 0xFF, 0x00]); // 1x1 row (BGR + 1 pad byte)
    let file = build_ico(&bmp);
    let mut out = [0u8; 3];
    let mut image = Image::new(&mut out);
    decode(&mut image, &file).unwrap();
    assert_eq!(&image.pixels[..3], &[255, 0, 0]);
}

#[test]
fn ico_png_payload_rejected() {
    let mut file = build_ico(&[0; 8]);
    let offset = 22usize;
    file[offset] = 0x89;
    file[offset + 1] = b'P';
    let mut out = [0u8; 3];
    let mut image = Image::new(&mut out);
    assert_eq!(decode(&mut image, &file), Err(DecodeError::UnsupportedVariant));
}

#[test]
fn ico_bad_type_field_fails() {
    let mut file = build_ico(&build_bmp_24(&[0, 0, 0, 0]));
    file[2] = 2; // type = cursor, not icon
    file[3] = 0;
    let mut out = [0u8; 3];
    let mut image = Image::new(&mut out);
    assert_eq!(decode(&mut image, &file), Err(DecodeError::BadSignature));
}
