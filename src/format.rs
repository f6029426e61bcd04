/// Which family a signature match identifies. Exposed so a caller can probe
/// an input before committing a destination buffer.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    NetPbm,
    Bmp,
    Tga,
    Pcx,
    Ico,
    Dds,
}

/// Classify `data` by leading signature bytes, in a fixed precedence order:
/// NetPBM, BMP, TGA (weak — no magic, just a plausible image-type byte),
/// PCX, DDS, ICO. The dispatcher never tries more than one family; a weak
/// signature further down the list only fires once every earlier, stronger
/// signature has already missed.
///
/// Returns `None` if no enabled format's signature matches.
pub fn detect_format(data: &[u8]) -> Option<ImageFormat> {
    if data.len() >= 2 && data[0] == b'P' && (b'1'..=b'7').contains(&data[1]) {
        return Some(ImageFormat::NetPbm);
    }

    #[cfg(feature = "bmp")]
    if data.len() >= 2 && &data[0..2] == b"BM" {
        return Some(ImageFormat::Bmp);
    }

    #[cfg(feature = "tga")]
    if data.len() >= 18 && matches!(data[2], 2 | 3) {
        return Some(ImageFormat::Tga);
    }

    #[cfg(feature = "pcx")]
    if !data.is_empty() && data[0] == 0x0A {
        return Some(ImageFormat::Pcx);
    }

    #[cfg(feature = "dds")]
    if data.len() >= 3 && &data[0..3] == b"DDS" {
        return Some(ImageFormat::Dds);
    }

    #[cfg(feature = "ico")]
    if crate::reader::read_u16_le(data, 2) == Some(1) {
        return Some(ImageFormat::Ico);
    }

    None
}
