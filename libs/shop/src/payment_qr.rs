use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("payload does not fit in a QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("failed to write PNG: {0}")]
    Render(#[from] image::ImageError),
}

/// BIP21-style payment URI for a Litecoin address.
pub fn payment_uri(address: &str, amount: f64) -> String {
    format!("litecoin:{address}?amount={}", format_amount(amount))
}

/// Shortest float text; whole numbers keep a `.0` suffix.
fn format_amount(amount: f64) -> String {
    let text = amount.to_string();
    if amount.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Encode `payload` into a greyscale PNG QR code.
pub fn make_qr_png(payload: &str) -> Result<Vec<u8>, QrError> {
    let code = QrCode::new(payload.as_bytes())?;
    let image = code.render::<Luma<u8>>().min_dimensions(200, 200).build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(png)
}
