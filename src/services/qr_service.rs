// src/services/qr_service.rs

use image::{DynamicImage, ImageOutputFormat, Luma};
use qrcode::QrCode;

use crate::common::error::AppError;

const MIN_QR_SIZE: u32 = 320;

/// Gera o PNG de um QR com o texto puro (id do predio ou do ativo).
/// Sem assinatura nem validade: quem lê o QR recebe apenas o id.
pub fn render_png(content: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(content.as_bytes())
        .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

    let image_buffer = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_QR_SIZE, MIN_QR_SIZE)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image_buffer)
        .write_to(&mut png, ImageOutputFormat::Png)
        .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn renders_a_png_for_a_stadium_id() {
        let png = render_png("6a1f9c1e-3b0a-4c55-9d7e-1c2b3a4d5e6f").unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let (width, height) = image::load_from_memory(&png).unwrap().dimensions();
        assert!(width >= MIN_QR_SIZE);
        assert_eq!(width, height);
    }
}
