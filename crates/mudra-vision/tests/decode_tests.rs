use image::ImageEncoder;
use mudra_vision::{VisionError, decode_rgb};

#[test]
fn test_decode_png_rgb_exact_values() {
    // PNG is lossless, so decoded pixels must match the source exactly
    let mut buffer = Vec::new();
    let img = image::RgbImage::from_fn(2, 2, |x, y| {
        let val = (x + y) as u8 * 64;
        image::Rgb([val, val + 16, val + 32])
    });

    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 2, 2, image::ExtendedColorType::Rgb8)
        .unwrap();

    let tensor = decode_rgb(&buffer).unwrap();
    assert_eq!(tensor.shape, vec![2, 2, 3]);
    assert_eq!(tensor.data, img.into_raw());
}

#[test]
fn test_decode_jpeg_rgb() {
    // JPEG is lossy; only the shape is checked
    let mut buffer = Vec::new();
    let img = image::RgbImage::from_fn(4, 4, |x, y| {
        let val = (x + y) as u8 * 16;
        image::Rgb([val, val, val])
    });

    image::codecs::jpeg::JpegEncoder::new(&mut buffer)
        .encode_image(&img)
        .unwrap();

    let tensor = decode_rgb(&buffer).unwrap();
    assert_eq!(tensor.shape, vec![4, 4, 3]);
}

#[test]
fn test_decode_rgba_collapses_to_rgb() {
    let mut buffer = Vec::new();
    let img = image::RgbaImage::from_fn(2, 3, |_, _| image::Rgba([10, 20, 30, 255]));

    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 2, 3, image::ExtendedColorType::Rgba8)
        .unwrap();

    let tensor = decode_rgb(&buffer).unwrap();
    // Height 3, width 2, always 3 channels
    assert_eq!(tensor.shape, vec![3, 2, 3]);
    assert_eq!(&tensor.data[..3], &[10, 20, 30]);
}

#[test]
fn test_decode_grayscale_expands_to_rgb() {
    let mut buffer = Vec::new();
    let img = image::GrayImage::from_fn(2, 2, |_, _| image::Luma([99]));

    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 2, 2, image::ExtendedColorType::L8)
        .unwrap();

    let tensor = decode_rgb(&buffer).unwrap();
    assert_eq!(tensor.shape, vec![2, 2, 3]);
    // All three channels carry the luma value
    assert_eq!(&tensor.data[..3], &[99, 99, 99]);
}

#[test]
fn test_decode_invalid_data() {
    let err = decode_rgb(b"not an image").unwrap_err();
    assert!(matches!(err, VisionError::Decode(_)));
}
