use cerviscan::image::RgbImageU8;

/// Generates a high-contrast colour checkerboard.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 {
                [32u8, 40, 48]
            } else {
                [220u8, 200, 180]
            };
            pixels.push(val);
        }
    }
    RgbImageU8::from_pixels(width, height, pixels).expect("checkerboard buffer")
}

/// Dark background with a mid-tone ring and a bright pinkish disc in the
/// centre, loosely shaped like a cervical photograph.
pub fn lesion_rgb(width: usize, height: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = width.min(height) as f64 / 2.0;
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let d = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt() / radius;
            // Small deterministic texture so no channel is constant.
            let n = ((x * 7 + y * 13) % 9) as u8;
            let px = if d < 0.35 {
                [225 + n, 150 + n, 160 + n]
            } else if d < 0.75 {
                [150 + n, 90 + n, 95 + n]
            } else {
                [30 + n, 20 + n, 25 + n]
            };
            pixels.push(px);
        }
    }
    RgbImageU8::from_pixels(width, height, pixels).expect("lesion buffer")
}
