/// Convert decoded RGBA pixels to an egui ColorImage.
pub fn rgba_to_color_image(image: &image::RgbaImage) -> egui::ColorImage {
    let (w, h) = image.dimensions();
    let mut pixels = Vec::with_capacity((w as usize) * (h as usize));

    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        pixels.push(egui::Color32::from_rgba_unmultiplied(r, g, b, a));
    }

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}
