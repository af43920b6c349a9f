const BYTES_PER_PIXEL: usize = 4;

/// One frame of the RGBA pixel buffer, exposed to the draw callback.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl RenderFrame<'_> {
    pub fn fill(&mut self, color: [u8; BYTES_PER_PIXEL]) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn draw_square(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: [u8; BYTES_PER_PIXEL],
    ) {
        let right = x.saturating_add(width).min(self.width);
        let bottom = y.saturating_add(height).min(self.height);

        for row in y..bottom {
            for col in x..right {
                self.put_pixel(col, row, color);
            }
        }
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: [u8; BYTES_PER_PIXEL]) {
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        if let Some(pixel) = self.buffer.get_mut(offset..offset + BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&color);
        }
    }
}
