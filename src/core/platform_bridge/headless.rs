//=========================================================================
// Headless Surface
//=========================================================================
//
// In-memory RGBA surface for running the loop without a window.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Surface, SurfaceError};

const CLEAR_PIXEL: [u8; 4] = [0, 0, 0, 0xff];

//=== HeadlessSurface =====================================================

/// Surface backed by a plain byte buffer.
///
/// Counts clears and presents so callers can observe what the loop did.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    clears: u64,
    presents: u64,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0; width as usize * height as usize * 4];
        fill(&mut pixels);
        Self {
            width,
            height,
            pixels,
            clears: 0,
            presents: 0,
        }
    }

    pub fn clears(&self) -> u64 {
        self.clears
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        fill(&mut self.pixels);
        self.clears += 1;
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.presents += 1;
        Ok(())
    }
}

fn fill(pixels: &mut [u8]) {
    for pixel in pixels.chunks_exact_mut(4) {
        pixel.copy_from_slice(&CLEAR_PIXEL);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_black() {
        let surface = HeadlessSurface::new(2, 3);
        assert_eq!(surface.size(), (2, 3));
        assert_eq!(surface.pixels().len(), 2 * 3 * 4);
        assert!(surface.pixels().chunks_exact(4).all(|p| p == CLEAR_PIXEL));
    }

    #[test]
    fn clear_erases_drawing() {
        let mut surface = HeadlessSurface::new(2, 2);
        surface.frame_mut()[0..4].copy_from_slice(&[255, 0, 0, 255]);

        surface.clear();

        assert_eq!(&surface.pixels()[0..4], &CLEAR_PIXEL);
        assert_eq!(surface.clears(), 1);
    }

    #[test]
    fn present_is_counted() {
        let mut surface = HeadlessSurface::new(1, 1);
        surface.present().unwrap();
        surface.present().unwrap();
        assert_eq!(surface.presents(), 2);
        assert_eq!(surface.clears(), 0);
    }
}
