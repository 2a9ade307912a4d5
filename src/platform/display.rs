//=========================================================================
// Display Surface
//=========================================================================
//
// `Surface` backed by a `pixels` framebuffer on the platform window.
//
//=========================================================================

use std::sync::Arc;

use log::debug;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::platform_bridge::{Surface, SurfaceError};

const CLEAR_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

pub(crate) struct PixelsSurface {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsSurface {
    /// Creates a framebuffer of `width` x `height` logical pixels scaled
    /// onto the window's physical size.
    pub(crate) fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let physical = window.inner_size();
        let texture = SurfaceTexture::new(physical.width, physical.height, window);
        let pixels = Pixels::new(width, height, texture)?;

        debug!(
            target: "platform",
            "Framebuffer {}x{} on {}x{} window",
            width, height, physical.width, physical.height
        );
        Ok(Self { pixels, width, height })
    }
}

impl Surface for PixelsSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&CLEAR_COLOR);
        }
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        self.pixels.frame_mut()
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.pixels
            .render()
            .map_err(|e| SurfaceError::Present(e.to_string()))
    }
}
