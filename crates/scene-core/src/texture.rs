//! Live texture bookkeeping.
//!
//! The pixels live outside this crate (the player's drawing surface); what is
//! tracked here is how they must be sampled and whether the GPU copy is
//! stale. The animation player marks the texture dirty on every frame it
//! draws and the render loop consumes the flag before drawing.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB; decoded to linear on sampling.
    Srgb,
    Linear,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextureSettings {
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub generate_mipmaps: bool,
    pub color_space: ColorSpace,
}

impl TextureSettings {
    /// Settings for a raster re-drawn every frame: point sampling, a single
    /// mip level, sRGB interpretation.
    pub const fn canvas() -> Self {
        Self {
            min_filter: FilterMode::Nearest,
            mag_filter: FilterMode::Nearest,
            generate_mipmaps: false,
            color_space: ColorSpace::Srgb,
        }
    }
}

/// Shared "needs re-upload" flag. Cloning yields another handle to the same flag.
#[derive(Clone, Debug, Default)]
pub struct DirtyFlag(Rc<Cell<bool>>);

impl DirtyFlag {
    #[inline]
    pub fn set(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

#[derive(Clone, Debug)]
pub struct LiveTexture {
    pub settings: TextureSettings,
    pub width: u32,
    pub height: u32,
    dirty: DirtyFlag,
}

impl LiveTexture {
    /// A texture over a `width` x `height` pixel surface. Starts dirty so the
    /// first frame uploads whatever the surface holds.
    pub fn new(width: u32, height: u32, settings: TextureSettings) -> Self {
        let dirty = DirtyFlag::default();
        dirty.set();
        Self {
            settings,
            width: width.max(1),
            height: height.max(1),
            dirty,
        }
    }

    /// Handle for the animation player's frame callback.
    #[inline]
    pub fn dirty_flag(&self) -> DirtyFlag {
        self.dirty.clone()
    }

    /// Clear the flag, reporting whether the surface drew since last time.
    #[inline]
    pub fn take_dirty(&self) -> bool {
        self.dirty.take()
    }
}
