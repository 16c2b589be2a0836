use super::helpers;
use scene_core::LiveTexture;
use web_sys as web;

/// GPU side of a live texture: created once at the player's surface size and
/// refreshed in place from the canvas whenever the player drew a new frame.
pub(crate) struct CanvasTexture {
    texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl CanvasTexture {
    pub(crate) fn new(device: &wgpu::Device, live: &LiveTexture) -> Self {
        let format = helpers::texture_format_for(&live.settings);
        // the bridge never generates mips for a raster that changes every frame
        let mip_level_count = 1;
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("live_texture"),
            size: wgpu::Extent3d {
                width: live.width,
                height: live.height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = helpers::sampler_for(device, "live_sampler", &live.settings);
        Self {
            texture,
            view,
            sampler,
            width: live.width,
            height: live.height,
        }
    }

    /// Copy the canvas' current pixels into the texture. The copy is clipped
    /// to the overlap of both sizes; an empty canvas is skipped.
    pub(crate) fn refresh(&self, queue: &wgpu::Queue, canvas: &web::HtmlCanvasElement) {
        let w = canvas.width().min(self.width);
        let h = canvas.height().min(self.height);
        if w == 0 || h == 0 {
            return;
        }
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLCanvasElement(canvas.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
        );
    }
}
