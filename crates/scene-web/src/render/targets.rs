use super::helpers;

/// Per-size render attachments: multisampled colour resolved into the
/// swapchain, plus a matching depth buffer.
pub(crate) struct RenderTargets {
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (_, msaa_view) = helpers::create_render_texture(
            device,
            "msaa_color",
            width,
            height,
            color_format,
            sample_count,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (_, depth_view) = helpers::create_render_texture(
            device,
            "depth",
            width,
            height,
            helpers::DEPTH_FORMAT,
            sample_count,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self {
            msaa_view,
            depth_view,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.color_format, self.sample_count);
    }
}
