pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub fn create_render_texture(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
    sample_count: u32,
    usage: wgpu::TextureUsages,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

/// Sampler honouring the live texture's filter settings.
pub fn sampler_for(
    device: &wgpu::Device,
    label: &str,
    settings: &scene_core::TextureSettings,
) -> wgpu::Sampler {
    let filter = |f: scene_core::FilterMode| match f {
        scene_core::FilterMode::Nearest => wgpu::FilterMode::Nearest,
        scene_core::FilterMode::Linear => wgpu::FilterMode::Linear,
    };
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: filter(settings.mag_filter),
        min_filter: filter(settings.min_filter),
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

pub fn texture_format_for(settings: &scene_core::TextureSettings) -> wgpu::TextureFormat {
    match settings.color_space {
        scene_core::ColorSpace::Srgb => wgpu::TextureFormat::Rgba8UnormSrgb,
        scene_core::ColorSpace::Linear => wgpu::TextureFormat::Rgba8Unorm,
    }
}
