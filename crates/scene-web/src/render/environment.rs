use half::f16;
use scene_core::{EnvironmentMap, ENV_INTENSITY};

/// GPU copy of the pre-filtered environment: a mip-mapped half-float cube
/// texture and the trilinear sampler used for roughness-dependent lookups.
pub(crate) struct EnvResources {
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) max_mip: f32,
}

pub(crate) fn upload_environment(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    env: &EnvironmentMap,
) -> EnvResources {
    let size = env.face_size().max(1);
    let mips = env.mip_count().max(1);
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("env_cube"),
        size: wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 6,
        },
        mip_level_count: mips,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba16Float,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    for (level, mip) in env.levels.iter().enumerate() {
        for face in 0..6 {
            let texels: Vec<f16> = env
                .face_rgba(level, face, ENV_INTENSITY)
                .into_iter()
                .map(f16::from_f32)
                .collect();
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: level as u32,
                    origin: wgpu::Origin3d {
                        x: 0,
                        y: 0,
                        z: face as u32,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                bytemuck::cast_slice(&texels),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(8 * mip.size),
                    rows_per_image: Some(mip.size),
                },
                wgpu::Extent3d {
                    width: mip.size,
                    height: mip.size,
                    depth_or_array_layers: 1,
                },
            );
        }
    }
    let view = texture.create_view(&wgpu::TextureViewDescriptor {
        label: Some("env_cube_view"),
        dimension: Some(wgpu::TextureViewDimension::Cube),
        ..Default::default()
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("env_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    EnvResources {
        view,
        sampler,
        max_mip: (mips - 1) as f32,
    }
}
