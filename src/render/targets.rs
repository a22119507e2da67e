use super::helpers;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Depth buffer matching the swapchain size. The sphere writes depth; the
/// starfield only tests against it.
pub(crate) struct RenderTargets {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (depth_tex, depth_view) =
            helpers::create_depth_texture(device, "scene_depth", width, height, DEPTH_FORMAT);
        Self {
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_tex.destroy();
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(device, "scene_depth", width, height, DEPTH_FORMAT);
    }
}
