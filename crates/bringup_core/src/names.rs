//! Name lookup tables for wgpu enums, feature flags and limits.
//!
//! Adapter and device inspection print these names instead of `Debug`
//! output so the logs use WebGPU naming.

use wgpu::{Backend, CompositeAlphaMode, DeviceType, Features, Limits, PresentMode};

/// Feature flags and their WebGPU names, in report order.
pub const FEATURE_NAMES: &[(Features, &str)] = &[
    (Features::DEPTH_CLIP_CONTROL, "depth-clip-control"),
    (Features::DEPTH32FLOAT_STENCIL8, "depth32float-stencil8"),
    (Features::TEXTURE_COMPRESSION_BC, "texture-compression-bc"),
    (Features::TEXTURE_COMPRESSION_ETC2, "texture-compression-etc2"),
    (Features::TEXTURE_COMPRESSION_ASTC, "texture-compression-astc"),
    (Features::TIMESTAMP_QUERY, "timestamp-query"),
    (Features::INDIRECT_FIRST_INSTANCE, "indirect-first-instance"),
    (Features::SHADER_F16, "shader-f16"),
    (Features::RG11B10UFLOAT_RENDERABLE, "rg11b10ufloat-renderable"),
    (Features::BGRA8UNORM_STORAGE, "bgra8unorm-storage"),
    (Features::FLOAT32_FILTERABLE, "float32-filterable"),
    // Native-only
    (Features::POLYGON_MODE_LINE, "polygon-mode-line"),
    (Features::PUSH_CONSTANTS, "push-constants"),
];

/// Returns the names of every tabled flag set in `features`.
#[must_use]
pub fn feature_names(features: Features) -> Vec<&'static str> {
    FEATURE_NAMES
        .iter()
        .filter(|(flag, _)| features.contains(*flag))
        .map(|(_, name)| *name)
        .collect()
}

/// Reverse lookup of [`FEATURE_NAMES`]. Case insensitive, `_` accepted for `-`.
#[must_use]
pub fn feature_from_name(name: &str) -> Option<Features> {
    let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
    FEATURE_NAMES
        .iter()
        .find(|(_, n)| *n == normalized)
        .map(|(flag, _)| *flag)
}

/// Names of the flags in `required` that `available` lacks.
#[must_use]
pub fn missing_features(available: Features, required: Features) -> Vec<&'static str> {
    FEATURE_NAMES
        .iter()
        .filter(|(flag, _)| required.contains(*flag) && !available.contains(*flag))
        .map(|(_, name)| *name)
        .collect()
}

#[must_use]
pub fn device_type_name(device_type: DeviceType) -> &'static str {
    match device_type {
        DeviceType::Other => "other",
        DeviceType::IntegratedGpu => "integrated GPU",
        DeviceType::DiscreteGpu => "discrete GPU",
        DeviceType::VirtualGpu => "virtual GPU",
        DeviceType::Cpu => "CPU",
    }
}

#[must_use]
pub fn backend_name(backend: Backend) -> &'static str {
    match backend {
        Backend::Vulkan => "Vulkan",
        Backend::Metal => "Metal",
        Backend::Dx12 => "D3D12",
        Backend::Gl => "OpenGL",
        Backend::BrowserWebGpu => "WebGPU",
        _ => "null",
    }
}

#[must_use]
pub fn present_mode_name(mode: PresentMode) -> &'static str {
    match mode {
        PresentMode::AutoVsync => "auto-vsync",
        PresentMode::AutoNoVsync => "auto-no-vsync",
        PresentMode::Fifo => "fifo",
        PresentMode::FifoRelaxed => "fifo-relaxed",
        PresentMode::Immediate => "immediate",
        PresentMode::Mailbox => "mailbox",
    }
}

#[must_use]
pub fn alpha_mode_name(mode: CompositeAlphaMode) -> &'static str {
    match mode {
        CompositeAlphaMode::Auto => "auto",
        CompositeAlphaMode::Opaque => "opaque",
        CompositeAlphaMode::PreMultiplied => "premultiplied",
        CompositeAlphaMode::PostMultiplied => "postmultiplied",
        CompositeAlphaMode::Inherit => "inherit",
    }
}

/// The limits printed when inspecting an adapter or device, in report order.
#[must_use]
pub fn limit_entries(limits: &Limits) -> Vec<(&'static str, u64)> {
    vec![
        ("maxTextureDimension1D", limits.max_texture_dimension_1d.into()),
        ("maxTextureDimension2D", limits.max_texture_dimension_2d.into()),
        ("maxTextureDimension3D", limits.max_texture_dimension_3d.into()),
        ("maxTextureArrayLayers", limits.max_texture_array_layers.into()),
        ("maxBindGroups", limits.max_bind_groups.into()),
        ("maxBindingsPerBindGroup", limits.max_bindings_per_bind_group.into()),
        (
            "maxDynamicUniformBuffersPerPipelineLayout",
            limits.max_dynamic_uniform_buffers_per_pipeline_layout.into(),
        ),
        (
            "maxDynamicStorageBuffersPerPipelineLayout",
            limits.max_dynamic_storage_buffers_per_pipeline_layout.into(),
        ),
        (
            "maxSampledTexturesPerShaderStage",
            limits.max_sampled_textures_per_shader_stage.into(),
        ),
        ("maxSamplersPerShaderStage", limits.max_samplers_per_shader_stage.into()),
        (
            "maxStorageBuffersPerShaderStage",
            limits.max_storage_buffers_per_shader_stage.into(),
        ),
        (
            "maxStorageTexturesPerShaderStage",
            limits.max_storage_textures_per_shader_stage.into(),
        ),
        (
            "maxUniformBuffersPerShaderStage",
            limits.max_uniform_buffers_per_shader_stage.into(),
        ),
        ("maxUniformBufferBindingSize", limits.max_uniform_buffer_binding_size.into()),
        ("maxStorageBufferBindingSize", limits.max_storage_buffer_binding_size.into()),
        (
            "minUniformBufferOffsetAlignment",
            limits.min_uniform_buffer_offset_alignment.into(),
        ),
        (
            "minStorageBufferOffsetAlignment",
            limits.min_storage_buffer_offset_alignment.into(),
        ),
        ("maxVertexBuffers", limits.max_vertex_buffers.into()),
        ("maxBufferSize", limits.max_buffer_size),
        ("maxVertexAttributes", limits.max_vertex_attributes.into()),
        ("maxVertexBufferArrayStride", limits.max_vertex_buffer_array_stride.into()),
        ("maxColorAttachments", limits.max_color_attachments.into()),
        (
            "maxComputeWorkgroupStorageSize",
            limits.max_compute_workgroup_storage_size.into(),
        ),
        (
            "maxComputeInvocationsPerWorkgroup",
            limits.max_compute_invocations_per_workgroup.into(),
        ),
        ("maxComputeWorkgroupSizeX", limits.max_compute_workgroup_size_x.into()),
        ("maxComputeWorkgroupSizeY", limits.max_compute_workgroup_size_y.into()),
        ("maxComputeWorkgroupSizeZ", limits.max_compute_workgroup_size_z.into()),
        (
            "maxComputeWorkgroupsPerDimension",
            limits.max_compute_workgroups_per_dimension.into(),
        ),
    ]
}
