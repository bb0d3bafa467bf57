//! WGSL sources

/// Phong shading with diffuse and specular maps under the full light rig
pub const LIT_SHADER: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    position: vec4<f32>,
}

struct DirectionalLight {
    direction: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
}

struct PointLight {
    position: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
    attenuation: vec4<f32>,
}

struct SpotLight {
    position: vec4<f32>,
    direction: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
    attenuation: vec4<f32>,
    cutoff: vec4<f32>,
}

struct Lights {
    directional: DirectionalLight,
    points: array<PointLight, 4>,
    spot: SpotLight,
    material: vec4<f32>,
}

struct ObjectUniform {
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
}

@group(0) @binding(0) var<uniform> camera: CameraUniform;
@group(0) @binding(1) var<uniform> lights: Lights;
@group(1) @binding(0) var<uniform> object: ObjectUniform;
@group(2) @binding(0) var diffuse_map: texture_2d<f32>;
@group(2) @binding(1) var specular_map: texture_2d<f32>;
@group(2) @binding(2) var material_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;

    let world_pos = object.model * vec4<f32>(in.position, 1.0);
    out.world_position = world_pos.xyz;
    out.clip_position = camera.view_proj * world_pos;
    out.world_normal = (object.normal_matrix * vec4<f32>(in.normal, 0.0)).xyz;
    out.uv = in.uv;

    return out;
}

struct Surface {
    normal: vec3<f32>,
    view_dir: vec3<f32>,
    diffuse: vec3<f32>,
    specular: vec3<f32>,
    shininess: f32,
}

fn phong(
    light_dir: vec3<f32>,
    ambient: vec3<f32>,
    diffuse: vec3<f32>,
    specular: vec3<f32>,
    s: Surface,
) -> vec3<f32> {
    let ndotl = max(dot(s.normal, light_dir), 0.0);
    let reflect_dir = reflect(-light_dir, s.normal);
    let spec = pow(max(dot(s.view_dir, reflect_dir), 0.0), s.shininess);

    return ambient * s.diffuse + diffuse * ndotl * s.diffuse + specular * spec * s.specular;
}

fn attenuate(attenuation: vec4<f32>, distance: f32) -> f32 {
    return 1.0 / (attenuation.x + attenuation.y * distance + attenuation.z * distance * distance);
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    var s: Surface;
    s.normal = normalize(in.world_normal);
    s.view_dir = normalize(camera.position.xyz - in.world_position);
    s.diffuse = textureSample(diffuse_map, material_sampler, in.uv).rgb;
    s.specular = textureSample(specular_map, material_sampler, in.uv).rgb;
    s.shininess = lights.material.x;

    let d = lights.directional;
    var color = phong(
        normalize(-d.direction.xyz),
        d.ambient.rgb,
        d.diffuse.rgb,
        d.specular.rgb,
        s,
    );

    for (var i = 0u; i < 4u; i = i + 1u) {
        let p = lights.points[i];
        let to_light = p.position.xyz - in.world_position;
        let falloff = attenuate(p.attenuation, length(to_light));
        color += falloff * phong(normalize(to_light), p.ambient.rgb, p.diffuse.rgb, p.specular.rgb, s);
    }

    let spot = lights.spot;
    let to_spot = spot.position.xyz - in.world_position;
    let spot_dir = normalize(to_spot);
    let theta = dot(spot_dir, normalize(-spot.direction.xyz));
    let epsilon = spot.cutoff.x - spot.cutoff.y;
    let intensity = clamp((theta - spot.cutoff.y) / epsilon, 0.0, 1.0);
    let spot_falloff = attenuate(spot.attenuation, length(to_spot)) * intensity;
    color += spot_falloff * phong(spot_dir, spot.ambient.rgb, spot.diffuse.rgb, spot.specular.rgb, s);

    return vec4<f32>(color, 1.0);
}
"#;

/// Flat white markers at the point light positions
pub const LIGHT_CUBE_SHADER: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    position: vec4<f32>,
}

struct ObjectUniform {
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
}

@group(0) @binding(0) var<uniform> camera: CameraUniform;
@group(1) @binding(0) var<uniform> object: ObjectUniform;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return camera.view_proj * object.model * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;
