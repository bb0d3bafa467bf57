//! Phong light rig
//!
//! One directional light, a fixed set of point lights and a spot light that
//! follows the camera. Each light carries separate ambient, diffuse and
//! specular colours.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Number of point lights the shader expects
pub const POINT_LIGHT_COUNT: usize = 4;

/// Distance falloff `1 / (constant + linear * d + quadratic * d^2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        // roughly a 50 unit range
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

impl Attenuation {
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }

    fn to_gpu(self) -> Vec4 {
        Vec4::new(self.constant, self.linear, self.quadratic, 0.0)
    }
}

/// Ambient, diffuse and specular colours of one light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl PhongTerms {
    pub fn grey(ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self {
            ambient: Vec3::splat(ambient),
            diffuse: Vec3::splat(diffuse),
            specular: Vec3::splat(specular),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub terms: PhongTerms,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub terms: PhongTerms,
    pub attenuation: Attenuation,
}

impl PointLight {
    pub fn new(position: Vec3, terms: PhongTerms) -> Self {
        Self {
            position,
            terms,
            attenuation: Attenuation::default(),
        }
    }

    fn to_gpu_data(&self) -> GpuPointLight {
        GpuPointLight {
            position: self.position.extend(1.0),
            ambient: self.terms.ambient.extend(0.0),
            diffuse: self.terms.diffuse.extend(0.0),
            specular: self.terms.specular.extend(0.0),
            attenuation: self.attenuation.to_gpu(),
        }
    }
}

/// Spot light; its position and direction are taken from the camera each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub terms: PhongTerms,
    pub attenuation: Attenuation,
    pub inner_angle: f32, // radians
    pub outer_angle: f32, // radians
}

/// Every light in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    pub directional: DirectionalLight,
    pub points: [PointLight; POINT_LIGHT_COUNT],
    pub spot: SpotLight,
    /// Specular exponent for every material
    pub shininess: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        let white = PhongTerms::grey(0.05, 0.8, 1.0);
        let red = PhongTerms {
            ambient: Vec3::new(0.05, 0.0, 0.0),
            diffuse: Vec3::new(0.2, 0.0, 0.0),
            specular: Vec3::ONE,
        };

        Self {
            directional: DirectionalLight {
                direction: Vec3::new(-0.2, -1.0, -0.3),
                terms: PhongTerms::grey(0.05, 0.4, 0.5),
            },
            points: [
                PointLight::new(Vec3::new(3.0, 5.0, 3.0), white),
                PointLight::new(Vec3::new(-3.0, 1.0, 3.0), red),
                PointLight::new(Vec3::new(3.0, 1.0, -3.0), red),
                PointLight::new(Vec3::new(-3.0, 5.0, -3.0), white),
            ],
            spot: SpotLight {
                terms: PhongTerms::grey(0.0, 1.0, 1.0),
                attenuation: Attenuation::default(),
                inner_angle: 12.5f32.to_radians(),
                outer_angle: 15.0f32.to_radians(),
            },
            shininess: 32.0,
        }
    }
}

impl LightRig {
    pub fn point_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// Pack the rig for the fragment shader, attaching the spot light to the camera
    pub fn to_uniform(&self, camera_position: Vec3, camera_front: Vec3) -> LightsUniform {
        let d = &self.directional;
        LightsUniform {
            directional: GpuDirectionalLight {
                direction: d.direction.extend(0.0),
                ambient: d.terms.ambient.extend(0.0),
                diffuse: d.terms.diffuse.extend(0.0),
                specular: d.terms.specular.extend(0.0),
            },
            points: self.points.map(|p| p.to_gpu_data()),
            spot: GpuSpotLight {
                position: camera_position.extend(1.0),
                direction: camera_front.normalize_or_zero().extend(0.0),
                ambient: self.spot.terms.ambient.extend(0.0),
                diffuse: self.spot.terms.diffuse.extend(0.0),
                specular: self.spot.terms.specular.extend(0.0),
                attenuation: self.spot.attenuation.to_gpu(),
                cutoff: Vec4::new(
                    self.spot.inner_angle.cos(),
                    self.spot.outer_angle.cos(),
                    0.0,
                    0.0,
                ),
            },
            material: Vec4::new(self.shininess, 0.0, 0.0, 0.0),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuDirectionalLight {
    pub direction: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuPointLight {
    pub position: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    /// constant, linear, quadratic, unused
    pub attenuation: Vec4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuSpotLight {
    pub position: Vec4,
    pub direction: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub attenuation: Vec4,
    /// cos(inner), cos(outer), unused, unused
    pub cutoff: Vec4,
}

/// Light uniform block, mirrored by `Lights` in the lit shader
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightsUniform {
    pub directional: GpuDirectionalLight,
    pub points: [GpuPointLight; POINT_LIGHT_COUNT],
    pub spot: GpuSpotLight,
    /// shininess, unused x3
    pub material: Vec4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rig() {
        let rig = LightRig::default();
        let positions: Vec<Vec3> = rig.point_positions().collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(3.0, 5.0, 3.0),
                Vec3::new(-3.0, 1.0, 3.0),
                Vec3::new(3.0, 1.0, -3.0),
                Vec3::new(-3.0, 5.0, -3.0),
            ]
        );
        assert_eq!(rig.points[1].terms.diffuse, Vec3::new(0.2, 0.0, 0.0));
        assert_eq!(rig.points[3].terms.diffuse, Vec3::splat(0.8));
        assert_eq!(rig.shininess, 32.0);
    }

    #[test]
    fn test_attenuation() {
        let attenuation = Attenuation::default();
        assert_eq!(attenuation.factor(0.0), 1.0);
        let expected = 1.0 / (1.0 + 0.09 * 10.0 + 0.032 * 100.0);
        assert!((attenuation.factor(10.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_packing() {
        let rig = LightRig::default();
        let uniform = rig.to_uniform(Vec3::new(3.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -2.0));

        assert_eq!(uniform.spot.position, Vec4::new(3.0, 2.0, 3.0, 1.0));
        assert_eq!(uniform.spot.direction, Vec4::new(0.0, 0.0, -1.0, 0.0));
        assert!((uniform.spot.cutoff.x - 12.5f32.to_radians().cos()).abs() < 1e-6);
        assert!((uniform.spot.cutoff.y - 15.0f32.to_radians().cos()).abs() < 1e-6);
        assert_eq!(uniform.points[0].attenuation, Vec4::new(1.0, 0.09, 0.032, 0.0));
        assert_eq!(uniform.material.x, 32.0);

        // 4 + 4 * 5 + 7 + 1 vec4s
        assert_eq!(std::mem::size_of::<LightsUniform>(), 32 * 16);
    }
}
