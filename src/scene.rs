//! The campfire scene: a literal draw list of every object, in draw order.

use glam::{Mat4, Quat, Vec3};

use crate::mesh::MeshKind;

pub const FIRE_POSITION: Vec3 = Vec3::new(0.0, 0.5, 2.5);
pub const MOON_POSITION: Vec3 = Vec3::new(-3.0, 12.0, 9.0);

/// Texture slots, one image file each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Grass,
    Door,
    Shed,
    Roof,
    FirePit,
    Blue,
    Chair,
    Red,
    Bark,
    Pine,
    Knob,
}

impl TextureKind {
    pub const ALL: [TextureKind; 11] = [
        TextureKind::Grass,
        TextureKind::Door,
        TextureKind::Shed,
        TextureKind::Roof,
        TextureKind::FirePit,
        TextureKind::Blue,
        TextureKind::Chair,
        TextureKind::Red,
        TextureKind::Bark,
        TextureKind::Pine,
        TextureKind::Knob,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn file_name(self) -> &'static str {
        match self {
            TextureKind::Grass => "grass.jpg",
            TextureKind::Door => "door.jpg",
            TextureKind::Shed => "shed.jpg",
            TextureKind::Roof => "roof.jpg",
            TextureKind::FirePit => "firepit.jpg",
            TextureKind::Blue => "blue.jpg",
            TextureKind::Chair => "chair.jpg",
            TextureKind::Red => "red.jpg",
            TextureKind::Bark => "bark.jpg",
            TextureKind::Pine => "pine.jpg",
            TextureKind::Knob => "knob.jpg",
        }
    }

    /// Flat RGBA used when the image file is unavailable
    pub fn fallback_color(self) -> [u8; 4] {
        match self {
            TextureKind::Grass => [62, 110, 40, 255],
            TextureKind::Door => [96, 62, 36, 255],
            TextureKind::Shed => [140, 104, 70, 255],
            TextureKind::Roof => [88, 88, 96, 255],
            TextureKind::FirePit => [110, 104, 100, 255],
            TextureKind::Blue => [40, 70, 160, 255],
            TextureKind::Chair => [120, 84, 50, 255],
            TextureKind::Red => [160, 40, 40, 255],
            TextureKind::Bark => [84, 58, 38, 255],
            TextureKind::Pine => [30, 80, 40, 255],
            TextureKind::Knob => [190, 170, 90, 255],
        }
    }
}

/// Attenuated point light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl PointLight {
    pub const FIRE: PointLight = PointLight {
        position: FIRE_POSITION,
        ambient: Vec3::new(1.0, 0.6, 0.2),
        diffuse: Vec3::new(1.0, 0.6, 0.2),
        specular: Vec3::new(1.0, 0.6, 0.3),
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
    };

    pub const MOON: PointLight = PointLight {
        position: MOON_POSITION,
        ambient: Vec3::ONE,
        diffuse: Vec3::ONE,
        specular: Vec3::ONE,
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Phong-lit with a diffuse/specular texture
    Lit {
        texture: TextureKind,
        shininess: f32,
        light: PointLight,
    },
    /// Flat colour, used for the light sources themselves
    Emissive { color: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub mesh: MeshKind,
    pub model: Mat4,
    pub shading: Shading,
}

impl SceneObject {
    fn lit(
        name: &'static str,
        mesh: MeshKind,
        model: Mat4,
        texture: TextureKind,
        shininess: f32,
        light: PointLight,
    ) -> Self {
        Self {
            name,
            mesh,
            model,
            shading: Shading::Lit {
                texture,
                shininess,
                light,
            },
        }
    }

    fn emissive(name: &'static str, mesh: MeshKind, model: Mat4, color: Vec3) -> Self {
        Self {
            name,
            mesh,
            model,
            shading: Shading::Emissive { color },
        }
    }

    pub fn is_emissive(&self) -> bool {
        matches!(self.shading, Shading::Emissive { .. })
    }
}

fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

fn rotate(degrees: f32, axis: Vec3) -> Mat4 {
    Mat4::from_quat(Quat::from_axis_angle(axis, degrees.to_radians()))
}

fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

/// Build the full draw list
///
/// Flat planes get a scale of 1 along z: their vertices sit at z = 0 so the
/// geometry is unchanged and the normal matrix stays invertible.
pub fn campfire_scene() -> Vec<SceneObject> {
    use MeshKind as M;
    use TextureKind as T;

    let fire = PointLight::FIRE;
    let moon = PointLight::MOON;

    let mut objects = vec![
        SceneObject::lit(
            "grass",
            M::Plane,
            translate(0.0, 0.0, 2.0) * rotate(90.0, Vec3::X) * scale(10.0, 12.0, 1.0),
            T::Grass,
            24.0,
            fire,
        ),
        SceneObject::lit(
            "door",
            M::Plane,
            translate(0.0, 1.5, -0.29) * scale(0.75, 1.5, 1.0),
            T::Door,
            28.0,
            fire,
        ),
    ];

    // Chairs: blue on +x, red on -x
    for (side, texture) in [(1.0, T::Blue), (-1.0, T::Red)] {
        objects.push(SceneObject::lit(
            "chair back",
            M::Plane,
            translate(3.0 * side, 1.625, 2.5) * rotate(90.0, Vec3::Y) * scale(0.75, 0.75, 1.0),
            texture,
            15.0,
            fire,
        ));
        objects.push(SceneObject::lit(
            "chair seat",
            M::Plane,
            translate(2.5 * side, 0.875, 2.5) * rotate(90.0, Vec3::X) * scale(0.5, 0.75, 1.0),
            texture,
            15.0,
            fire,
        ));
    }

    for (side, texture) in [(1.0, T::Blue), (-1.0, T::Red)] {
        for z in [1.75, 3.25] {
            objects.push(SceneObject::lit(
                "chair back leg",
                M::ChairBackLeg,
                translate(3.0 * side, 1.625, z),
                texture,
                15.0,
                fire,
            ));
        }
    }

    for side in [1.0, -1.0] {
        for (x, z) in [(3.0, 3.25), (3.0, 1.75), (2.1, 3.15), (2.1, 1.85)] {
            objects.push(SceneObject::lit(
                "chair leg",
                M::ChairLeg,
                translate(x * side, 0.5, z),
                T::Chair,
                35.0,
                fire,
            ));
        }
    }

    objects.extend([
        SceneObject::lit(
            "fire pit",
            M::FirePit,
            translate(0.0, 0.0625, 2.5),
            T::FirePit,
            35.0,
            fire,
        ),
        SceneObject::lit(
            "fire pit ring",
            M::FirePitRing,
            translate(0.0, 0.125, 2.5),
            T::FirePit,
            35.0,
            fire,
        ),
        SceneObject::lit(
            "door knob",
            M::DoorKnob,
            translate(-0.5, 1.525, -0.25),
            T::Knob,
            35.0,
            fire,
        ),
    ]);

    for x in [-2.25, 2.25] {
        objects.push(SceneObject::lit(
            "tree trunk",
            M::TreeTrunk,
            translate(x, 0.5, 10.0),
            T::Bark,
            35.0,
            fire,
        ));
    }

    objects.push(SceneObject::lit(
        "shed",
        M::Shed,
        translate(0.0, 3.0, -3.0) * Mat4::from_scale(Vec3::splat(3.0)),
        T::Shed,
        20.0,
        fire,
    ));

    // Crowns are drawn twice, rotated under the fire and straight under the moon
    for x in [-2.25, 2.25] {
        objects.push(SceneObject::lit(
            "tree crown",
            M::Pyramid,
            translate(x, 4.0, 10.0) * rotate(45.0, Vec3::Y) * scale(1.0, 3.0, 1.0),
            T::Pine,
            27.0,
            fire,
        ));
    }
    for x in [-2.25, 2.25] {
        objects.push(SceneObject::lit(
            "tree crown",
            M::Pyramid,
            translate(x, 4.0, 10.0) * scale(1.0, 3.0, 1.0),
            T::Pine,
            27.0,
            moon,
        ));
    }

    objects.push(SceneObject::lit(
        "roof",
        M::Roof,
        translate(0.0, 3.0, -3.0) * Mat4::from_scale(Vec3::splat(3.0)),
        T::Roof,
        18.0,
        moon,
    ));

    objects.extend([
        SceneObject::emissive(
            "moon",
            M::Moon,
            Mat4::from_translation(MOON_POSITION),
            Vec3::ONE,
        ),
        SceneObject::emissive(
            "fire",
            M::Pyramid,
            Mat4::from_translation(FIRE_POSITION) * Mat4::from_scale(Vec3::splat(0.5)),
            Vec3::new(1.0, 0.5, 0.0),
        ),
        SceneObject::emissive(
            "fire",
            M::Pyramid,
            Mat4::from_translation(FIRE_POSITION)
                * rotate(45.0, Vec3::Y)
                * Mat4::from_scale(Vec3::splat(0.5)),
            Vec3::new(1.0, 0.5, 0.0),
        ),
    ]);

    objects
}
