//! Scene geometry: literal vertex tables and the generated round meshes.
//!
//! All meshes are non-indexed triangle lists in [`Vertex`] layout.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::types::Vertex;

/// Every mesh the scene draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Unit quad in the xy plane (grass, door, chair seats and backs)
    Plane,
    Shed,
    Roof,
    /// Tree crowns and fire flames
    Pyramid,
    ChairBackLeg,
    ChairLeg,
    FirePit,
    FirePitRing,
    TreeTrunk,
    DoorKnob,
    Moon,
}

impl MeshKind {
    pub const ALL: [MeshKind; 11] = [
        MeshKind::Plane,
        MeshKind::Shed,
        MeshKind::Roof,
        MeshKind::Pyramid,
        MeshKind::ChairBackLeg,
        MeshKind::ChairLeg,
        MeshKind::FirePit,
        MeshKind::FirePitRing,
        MeshKind::TreeTrunk,
        MeshKind::DoorKnob,
        MeshKind::Moon,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            MeshKind::Plane => "plane",
            MeshKind::Shed => "shed",
            MeshKind::Roof => "roof",
            MeshKind::Pyramid => "pyramid",
            MeshKind::ChairBackLeg => "chair back leg",
            MeshKind::ChairLeg => "chair leg",
            MeshKind::FirePit => "fire pit",
            MeshKind::FirePitRing => "fire pit ring",
            MeshKind::TreeTrunk => "tree trunk",
            MeshKind::DoorKnob => "door knob",
            MeshKind::Moon => "moon",
        }
    }

    pub fn build(self) -> MeshData {
        match self {
            MeshKind::Plane => MeshData::from_slice(&PLANE),
            MeshKind::Shed => MeshData::from_slice(&SHED),
            MeshKind::Roof => MeshData::from_slice(&ROOF),
            MeshKind::Pyramid => MeshData::from_slice(&PYRAMID),
            MeshKind::ChairBackLeg => cylinder(0.03, 10, 1.5),
            MeshKind::ChairLeg => cylinder(0.03, 10, 0.75),
            MeshKind::FirePit => cylinder(1.0, 10, 0.125),
            MeshKind::FirePitRing => tube(1.0, 10, 0.25),
            MeshKind::TreeTrunk => cylinder(0.25, 10, 1.0),
            MeshKind::DoorKnob => sphere(0.1, 10, 10),
            MeshKind::Moon => sphere(0.5, 10, 10),
        }
    }
}

/// Built mesh data ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
}

impl MeshData {
    pub fn from_slice(vertices: &[Vertex]) -> Self {
        Self {
            vertices: vertices.to_vec(),
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn push(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) {
        self.vertices
            .push(Vertex::new(position.into(), normal.into(), uv));
    }
}

/// Closed cylinder around the y axis, centred on the origin
pub fn cylinder(radius: f32, slices: u32, height: f32) -> MeshData {
    let mut mesh = side_wall(radius, slices, height);
    let half = height * 0.5;

    for (y, normal) in [(half, Vec3::Y), (-half, Vec3::NEG_Y)] {
        let center = Vec3::new(0.0, y, 0.0);
        for i in 0..slices {
            let (a0, a1) = slice_angles(i, slices);
            mesh.push(center, normal, [0.5, 0.5]);
            mesh.push(rim(radius, a0, y), normal, cap_uv(a0));
            mesh.push(rim(radius, a1, y), normal, cap_uv(a1));
        }
    }

    mesh
}

/// Open cylinder wall without caps
pub fn tube(radius: f32, slices: u32, height: f32) -> MeshData {
    side_wall(radius, slices, height)
}

/// UV sphere centred on the origin
pub fn sphere(radius: f32, sectors: u32, stacks: u32) -> MeshData {
    let point = |stack: u32, sector: u32| -> (Vec3, [f32; 2]) {
        let phi = PI / 2.0 - stack as f32 * PI / stacks as f32;
        let theta = sector as f32 * TAU / sectors as f32;
        let normal = Vec3::new(phi.cos() * theta.cos(), phi.sin(), phi.cos() * theta.sin());
        let uv = [sector as f32 / sectors as f32, 1.0 - stack as f32 / stacks as f32];
        (normal, uv)
    };

    let mut mesh = MeshData::default();
    let emit = |mesh: &mut MeshData, corners: [(u32, u32); 3]| {
        for (stack, sector) in corners {
            let (normal, uv) = point(stack, sector);
            mesh.push(normal * radius, normal, uv);
        }
    };

    for i in 0..stacks {
        for j in 0..sectors {
            // Pole rows collapse to a single triangle per sector
            if i != 0 {
                emit(&mut mesh, [(i, j), (i + 1, j), (i, j + 1)]);
            }
            if i != stacks - 1 {
                emit(&mut mesh, [(i, j + 1), (i + 1, j), (i + 1, j + 1)]);
            }
        }
    }

    mesh
}

fn side_wall(radius: f32, slices: u32, height: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;

    for i in 0..slices {
        let (a0, a1) = slice_angles(i, slices);
        let (n0, n1) = (rim(1.0, a0, 0.0), rim(1.0, a1, 0.0));
        let (u0, u1) = (i as f32 / slices as f32, (i + 1) as f32 / slices as f32);

        let bottom0 = rim(radius, a0, -half);
        let bottom1 = rim(radius, a1, -half);
        let top0 = rim(radius, a0, half);
        let top1 = rim(radius, a1, half);

        mesh.push(bottom0, n0, [u0, 0.0]);
        mesh.push(top0, n0, [u0, 1.0]);
        mesh.push(top1, n1, [u1, 1.0]);

        mesh.push(bottom0, n0, [u0, 0.0]);
        mesh.push(top1, n1, [u1, 1.0]);
        mesh.push(bottom1, n1, [u1, 0.0]);
    }

    mesh
}

fn slice_angles(i: u32, slices: u32) -> (f32, f32) {
    let step = TAU / slices as f32;
    (i as f32 * step, (i + 1) as f32 * step)
}

fn rim(radius: f32, angle: f32, y: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), y, radius * angle.sin())
}

fn cap_uv(angle: f32) -> [f32; 2] {
    [0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin()]
}

const fn v(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex::new(position, normal, uv)
}

pub const ROOF: [Vertex; 54] = [
    v([-1.0, 0.7, 1.0], [-1.0, 0.0, 0.0], [2.0, 0.0]),
    v([-1.0, 0.75, 1.0], [-1.0, 0.0, 0.0], [2.0, 2.0]),
    v([-1.0, 0.7, -1.0], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-1.0, 0.75, 1.0], [-1.0, 0.0, 0.0], [2.0, 2.0]),
    v([-1.0, 0.7, -1.0], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-1.0, 0.75, -1.0], [-1.0, 0.0, 0.0], [0.0, 2.0]),
    v([-1.0, 0.7, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([-1.0, 0.75, 1.0], [0.0, 0.0, 1.0], [0.0, 2.0]),
    v([0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [2.0, 2.0]),
    v([-1.0, 0.7, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.0, 0.95, 1.0], [0.0, 0.0, 1.0], [2.0, 0.0]),
    v([0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [2.0, 2.0]),
    v([-1.0, 0.7, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([-1.0, 0.75, -1.0], [0.0, 0.0, -1.0], [0.0, 2.0]),
    v([0.0, 1.0, -1.0], [0.0, 0.0, -1.0], [2.0, 2.0]),
    v([-1.0, 0.7, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.0, 0.95, -1.0], [0.0, 0.0, -1.0], [2.0, 0.0]),
    v([0.0, 1.0, -1.0], [0.0, 0.0, -1.0], [2.0, 2.0]),
    v([0.0, 0.95, 1.0], [0.0, 0.0, 1.0], [2.0, 0.0]),
    v([0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [2.0, 2.0]),
    v([1.0, 0.7, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [2.0, 0.0]),
    v([1.0, 0.7, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.0, 0.75, 1.0], [0.0, 0.0, 1.0], [0.0, 2.0]),
    v([0.0, 0.95, -1.0], [0.0, 0.0, -1.0], [2.0, 0.0]),
    v([0.0, 1.0, -1.0], [0.0, 0.0, -1.0], [2.0, 0.0]),
    v([1.0, 0.7, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.0, 1.0, -1.0], [0.0, 0.0, -1.0], [2.0, 2.0]),
    v([1.0, 0.7, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([1.0, 0.75, -1.0], [0.0, 0.0, -1.0], [0.0, 4.0]),
    v([-1.0, 0.75, 1.0], [-0.242536, 0.97014, 0.0], [4.0, 0.0]),
    v([-1.0, 0.75, -1.0], [-0.242536, 0.97014, 0.0], [0.0, 0.0]),
    v([0.0, 1.0, -1.0], [-0.242536, 0.97014, 0.0], [0.0, 4.0]),
    v([-1.0, 0.75, 1.0], [-0.242536, 0.97014, 0.0], [4.0, 0.0]),
    v([0.0, 1.0, 1.0], [-0.242536, 0.97014, 0.0], [4.0, 4.0]),
    v([0.0, 1.0, -1.0], [-0.242536, 0.97014, 0.0], [0.0, 4.0]),
    v([-1.0, 0.7, 1.0], [0.242536, -0.97014, 0.0], [0.0, 0.0]),
    v([-1.0, 0.7, -1.0], [0.242536, -0.97014, 0.0], [4.0, 0.0]),
    v([0.0, 0.95, -1.0], [0.242536, -0.97014, 0.0], [4.0, 4.0]),
    v([-1.0, 0.7, 1.0], [0.242536, -0.97014, 0.0], [0.0, 0.0]),
    v([0.0, 0.95, 1.0], [0.242536, -0.97014, 0.0], [0.0, 4.0]),
    v([0.0, 0.95, -1.0], [0.242536, -0.97014, 0.0], [4.0, 4.0]),
    v([0.0, 1.0, 1.0], [0.242536, 0.97014, 0.0], [0.0, 4.0]),
    v([1.0, 0.75, 1.0], [0.242536, 0.97014, 0.0], [0.0, 0.0]),
    v([1.0, 0.75, -1.0], [0.242536, 0.97014, 0.0], [4.0, 0.0]),
    v([0.0, 1.0, 1.0], [0.242536, 0.97014, 0.0], [0.0, 4.0]),
    v([0.0, 1.0, -1.0], [0.242536, 0.97014, 0.0], [4.0, 4.0]),
    v([1.0, 0.75, -1.0], [0.242536, 0.97014, 0.0], [4.0, 0.0]),
    v([0.0, 0.95, 1.0], [-0.242536, -0.97014, 0.0], [0.0, 4.0]),
    v([1.0, 0.7, 1.0], [-0.242536, -0.97014, 0.0], [0.0, 0.0]),
    v([1.0, 0.7, -1.0], [-0.242536, -0.97014, 0.0], [4.0, 0.0]),
    v([0.0, 0.95, 1.0], [-0.242536, -0.97014, 0.0], [0.0, 4.0]),
    v([0.0, 0.95, -1.0], [-0.242536, -0.97014, 0.0], [4.0, 4.0]),
    v([1.0, 0.7, -1.0], [-0.242536, -0.97014, 0.0], [4.0, 0.0]),
];

pub const SHED: [Vertex; 30] = [
    v([-0.9, -1.0, 0.9], [-1.0, 0.0, 0.0], [0.5, 0.0]),
    v([-0.9, -1.0, -0.9], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-0.9, 0.75, -0.9], [-1.0, 0.0, 0.0], [0.5, 1.0]),
    v([-0.9, -1.0, 0.9], [-1.0, 0.0, 0.0], [0.5, 0.0]),
    v([-0.9, 0.75, 0.9], [-1.0, 0.0, 0.0], [0.5, 1.0]),
    v([-0.9, 0.75, -0.9], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.9, -1.0, 0.9], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([-0.9, 0.75, 0.9], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([0.9, 0.75, 0.9], [0.0, 0.0, 1.0], [0.5, 1.0]),
    v([-0.9, -1.0, 0.9], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.9, -1.0, 0.9], [0.0, 0.0, 1.0], [0.5, 0.0]),
    v([0.9, 0.75, 0.9], [0.0, 0.0, 1.0], [0.5, 1.0]),
    v([-0.9, 0.75, 0.9], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.0, 0.95, 0.9], [0.0, 0.0, 1.0], [0.25, 0.12]),
    v([0.9, 0.75, 0.9], [0.0, 0.0, 1.0], [0.5, 0.0]),
    v([0.9, -1.0, 0.9], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([0.9, 0.75, 0.9], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.9, 0.75, -0.9], [1.0, 0.0, 0.0], [0.5, 1.0]),
    v([0.9, -1.0, 0.9], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([0.9, -1.0, -0.9], [1.0, 0.0, 0.0], [0.5, 0.0]),
    v([0.9, 0.75, -0.9], [1.0, 0.0, 0.0], [0.5, 1.0]),
    v([0.9, -1.0, -0.9], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.9, 0.75, -0.9], [0.0, 0.0, -1.0], [0.0, 1.0]),
    v([-0.9, 0.75, -0.9], [0.0, 0.0, -1.0], [0.5, 1.0]),
    v([0.9, -1.0, -0.9], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([-0.9, -1.0, -0.9], [0.0, 0.0, -1.0], [0.5, 0.0]),
    v([-0.9, 0.75, -0.9], [0.0, 0.0, -1.0], [0.5, 1.0]),
    v([0.9, 0.75, -0.9], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.0, 0.95, -0.9], [0.0, 0.0, -1.0], [0.25, 0.12]),
    v([-0.9, 0.75, -0.9], [0.0, 0.0, -1.0], [0.5, 0.0]),
];

pub const PLANE: [Vertex; 6] = [
    v([-1.0, -1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([-1.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 5.0]),
    v([1.0, 1.0, 0.0], [0.0, 0.0, 1.0], [5.0, 5.0]),
    v([-1.0, -1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.0, 1.0, 0.0], [0.0, 0.0, 1.0], [5.0, 5.0]),
    v([1.0, -1.0, 0.0], [0.0, 0.0, 1.0], [5.0, 0.0]),
];

pub const PYRAMID: [Vertex; 18] = [
    v([-1.0, -1.0, 1.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-1.0, -1.0, -1.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.0, -1.0, -1.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([-1.0, -1.0, 1.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.0, -1.0, -1.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.0, -1.0, 1.0], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-1.0, -1.0, -1.0], [0.89443, -0.44721, 0.0], [0.0, 0.0]),
    v([-1.0, -1.0, 1.0], [0.89443, -0.44721, 0.0], [5.0, 0.0]),
    v([0.0, 1.0, 0.0], [0.89443, -0.44721, 0.0], [2.5, 5.0]),
    v([1.0, -1.0, -1.0], [0.0, 0.44721, -0.89443], [0.0, 0.0]),
    v([-1.0, -1.0, -1.0], [0.0, 0.44721, -0.89443], [5.0, 0.0]),
    v([0.0, 1.0, 0.0], [0.0, 0.44721, -0.89443], [2.5, 5.0]),
    v([1.0, -1.0, 1.0], [0.89443, 0.44721, 0.0], [0.0, 0.0]),
    v([1.0, -1.0, -1.0], [0.89443, 0.44721, 0.0], [5.0, 0.0]),
    v([0.0, 1.0, 0.0], [0.89443, 0.44721, 0.0], [2.5, 5.0]),
    v([-1.0, -1.0, 1.0], [0.0, 0.44721, 0.89443], [0.0, 0.0]),
    v([1.0, -1.0, 1.0], [0.0, 0.44721, 0.89443], [5.0, 0.0]),
    v([0.0, 1.0, 0.0], [0.0, 0.44721, 0.89443], [2.5, 5.0]),
];
