//! Static star shell surrounding the scene.

use bevy::asset::RenderAssetUsages;
use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

const STAR_COUNT: usize = 4000;
const STARFIELD_RADIUS: f32 = 4000.0;
const STARFIELD_SEED: u64 = 0x5eed_0b5e;

/// Deterministic star positions on a sphere shell. Uses a small LCG so the
/// layout is stable between runs without pulling in an RNG dependency.
pub fn generate_starfield(count: usize, radius: f32, seed: u64) -> Vec<[f32; 3]> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as f32) / ((1u64 << 31) as f32)
    };

    let mut positions = Vec::with_capacity(count);
    for _ in 0..count {
        // Uniform on the sphere: cos(latitude) in [-1, 1], longitude in [0, 2pi)
        let z = next() * 2.0 - 1.0;
        let theta = next() * std::f32::consts::TAU;
        let xy = (1.0 - z * z).max(0.0).sqrt();
        positions.push([
            radius * xy * theta.cos(),
            radius * xy * theta.sin(),
            radius * z,
        ]);
    }
    positions
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let positions = generate_starfield(STAR_COUNT, STARFIELD_RADIUS, STARFIELD_SEED);
    let normals: Vec<[f32; 3]> = positions
        .iter()
        .map(|p| {
            let n = Vec3::from_array(*p).normalize_or_zero();
            [n.x, n.y, n.z]
        })
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.9, 1.0),
            unlit: true,
            ..default()
        })),
        Pickable::IGNORE,
        Name::new("Starfield"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starfield_is_deterministic() {
        let a = generate_starfield(64, 100.0, 7);
        let b = generate_starfield(64, 100.0, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn stars_sit_on_the_shell() {
        for star in generate_starfield(256, 4000.0, 1) {
            let r = Vec3::from_array(star).length();
            assert!((r - 4000.0).abs() < 0.5, "star off the shell at radius {r}");
        }
    }

    #[test]
    fn seeds_produce_distinct_layouts() {
        assert_ne!(generate_starfield(64, 100.0, 1), generate_starfield(64, 100.0, 2));
    }
}
