pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

/// Flat-colored solids, one instance per draw call.
///
/// Vertex slots 0-1 carry mesh position and normal, slots 2-5 the model
/// matrix columns and slot 6 the color. Back faces flip their normal so a
/// quad shades the same from either side. Lighting is a sky/ground
/// hemisphere term plus one key light.
pub const SOLID_SHADER: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct MeshVertex {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct Solid {
    @location(2) col0: vec4<f32>,
    @location(3) col1: vec4<f32>,
    @location(4) col2: vec4<f32>,
    @location(5) col3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct Varyings {
    @builtin(position) clip: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) color: vec4<f32>,
};

const KEY_LIGHT: vec3<f32> = vec3<f32>(0.3, 1.0, 0.5);
const SKY_TINT: vec3<f32> = vec3<f32>(0.55, 0.6, 0.7);
const GROUND_TINT: vec3<f32> = vec3<f32>(0.3, 0.27, 0.22);

@vertex
fn vs_main(mesh: MeshVertex, solid: Solid) -> Varyings {
    let model = mat4x4<f32>(solid.col0, solid.col1, solid.col2, solid.col3);
    var out: Varyings;
    out.clip = camera.view_proj * model * vec4<f32>(mesh.position, 1.0);
    out.normal = (model * vec4<f32>(mesh.normal, 0.0)).xyz;
    out.color = solid.color;
    return out;
}

@fragment
fn fs_main(in: Varyings, @builtin(front_facing) front: bool) -> @location(0) vec4<f32> {
    var n = normalize(in.normal);
    if (!front) {
        n = -n;
    }
    let hemisphere = mix(GROUND_TINT, SKY_TINT, n.y * 0.5 + 0.5);
    let key = max(dot(n, normalize(KEY_LIGHT)), 0.0) * 0.6;
    return vec4<f32>(in.color.rgb * (hemisphere + vec3<f32>(key)), in.color.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_points_exist() {
        assert!(SOLID_SHADER.contains(&format!("fn {VS_ENTRY}(")));
        assert!(SOLID_SHADER.contains(&format!("fn {FS_ENTRY}(")));
    }

    #[test]
    fn instance_slots_match_pipeline_layout() {
        for slot in 0..=6 {
            assert!(
                SOLID_SHADER.contains(&format!("@location({slot})")),
                "missing vertex slot {slot}"
            );
        }
        assert!(SOLID_SHADER.contains("@group(0) @binding(0)"));
    }

    #[test]
    fn back_faces_are_lit() {
        assert!(SOLID_SHADER.contains("@builtin(front_facing)"));
    }
}
