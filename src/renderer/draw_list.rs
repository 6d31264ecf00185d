//! Per-frame draw list
//!
//! Draw order: aim indicator (while aiming), targets, duck, enemies, score.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Quat, UVec2, Vec2, Vec3};

use super::meshes::MeshSet;
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::sim::GameState;

/// Offset from an entity's board position to where its mesh is drawn
const DUCK_OFFSET: Vec2 = Vec2::new(0.0, 0.5);
const ENEMY_OFFSET: Vec2 = Vec2::new(0.5, 0.5);
/// How much the power bar stretches per unit of power
const POWER_BAR_STRETCH: f32 = 0.6;
/// Score readout anchor (least significant digit) and spacing
const SCORE_ORIGIN: Vec2 = Vec2::new(3.8, 2.5);
const DIGIT_ADVANCE: f32 = 0.1;

/// Per-object matrices, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub object_to_clip: [[f32; 4]; 4],
    pub object_to_world: [[f32; 4]; 4],
    /// Inverse transpose of the upper 3x3 of object_to_world
    pub normal_to_world: [[f32; 4]; 4],
}

impl ObjectUniforms {
    pub fn new(world_to_clip: Mat4, object_to_world: Mat4) -> Self {
        let normal = Mat3::from_mat4(object_to_world).transpose().inverse();
        Self {
            object_to_clip: (world_to_clip * object_to_world).to_cols_array_2d(),
            object_to_world: object_to_world.to_cols_array_2d(),
            normal_to_world: Mat4::from_mat3(normal).to_cols_array_2d(),
        }
    }

    /// Where the mesh origin ends up in board space
    pub fn world_translation(&self) -> Vec2 {
        let w = self.object_to_world[3];
        Vec2::new(w[0], w[1])
    }
}

/// Receives one call per visible entity
pub trait DrawSink<H> {
    fn draw(&mut self, mesh: H, uniforms: &ObjectUniforms);
}

/// A recorded draw
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCall<H> {
    pub mesh: H,
    pub uniforms: ObjectUniforms,
}

impl<H> DrawSink<H> for Vec<DrawCall<H>> {
    fn draw(&mut self, mesh: H, uniforms: &ObjectUniforms) {
        self.push(DrawCall {
            mesh,
            uniforms: *uniforms,
        });
    }
}

/// Fit the board into the viewport, centered, preserving aspect
pub fn world_to_clip(viewport: UVec2) -> Mat4 {
    let aspect = viewport.x as f32 / viewport.y as f32;
    let board = Vec2::new(BOARD_WIDTH as f32, BOARD_HEIGHT as f32);
    let scale = (2.0 * aspect / board.x).min(2.0 / board.y);
    let center = 0.5 * board;

    Mat4::from_cols_array(&[
        scale / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        scale,
        0.0,
        0.0,
        0.0,
        0.0,
        -1.0,
        0.0,
        -(scale / aspect) * center.x,
        -scale * center.y,
        0.0,
        1.0,
    ])
}

/// Emit every visible entity to `sink`. Returns the number of draws.
///
/// A viewport with a zero dimension draws nothing.
pub fn draw<H, S>(state: &GameState, viewport: UVec2, meshes: &MeshSet<H>, sink: &mut S) -> usize
where
    H: Copy,
    S: DrawSink<H>,
{
    if viewport.x == 0 || viewport.y == 0 {
        return 0;
    }

    let clip = world_to_clip(viewport);
    let mut count = 0;
    let mut emit = |mesh: H, object_to_world: Mat4| {
        sink.draw(mesh, &ObjectUniforms::new(clip, object_to_world));
        count += 1;
    };
    let at = |pos: Vec2| Mat4::from_translation(pos.extend(0.0));

    let duck_anchor = state.duck.pos + DUCK_OFFSET;

    if state.controls.aiming() {
        let tilt = Quat::from_rotation_z(-(state.aim.angle as f32).to_radians());
        let stretch = Vec3::new(1.0, 1.0 + POWER_BAR_STRETCH * state.aim.power(), 1.0);
        emit(meshes.aim, at(duck_anchor) * Mat4::from_quat(tilt));
        emit(
            meshes.aim_power,
            at(duck_anchor) * Mat4::from_quat(tilt) * Mat4::from_scale(stretch),
        );
    }

    for target in state.targets.targets() {
        emit(meshes.target, at(target.pos));
    }

    emit(meshes.duck, at(duck_anchor));

    for enemy in state.enemies.enemies() {
        emit(meshes.enemy, at(enemy.pos + ENEMY_OFFSET));
    }

    let mut remaining = state.score;
    let mut cursor = SCORE_ORIGIN;
    loop {
        let digit = (remaining % 10) as usize;
        emit(meshes.digits[digit], at(cursor));
        remaining /= 10;
        cursor.x -= DIGIT_ADVANCE;
        if remaining == 0 {
            break;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_COUNT;
    use crate::sim::{Action, InputEvent};
    use glam::Vec4;

    /// Mesh ids: 0 duck, 1 target, 2 enemy, 3 aim, 4 power, 10+d digits
    fn meshes() -> MeshSet<u32> {
        MeshSet {
            duck: 0,
            target: 1,
            enemy: 2,
            aim: 3,
            aim_power: 4,
            digits: [10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
        }
    }

    fn record(state: &GameState) -> Vec<DrawCall<u32>> {
        let mut calls: Vec<DrawCall<u32>> = Vec::new();
        let n = draw(state, UVec2::new(800, 600), &meshes(), &mut calls);
        assert_eq!(n, calls.len());
        calls
    }

    #[test]
    fn test_resting_frame_draw_order() {
        let state = GameState::new(1);
        let calls = record(&state);

        // targets, duck, one enemy, one score digit
        assert_eq!(calls.len(), TARGET_COUNT + 3);
        assert!(calls[..TARGET_COUNT].iter().all(|c| c.mesh == 1));
        assert_eq!(calls[TARGET_COUNT].mesh, 0);
        assert_eq!(calls[TARGET_COUNT + 1].mesh, 2);
        assert_eq!(calls[TARGET_COUNT + 2].mesh, 10);

        let duck = calls[TARGET_COUNT].uniforms.world_translation();
        assert_eq!(duck, Vec2::new(0.0, 0.5));
        let enemy = calls[TARGET_COUNT + 1].uniforms.world_translation();
        assert_eq!(enemy, Vec2::new(0.5, 3.5));
    }

    #[test]
    fn test_aim_indicator_only_while_aiming() {
        let mut state = GameState::new(1);
        state.handle_event(InputEvent::press(Action::AimLeft));
        let calls = record(&state);
        assert_eq!(calls[0].mesh, 3);
        assert_eq!(calls[1].mesh, 4);
        assert_eq!(calls.len(), TARGET_COUNT + 5);
    }

    #[test]
    fn test_score_digits_least_significant_first() {
        let mut state = GameState::new(1);
        state.score = 407;
        let calls = record(&state);
        let digits: Vec<u32> = calls[calls.len() - 3..].iter().map(|c| c.mesh).collect();
        assert_eq!(digits, vec![17, 10, 14]);

        let last = calls.last().unwrap().uniforms.world_translation();
        assert!((last.x - 3.6).abs() < 1e-5);
        assert!((last.y - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_board_fits_viewport() {
        let clip = world_to_clip(UVec2::new(800, 600));
        let center = clip * Vec4::new(2.5, 2.0, 0.0, 1.0);
        assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5);

        // Height is the tight axis for a 4:3 window and a 5x4 board
        let top = clip * Vec4::new(2.5, 4.0, 0.0, 1.0);
        assert!((top.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_viewport_draws_nothing() {
        let state = GameState::new(1);
        let mut calls: Vec<DrawCall<u32>> = Vec::new();
        assert_eq!(draw(&state, UVec2::new(0, 600), &meshes(), &mut calls), 0);
        assert!(calls.is_empty());
    }

    #[test]
    fn test_uniforms_cast_to_bytes() {
        let uniforms = ObjectUniforms::new(Mat4::IDENTITY, Mat4::IDENTITY);
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 3 * 16 * 4);
    }
}
