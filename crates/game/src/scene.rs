//! Scene traversal: every part pushes a stack frame, composes its local
//! transform, uploads color and matrix, draws, and pops.
//!
//! Part functions come in two flavors: composite parts own a push/pop pair
//! and are safe to call from anywhere; leaf helpers (`blade`) compose into
//! the caller's current frame and rely on the caller's push/pop. Sibling
//! subtrees never see each other's transforms.

use engine_core::{MatrixStack, Vec3};
use renderer::{view_matrix, DrawTarget, PrimitiveKind, Rgb, Topology};

use procgen::{Building, Cloud, Tree};

use crate::flight::Helicopter;
use crate::state::SimState;
use crate::supply::{SupplyCrate, CRATE_SIZE};

// Airframe dimensions, world units. The body is stretched along X with the
// tail boom on +X, so the nose faces -X.
pub const BODY_LENGTH: f32 = 5.0;
pub const BODY_HEIGHT: f32 = 2.0;
pub const BODY_WIDTH: f32 = 1.5;

pub const TAIL_LENGTH: f32 = 5.0;
pub const TAIL_HEIGHT: f32 = 0.5;
pub const TAIL_WIDTH: f32 = 0.5;

pub const TAIL_TIP_LENGTH: f32 = 1.0;
pub const TAIL_TIP_HEIGHT: f32 = 0.5;
pub const TAIL_TIP_WIDTH: f32 = 0.5;

pub const BLADE_LENGTH: f32 = 4.0;
pub const BLADE_WIDTH: f32 = 0.5;
pub const BLADE_THICKNESS: f32 = 0.1;

pub const HUB_RADIUS: f32 = 0.16;
pub const HUB_HEIGHT: f32 = 0.5;

/// The tail rotor is the main rotor assembly at half size.
pub const TAIL_ROTOR_SCALE: f32 = 0.5;

pub const SUPPORT_BEAM_LENGTH: f32 = 1.3;
pub const SUPPORT_BEAM_RADIUS: f32 = 0.15;
pub const SKID_LENGTH: f32 = 4.0;
pub const SKID_RADIUS: f32 = 0.15;

/// Top surface of the floor slab.
pub const FLOOR_TOP_Y: f32 = 0.0;
pub const FLOOR_THICKNESS: f32 = 1.0;

const FLOOR_COLOR: Rgb = Rgb::new(0.24, 0.5, 0.22);
const LAKE_COLOR: Rgb = Rgb::new(0.15, 0.35, 0.7);
const CLOUD_COLOR: Rgb = Rgb::new(0.92, 0.95, 0.97);
const CRATE_COLOR: Rgb = Rgb::new(0.63, 0.43, 0.16);

/// Draw the whole frame: seed the view matrix for the active camera, then
/// traverse every registry.
pub fn render(state: &SimState, stack: &mut MatrixStack, target: &mut dyn DrawTarget) {
    let heli = &state.helicopter;
    stack.load(view_matrix(state.camera, heli.position, heli.heading()));

    let topo = state.topology;
    draw_floor(stack, target, state.half_extent, topo);
    draw_lake(stack, target, state.half_extent, topo);
    for tree in &state.trees {
        draw_tree(stack, target, tree, topo);
    }
    if state.show_buildings {
        for building in &state.buildings {
            draw_building(stack, target, building, topo);
        }
    }
    for cloud in &state.clouds {
        draw_cloud(stack, target, cloud, topo);
    }
    for crate_ in &state.crates {
        draw_supply_crate(stack, target, crate_, topo);
    }
    draw_helicopter(stack, target, heli, topo);
}

/// Place and draw the helicopter from its entity state.
pub fn draw_helicopter(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    heli: &Helicopter,
    topo: Topology,
) {
    stack.push();
    stack.translate(heli.position);
    stack.rotate_y(heli.rotation.y);
    stack.rotate_z(heli.rotation.z);
    stack.rotate_x(heli.rotation.x);
    stack.scale(Vec3::splat(heli.scale));
    helicopter_body(stack, target, heli, topo);
    stack.pop();
}

fn helicopter_body(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    heli: &Helicopter,
    topo: Topology,
) {
    stack.push();

    // Cabin.
    stack.push();
    target.upload_color(heli.palette.body);
    stack.scale(Vec3::new(BODY_LENGTH, BODY_HEIGHT, BODY_WIDTH));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Sphere, topo);
    stack.pop();

    // Tail boom, hung off the back of the cabin.
    stack.push();
    stack.translate(Vec3::new(TAIL_LENGTH * 0.75, BODY_HEIGHT / 8.0, 0.0));
    tail(stack, target, heli, topo);
    stack.pop();

    // Main rotor on the cabin roof.
    stack.push();
    stack.translate(Vec3::new(BODY_LENGTH / 14.0, BODY_HEIGHT / 2.0, 0.0));
    main_rotor(stack, target, heli, topo);
    stack.pop();

    stack.push();
    landing_gear(stack, target, heli, topo);
    stack.pop();

    stack.pop();
}

/// Leaf helper: composes into the caller's frame.
fn blade(stack: &mut MatrixStack, target: &mut dyn DrawTarget, heli: &Helicopter, topo: Topology) {
    target.upload_color(heli.palette.blade);
    stack.scale(Vec3::new(BLADE_LENGTH, BLADE_THICKNESS, BLADE_WIDTH));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Sphere, topo);
}

fn main_rotor(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    heli: &Helicopter,
    topo: Topology,
) {
    stack.push();

    stack.push();
    target.upload_color(heli.palette.hub);
    stack.scale(Vec3::new(HUB_RADIUS, HUB_HEIGHT, HUB_RADIUS));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cylinder, topo);
    stack.pop();

    // Three blades at 120° steps, spun by the accumulated rotor angle.
    stack.push();
    stack.rotate_y(heli.main_rotor.angle);
    for i in 0..3 {
        stack.push();
        stack.rotate_y(120.0 * i as f32);
        stack.translate(Vec3::new(BLADE_LENGTH / 2.0, HUB_HEIGHT / 2.0, 0.0));
        blade(stack, target, heli, topo);
        stack.pop();
    }
    stack.pop();

    stack.pop();
}

fn tail_rotor(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    heli: &Helicopter,
    topo: Topology,
) {
    stack.push();
    stack.scale(Vec3::splat(TAIL_ROTOR_SCALE));

    stack.push();
    target.upload_color(heli.palette.hub);
    stack.scale(Vec3::new(HUB_RADIUS, HUB_HEIGHT, HUB_RADIUS));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cylinder, topo);
    stack.pop();

    stack.push();
    stack.rotate_y(heli.tail_rotor.angle);
    for i in 0..2 {
        stack.push();
        stack.rotate_y(180.0 * i as f32);
        stack.translate(Vec3::new(BLADE_LENGTH / 2.0, HUB_HEIGHT / 2.0, 0.0));
        blade(stack, target, heli, topo);
        stack.pop();
    }
    stack.pop();

    stack.pop();
}

fn tail_tip(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    heli: &Helicopter,
    topo: Topology,
) {
    stack.push();
    target.upload_color(heli.palette.body);
    stack.scale(Vec3::new(TAIL_TIP_LENGTH, TAIL_TIP_HEIGHT, TAIL_TIP_WIDTH));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Sphere, topo);
    stack.pop();

    // The tail rotor hangs off the side of the tip, spinning in the
    // vertical plane.
    stack.push();
    stack.translate(Vec3::new(0.0, 0.0, TAIL_TIP_WIDTH / 2.0));
    stack.rotate_x(90.0);
    tail_rotor(stack, target, heli, topo);
    stack.pop();
}

fn tail(stack: &mut MatrixStack, target: &mut dyn DrawTarget, heli: &Helicopter, topo: Topology) {
    stack.push();

    stack.push();
    target.upload_color(heli.palette.body);
    stack.scale(Vec3::new(TAIL_LENGTH, TAIL_HEIGHT, TAIL_WIDTH));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Sphere, topo);
    stack.pop();

    stack.push();
    stack.translate(Vec3::new(TAIL_LENGTH / 2.0, TAIL_HEIGHT * 2.0 / 3.0, 0.0));
    stack.rotate_z(65.0);
    tail_tip(stack, target, heli, topo);
    stack.pop();

    stack.pop();
}

fn support_beam(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    heli: &Helicopter,
    topo: Topology,
) {
    target.upload_color(heli.palette.beam);
    stack.push();
    stack.scale(Vec3::new(
        SUPPORT_BEAM_LENGTH,
        SUPPORT_BEAM_RADIUS,
        SUPPORT_BEAM_RADIUS,
    ));
    stack.rotate_z(90.0);
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cylinder, topo);
    stack.pop();
}

fn skid(stack: &mut MatrixStack, target: &mut dyn DrawTarget, heli: &Helicopter, topo: Topology) {
    target.upload_color(heli.palette.hub);
    stack.push();
    stack.scale(Vec3::new(SKID_LENGTH, SKID_RADIUS, SKID_RADIUS));
    stack.rotate_z(90.0);
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cylinder, topo);
    stack.pop();
}

/// One side of the landing gear: two angled support beams into a horizontal
/// skid.
fn landing_structure(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    heli: &Helicopter,
    topo: Topology,
) {
    stack.push();

    stack.push();
    stack.translate(Vec3::new(
        -SKID_LENGTH / 5.0,
        SUPPORT_BEAM_LENGTH / 3.0,
        -SUPPORT_BEAM_RADIUS,
    ));
    stack.rotate_z(55.0);
    stack.rotate_y(20.0);
    support_beam(stack, target, heli, topo);
    stack.pop();

    stack.push();
    stack.translate(Vec3::new(
        SKID_LENGTH / 5.0,
        SUPPORT_BEAM_LENGTH / 3.0,
        -SUPPORT_BEAM_RADIUS,
    ));
    stack.rotate_z(-55.0);
    stack.rotate_y(-20.0);
    support_beam(stack, target, heli, topo);
    stack.pop();

    skid(stack, target, heli, topo);

    stack.pop();
}

/// Both skids, the far one mirrored through the body plane.
fn landing_gear(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    heli: &Helicopter,
    topo: Topology,
) {
    stack.push();

    stack.push();
    stack.translate(Vec3::new(0.0, -BODY_HEIGHT * 5.0 / 7.0, BODY_WIDTH / 2.0));
    landing_structure(stack, target, heli, topo);
    stack.pop();

    stack.push();
    stack.translate(Vec3::new(0.0, -BODY_HEIGHT * 5.0 / 7.0, -BODY_WIDTH / 2.0));
    stack.scale(Vec3::new(-1.0, 1.0, -1.0));
    landing_structure(stack, target, heli, topo);
    stack.pop();

    stack.pop();
}

pub fn draw_tree(stack: &mut MatrixStack, target: &mut dyn DrawTarget, tree: &Tree, topo: Topology) {
    let canopy_height = tree.canopy_width * 1.3;
    stack.push();
    stack.translate(tree.position);

    stack.push();
    target.upload_color(tree.trunk_color.into());
    stack.translate(Vec3::new(0.0, tree.trunk_height / 2.0, 0.0));
    stack.scale(Vec3::new(
        tree.trunk_radius * 2.0,
        tree.trunk_height,
        tree.trunk_radius * 2.0,
    ));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cylinder, topo);
    stack.pop();

    stack.push();
    target.upload_color(tree.canopy_color.into());
    stack.translate(Vec3::new(0.0, tree.trunk_height + canopy_height / 2.0, 0.0));
    stack.scale(Vec3::new(tree.canopy_width, canopy_height, tree.canopy_width));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Pyramid, topo);
    stack.pop();

    stack.pop();
}

pub fn draw_building(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    building: &Building,
    topo: Topology,
) {
    stack.push();
    target.upload_color(building.color.into());
    stack.translate(Vec3::new(
        building.position.x,
        building.height / 2.0,
        building.position.z,
    ));
    stack.scale(Vec3::new(building.footprint, building.height, building.footprint));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cube, topo);
    stack.pop();
}

pub fn draw_cloud(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    cloud: &Cloud,
    topo: Topology,
) {
    stack.push();
    stack.translate(cloud.position);
    stack.rotate_y(cloud.yaw);
    stack.scale(Vec3::splat(cloud.scale));
    target.upload_color(CLOUD_COLOR);

    // Three overlapping puffs.
    stack.push();
    stack.scale(Vec3::new(3.0, 1.2, 1.6));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Sphere, topo);
    stack.pop();

    stack.push();
    stack.translate(Vec3::new(1.6, 0.3, 0.4));
    stack.scale(Vec3::new(2.0, 1.0, 1.3));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Sphere, topo);
    stack.pop();

    stack.push();
    stack.translate(Vec3::new(-1.5, 0.25, -0.3));
    stack.scale(Vec3::new(1.8, 0.9, 1.2));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Sphere, topo);
    stack.pop();

    stack.pop();
}

pub fn draw_supply_crate(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    crate_: &SupplyCrate,
    topo: Topology,
) {
    stack.push();
    target.upload_color(CRATE_COLOR);
    stack.translate(crate_.position);
    stack.rotate_y(crate_.heading);
    stack.scale(Vec3::splat(CRATE_SIZE));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cube, topo);
    stack.pop();
}

pub fn draw_floor(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    half_extent: f32,
    topo: Topology,
) {
    stack.push();
    target.upload_color(FLOOR_COLOR);
    stack.translate(Vec3::new(0.0, FLOOR_TOP_Y - FLOOR_THICKNESS / 2.0, 0.0));
    stack.scale(Vec3::new(half_extent * 2.0, FLOOR_THICKNESS, half_extent * 2.0));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cube, topo);
    stack.pop();
}

/// A flat disk resting just above the floor, off in one quadrant.
pub fn draw_lake(
    stack: &mut MatrixStack,
    target: &mut dyn DrawTarget,
    half_extent: f32,
    topo: Topology,
) {
    let offset = half_extent * 0.6;
    let radius = half_extent * 0.1;
    stack.push();
    target.upload_color(LAKE_COLOR);
    stack.translate(Vec3::new(-offset, FLOOR_TOP_Y + 0.02, -offset));
    stack.scale(Vec3::new(radius * 2.0, 0.04, radius * 2.0));
    target.upload_model_view(&stack.current());
    target.draw(PrimitiveKind::Cylinder, topo);
    stack.pop();
}
