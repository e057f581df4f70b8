use dino_runner::entities::*;

fn make_dino() -> Dino {
    Dino {
        x: 10.0,
        y: 242.0,
        width: 80.0,
        height: 80.0,
        vx: 0.0,
        vy: 0.0,
        state: MotionState::Running,
        grounded: true,
        ground_collider: true,
        frozen: false,
        alive: true,
    }
}

#[test]
fn enums_compare_by_variant() {
    assert_eq!(MotionState::Running, MotionState::Running);
    assert_ne!(MotionState::Running, MotionState::Dying);
    assert_ne!(ObstacleKind::Cactus, ObstacleKind::Rock);
    assert_ne!(RunState::Running, RunState::Ended);
    assert_eq!(TickInput::default(), TickInput { up: false, down: false, primary: false });
}

#[test]
fn dino_edges() {
    let d = make_dino();
    assert_eq!(d.right(), 90.0);
    assert_eq!(d.bottom(), 322.0);
}

#[test]
fn obstacle_right_edge() {
    let o = Obstacle { x: -10.0, y: 272.0, width: 40.0, height: 50.0, kind: ObstacleKind::Rock };
    assert_eq!(o.right(), 30.0);
}

#[test]
fn dino_clone_is_independent() {
    let original = make_dino();
    let mut cloned = original.clone();
    cloned.y = 0.0;
    cloned.state = MotionState::Jumping;
    assert_eq!(original.y, 242.0);
    assert_eq!(original.state, MotionState::Running);
}
