#![allow(missing_docs)]

use critters::simulation::boing::Boing;
use critters::simulation::locatable::Locatable;
use proptest::prelude::*;

#[test]
fn test_boing_moves_diagonally() {
    let mut boing = Boing::new_random(800.0, 500.0, 10.0);
    boing.set_position(400.0, 250.0);
    boing.go_left = false;
    boing.go_down = true;

    boing.update_position(1.0);

    let step = 10.0 * std::f32::consts::FRAC_1_SQRT_2;
    assert!((boing.x() - (400.0 + step)).abs() < 1e-4);
    assert!((boing.y() - (250.0 + step)).abs() < 1e-4);
    assert!((boing.speed_mult() - step).abs() < 1e-6);
}

#[test]
fn test_boing_bounces_off_right_wall() {
    let mut boing = Boing::new_random(800.0, 500.0, 40.0);
    boing.set_position(799.0, 250.0);
    boing.go_left = false;
    boing.go_down = false;

    boing.update_position(1.0);

    assert_eq!(boing.x(), 799.0);
    assert!(boing.go_left, "x flag should flip");
    assert!(!boing.go_down, "y flag should not change");
}

#[test]
fn test_boing_bounces_off_top_and_left() {
    let mut boing = Boing::new_random(800.0, 500.0, 40.0);
    boing.set_position(1.0, 1.0);
    boing.go_left = true;
    boing.go_down = false;

    boing.update_position(1.0);

    assert_eq!(boing.x(), 0.0);
    assert_eq!(boing.y(), 0.0);
    assert!(!boing.go_left);
    assert!(boing.go_down);
}

#[test]
fn test_boing_bounces_off_bottom() {
    let mut boing = Boing::new_random(800.0, 500.0, 40.0);
    boing.set_position(400.0, 499.5);
    boing.go_left = true;
    boing.go_down = true;

    boing.update_position(0.5);

    assert_eq!(boing.y(), 499.0);
    assert!(!boing.go_down);
    assert!(boing.go_left);
}

#[test]
fn test_boing_random_start_inside_scene() {
    for _ in 0..100 {
        let boing = Boing::new_random(800.0, 500.0, 10.0);
        assert!(boing.x() >= 0.0 && boing.x() <= 800.0);
        assert!(boing.y() >= 0.0 && boing.y() <= 500.0);
    }
}

#[test]
fn test_boing_random_position() {
    let mut boing = Boing::new_random(50.0, 20.0, 10.0);
    for _ in 0..100 {
        boing.set_random_position(50.0, 20.0);
        assert!(boing.x() >= 0.0 && boing.x() <= 50.0);
        assert!(boing.y() >= 0.0 && boing.y() <= 20.0);
    }
}

proptest! {
    #[test]
    fn prop_boing_stays_in_bounds(
        width in 1.0f32..2000.0,
        height in 1.0f32..2000.0,
        fx in 0.0f32..1.0,
        fy in 0.0f32..1.0,
        speed in 0.0f32..500.0,
        dt in 0.0f32..10.0,
        go_left in any::<bool>(),
        go_down in any::<bool>(),
    ) {
        let mut boing = Boing::new_random(width, height, speed);
        boing.set_position(fx * (width - 1.0), fy * (height - 1.0));
        boing.go_left = go_left;
        boing.go_down = go_down;

        let (x, y) = (boing.x(), boing.y());
        let delta = dt * boing.speed_mult();
        boing.update_position(dt);

        prop_assert!(boing.x() >= 0.0 && boing.x() < width);
        prop_assert!(boing.y() >= 0.0 && boing.y() < height);

        let next_x = if go_left { x - delta } else { x + delta };
        let next_y = if go_down { y + delta } else { y - delta };
        let crossed_x = next_x < 0.0 || next_x >= width;
        let crossed_y = next_y < 0.0 || next_y >= height;
        prop_assert_eq!(boing.go_left != go_left, crossed_x);
        prop_assert_eq!(boing.go_down != go_down, crossed_y);
    }
}
