// Fixed geometry and placement of the minigame's shapes

use crate::core::math::Point;

/// Name carried by the target shape
pub const TARGET_NAME: &str = "target";

/// Ball diameter
pub const BALL_SIZE: u32 = 40;
pub const BALL_START: Point = Point::new(250, 400);

pub const BARRIER_WIDTH: i32 = 300;
pub const BARRIER_HEIGHT: i32 = 25;
pub const BARRIER_POSITION: Point = Point::new(200, 150);

/// Horizontal position of the funnel
pub const FUNNEL_X: i32 = 200;
/// Distance between the funnel's centre and the top of the scene
pub const FUNNEL_TOP_MARGIN: i32 = 25;

pub const TARGET_POSITION: Point = Point::new(200, 400);

/// Flat bar keeping the ball on screen
pub fn barrier_points() -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(0, BARRIER_HEIGHT),
        Point::new(BARRIER_WIDTH, BARRIER_HEIGHT),
        Point::new(BARRIER_WIDTH, 0),
    ]
}

/// Trapezoid, wide side up
pub fn funnel_points() -> Vec<Point> {
    vec![
        Point::new(0, 50),
        Point::new(80, 50),
        Point::new(60, 0),
        Point::new(20, 0),
    ]
}

/// Small diamond
pub fn target_points() -> Vec<Point> {
    vec![
        Point::new(10, 0),
        Point::new(0, 10),
        Point::new(10, 20),
        Point::new(20, 10),
    ]
}

/// Funnel sits just below the top edge of a scene of the given height
pub fn funnel_position(scene_height: i32) -> Point {
    Point::new(FUNNEL_X, scene_height - FUNNEL_TOP_MARGIN)
}
