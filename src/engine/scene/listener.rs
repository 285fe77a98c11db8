// Event subscriber interfaces, one per event kind

use super::registry::Scene;
use super::shape::ShapeId;

/// Called when the shape it is bound to is tapped
pub trait TapListener {
    fn tapped(&mut self, scene: &mut Scene);
}

impl<F> TapListener for F
where
    F: FnMut(&mut Scene),
{
    fn tapped(&mut self, scene: &mut Scene) {
        self(scene)
    }
}

/// Called when the shape it is bound to starts touching `other`
pub trait CollisionListener {
    fn collided(&mut self, scene: &mut Scene, other: ShapeId);
}

impl<F> CollisionListener for F
where
    F: FnMut(&mut Scene, ShapeId),
{
    fn collided(&mut self, scene: &mut Scene, other: ShapeId) {
        self(scene, other)
    }
}
