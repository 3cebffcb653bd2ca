use foundation::math::Vec3;

/// Index into the world's polyline store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PolylineId(pub u32);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape3D {
    Cube { size: f64 },
    Sphere { radius: f64 },
    /// Flat panel such as a certificate frame or project card.
    Panel { width: f64, height: f64 },
    Polyline { id: PolylineId },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Drawable3D {
    pub shape: Shape3D,
    /// Linear RGB accent.
    pub color: Vec3,
}

impl Drawable3D {
    pub fn cube(size: f64) -> Self {
        Self::new(Shape3D::Cube { size })
    }

    pub fn sphere(radius: f64) -> Self {
        Self::new(Shape3D::Sphere { radius })
    }

    pub fn panel(width: f64, height: f64) -> Self {
        Self::new(Shape3D::Panel { width, height })
    }

    pub fn polyline(id: PolylineId) -> Self {
        Self::new(Shape3D::Polyline { id })
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    fn new(shape: Shape3D) -> Self {
        Self {
            shape,
            color: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Drawable3D, Shape3D};
    use foundation::math::Vec3;

    #[test]
    fn create_sphere_drawable() {
        let drawable = Drawable3D::sphere(1.5);
        assert!(matches!(drawable.shape, Shape3D::Sphere { .. }));
        assert_eq!(drawable.color, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn color_override() {
        let amber = Vec3::new(0.96, 0.62, 0.04);
        let drawable = Drawable3D::panel(2.0, 1.5).with_color(amber);
        assert_eq!(drawable.color, amber);
    }
}
