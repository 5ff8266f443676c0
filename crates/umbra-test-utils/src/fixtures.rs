//! Demo scenes.
//!
//! Each scene is a grid size plus a list of shapes, some bounded with a
//! padding. They cover every primitive, the pointwise-minimum union of
//! overlapping and near-touching shapes, and bounded rasterization that
//! leaves parts of the grid unset.

use umbra_core::{Grid, Vec2};
use umbra_raster::{rasterize, rasterize_bounded, Shape};

/// Padding used by the bounded scenes.
pub const SCENE_PADDING: f32 = 5.0;

/// A shape placed in a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placed {
    pub shape: Shape,
    /// `Some(p)` for bounded rasterization.
    pub padding: Option<f32>,
}

/// A named test scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub shapes: Vec<Placed>,
}

impl Scene {
    fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
            shapes: Vec::new(),
        }
    }

    fn with(mut self, shape: Shape) -> Self {
        self.shapes.push(Placed {
            shape,
            padding: None,
        });
        self
    }

    fn padded(mut self, shape: Shape) -> Self {
        self.shapes.push(Placed {
            shape,
            padding: Some(SCENE_PADDING),
        });
        self
    }

    /// Just the primitives, without padding.
    pub fn primitives(&self) -> Vec<Shape> {
        self.shapes.iter().map(|p| p.shape).collect()
    }

    /// Whether any shape is rasterized with bounds.
    pub fn is_bounded(&self) -> bool {
        self.shapes.iter().any(|p| p.padding.is_some())
    }

    /// Rasterize every shape into a fresh grid.
    pub fn seed(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height).expect("scene dimensions are valid");
        for placed in &self.shapes {
            match placed.padding {
                None => rasterize(&mut grid, &placed.shape),
                Some(padding) => rasterize_bounded(&mut grid, &placed.shape, padding),
            };
        }
        grid
    }
}

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Horizontal segment across a 16×16 grid.
pub fn line() -> Scene {
    Scene::new("line", 16, 16).with(Shape::line(v(3.5, 8.5), v(12.5, 8.5)))
}

/// Radius-4 circle centred in a 16×16 grid.
pub fn circle() -> Scene {
    Scene::new("circle", 16, 16).with(Shape::circle(v(8.0, 8.0), 4.0))
}

/// Rectangle in a 16×16 grid.
pub fn rect() -> Scene {
    Scene::new("rect", 16, 16).with(Shape::rect(v(3.0, 5.0), v(12.0, 10.0)))
}

/// Two overlapping circles in a 16×16 grid.
pub fn two_circles() -> Scene {
    Scene::new("two_circles", 16, 16)
        .with(Shape::circle(v(5.0, 7.0), 3.0))
        .with(Shape::circle(v(10.0, 8.0), 3.5))
}

/// Two rectangles overlapping by one cell along a horizontal seam, 64×64.
pub fn close_rects() -> Scene {
    Scene::new("close_rects", 64, 64)
        .with(Shape::rect(v(4.0, 4.0), v(60.0, 35.0)))
        .with(Shape::rect(v(4.0, 34.0), v(60.0, 60.0)))
}

/// Bounded diagonal segment in a 32×32 grid.
pub fn padded_line() -> Scene {
    Scene::new("padded_line", 32, 32).padded(Shape::line(v(8.0, 15.0), v(23.0, 20.0)))
}

/// Bounded circle in a 32×32 grid.
pub fn padded_circle() -> Scene {
    Scene::new("padded_circle", 32, 32).padded(Shape::circle(v(16.0, 16.0), 7.0))
}

/// Bounded rectangle in a 32×32 grid.
pub fn padded_rect() -> Scene {
    Scene::new("padded_rect", 32, 32).padded(Shape::rect(v(10.0, 12.0), v(20.0, 18.0)))
}

/// Two bounded, overlapping circles in a 64×64 grid.
pub fn padded_circles() -> Scene {
    Scene::new("padded_circles", 64, 64)
        .padded(Shape::circle(v(20.0, 28.0), 12.0))
        .padded(Shape::circle(v(40.0, 32.0), 14.0))
}

/// Two large bounded circles in a 128×128 grid.
pub fn close_circles() -> Scene {
    Scene::new("close_circles", 128, 128)
        .padded(Shape::circle(v(40.0, 56.0), 24.0))
        .padded(Shape::circle(v(80.0, 64.0), 28.0))
}

/// Every scene above.
pub fn all() -> Vec<Scene> {
    vec![
        line(),
        circle(),
        rect(),
        two_circles(),
        close_rects(),
        padded_line(),
        padded_circle(),
        padded_rect(),
        padded_circles(),
        close_circles(),
    ]
}
