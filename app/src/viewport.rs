use line_2d::Coord;
use sdl2::rect::Rect;

/// Maps waveform world space into the plot area's pixels. World y grows
/// upwards, screen y grows downwards; `centre` is the world point rendered at
/// the middle of the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    centre: [f32; 2],
    px_per_unit: f32,
}

impl Viewport {
    /// A viewport centred on `centre` scaled so that `world_height` world
    /// units span the plot rectangle's height.
    pub fn fit_height(
        centre: [f32; 2],
        world_height: f32,
        plot_rect: Rect,
    ) -> Self {
        Self {
            centre,
            px_per_unit: plot_rect.height() as f32 / world_height,
        }
    }

    fn plot_centre_px(plot_rect: Rect) -> [f32; 2] {
        [
            plot_rect.x() as f32 + plot_rect.width() as f32 / 2.0,
            plot_rect.y() as f32 + plot_rect.height() as f32 / 2.0,
        ]
    }

    fn world_to_screen_f(&self, point: [f32; 2], plot_rect: Rect) -> [f32; 2] {
        let [cx, cy] = Self::plot_centre_px(plot_rect);
        [
            cx + (point[0] - self.centre[0]) * self.px_per_unit,
            cy - (point[1] - self.centre[1]) * self.px_per_unit,
        ]
    }

    pub fn world_to_screen(&self, point: [f32; 2], plot_rect: Rect) -> Coord {
        let [x, y] = self.world_to_screen_f(point, plot_rect);
        Coord {
            x: x as i32,
            y: y as i32,
        }
    }

    pub fn screen_to_world(&self, coord: Coord, plot_rect: Rect) -> [f32; 2] {
        let [cx, cy] = Self::plot_centre_px(plot_rect);
        [
            self.centre[0] + (coord.x as f32 - cx) / self.px_per_unit,
            self.centre[1] - (coord.y as f32 - cy) / self.px_per_unit,
        ]
    }

    /// Shifts the view by a mouse movement in pixels, so the world appears to
    /// follow the cursor.
    pub fn pan_px(&mut self, xrel: i32, yrel: i32) {
        self.centre[0] -= xrel as f32 / self.px_per_unit;
        self.centre[1] += yrel as f32 / self.px_per_unit;
    }

    /// Scales the view by `ratio`, keeping the world point under `cursor`
    /// fixed on screen.
    pub fn zoom_about(&mut self, ratio: f32, cursor: Coord, plot_rect: Rect) {
        let anchor = self.screen_to_world(cursor, plot_rect);
        self.px_per_unit *= ratio;
        let moved = self.screen_to_world(cursor, plot_rect);
        self.centre[0] += anchor[0] - moved[0];
        self.centre[1] += anchor[1] - moved[1];
    }
}
