mod panel;
mod viewport;

use anyhow::anyhow;
use clap::Parser;
use line_2d::Coord;
use panel::ControlPanel;
use sdl2::{
    event::Event, keyboard::Scancode, pixels::Color, rect::Rect,
};
use std::time::Instant;
use viewport::Viewport;
use wavescope_core::{LINE_SPACING, Scene, Waveform, WaveformConfig};
use wavescope_window_utils::Window;

// World-space height of the initial view: the four stacked lines plus
// headroom for the maximum slider amplitude above and below.
const INITIAL_WORLD_HEIGHT: f32 = 3.0 * LINE_SPACING + 30.0;

const ZOOM_RATIO_PER_WHEEL_TICK: f32 = 1.1;

#[derive(Parser)]
struct Args {
    #[arg(long, default_value_t = 960)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    #[arg(long, default_value_t = 300)]
    panel_width: u32,
    #[arg(long, default_value_t = WaveformConfig::DEFAULT_FREQ_HZ)]
    freq_hz: f32,
    #[arg(long, default_value_t = WaveformConfig::DEFAULT_AMPLITUDE)]
    amplitude: f32,
    #[arg(long, default_value_t = WaveformConfig::DEFAULT_SPEED)]
    speed: f32,
    #[arg(long, default_value_t = WaveformConfig::DEFAULT_RESOLUTION)]
    resolution: usize,
    #[arg(long, default_value_t = 2)]
    line_width: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let template = WaveformConfig {
        waveform: Waveform::Sine,
        freq_hz: args.freq_hz,
        amplitude: args.amplitude,
        speed: args.speed,
        resolution: args.resolution,
    };
    template.validate()?;
    if args.panel_width < ControlPanel::MIN_WIDTH {
        return Err(anyhow!(
            "panel width must be at least {}",
            ControlPanel::MIN_WIDTH
        ));
    }
    let mut window =
        Window::new(Some("Waveform Visualiser"), args.width, args.height)?;
    let plot_width = args
        .width
        .checked_sub(args.panel_width)
        .ok_or_else(|| anyhow!("panel is wider than the window"))?;
    let plot_rect = Rect::new(0, 0, plot_width, args.height);
    let panel_rect = Rect::new(
        plot_width as i32,
        0,
        args.panel_width,
        args.height,
    );
    let mut scene = Scene::with_all_waveforms(template);
    let mut panel = ControlPanel::new(panel_rect, &scene);
    let mut viewport = Viewport::fit_height(
        [0.5, 1.5 * LINE_SPACING],
        INITIAL_WORLD_HEIGHT,
        plot_rect,
    );
    log::info!(
        "Starting with {} points per line at {}Hz",
        args.resolution,
        args.freq_hz
    );
    let mut prev_frame = Instant::now();
    loop {
        window.wait_until_next_frame();
        let events = window.event_pump.poll_iter().collect::<Vec<_>>();
        for event in &events {
            Window::handle_event_common(event, window.title.as_ref());
            match event {
                Event::KeyDown {
                    scancode: Some(Scancode::Space),
                    repeat: false,
                    ..
                } => scene.phase_mut().toggle_paused(),
                Event::KeyDown {
                    scancode: Some(Scancode::R),
                    repeat: false,
                    ..
                } => {
                    panel.reset_values();
                    scene.phase_mut().reset();
                }
                Event::MouseWheel {
                    precise_y,
                    mouse_x,
                    mouse_y,
                    ..
                } if plot_rect.contains_point((*mouse_x, *mouse_y))
                    && !panel.wants_mouse(*mouse_x, *mouse_y) =>
                {
                    let ratio = ZOOM_RATIO_PER_WHEEL_TICK.powf(*precise_y);
                    viewport.zoom_about(
                        ratio,
                        Coord {
                            x: *mouse_x,
                            y: *mouse_y,
                        },
                        plot_rect,
                    );
                }
                Event::MouseMotion {
                    mousestate,
                    x,
                    y,
                    xrel,
                    yrel,
                    ..
                } if mousestate.left()
                    && plot_rect.contains_point((*x, *y))
                    && !panel.wants_mouse(*x, *y) =>
                {
                    viewport.pan_px(*xrel, *yrel);
                }
                _ => panel.handle_event(event),
            }
        }
        if panel.take_reset_clicked() {
            panel.reset_values();
            scene.phase_mut().reset();
        }
        let now = Instant::now();
        let dt = now.duration_since(prev_frame).as_secs_f32();
        prev_frame = now;
        scene.set_shared_params(
            panel.freq_hz(),
            panel.amplitude(),
            panel.speed(),
            panel.resolution(),
        );
        for (line, visible) in
            scene.lines_mut().iter_mut().zip(panel.visibility())
        {
            line.visible = visible;
        }
        scene.update(dt);
        window.canvas.set_draw_color(Color::BLACK);
        window.canvas.clear();
        draw_lines(&mut window, &scene, &viewport, plot_rect, args.line_width);
        panel.render(&mut window, scene.phase().paused())?;
        window.canvas.present();
        window.prev_tick_complete = Instant::now();
    }
}

/// Both endpoints are off the same edge of the plot, so no pixel of the
/// segment can be visible.
fn offscreen_same_side(a: Coord, b: Coord, rect: Rect) -> bool {
    (a.x < rect.left() && b.x < rect.left())
        || (a.x > rect.right() && b.x > rect.right())
        || (a.y < rect.top() && b.y < rect.top())
        || (a.y > rect.bottom() && b.y > rect.bottom())
}

fn draw_lines(
    window: &mut Window,
    scene: &Scene,
    viewport: &Viewport,
    plot_rect: Rect,
    line_width: u32,
) {
    for line in scene.lines() {
        if !line.visible {
            continue;
        }
        window.canvas.set_draw_color(Color::RGB(
            line.colour.r,
            line.colour.g,
            line.colour.b,
        ));
        let mut prev: Option<Coord> = None;
        for point in line.points() {
            let coord = viewport.world_to_screen(*point, plot_rect);
            if let Some(prev) = prev {
                if !offscreen_same_side(prev, coord, plot_rect) {
                    for Coord { x, y } in line_2d::coords_between(prev, coord)
                    {
                        if plot_rect.contains_point((x, y)) {
                            let rect =
                                Rect::new(x, y, line_width, line_width);
                            let _ = window.canvas.fill_rect(rect);
                        }
                    }
                }
            }
            prev = Some(coord);
        }
    }
}
