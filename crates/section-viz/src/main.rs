use macroquad::prelude::*;
use nalgebra::Point3;
use section_planes::{AnatomicalPlane, BoundingBox, ClippingController, SystemClock};
use section_viz::{
    ControlPanel, CpuClipPort, OrbitCamera, draw_indicator, draw_model, generate_model,
};

#[macroquad::main("Anatomical Section Planes")]
async fn main() {
    env_logger::init();

    let bounds = BoundingBox::new(Point3::new(-1.0, -1.5, -1.0), Point3::new(1.0, 1.5, 1.0));
    let model = generate_model(&bounds);
    log::info!("model has {} faces", model.len());

    let mut viewer = ClippingController::new(CpuClipPort::new(), SystemClock::new())
        .with_bounds(bounds);
    let mut camera = OrbitCamera::new(6.0, 0.6, 0.35)
        .with_zoom(0.5, 2.0, 20.0)
        .looking_at(&bounds);
    let mut panel = ControlPanel::new();

    loop {
        camera.update();
        panel.update(&mut viewer);
        viewer.tick();

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        draw_model(&model, viewer.port());
        for plane in AnatomicalPlane::ALL {
            if let Some(indicator) = viewer.indicator(plane) {
                draw_indicator(indicator);
            }
        }

        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), RED);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), GREEN);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0), BLUE);

        set_default_camera();

        draw_text("Anatomical Section Planes", 10.0, 25.0, 20.0, WHITE);
        panel.draw_ui(&viewer, 50.0);
        draw_text(
            "Drag mouse to rotate, scroll to zoom",
            10.0,
            screen_height() - 30.0,
            16.0,
            DARKGRAY,
        );
        draw_text(&format!("FPS: {}", get_fps()), 10.0, screen_height() - 10.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
