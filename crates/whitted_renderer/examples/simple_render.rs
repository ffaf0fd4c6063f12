//! Simple Whitted ray tracer example.
//!
//! Builds a small scene in code (a floor, a diffuse, a mirror and a glass
//! sphere under two lights) and saves it as PNG.

use std::sync::Arc;

use whitted_renderer::{
    render, Camera, Color, DirectionalLight, Material, Plane, PointLight, RenderSettings, Scene,
    Sphere, Vec3,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = std::time::Instant::now();
    let scene = build_scene();
    log::info!("Scene built in {:?}", start.elapsed());

    let settings = RenderSettings {
        width: 800,
        height: 450,
        max_depth: 6,
        ..Default::default()
    };

    let camera = Camera::new(
        Vec3::new(0.0, 1.5, 6.0), // eye
        Vec3::new(0.0, 0.8, 0.0), // target
        Vec3::Y,
        40.0,
        settings.aspect_ratio(),
    );

    let image = render(&camera, &scene, &settings);

    let filename = "output.png";
    if let Err(err) = image.save_png(filename, settings.exposure) {
        log::error!("Failed to save {}: {}", filename, err);
        std::process::exit(1);
    }
    log::info!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new()
        .with_ambient(Color::splat(0.1))
        .with_background(Color::new(0.5, 0.7, 1.0))
        .with_max_depth(6);

    // Ground
    scene.add(Plane::new(
        Vec3::ZERO,
        Vec3::Y,
        Arc::new(Material::diffuse(Color::new(0.5, 0.5, 0.5))),
    ));

    // Three main spheres
    scene.add(Sphere::new(
        Vec3::new(-2.2, 1.0, 0.0),
        1.0,
        Arc::new(
            Material::diffuse(Color::new(0.8, 0.3, 0.2)).with_specular(Color::splat(0.6), 40.0),
        ),
    ));

    scene.add(Sphere::new(
        Vec3::new(0.0, 1.0, -0.5),
        1.0,
        Arc::new(Material::mirror(Color::new(0.8, 0.8, 0.7))),
    ));

    scene.add(Sphere::new(
        Vec3::new(2.2, 1.0, 0.0),
        1.0,
        Arc::new(Material::glass(1.5)),
    ));

    scene.add_light(PointLight::new(Vec3::new(-4.0, 6.0, 4.0), Color::splat(0.8)));
    scene.add_light(DirectionalLight::new(
        Vec3::new(1.0, -1.0, -0.5),
        Color::splat(0.4),
    ));

    scene
}
