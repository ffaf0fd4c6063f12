//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/spheres.json

use std::env;

use whitted_core::{load_obj, load_scene, LightDescription, ShapeDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExamples:");
        println!("  cargo run --example inspect_scene -- scenes/spheres.json");
        println!("  cargo run --example inspect_scene -- scenes/mesh.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let settings = &scene.settings;
            println!("\n=== Scene: {} ===", path);
            println!(
                "Image: {}x{}, max depth {}, exposure {}",
                settings.width, settings.height, settings.max_depth, settings.exposure
            );
            println!(
                "Camera: eye {:?} -> target {:?}, fov {}",
                scene.camera.eye, scene.camera.target, scene.camera.fov
            );

            println!("\n--- Materials ---");
            for (name, material) in &scene.materials {
                let kind = if material.is_recursive() { "recursive" } else { "shaded" };
                println!("  {} ({})", name, kind);
            }

            println!("\n--- Shapes ---");
            for (i, shape) in scene.shapes.iter().enumerate() {
                match shape {
                    ShapeDescription::Plane { point, normal, material } => {
                        println!("  [{}] plane through {:?} normal {:?} [{}]", i, point, normal, material);
                    }
                    ShapeDescription::Sphere { center, radius, material } => {
                        println!("  [{}] sphere at {:?} r={} [{}]", i, center, radius, material);
                    }
                    ShapeDescription::Triangle { normals, material, .. } => {
                        let shading = if normals.is_some() { "smooth" } else { "flat" };
                        println!("  [{}] triangle ({}) [{}]", i, shading, material);
                    }
                    ShapeDescription::Mesh { path, smooth, material } => match load_obj(path) {
                        Ok(mesh) => println!(
                            "  [{}] mesh {} - {} vertices, {} triangles, smooth={} [{}]",
                            i,
                            path.display(),
                            mesh.vertex_count(),
                            mesh.triangle_count(),
                            smooth,
                            material
                        ),
                        Err(e) => println!("  [{}] mesh {} - failed to load: {}", i, path.display(), e),
                    },
                }
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                match light {
                    LightDescription::Point { position, .. } => {
                        println!("  [{}] point at {:?}", i, position)
                    }
                    LightDescription::Directional { direction, .. } => {
                        println!("  [{}] directional toward {:?}", i, direction)
                    }
                    LightDescription::Spot { position, cutoff, .. } => {
                        println!("  [{}] spot at {:?}, cutoff {} deg", i, position, cutoff)
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
