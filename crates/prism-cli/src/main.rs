//! prism CLI - inspect transforms, bounds and slab queries
//!
//! Reads an optional TOML scene (a transform stack and a sphere) and prints
//! what the geometry core computes for it.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use prism_geom::{Bounds3f, Ray, Transform};
use prism_math::{Float, Matrix4x4, Point3f, Vector3f};
use prism_shape::{Shape, Sphere};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::SceneConfig;

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Geometry core inspector for the prism renderer", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Invert a 4x4 matrix given as 16 row-major values
    Invert {
        #[arg(num_args = 16, allow_negative_numbers = true, required = true)]
        values: Vec<Float>,
    },
    /// Print the object and world bounds of the configured sphere
    Bound {
        /// Scene TOML (default: unit sphere at the origin)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Slab-test a ray against the sphere's world bound
    Slab {
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        origin: [Float; 3],
        /// Ray direction as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        dir: [Float; 3],
        /// Parametric extent of the ray
        #[arg(long, default_value_t = Float::INFINITY)]
        t_max: Float,
        /// Scene TOML (default: unit sphere at the origin)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Invert { values } => invert(&values)?,
        Commands::Bound { config, json } => {
            let scene = load_scene(config)?;
            show_bound(&scene, json)?;
        }
        Commands::Slab {
            origin,
            dir,
            t_max,
            config,
        } => {
            let scene = load_scene(config)?;
            slab(&scene, origin, dir, t_max)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(path: Option<PathBuf>) -> Result<SceneConfig> {
    match path {
        Some(p) => SceneConfig::load(&p),
        None => Ok(SceneConfig::default()),
    }
}

fn parse_triple(s: &str) -> Result<[Float; 3]> {
    let parts = s
        .split(',')
        .map(|c| c.trim().parse::<Float>().with_context(|| format!("bad component {c:?}")))
        .collect::<Result<Vec<_>>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => bail!("expected x,y,z, got {s:?}"),
    }
}

fn invert(values: &[Float]) -> Result<()> {
    if values.len() != 16 {
        bail!("expected 16 values, got {}", values.len());
    }
    let mut rows = [[0.0; 4]; 4];
    for (i, v) in values.iter().enumerate() {
        rows[i / 4][i % 4] = *v;
    }
    let m = Matrix4x4::from(rows);
    let inv = m.inverse().context("matrix has no inverse")?;
    println!("inverse:\n{inv}");
    println!("inverse * m:\n{}", inv * m);
    Ok(())
}

#[derive(Serialize)]
struct BoundReport {
    object_bound: Bounds3f,
    world_bound: Bounds3f,
    area: Float,
    swaps_handedness: bool,
}

fn show_bound(scene: &SceneConfig, json: bool) -> Result<()> {
    let o2w = scene.object_to_world()?;
    let w2o = o2w.inverse();
    let sphere = build_sphere(scene, &o2w, &w2o)?;
    let report = BoundReport {
        object_bound: sphere.object_bound(),
        world_bound: sphere.world_bound(),
        area: sphere.area(),
        swaps_handedness: o2w.swaps_handedness(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{sphere}");
        println!("  object bound: {}", report.object_bound);
        println!("  world bound:  {}", report.world_bound);
        println!("  area:         {}", report.area);
        if report.swaps_handedness {
            println!("  transform swaps handedness");
        }
    }
    Ok(())
}

fn slab(scene: &SceneConfig, origin: [Float; 3], dir: [Float; 3], t_max: Float) -> Result<()> {
    let d = Vector3f::new(dir[0], dir[1], dir[2]);
    if d.length_squared() == 0.0 {
        bail!("ray direction must be non-zero");
    }
    let o2w = scene.object_to_world()?;
    let w2o = o2w.inverse();
    let sphere = build_sphere(scene, &o2w, &w2o)?;
    let bound = sphere.world_bound();

    let ray = Ray::with(Point3f::new(origin[0], origin[1], origin[2]), d, t_max, 0.0, None);
    debug!(%ray, %bound, "slab query");
    let precomputed = bound.intersect_p_precomputed(&ray, &ray.inv_dir(), ray.dir_is_neg());
    println!("precomputed slab test: {}", if precomputed { "hit" } else { "miss" });
    match bound.intersect_p(&ray) {
        Some((t0, t1)) => {
            info!(t0, t1, "ray overlaps bound");
            println!("hit: t0={t0} t1={t1}");
            println!("  enter {}", ray.at(t0));
            println!("  exit  {}", ray.at(t1));
        }
        None => println!("miss"),
    }
    Ok(())
}

fn build_sphere<'t>(
    scene: &SceneConfig,
    o2w: &'t Transform,
    w2o: &'t Transform,
) -> Result<Sphere<'t>> {
    let s = &scene.sphere;
    if !(s.radius > 0.0) {
        bail!("sphere radius must be positive, got {}", s.radius);
    }
    let (z_min, z_max) = s.z_range();
    Ok(Sphere::new(o2w, w2o, s.reverse_orientation, s.radius, z_min, z_max, s.phi_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1,-2.5, 3").unwrap(), [1.0, -2.5, 3.0]);
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,two,3").is_err());
    }

    #[test]
    fn test_cli_parses_invert() {
        let cli = Cli::try_parse_from([
            "prism", "invert", "2", "0", "0", "0", "0", "2", "0", "0", "0", "0", "2", "0", "0", "0", "0",
            "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Invert { values } => assert_eq!(values.len(), 16),
            _ => panic!("expected invert"),
        }
    }

    #[test]
    fn test_cli_parses_slab() {
        let cli = Cli::try_parse_from([
            "prism", "--verbose", "slab", "--origin", "0,0,-5", "--dir", "0,0,1", "--t-max", "10",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Slab {
                origin, dir, t_max, ..
            } => {
                assert_eq!(origin, [0.0, 0.0, -5.0]);
                assert_eq!(dir, [0.0, 0.0, 1.0]);
                assert_eq!(t_max, 10.0);
            }
            _ => panic!("expected slab"),
        }
    }

    #[test]
    fn test_invert_rejects_singular() {
        assert!(invert(&[0.0; 16]).is_err());
        let mut id = [0.0; 16];
        for i in 0..4 {
            id[i * 5] = 1.0;
        }
        assert!(invert(&id).is_ok());
    }

    #[test]
    fn test_slab_on_default_scene() {
        let scene = SceneConfig::default();
        assert!(slab(&scene, [0.0, 0.0, -5.0], [0.0, 0.0, 1.0], Float::INFINITY).is_ok());
        assert!(slab(&scene, [0.0, 0.0, -5.0], [0.0, 0.0, 0.0], Float::INFINITY).is_err());
    }

    #[test]
    fn test_bound_rejects_bad_radius() {
        let mut scene = SceneConfig::default();
        scene.sphere.radius = 0.0;
        assert!(show_bound(&scene, false).is_err());
        scene.sphere.radius = 2.0;
        assert!(show_bound(&scene, true).is_ok());
    }
}
