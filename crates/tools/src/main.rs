use std::path::PathBuf;

use catalog::Portfolio;
use catalog::assets::{ImageSource, exists_under, resolve_image};
use catalog::contact::ContactForm;
use clap::{Parser, Subcommand};
use foundation::math::{ArcLift, DEFAULT_ARC_SAMPLES, GeoPoint, Vec3, build_arc, project};
use scene::animation::{AnimationMode, ContactIconKind, MotionCategory, profile};
use serde::Serialize;
use tools::{
    ArcJson, Vec3Json, parse_geo, parse_sample_count, pose_track, simulate_certificates,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portfolio", about = "Globe, arc and animation utilities for the portfolio scene")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a latitude/longitude onto the globe.
    Project {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lng: f64,
        #[arg(long, env = "PORTFOLIO_GLOBE_RADIUS", default_value_t = 2.18)]
        radius: f64,
        /// Clamp latitude and wrap longitude before projecting.
        #[arg(long)]
        normalize: bool,
    },
    /// Build a flight path between two LAT,LNG points.
    Arc {
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        #[arg(long, default_value_t = DEFAULT_ARC_SAMPLES, value_parser = parse_sample_count)]
        samples: usize,
        #[arg(long, env = "PORTFOLIO_GLOBE_RADIUS", default_value_t = 2.18)]
        radius: f64,
        /// Radial control point distance from the globe center.
        #[arg(long, conflicts_with = "height")]
        elevation: Option<f64>,
        /// Lift the chord midpoint straight up instead.
        #[arg(long)]
        height: Option<f64>,
    },
    /// Print a pose track for one motion category and mode.
    Poses {
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "idle")]
        mode: String,
        /// Contact icon (phone, email, location); uses its height and tempo.
        #[arg(long)]
        icon: Option<String>,
        #[arg(long, default_value_t = 2.0)]
        seconds: f64,
        #[arg(long, env = "PORTFOLIO_FPS", default_value_t = 60.0)]
        fps: f64,
    },
    /// Dump portfolio content as JSON.
    Catalog {
        #[arg(long)]
        section: Option<String>,
    },
    /// Resolve every image against a static asset directory.
    Assets {
        root: PathBuf,
    },
    /// Compose the quick-contact mailto URI.
    Mailto {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Replay hover, click and close against the certificates section.
    Simulate {
        #[arg(long, env = "PORTFOLIO_FPS", default_value_t = 60.0)]
        fps: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Project {
            lat,
            lng,
            radius,
            normalize,
        } => {
            let p = if normalize {
                GeoPoint::new(lat, lng).project(radius)
            } else {
                project(lat, lng, radius)
            };
            print_json(&Vec3Json::from(p))
        }
        Command::Arc {
            from,
            to,
            samples,
            radius,
            elevation,
            height,
        } => {
            let lift = match (elevation, height) {
                (_, Some(height)) => ArcLift::Lifted { height },
                (Some(elevation), None) => ArcLift::Radial { elevation },
                (None, None) => ArcLift::Radial {
                    elevation: radius * 1.4,
                },
            };
            let start = parse_geo(&from)?.project(radius);
            let end = parse_geo(&to)?.project(radius);
            let arc = build_arc(start, end, lift, samples);
            info!(samples = arc.samples.len(), "arc built");
            print_json(&ArcJson::from(&arc))
        }
        Command::Poses {
            category,
            mode,
            icon,
            seconds,
            fps,
        } => {
            let category = MotionCategory::parse(&category).ok_or_else(|| {
                let names: Vec<&str> = MotionCategory::ALL.iter().map(|c| c.name()).collect();
                format!("unknown category {category:?} (expected one of {})", names.join(", "))
            })?;
            let mode = AnimationMode::parse(&mode)
                .ok_or_else(|| format!("unknown mode {mode:?} (idle, hovered, selected)"))?;
            let mut motion = profile(category, mode);
            let mut anchor = Vec3::ZERO;
            if let Some(icon) = icon {
                let icon = ContactIconKind::parse(&icon)
                    .ok_or_else(|| format!("unknown icon {icon:?} (phone, email, location)"))?;
                if category != MotionCategory::ContactIcon {
                    let expected = MotionCategory::ContactIcon.name();
                    return Err(format!("--icon needs --category {expected}"));
                }
                motion = motion.retimed(icon.tempo());
                anchor = icon.anchor();
            }
            print_json(&pose_track(motion, anchor, seconds, fps))
        }
        Command::Catalog { section } => {
            let portfolio = Portfolio::builtin();
            let hash = portfolio.content_hash().map_err(|e| e.to_string())?;
            let content = match section {
                Some(section) => portfolio.section_json(&section).map_err(|e| e.to_string())?,
                None => serde_json::to_value(&portfolio).map_err(|e| format!("json: {e}"))?,
            };
            print_json(&serde_json::json!({
                "content_hash": hash,
                "content": content,
            }))
        }
        Command::Assets { root } => {
            let portfolio = Portfolio::builtin();
            let exists = exists_under(&root);
            let mut resolved = Vec::new();
            for cert in &portfolio.certificates {
                let source = resolve_image(&cert.image, "Certificate", &exists);
                resolved.push((cert.image.clone(), source));
            }
            for project in &portfolio.projects {
                for image in &project.images {
                    resolved.push((image.clone(), resolve_image(image, &project.title, &exists)));
                }
            }
            let missing = resolved
                .iter()
                .filter(|(_, src)| !matches!(src, ImageSource::File { .. }))
                .count();
            info!(total = resolved.len(), missing, root = %root.display(), "assets resolved");
            print_json(&resolved)
        }
        Command::Mailto {
            name,
            email,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                message,
            };
            let to = Portfolio::builtin().contact.email;
            let uri = form.compose_mailto(&to).map_err(|e| e.to_string())?;
            println!("{uri}");
            Ok(())
        }
        Command::Simulate { fps } => {
            let reports = simulate_certificates(&Portfolio::builtin(), fps);
            print_json(&reports)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value).map_err(|e| format!("json: {e}"))?;
    println!("{payload}");
    Ok(())
}
