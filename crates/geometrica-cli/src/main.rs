use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geometrica::api::{cosine_law_kw, rotate_named, sine_law_kw};
use geometrica::{translate, Point};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;
mod request;

use provenance::{write_sidecar, Run, Summary};
use request::Outcome;

#[derive(Parser)]
#[command(name = "geometrica")]
#[command(about = "Point transforms and triangle solvers")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Translate a point file by (dx, dy, dz)
    Translate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,
        #[arg(long, allow_negative_numbers = true)]
        dy: f64,
        #[arg(long, allow_negative_numbers = true)]
        dz: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Rotate a point file about a principal axis (degrees)
    Rotate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        axis: String,
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
        #[arg(long, default_value = "right")]
        hand: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Solve for the one omitted quantity with the law of sines
    SineLaw {
        #[arg(long)]
        side1: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        angle1: Option<f64>,
        #[arg(long)]
        side2: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        angle2: Option<f64>,
        #[arg(long)]
        obtuse: bool,
    },
    /// Solve for side3 or its opposite angle with the law of cosines
    CosineLaw {
        #[arg(long)]
        side1: f64,
        #[arg(long)]
        side2: f64,
        #[arg(long)]
        side3: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        angle: Option<f64>,
    },
    /// Evaluate a JSON list of requests and write one outcome per request
    Batch {
        #[arg(long)]
        requests: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Translate {
            input,
            dx,
            dy,
            dz,
            out,
        } => run_translate(&input, [dx, dy, dz], &out, cmd.tag),
        Action::Rotate {
            input,
            axis,
            angle,
            hand,
            out,
        } => run_rotate(&input, &axis, angle, &hand, &out, cmd.tag),
        Action::SineLaw {
            side1,
            angle1,
            side2,
            angle2,
            obtuse,
        } => {
            tracing::info!(?side1, ?angle1, ?side2, ?angle2, obtuse, "sine_law");
            let value = sine_law_kw(side1, angle1, side2, angle2, obtuse)?;
            print_scalar("sine_law", value)
        }
        Action::CosineLaw {
            side1,
            side2,
            side3,
            angle,
        } => {
            tracing::info!(side1, side2, ?side3, ?angle, "cosine_law");
            let value = cosine_law_kw(side1, side2, side3, angle)?;
            print_scalar("cosine_law", value)
        }
        Action::Batch { requests, out } => run_batch(&requests, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn triples(points: &[Point]) -> Vec<[f64; 3]> {
    points.iter().map(|p| [p.x, p.y, p.z]).collect()
}

fn points_summary(input: &Path, points_in: usize, points_out: usize) -> Summary {
    Summary::Points {
        input_format: points_io::point_format(input).unwrap_or("unknown"),
        points_in,
        points_out,
    }
}

fn run_translate(input: &Path, d: [f64; 3], out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), dx = d[0], dy = d[1], dz = d[2], tag = ?tag, "translate");
    let points = points_io::read_points(input)?;
    let moved = translate(&points, d[0], d[1], d[2])?;
    points_io::write_points(out, &triples(&moved))?;
    let params = json!({"input": input.to_string_lossy(), "x": d[0], "y": d[1], "z": d[2]});
    let run = Run {
        op: "translate",
        tag: tag.as_deref(),
        params,
        summary: points_summary(input, points.len(), moved.len()),
    };
    write_sidecar(out, &run)?;
    tracing::info!(points = moved.len(), out = %out.display(), "translate_done");
    Ok(())
}

fn run_rotate(
    input: &Path,
    axis: &str,
    angle: f64,
    hand: &str,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), axis, angle, hand, tag = ?tag, "rotate");
    let points = points_io::read_points(input)?;
    let rotated = rotate_named(&points, axis, angle, hand)?;
    points_io::write_points(out, &triples(&rotated))?;
    let params = json!({
        "input": input.to_string_lossy(),
        "axis": axis,
        "angle": angle,
        "hand": hand
    });
    let run = Run {
        op: "rotate",
        tag: tag.as_deref(),
        params,
        summary: points_summary(input, points.len(), rotated.len()),
    };
    write_sidecar(out, &run)?;
    tracing::info!(points = rotated.len(), out = %out.display(), "rotate_done");
    Ok(())
}

fn print_scalar(op: &str, value: f64) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&json!({ "op": op, "value": value }))?);
    Ok(())
}

fn run_batch(requests: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(requests = %requests.display(), tag = ?tag, "batch");
    let bytes = fs::read(requests).with_context(|| format!("reading {}", requests.display()))?;
    let doc: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", requests.display()))?;
    let items = doc
        .as_array()
        .with_context(|| format!("{} must hold a JSON list", requests.display()))?;
    let outcomes: Vec<Outcome> = items.iter().map(request::evaluate).collect();
    let mut failed = 0;
    for (i, o) in outcomes.iter().enumerate() {
        if let Outcome::Failed { op, kind, error } = o {
            failed += 1;
            tracing::warn!(index = i, %op, %kind, %error, "request_failed");
        }
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&outcomes)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let run = Run {
        op: "batch",
        tag: tag.as_deref(),
        params: json!({ "requests": requests.to_string_lossy() }),
        summary: Summary::Batch {
            requests: outcomes.len(),
            failed,
        },
    };
    write_sidecar(out, &run)?;
    tracing::info!(requests = outcomes.len(), failed, out = %out.display(), "batch_done");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "version": geometrica::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
