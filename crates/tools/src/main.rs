use std::env;
use std::fs;
use std::path::PathBuf;

use foundation::math::Vec2;
use foundation::time::Time;
use foundation::viewport::Viewport;
use globe::{GlobeRenderer, QualityTier, RendererConfig};
use runtime::REFRESH_DT_S;
use scene::HotspotCatalog;
use serde::Serialize;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "render" => cmd_render(args),
        "manifest" => cmd_manifest(args),
        "click" => cmd_click(args),
        "inspect" => cmd_inspect(args),
        _ => Err(usage()),
    }
}

/// Flags shared by the loop-driving subcommands.
struct LoopArgs {
    frames: u64,
    quality: QualityTier,
    seed: u64,
    viewport: Viewport,
}

impl Default for LoopArgs {
    fn default() -> Self {
        Self {
            frames: 120,
            quality: QualityTier::High,
            seed: 0,
            viewport: Viewport::new(800, 600),
        }
    }
}

impl LoopArgs {
    /// Consume known flags from `args` starting at `from`; anything else is
    /// an error.
    fn parse(args: &[String], from: usize) -> Result<Self, String> {
        let mut out = Self::default();
        let mut i = from;
        while i < args.len() {
            match args[i].as_str() {
                "--frames" => {
                    out.frames = flag_value(args, &mut i, "--frames")?
                        .parse()
                        .map_err(|e| format!("--frames: {e}"))?;
                }
                "--quality" => {
                    out.quality = flag_value(args, &mut i, "--quality")?
                        .parse()
                        .map_err(|e| format!("--quality: {e}"))?;
                }
                "--seed" => {
                    out.seed = flag_value(args, &mut i, "--seed")?
                        .parse()
                        .map_err(|e| format!("--seed: {e}"))?;
                }
                "--size" => {
                    out.viewport = parse_size(flag_value(args, &mut i, "--size")?)?;
                }
                other => {
                    return Err(format!("unknown arg: {other}\n\n{}", usage()));
                }
            }
            i += 1;
        }
        Ok(out)
    }

    fn build(&self) -> Result<GlobeRenderer, String> {
        GlobeRenderer::new(RendererConfig {
            viewport: self.viewport,
            quality: self.quality,
            seed: self.seed,
            ..RendererConfig::default()
        })
        .map_err(|e| e.to_string())
    }
}

/// Drive `frames` ticks with the engine timeline as the wall clock, so runs
/// are reproducible.
fn drive(renderer: &mut GlobeRenderer, frames: u64) {
    for i in 0..frames {
        let wall = Time(i as f64 * REFRESH_DT_S);
        if renderer.tick(wall).is_none() {
            break;
        }
    }
}

#[derive(Serialize)]
struct CounterOut {
    name: String,
    value: u64,
}

#[derive(Serialize)]
struct EventOut {
    frame: u64,
    kind: String,
    message: String,
}

#[derive(Serialize)]
struct RenderReport {
    frames: u64,
    width: u32,
    height: u32,
    quality: String,
    seed: u64,
    digest: String,
    commands_last_frame: usize,
    counters: Vec<CounterOut>,
    events: Vec<EventOut>,
}

fn cmd_render(args: Vec<String>) -> Result<(), String> {
    // vigil render <output.ppm> [--frames N] [--quality TIER] [--seed S] [--size WxH]
    if args.is_empty() {
        return Err(usage());
    }
    let output = PathBuf::from(&args[0]);
    let loop_args = LoopArgs::parse(&args, 1)?;

    let mut renderer = loop_args.build()?;
    drive(&mut renderer, loop_args.frames);

    let ppm = formats::encode_ppm(renderer.surface());
    fs::write(&output, &ppm).map_err(|e| format!("write {output:?}: {e}"))?;

    let report = RenderReport {
        frames: loop_args.frames,
        width: loop_args.viewport.width,
        height: loop_args.viewport.height,
        quality: loop_args.quality.to_string(),
        seed: loop_args.seed,
        digest: formats::surface_digest(renderer.surface()),
        commands_last_frame: renderer.last_frame().len(),
        counters: renderer
            .metrics()
            .snapshot()
            .counters
            .into_iter()
            .map(|(name, value)| CounterOut { name, value })
            .collect(),
        events: renderer
            .drain_events()
            .into_iter()
            .map(|e| EventOut {
                frame: e.frame_index,
                kind: e.kind.to_string(),
                message: e.message,
            })
            .collect(),
    };

    let payload = serde_json::to_string_pretty(&report).map_err(|e| format!("json: {e}"))?;
    println!("{payload}");
    eprintln!("wrote {} ({} bytes)", output.display(), ppm.len());
    Ok(())
}

fn cmd_manifest(args: Vec<String>) -> Result<(), String> {
    // vigil manifest [output.json] [--name NAME]
    let mut output: Option<PathBuf> = None;
    let mut name: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                name = Some(flag_value(&args, &mut i, "--name")?.to_string());
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            _ => {
                if output.is_some() {
                    return Err("manifest takes at most one output path".to_string());
                }
                output = Some(PathBuf::from(&args[i]));
            }
        }
        i += 1;
    }

    let mut manifest = formats::SceneManifest::from_catalog(&HotspotCatalog::default_scene());
    manifest.name = name;
    manifest
        .compute_and_set_identity()
        .map_err(|e| e.to_string())?;

    let payload = manifest.to_json_pretty().map_err(|e| e.to_string())?;
    match output {
        Some(path) => {
            fs::write(&path, &payload).map_err(|e| format!("write {path:?}: {e}"))?;
            eprintln!(
                "wrote {} (content_hash={})",
                path.display(),
                manifest.content_hash.unwrap_or_default()
            );
        }
        None => println!("{payload}"),
    }
    Ok(())
}

#[derive(Serialize)]
struct PayloadOut {
    title: String,
    description: String,
    x: f64,
    y: f64,
}

fn cmd_click(args: Vec<String>) -> Result<(), String> {
    // vigil click <x> <y> [--frames N] [--quality TIER] [--seed S] [--size WxH]
    if args.len() < 2 {
        return Err(usage());
    }
    let x: f64 = args[0].parse().map_err(|e| format!("x: {e}"))?;
    let y: f64 = args[1].parse().map_err(|e| format!("y: {e}"))?;
    let loop_args = LoopArgs::parse(&args, 2)?;

    let mut renderer = loop_args.build()?;
    drive(&mut renderer, loop_args.frames);

    let report = renderer.pointer_click(Vec2::new(x, y));
    let out = PayloadOut {
        title: report.title,
        description: report.description,
        x: report.x,
        y: report.y,
    };
    let payload = serde_json::to_string_pretty(&out).map_err(|e| format!("json: {e}"))?;
    println!("{payload}");
    Ok(())
}

#[derive(Serialize)]
struct InspectReport {
    version: String,
    name: Option<String>,
    content_hash: Option<String>,
    identity_verified: bool,
    hotspots: usize,
    labels: Vec<String>,
}

fn cmd_inspect(args: Vec<String>) -> Result<(), String> {
    // vigil inspect <manifest.json>
    if args.len() != 1 {
        return Err(usage());
    }
    let path = PathBuf::from(&args[0]);
    let payload = fs::read_to_string(&path).map_err(|e| format!("read {path:?}: {e}"))?;

    let manifest = formats::SceneManifest::from_json(&payload).map_err(|e| e.to_string())?;
    manifest.verify_identity().map_err(|e| e.to_string())?;
    let catalog = manifest.to_catalog().map_err(|e| e.to_string())?;

    let report = InspectReport {
        version: manifest.version.clone(),
        name: manifest.name.clone(),
        content_hash: manifest.content_hash.clone(),
        identity_verified: manifest.content_hash.is_some(),
        hotspots: catalog.len(),
        labels: catalog.iter().map(|h| h.label.clone()).collect(),
    };
    let out = serde_json::to_string_pretty(&report).map_err(|e| format!("json: {e}"))?;
    println!("{out}");
    Ok(())
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_size(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("--size wants WxH, got {s:?}"))?;
    let width: u32 = w.parse().map_err(|e| format!("--size width: {e}"))?;
    let height: u32 = h.parse().map_err(|e| format!("--size height: {e}"))?;
    Ok(Viewport::new(width, height))
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "vigil".to_string());
    format!(
        "Usage:\n  {exe} render <output.ppm> [--frames N] [--quality high|medium|low] [--seed S] [--size WxH]\n  {exe} manifest [output.json] [--name NAME]\n  {exe} click <x> <y> [--frames N] [--quality high|medium|low] [--seed S] [--size WxH]\n  {exe} inspect <manifest.json>\n\nNotes:\n- Runs are deterministic: the engine timeline doubles as the wall clock and particles seed from --seed.\n- `render` prints a JSON report (surface digest, counters, events) to stdout and status to stderr.\n- `click` drives the loop, injects one pointer click at view coordinates (x, y), and prints the payload.\n- `inspect` validates a scene manifest, including its content hash when present.\n"
    )
}
