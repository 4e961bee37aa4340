use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use kolamkit::{generate, generate_seeded, init_logging, GenerationRequest, Region, Style};
use tracing::info;

/// Minimal demo driver: `kolamkit <m> <n> [--seed N] [--region NAME]
/// [--style NAME] [--out DIR]`. Writes kolam.png and kolam.svg.
fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: kolamkit <m> <n> [--seed N] [--region NAME] [--style NAME] [--out DIR]");
    }

    let m: i32 = args[0].parse().context("m must be an integer")?;
    let n: i32 = args[1].parse().context("n must be an integer")?;

    let mut req = GenerationRequest::new(m, n);
    let mut seed: Option<u64> = None;
    let mut out_dir = PathBuf::from(".");

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = Some(
                    args.get(i)
                        .context("--seed requires a value")?
                        .parse()
                        .context("seed must be an integer")?,
                );
            }
            "--region" => {
                i += 1;
                req.region = Region::from_name(args.get(i).context("--region requires a value")?);
            }
            "--style" => {
                i += 1;
                req.style = Style::from_name(args.get(i).context("--style requires a value")?);
            }
            "--out" => {
                i += 1;
                out_dir = PathBuf::from(args.get(i).context("--out requires a value")?);
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }

    let result = match seed {
        Some(seed) => generate_seeded(&req, seed)?,
        None => generate(&req)?,
    };

    let png_path = out_dir.join("kolam.png");
    let svg_path = out_dir.join("kolam.svg");
    fs::write(&png_path, result.image_bytes()?).with_context(|| format!("writing {png_path:?}"))?;
    fs::write(&svg_path, &result.svg).with_context(|| format!("writing {svg_path:?}"))?;

    info!(png = %png_path.display(), svg = %svg_path.display(), "pattern written");
    info!("{}", result.insights.description);

    Ok(())
}
