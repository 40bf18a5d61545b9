//! Headless skin driver.
//!
//! Loads an SVG, builds a vector skin on a headless GPU, requests a texture at
//! each `--scale`, and optionally writes each scale's pixel readback as PNG.
//!
//! ```text
//! marduk-skin cat.svg -s 0.5 -s 1 -s 1.5 -s 3 --out target/mips
//! ```

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use marduk_skin::asset::{SourceAsset, SvgAsset};
use marduk_skin::device::{Gpu, GpuInit, SkinTexture, TextureFilter};
use marduk_skin::logging::{init_logging, LoggingConfig};
use marduk_skin::raster::{mip_level_for_scale, RasterBuffer};
use marduk_skin::skin::{DrawHint, Skin, SkinConfig, VectorSkin};

#[derive(Debug, Parser)]
#[command(name = "marduk-skin", version, about = "Rasterize an SVG skin at a set of draw scales")]
struct Args {
    /// SVG file to load.
    svg: PathBuf,

    /// Draw scale to request. Repeat to request several.
    #[arg(short, long = "scale", default_values_t = vec![1.0f32])]
    scales: Vec<f32>,

    /// Directory to write `<name>_mip<level>.png` readbacks into.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Cap raster size below the device limit.
    #[arg(long)]
    max_texture: Option<u32>,

    /// Use nearest-neighbor sampling instead of linear.
    #[arg(long)]
    nearest: bool,

    /// Force a software adapter.
    #[arg(long)]
    fallback_adapter: bool,

    /// Log filter (env_logger syntax). Falls back to RUST_LOG, then "info".
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let data = std::fs::read(&args.svg)
        .with_context(|| format!("failed to read {}", args.svg.display()))?;
    let asset = Rc::new(
        SvgAsset::from_data(&data)
            .with_context(|| format!("failed to load {}", args.svg.display()))?,
    );
    let (width, height) = asset.natural_size();
    log::info!("loaded {} ({width}x{height})", args.svg.display());

    let gpu = pollster::block_on(Gpu::new(GpuInit {
        force_fallback_adapter: args.fallback_adapter,
        ..GpuInit::default()
    }))
    .context("GPU initialization failed")?;

    let config = SkinConfig {
        filter: if args.nearest {
            TextureFilter::Nearest
        } else {
            TextureFilter::Linear
        },
        max_texture_dimension: args.max_texture,
    };
    let mut skin = VectorSkin::with_config(Rc::new(gpu), asset, config)
        .context("failed to create vector skin")?;
    log::info!("raster ceiling {}px", skin.max_texture_dimension());

    if let Some(dir) = &args.out {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let name = args
        .svg
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("skin")
        .to_string();
    let hint = DrawHint::labeled(&name);

    for &scale in &args.scales {
        let level = mip_level_for_scale(scale);
        let draws_before = skin.draw_count();
        let size = skin.texture(scale, Some(&hint)).map(SkinTexture::size);
        let status = if skin.draw_count() > draws_before { "new" } else { "cached" };

        match size {
            Some((w, h)) => println!(
                "  scale {scale:>8.3}  mip {:>2}  texture {w}x{h}  ({status})",
                level.get()
            ),
            None => println!("  scale {scale:>8.3}  mip {:>2}  nothing to draw", level.get()),
        }

        if let Some(dir) = &args.out {
            if let Some(buffer) = skin.image_data(scale) {
                let path = dir.join(format!("{name}_mip{}.png", level.get()));
                write_png(&path, buffer)?;
            }
        }
    }

    let levels: Vec<u32> = skin.cached_levels().iter().map(|l| l.get()).collect();
    println!("  cached mip levels: {levels:?}");

    skin.destroy();
    Ok(())
}

fn write_png(path: &Path, buffer: &RasterBuffer) -> Result<()> {
    let image = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_straight_alpha())
        .context("readback size does not match its pixel data")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_default_to_natural_size() {
        let args = Args::try_parse_from(["marduk-skin", "cat.svg"]).unwrap();
        assert_eq!(args.scales, vec![1.0]);
        assert!(args.out.is_none());
        assert!(!args.nearest);
    }

    #[test]
    fn scale_flag_repeats() {
        let args =
            Args::try_parse_from(["marduk-skin", "cat.svg", "-s", "0.5", "--scale", "3", "--nearest"])
                .unwrap();
        assert_eq!(args.scales, vec![0.5, 3.0]);
        assert!(args.nearest);
    }

    #[test]
    fn png_round_trips_straight_alpha() {
        let dir = std::env::temp_dir().join(format!("marduk-skin-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("px.png");

        let buffer = RasterBuffer::from_rgba(1, 1, vec![64, 0, 0, 128]).unwrap();
        write_png(&path, &buffer).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [128, 0, 0, 128]);
        std::fs::remove_dir_all(&dir).ok();
    }
}
