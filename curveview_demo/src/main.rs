// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a curve backdrop without a window and writes it as a PNG.
//!
//! ```text
//! cargo run -p curveview_demo -- --width 1080 --height 600 --output curve.png
//! cargo run -p curveview_demo -- --attributes curve.json --elevation 4
//! ```
//!
//! The attribute file is a JSON object using layout-file attribute names,
//! for example `{ "startColor": "#ffa78b", "curveShadowRadius": 16 }`.
//! Set `RUST_LOG=debug` to see the computed geometry.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use curveview::CurveView;
use curveview::attributes::CurveAttributes;
use curveview_vello_cpu::render_to_rgba8;
use png::{BitDepth, ColorType, Encoder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Render a curved gradient backdrop to a PNG file")]
struct Args {
    /// JSON file with curve attributes; stock attributes are used when omitted.
    #[arg(long)]
    attributes: Option<PathBuf>,
    /// Output width in pixels.
    #[arg(long, default_value_t = 1080)]
    width: u16,
    /// Output height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u16,
    /// Host elevation; with a convex outline this replaces the custom shadow.
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,
    /// Where to write the PNG.
    #[arg(long, short, default_value = "curveview.png")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let attributes = match &args.attributes {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => CurveAttributes::default(),
    };
    let config = attributes.resolve()?;

    let mut view = CurveView::new(config);
    view.set_elevation(args.elevation);
    view.on_resize(f64::from(args.width), f64::from(args.height));
    let mode = view.shadow_mode();
    if mode.use_host_elevation {
        tracing::info!("outline is convex; elevation shadow is left to the host and not drawn");
    }

    let pixels = render_to_rgba8(&view, args.width, args.height);

    let file = BufWriter::new(File::create(&args.output)?);
    let mut encoder = Encoder::new(file, u32::from(args.width), u32::from(args.height));
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;

    tracing::info!(output = %args.output.display(), "wrote curve backdrop");
    Ok(())
}
