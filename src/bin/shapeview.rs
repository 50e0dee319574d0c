use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use shapeview::{
    Dimension, FileResources, FrameSurface, MeasureSpec, ResourceHandle, ShapeImageView,
    ShapeKind, View, ViewAttributes,
};

const SVG_HANDLE: ResourceHandle = ResourceHandle(1);

#[derive(Parser, Debug)]
#[command(name = "shapeview", version)]
struct Cli {
    /// Log cache and raster diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mask an image once and write the result as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Source image (PNG, JPEG, ...).
    #[arg(long)]
    image: PathBuf,

    /// View attributes JSON; flags below override its fields.
    #[arg(long)]
    attrs: Option<PathBuf>,

    /// Mask shape: circle, rounded_rect, vector_path (or 0, 1, 2).
    #[arg(long)]
    shape: Option<ShapeKind>,

    /// Corner radius in dp for rounded rectangles.
    #[arg(long)]
    radius: Option<f64>,

    /// SVG file used as the vector mask.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Requested width in pixels (defaults to the image width).
    #[arg(long)]
    width: Option<u32>,

    /// Requested height in pixels (defaults to the image height).
    #[arg(long)]
    height: Option<u32>,

    /// Display density used to resolve dp values.
    #[arg(long, default_value_t = 1.0)]
    density: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_attrs(path: &Path) -> anyhow::Result<ViewAttributes> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open attributes '{}'", path.display()))?;
    ViewAttributes::from_json(&s).context("parse attributes JSON")
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut attrs = match &args.attrs {
        Some(p) => read_attrs(p)?,
        None => ViewAttributes::default(),
    };
    if let Some(shape) = args.shape {
        attrs.shape = shape;
    }
    if let Some(r) = args.radius {
        attrs.border_radius = Dimension::Dp(r);
    }

    let resources = match &args.svg {
        Some(svg) => {
            let dir = svg.parent().unwrap_or_else(|| Path::new("."));
            let name = svg
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("invalid svg path '{}'", svg.display()))?;
            let mut files = FileResources::new(dir);
            files.register(SVG_HANDLE, name)?;
            attrs.svg_resource = SVG_HANDLE;
            files
        }
        None => FileResources::new("."),
    };

    let config = attrs.resolve(args.density)?;

    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("read image '{}'", args.image.display()))?;
    let source = shapeview::decode_image(&bytes)?;

    let mut view = ShapeImageView::with_resources(config, Arc::new(resources));
    view.set_source(Some(source));

    let constraint =
        |v: Option<u32>| v.map_or_else(MeasureSpec::unspecified, MeasureSpec::exactly);
    let size = view.measure(constraint(args.width), constraint(args.height));
    if size.is_empty() {
        anyhow::bail!("measured size is empty ({}x{})", size.width, size.height);
    }
    view.layout(size);

    let mut surface = FrameSurface::new(size)?;
    let outcome = view.draw(&mut surface);
    tracing::info!(?outcome, width = size.width, height = size.height, "rendered");

    let img = surface.into_raster().to_rgba_image()?;
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    Ok(())
}
