use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Bold faces tried, in order, when `--font` does not load.
const FALLBACK_FONTS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];

#[derive(Parser, Debug)]
#[command(name = "sealstamp", version, about = "Stamp dynamic text onto a seal template.")]
struct Cli {
    /// Date along the top rim (default: now, UTC).
    #[arg(long)]
    date: Option<String>,

    /// Certificate id.
    #[arg(long)]
    cert_id: Option<String>,

    /// Registry number.
    #[arg(long)]
    registry_no: Option<String>,

    /// Document hash.
    #[arg(long)]
    hash: Option<String>,

    /// Verification URL.
    #[arg(long)]
    verify: Option<String>,

    /// Holder name.
    #[arg(long)]
    holder: Option<String>,

    /// Input template image.
    #[arg(long, default_value = "templates/proof_of_thought_timestamp_seal_template-2x.png")]
    input: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = "stamped_seal_final_HR.png")]
    output: PathBuf,

    /// Font file.
    #[arg(long, default_value = FALLBACK_FONTS[0])]
    font: PathBuf,

    #[arg(long, value_enum, default_value_t = VariantChoice::Minted)]
    variant: VariantChoice,

    /// Background mode for the output PNG.
    #[arg(long = "bg", value_enum, default_value_t = BackgroundChoice::Transparent)]
    background: BackgroundChoice,

    /// JSON file overriding the built-in seal design.
    #[arg(long)]
    design: Option<PathBuf>,

    /// Log per-glyph diagnostics.
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    #[value(alias = "MINTED")]
    Minted,
    #[value(alias = "ENGRAVED")]
    Engraved,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackgroundChoice {
    Transparent,
    White,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let design = match &cli.design {
        Some(path) => sealstamp::SealDesign::load(path)?,
        None => sealstamp::SealDesign::default(),
    };
    let text = sealstamp::SealText {
        date: cli.date,
        cert_id: cli.cert_id,
        registry_no: cli.registry_no,
        hash: cli.hash,
        verify_url: cli.verify,
        holder: cli.holder,
    }
    .with_defaults(chrono::Utc::now());

    let base = sealstamp::load_template(&cli.input)
        .with_context(|| format!("could not load input image '{}'", cli.input.display()))?;
    let face = load_font(&cli.font, design.font_sizes.rim)?;
    let fonts = sealstamp::SealFonts::build(&design.font_sizes, |size| face.with_size(size))?;

    let stamped = sealstamp::stamp_seal(base, &text, &design, &fonts)?;
    let opts = sealstamp::OutputOpts {
        variant: match cli.variant {
            VariantChoice::Minted => sealstamp::Variant::Minted,
            VariantChoice::Engraved => sealstamp::Variant::Engraved,
        },
        background: match cli.background {
            BackgroundChoice::Transparent => sealstamp::Background::Transparent,
            BackgroundChoice::White => sealstamp::Background::White,
        },
        minted_size: design.minted_size,
    };
    let out = sealstamp::finalize(stamped, &opts)?;
    sealstamp::save_png(&out, &cli.output)?;

    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info,sealstamp=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_font(requested: &Path, size_px: f32) -> anyhow::Result<sealstamp::OutlineFont> {
    let mut tried = Vec::new();
    let candidates = std::iter::once(requested).chain(FALLBACK_FONTS.iter().map(|p| Path::new(*p)));
    for path in candidates {
        match sealstamp::OutlineFont::load(path, size_px) {
            Ok(font) => {
                tracing::debug!(path = %path.display(), "font loaded");
                return Ok(font);
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "font unavailable");
                tried.push(path.display().to_string());
            }
        }
    }
    anyhow::bail!("no usable font found (tried: {})", tried.join(", "))
}
