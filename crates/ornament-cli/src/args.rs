use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand, ValueEnum};
use ornament::{Color, Element, GradientKind};

/// Shown below the top-level help.
const AFTER_HELP: &str = color_print::cstr!("\
<s><u>Examples:</></>
  <c!>ornament shape --style star --sides 6 --fill -o star.png</>
  <c!>ornament mandala --rings 12 --layers 4 --bg 101010</>
  <c!>ornament line-divider --color2 ffffff --gradient linear --style dotted</>
");

/// Generates decorative geometric elements as PNG images.
#[derive(Debug, Clone, Parser)]
#[clap(name = "ornament", version, author, after_help = AFTER_HELP)]
pub struct CliArguments {
    /// The element to generate
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Sets the level of logging verbosity:
    /// -v = warning & error, -vv = info, -vvv = debug, -vvvv = trace
    #[clap(short, long, action = ArgAction::Count)]
    pub verbosity: u8,

    /// Whether to use color in error messages
    #[clap(
        long = "diagnostic-color",
        value_name = "WHEN",
        default_value_t = ColorChoice::Auto,
    )]
    pub diagnostic_color: ColorChoice,
}

/// What to generate.
#[derive(Debug, Clone, Subcommand)]
#[command()]
pub enum Command {
    /// Draws an L-shaped corner accent
    CornerAccent(ElementCommand),

    /// Draws a horizontal line, optionally with dotted ends
    LineDivider(ElementCommand),

    /// Draws a quarter circle arc, optionally doubled
    ArcAccent(ElementCommand),

    /// Draws four corner brackets framing the image
    FrameBorder(ElementCommand),

    /// Tiles the image with dots, crosses or diamonds
    Pattern(ElementCommand),

    /// Draws layered polygons and a ring of connected circles
    Mandala(ElementCommand),

    /// Draws a single basic shape selected with --style
    Shape(ElementCommand),
}

impl Command {
    /// The element to generate and its arguments.
    pub fn element(&self) -> (Element, &ElementCommand) {
        match self {
            Self::CornerAccent(command) => (Element::CornerAccent, command),
            Self::LineDivider(command) => (Element::LineDivider, command),
            Self::ArcAccent(command) => (Element::ArcAccent, command),
            Self::FrameBorder(command) => (Element::FrameBorder, command),
            Self::Pattern(command) => (Element::Pattern, command),
            Self::Mandala(command) => (Element::Mandala, command),
            Self::Shape(command) => (Element::Shape, command),
        }
    }
}

/// Generates one element into a PNG file.
#[derive(Debug, Clone, Parser)]
pub struct ElementCommand {
    /// Shared arguments.
    #[clap(flatten)]
    pub common: SharedArgs,

    /// Path to the output PNG file
    #[clap(short, long, value_name = "PATH", default_value = "output.png")]
    pub output: PathBuf,
}

/// Arguments understood by every element.
#[derive(Debug, Clone, Args)]
pub struct SharedArgs {
    /// The primary color as a hex code
    #[clap(long, value_name = "HEX", default_value = "#D4A84B")]
    pub color: Color,

    /// The secondary color that gradients fade into
    #[clap(long, value_name = "HEX")]
    pub color2: Option<Color>,

    /// The element size in pixels
    #[clap(long, default_value_t = 200)]
    pub size: u32,

    /// Overrides the image width in pixels
    #[clap(long)]
    pub width: Option<u32>,

    /// Overrides the image height in pixels
    #[clap(long)]
    pub height: Option<u32>,

    /// The stroke width in pixels
    #[clap(long, default_value_t = 4.0)]
    pub stroke: f64,

    /// Paints with a gradient towards --color2
    #[clap(long, value_enum)]
    pub gradient: Option<GradientArg>,

    /// The opacity of the primary color, between 0 and 1
    #[clap(long, default_value_t = 1.0)]
    pub opacity: f64,

    /// The style variant, e.g. the shape kind or pattern mark
    #[clap(long)]
    pub style: Option<String>,

    /// The background color as a hex code
    #[clap(long = "bg", value_name = "HEX")]
    pub background: Option<Color>,

    /// The number of circles in a mandala's ring
    #[clap(long, default_value_t = 8)]
    pub rings: u32,

    /// The number of polygon layers in a mandala
    #[clap(long, default_value_t = 3)]
    pub layers: u32,

    /// Fills shapes instead of stroking them
    #[clap(long)]
    pub fill: bool,

    /// The number of sides of a polygon or points of a star
    #[clap(long, default_value_t = 5)]
    pub sides: u32,
}

/// Which kind of gradient to paint with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum GradientArg {
    /// Fades along the element's main axis.
    Linear,
    /// Fades outwards from the element's center.
    Radial,
}

impl From<GradientArg> for GradientKind {
    fn from(arg: GradientArg) -> Self {
        match arg {
            GradientArg::Linear => Self::Linear,
            GradientArg::Radial => Self::Radial,
        }
    }
}
