use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use ecow::eco_format;
use ornament::diag::{bail, Hint, HintedStrResult, HintedString};
use ornament::Params;

use crate::args::{Command, SharedArgs};
use crate::print_error;

/// Execute a generation request.
///
/// An unknown shape or pattern kind is reported, but does not fail the run.
pub fn generate(command: &Command) -> HintedStrResult<()> {
    let (element, command) = command.element();
    let output = &command.output;
    check_extension(output)?;

    let params = params(&command.common)?;
    let canvas = match element.generate(&params) {
        Ok(canvas) => canvas,
        Err(err) if !err.is_fatal() => {
            tracing::info!(%element, "nothing was generated");
            let err: HintedString = err.into();
            print_error(&err).map_err(|err| eco_format!("failed to print error ({err})"))?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let png = ornament_render::render_png(&canvas)?;
    write(output, &png)?;

    tracing::info!(path = %output.display(), bytes = png.len(), "wrote image");
    println!("Generated: {}", output.display());

    Ok(())
}

/// Convert the command line arguments into validated parameters.
fn params(args: &SharedArgs) -> HintedStrResult<Params> {
    Params {
        color: args.color,
        color2: args.color2,
        size: args.size,
        width: args.width,
        height: args.height,
        stroke: args.stroke,
        gradient: args.gradient.map(Into::into),
        opacity: args.opacity,
        style: args.style.as_deref().map(Into::into),
        background: args.background,
        rings: args.rings,
        layers: args.layers,
        fill: args.fill,
        sides: args.sides,
    }
    .validate()
}

/// Only PNG output is supported.
fn check_extension(output: &Path) -> HintedStrResult<()> {
    let is_png = output
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if !is_png {
        bail!(
            "cannot write `{}`, only PNG output is supported", output.display();
            hint: "use an output path ending in `.png`"
        );
    }

    Ok(())
}

/// Write the encoded image, creating missing parent directories.
fn write(output: &Path, data: &[u8]) -> HintedStrResult<()> {
    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| eco_format!("failed to create directory {} ({err})", parent.display()))
            .hint("check that the output path is inside a writable directory")?;
    }

    fs::write(output, data)
        .map_err(|err| eco_format!("failed to write PNG file ({err})"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[track_caller]
    fn test_extension(path: &str, ok: bool) {
        assert_eq!(check_extension(&PathBuf::from(path)).is_ok(), ok, "{path}");
    }

    #[test]
    fn test_png_extension_is_required() {
        test_extension("output.png", true);
        test_extension("nested/dir/LOGO.PNG", true);
        test_extension("image.Png", true);
        test_extension("image.jpg", false);
        test_extension("image.png.bak", false);
        test_extension("png", false);
    }

    #[test]
    fn test_wrong_extension_has_a_hint() {
        let err = check_extension(Path::new("out.svg")).unwrap_err();
        assert_eq!(err.message(), "cannot write `out.svg`, only PNG output is supported");
        assert_eq!(err.hints(), ["use an output path ending in `.png`"]);
    }
}
