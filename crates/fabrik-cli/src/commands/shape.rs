//! Implementation of the `fabrik shape` command.

use tracing::instrument;

use fabrik_adapters::{JsonLinesCanvas, WriterCanvas};
use fabrik_core::application::{Measurement, ShapeService, ports::Canvas};

use crate::{
    cli::{OutputFormat, ShapeArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// More decimal places than an `f64` can meaningfully carry.
const MAX_PRECISION: u32 = 15;

/// Execute the `fabrik shape` command.
///
/// Measures the shape, then draws it when `--draw` is given. Drawing is
/// skipped in quiet mode. In JSON mode the measurement and the sketch are
/// one JSON object per line each.
#[instrument(skip_all, fields(shape = %args.kind))]
pub fn execute(args: ShapeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let precision = args.precision.unwrap_or(config.shapes.precision);
    if precision > MAX_PRECISION {
        return Err(CliError::InvalidInput {
            message: format!("precision {precision} exceeds the maximum of {MAX_PRECISION}"),
            source: None,
        });
    }

    let json = output.format() == OutputFormat::Json;
    let mut service = ShapeService::new();
    if args.draw && !output.is_quiet() {
        let canvas: Box<dyn Canvas> = if json {
            Box::new(JsonLinesCanvas::stdout())
        } else {
            Box::new(WriterCanvas::stdout().with_glyph(args.glyph.unwrap_or(config.shapes.draw_char)))
        };
        service = service.with_canvas(canvas);
    }

    let shape = service.build(&args.kind, &args.dims)?;
    let measurement = service.measure(shape.as_ref()).rounded(precision);

    if json {
        output.json_line(&measurement)?;
    } else {
        for line in report(&measurement, precision) {
            output.print(&line)?;
        }
    }

    if args.draw && !output.is_quiet() {
        service.draw(shape.as_ref())?;
    }

    Ok(())
}

fn report(m: &Measurement, precision: u32) -> Vec<String> {
    let p = precision as usize;
    vec![
        m.label.clone(),
        format!("  area:      {:.p$}", m.area),
        format!("  perimeter: {:.p$}", m.perimeter),
    ]
}
