//! CLI logic for the Abacus picture tool.
//!
//! Each command turns its arguments into one or more figure requests, draws
//! them with [`DiagramBuilder`] and writes one file per figure.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{fs, path::PathBuf};

use log::{info, warn};

use abacus::{
    AbacusError, DiagramBuilder,
    diagram::Diagram,
    lesson::{self, Lesson},
    request::{ArrayRequest, CombineRequest, DotsMode, GroupingRequest, NumberLineRequest},
};

/// Run the Abacus CLI application
///
/// Draws the figures selected by `args.command` and writes them as PNG (or
/// SVG with `--svg`) files.
///
/// # Errors
///
/// Returns `AbacusError` for:
/// - Configuration loading or validation errors
/// - Jump lists or prompts that do not parse
/// - Rasterization errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), AbacusError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config)?;

    let figures = draw(&builder, &args.command)?;
    let extension = if args.svg { "svg" } else { "png" };

    let single_output = match (&args.output, figures.len()) {
        (Some(output), 1) => Some(PathBuf::from(output)),
        (Some(output), count) => {
            warn!(output, count; "--output names a single file, writing to --out-dir instead");
            None
        }
        (None, _) => None,
    };
    if single_output.is_none() {
        fs::create_dir_all(&args.out_dir)?;
    }

    for (name, diagram) in &figures {
        let path = single_output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&args.out_dir).join(format!("{name}.{extension}")));

        let bytes = if args.svg {
            builder.render_svg(diagram).into_bytes()
        } else {
            builder.render_png(diagram)?
        };
        fs::write(&path, bytes)?;

        info!(path = path.display().to_string(), kind:% = diagram.kind(); "Figure written");
    }

    Ok(())
}

/// Draws the figures for a command, each with the file stem it is saved as.
fn draw(builder: &DiagramBuilder, command: &Command) -> Result<Vec<(String, Diagram)>, AbacusError> {
    let single = |diagram: Diagram| vec![(diagram.kind().to_string(), diagram)];

    let figures = match command {
        Command::NumberLine {
            origin,
            jumps,
            min,
            max,
            title,
        } => {
            let jumps = abacus_parser::parse_jumps(jumps)
                .map_err(|err| AbacusError::new_parse_error(err, jumps.as_str()))?;
            let mut request = NumberLineRequest::new(*origin, jumps);
            if let Some(min) = min {
                request = request.with_tick_min(*min);
            }
            if let Some(max) = max {
                request = request.with_tick_max(*max);
            }
            if let Some(title) = title {
                request = request.with_title(title);
            }
            single(builder.number_line(&request))
        }
        Command::Array {
            rows,
            cols,
            fill,
            title,
        } => {
            let mut request = ArrayRequest::new(*rows, *cols);
            if let Some(fill) = fill {
                request = request.with_fill_until(*fill);
            }
            if let Some(title) = title {
                request = request.with_title(title);
            }
            single(builder.array(&request))
        }
        Command::Grouping {
            total,
            group_size,
            show,
            per_row,
            title,
        } => {
            let mut request = GroupingRequest::new(*total, *group_size);
            if let Some(show) = show {
                request = request.with_step_groups(*show);
            }
            if let Some(per_row) = per_row {
                request = request.with_items_per_row(*per_row);
            }
            if let Some(title) = title {
                request = request.with_title(title);
            }
            single(builder.grouping(&request))
        }
        Command::Combine {
            a,
            b,
            mode,
            per_row,
            title,
        } => {
            let mut request = CombineRequest::new(*a, *b, DotsMode::parse_lenient(mode));
            if let Some(per_row) = per_row {
                request = request.with_items_per_row(*per_row);
            }
            if let Some(title) = title {
                request = request.with_title(title);
            }
            single(builder.combine(&request))
        }
        Command::Lesson { prompt, step } => {
            let lesson = builder.lesson_for_prompt(prompt, *step)?;
            lesson_figures(builder, &lesson)
        }
        Command::Demo { origin, hops } => lesson_figures(builder, &lesson::demo(*origin, *hops)),
    };

    Ok(figures)
}

/// Names lesson figures `<lesson>-1`, `<lesson>-2`, and so on.
fn lesson_figures(builder: &DiagramBuilder, lesson: &Lesson) -> Vec<(String, Diagram)> {
    let diagrams = builder.lesson(lesson);
    if diagrams.len() == 1 {
        return diagrams
            .into_iter()
            .map(|diagram| (lesson.kind().name().to_string(), diagram))
            .collect();
    }

    diagrams
        .into_iter()
        .enumerate()
        .map(|(idx, diagram)| (format!("{}-{}", lesson.kind().name(), idx + 1), diagram))
        .collect()
}
