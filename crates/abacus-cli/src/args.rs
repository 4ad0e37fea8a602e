//! Command-line argument definitions for the Abacus CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global flags select the configuration file, logging
//! verbosity and where figures are written; the [`Command`] picks the figure.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Abacus picture tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Directory that receives the generated figures
    #[arg(long, default_value = ".", global = true)]
    pub out_dir: String,

    /// Output file for commands that draw a single figure
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Write SVG instead of PNG
    #[arg(long, global = true)]
    pub svg: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The figure or lesson to draw.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hops along a number line
    NumberLine {
        /// Start value
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        origin: i64,

        /// Signed jumps, e.g. "+3 -2 +5" or "3,-2,5"
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        jumps: String,

        /// Lowest labeled tick
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Highest labeled tick
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        #[arg(long)]
        title: Option<String>,
    },

    /// A rows by columns array of cells
    Array {
        #[arg(long)]
        rows: i64,

        #[arg(long)]
        cols: i64,

        /// Number of cells to color, row by row
        #[arg(long)]
        fill: Option<i64>,

        #[arg(long)]
        title: Option<String>,
    },

    /// Items sorted into equal groups
    Grouping {
        #[arg(long)]
        total: i64,

        #[arg(long)]
        group_size: i64,

        /// Number of complete groups to color
        #[arg(long)]
        show: Option<i64>,

        /// Items per row of the grid
        #[arg(long)]
        per_row: Option<i64>,

        #[arg(long)]
        title: Option<String>,
    },

    /// Two sets of dots, joined or taken away
    Combine {
        #[arg(long)]
        a: i64,

        #[arg(long)]
        b: i64,

        /// add or subtract
        #[arg(long, default_value = "add")]
        mode: String,

        /// Items per row of the grid
        #[arg(long)]
        per_row: Option<i64>,

        #[arg(long)]
        title: Option<String>,
    },

    /// Both figures of a lesson for a prompt such as "7 + 5" or "63 ÷ 9"
    Lesson {
        prompt: String,

        /// Cells to fill (multiplication) or groups to show (division)
        #[arg(long)]
        step: Option<i64>,
    },

    /// A quick number line: HOPS hops of +1 from ORIGIN
    Demo {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        origin: i64,

        #[arg(long, default_value_t = 5)]
        hops: i64,
    },
}
