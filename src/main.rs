//! course-map CLI entry point.
//!
//! Loads a catalog, builds the requirement graph for one course (or one map
//! page), and prints the graph state and render model as JSON.

use std::fs;
use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use course_map::{
    Catalog, EdgeDirection, GraphPage, LayoutOptions, course_page, full_course_page, map_page,
};

/// Course prerequisite graphs as JSON render models.
#[derive(Parser, Debug)]
#[command(
    name = "course-map",
    version = env!("COURSE_MAP_VERSION"),
    about = "Course prerequisite/corequisite graph layout and render models"
)]
struct Cli {
    /// Catalog file (JSON array of course records)
    catalog: String,

    /// Course code for a course page, e.g. PHY530
    #[arg(required_unless_present = "map", conflicts_with = "map")]
    course: Option<String>,

    /// Build a subject map page instead (e.g. "stemwithoutcs", "all")
    #[arg(short = 'm', long = "map")]
    map: Option<String>,

    /// Edge direction: required-to-dependent (up) or dependent-to-required (down)
    #[arg(short = 'd', long = "direction")]
    direction: Option<EdgeDirection>,

    /// Leave the admission course out of the layout
    #[arg(long = "hide-admission", conflicts_with = "show_admission")]
    hide_admission: bool,

    /// Keep the admission course in the layout
    #[arg(long = "show-admission")]
    show_admission: bool,

    /// Course to highlight
    #[arg(long = "highlight")]
    highlight: Option<String>,

    /// Number of "More Requirements" expansions on a course page
    #[arg(long = "depth", default_value = "0")]
    depth: usize,

    /// Load the whole requirement tree up front
    #[arg(long = "full", conflicts_with = "depth")]
    full: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Cli {
    fn layout_options(&self) -> LayoutOptions {
        let mut options = LayoutOptions::for_page(self.map.is_none());
        if let Some(direction) = self.direction {
            options.direction = direction;
        }
        if self.hide_admission {
            options.hide_admission = true;
        }
        if self.show_admission {
            options.hide_admission = false;
        }
        options
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn build_page(cli: &Cli, catalog: &Catalog) -> Result<GraphPage, String> {
    let options = cli.layout_options();
    let highlight = cli.highlight.as_deref();
    if let Some(group) = &cli.map {
        return map_page(catalog, group, &options, highlight).map_err(|e| e.to_string());
    }
    let Some(course) = cli.course.as_deref() else {
        return Err("a course code or --map is required".to_string());
    };
    let page = if cli.full {
        full_course_page(course, catalog, &options, highlight)
    } else {
        course_page(course, catalog, cli.depth, &options, highlight)
    };
    if page.state.graph.is_empty() {
        return Err(format!("course '{course}' not found in catalog"));
    }
    Ok(page)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = match Catalog::from_path(&cli.catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let page = match build_page(&cli, &catalog) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let rendered = match serde_json::to_string_pretty(&page) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot serialize output: {e}");
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{path}': {e}");
            process::exit(1);
        }
    } else {
        println!("{rendered}");
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {e}");
            process::exit(1);
        }
    }
}
