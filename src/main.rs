use clap::Parser;
use rusqlite::Connection;
use shp2box::io::{db, shp};
use shp2box::AnalysisConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shp2box", about = "Parcel outline shape analysis: rectangles, boxes, neighbors")]
struct Cli {
    /// Input shapefile (.shp, with .dbf alongside)
    #[arg(short, long)]
    input: PathBuf,

    /// Output SQLite database (tables are dropped and recreated)
    #[arg(short, long)]
    output: PathBuf,

    /// Attribute field holding the parcel id (record index when absent)
    #[arg(long, default_value = "PID")]
    id_field: String,

    /// Collinearity tolerance for significant-point reduction
    #[arg(long, default_value = "0.5")]
    line_tolerance: f64,

    /// Right-angle tolerance in radians
    #[arg(long, default_value = "0.03")]
    angle_tolerance: f64,

    /// Minimum boxlike mid-segment length
    #[arg(long, default_value = "10")]
    box_min: f64,

    /// Maximum boxlike mid-segment length
    #[arg(long, default_value = "80")]
    box_max: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AnalysisConfig {
        line_tolerance: cli.line_tolerance,
        angle_tolerance: cli.angle_tolerance,
        box_min_len: cli.box_min,
        box_max_len: cli.box_max,
    };

    // Header
    eprintln!();
    eprintln!("  shp2box \u{00b7} {}", cli.input.display());
    eprintln!();

    let parcels = shp::read_parcels(&cli.input, &cli.id_field)?;
    eprintln!("  Read        {} parcels", parcels.len());

    let result = shp2box::analyze(&parcels, &config)?;
    eprintln!(
        "  Analyze     {} rectangles \u{00b7} {} boxlike \u{00b7} {} skipped  (line tol {}, angle tol {})",
        result.rectangles.len(),
        result.boxes.len(),
        result.skipped,
        cli.line_tolerance,
        cli.angle_tolerance,
    );

    let mut conn = Connection::open(&cli.output)?;
    db::create_tables(&conn)?;
    db::insert_summaries(&mut conn, &result.summaries)?;
    db::insert_rectangles(&mut conn, &result.rectangles)?;
    db::insert_boxes(&mut conn, &result.boxes)?;
    eprintln!(
        "  Write       {} summary + {} rectangle + {} boxlike rows",
        result.summaries.len(),
        result.rectangles.len(),
        result.boxes.len(),
    );

    // Footer
    eprintln!();
    eprintln!("  \u{2713} {}", cli.output.display());
    eprintln!();

    Ok(())
}
