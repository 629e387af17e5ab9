//! hull CLI - lofting and curve tools for hullcad documents
//!
//! Creates documents from principal dimensions, lofts them to wireframes,
//! samples reconstructed curves and applies single point edits.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull_editor::{apply_event, EditorConfig};
use hull_ir::{
    CurveFamily, Hull2DLineData, Hull3DWireframeData, HullBasicParams, HullDocument, InteractionEvent,
    InteractionKind, Point2D,
};
use hull_kernel::{generate_initial_lines, reconstruct_detailed, HullModel};
use hull_kernel_loft::LoftSource;
use hull_kernel_math::Point2;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "hull")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ship hull lofting and curve reconstruction", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// TOML file with [editor] and [grid] settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a document with lines generated from principal dimensions
    Init {
        /// Length between perpendiculars (m)
        #[arg(long)]
        lpp: f64,
        /// Moulded breadth (m)
        #[arg(long)]
        breadth: f64,
        /// Moulded depth (m)
        #[arg(long)]
        depth: f64,
        /// Design draft (m)
        #[arg(long)]
        draft: f64,
        /// Displacement (t)
        #[arg(long)]
        displacement: f64,
        /// Length overall (m)
        #[arg(long)]
        loa: Option<f64>,
        /// Output document
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Loft a document's side profile and half-breadth into a wireframe
    Loft {
        /// Input document
        file: PathBuf,
        /// Output wireframe (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Loft a document's offset table into a wireframe grid
    Grid {
        /// Input document
        file: PathBuf,
        /// Output stations (overrides the config)
        #[arg(long)]
        stations: Option<usize>,
        /// Output waterlines (overrides the config)
        #[arg(long)]
        waterlines: Option<usize>,
        /// Output wireframe (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the dense reconstruction of one curve family as JSON
    Curve {
        /// Input document
        file: PathBuf,
        /// Curve family
        #[arg(long, value_enum)]
        family: FamilyArg,
        /// Station of the cross-section
        #[arg(long, allow_hyphen_values = true, required_if_eq("family", "cross-section"))]
        station: Option<f64>,
    },
    /// Move one control point and bump the line version
    Edit {
        /// Document to edit in place
        file: PathBuf,
        /// Curve family
        #[arg(long, value_enum)]
        family: FamilyArg,
        /// Station of the cross-section
        #[arg(long, allow_hyphen_values = true, required_if_eq("family", "cross-section"))]
        station: Option<f64>,
        /// Control point index
        #[arg(long)]
        index: usize,
        /// New horizontal coordinate
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        /// New vertical coordinate
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Display information about a document or wireframe
    Info {
        /// Path to a document or wireframe JSON file
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FamilyArg {
    SideProfile,
    HalfBreadth,
    CrossSection,
}

impl FamilyArg {
    fn family(self, station: Option<f64>) -> Result<CurveFamily> {
        Ok(match self {
            Self::SideProfile => CurveFamily::SideProfile,
            Self::HalfBreadth => CurveFamily::HalfBreadth,
            Self::CrossSection => CurveFamily::CrossSection {
                station: station.context("--station is required for cross-section")?,
            },
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Init {
            lpp,
            breadth,
            depth,
            draft,
            displacement,
            loa,
            output,
        } => {
            let mut params = HullBasicParams::new(lpp, breadth, depth, draft, displacement);
            if let Some(loa) = loa {
                params = params.with_loa(loa);
            }
            init_document(params, &output)?;
        }
        Commands::Loft { file, output } => {
            loft_document(&file, output.as_deref())?;
        }
        Commands::Grid {
            file,
            stations,
            waterlines,
            output,
        } => {
            let mut options = config.grid;
            options.stations = stations.unwrap_or(options.stations);
            options.waterlines = waterlines.unwrap_or(options.waterlines);
            let doc = read_document(&file)?;
            let table = doc
                .offsets
                .as_ref()
                .context("document has no offset table")?;
            doc.params.validate()?;
            let report = LoftSource::Offsets(table, options).loft(&doc.params)?;
            log_warnings(&report.warnings);
            write_json(&report.wireframe, output.as_deref())?;
        }
        Commands::Curve {
            file,
            family,
            station,
        } => {
            let doc = read_document(&file)?;
            let family = family.family(station)?;
            print_curve(&doc, &family)?;
        }
        Commands::Edit {
            file,
            family,
            station,
            index,
            x,
            y,
        } => {
            let family = family.family(station)?;
            edit_point(&file, &config, family, index, Point2D::new(x, y))?;
        }
        Commands::Info { file } => {
            show_info(&file)?;
        }
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<HullDocument> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    HullDocument::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn log_warnings(warnings: &[hull_kernel::LoftWarning]) {
    for w in warnings {
        warn!("{w}");
    }
}

fn init_document(params: HullBasicParams, output: &Path) -> Result<()> {
    params.validate()?;
    let lines = generate_initial_lines(&params);
    let doc = HullDocument::new(params, lines);
    fs::write(output, doc.to_json()?)?;
    println!("Created {}", output.display());
    Ok(())
}

fn loft_document(file: &Path, output: Option<&Path>) -> Result<()> {
    let doc = read_document(file)?;
    let mut model = HullModel::new(doc.params, doc.lines)?;
    let wireframe = model.wireframe()?;
    log_warnings(model.warnings());
    write_json(wireframe.as_ref(), output)
}

fn print_curve(doc: &HullDocument, family: &CurveFamily) -> Result<()> {
    let Some(control) = family.points(&doc.lines) else {
        bail!("no {} in document", describe(family));
    };
    let control: Vec<Point2> = control.iter().map(|&p| p.into()).collect();
    let dense = reconstruct_detailed(&control, family.is_closed());
    info!(strategy = ?dense.strategy, points = dense.points.len(), "reconstructed {}", describe(family));
    let points: Vec<Point2D> = dense.points.into_iter().map(Point2D::from).collect();
    write_json(&points, None)
}

fn edit_point(
    file: &Path,
    config: &CliConfig,
    family: CurveFamily,
    index: usize,
    target: Point2D,
) -> Result<()> {
    let mut doc = read_document(file)?;
    let (lines, point) = edit_lines(&doc.lines, &config.editor, family, index, target)?;
    let version = lines.line_version;
    doc.lines = lines;
    fs::write(file, doc.to_json()?)?;
    println!("{}[{index}] -> ({:.3}, {:.3}), version {version}", describe(&family), point.x, point.y);
    Ok(())
}

/// Clamp `target` into the family's plot bounds and apply it as one
/// `drag_end` edit. Families absent from `lines` stay absent.
fn edit_lines(
    lines: &Hull2DLineData,
    editor: &EditorConfig,
    family: CurveFamily,
    index: usize,
    target: Point2D,
) -> Result<(Hull2DLineData, Point2D)> {
    let point = editor.bounds(&family).clamp(target);
    if point != target {
        warn!(x = point.x, y = point.y, "target clamped to plot bounds");
    }
    let event = InteractionEvent::new(InteractionKind::DragEnd, family, index, point);
    Ok((apply_event(lines, &event)?, point))
}

fn show_info(file: &Path) -> Result<()> {
    let json = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

    if let Ok(doc) = HullDocument::from_json(&json) {
        let p = &doc.params;
        println!("Document: {}", file.display());
        println!("Format version: {}", doc.version);
        println!(
            "Principal dimensions: Lpp {:.2} m, B {:.2} m, D {:.2} m, T {:.2} m, {:.1} t",
            p.lpp, p.breadth, p.depth, p.draft, p.displacement
        );
        if let Some(loa) = p.loa {
            println!("Loa: {loa:.2} m");
        }
        if let Err(e) = p.validate() {
            println!("Validation: {e}");
        }
        let lines = &doc.lines;
        println!("Line version: {}", lines.line_version);
        println!("Side profile points: {}", lines.side_profile.len());
        println!("Half-breadth points: {}", lines.half_breadth.len());
        println!("Cross-sections: {:?}", lines.section_stations());
        if let Some(table) = &doc.offsets {
            let (s, w) = table.dims();
            println!("Offset table: {s} stations x {w} waterlines");
        }
        return Ok(());
    }

    let wire: Hull3DWireframeData = serde_json::from_str(&json)
        .with_context(|| format!("{} is neither a document nor a wireframe", file.display()))?;
    println!("Wireframe: {}", file.display());
    println!("Model version: {}", wire.model_version);
    println!("Vertices: {}", wire.vertices.len());
    println!("Edges: {}", wire.edges.len());
    if let Err(i) = wire.validate_indices() {
        println!("Edge {i} references a missing vertex");
    }
    if let Some((dx, dy, dz)) = wire.size() {
        println!("Model size: {dx:.2} × {dy:.2} × {dz:.2} m");
    }
    println!("Mirror symmetric: {}", wire.is_mirror_symmetric());
    Ok(())
}

fn describe(family: &CurveFamily) -> String {
    match family.station() {
        Some(x) => format!("{} at x={x}", family.name()),
        None => family.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "hull", "curve", "doc.json", "--family", "cross-section", "--station", "-3.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Curve { family, station, .. } => {
                assert_eq!(family, FamilyArg::CrossSection);
                assert_eq!(station, Some(-3.5));
            }
            _ => panic!("expected curve"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cross_section_needs_station() {
        assert!(Cli::try_parse_from(["hull", "curve", "doc.json", "--family", "cross-section"]).is_err());
        assert!(FamilyArg::CrossSection.family(None).is_err());
        assert_eq!(
            FamilyArg::HalfBreadth.family(None).unwrap(),
            CurveFamily::HalfBreadth
        );
    }

    #[test]
    fn test_edit_keeps_missing_families_missing() {
        let lines = Hull2DLineData::new(
            hull_ir::points(&[(0.0, 0.0), (12.0, 0.0)]),
            vec![],
            vec![],
        );
        let (edited, point) = edit_lines(
            &lines,
            &EditorConfig::default(),
            CurveFamily::SideProfile,
            1,
            Point2D::new(12.0, 0.5),
        )
        .unwrap();
        assert_eq!(point, Point2D::new(12.0, 0.5));
        assert_eq!(edited.side_profile[1], point);
        assert_eq!(edited.line_version, lines.line_version + 1);
        assert!(edited.half_breadth.is_empty());
        assert!(edited.cross_sections.is_empty());
    }

    #[test]
    fn test_edit_clamps_and_rejects_unknown_section() {
        let lines = Hull2DLineData::new(
            hull_ir::points(&[(0.0, 0.0), (12.0, 0.0)]),
            hull_ir::points(&[(0.0, 1.0)]),
            vec![],
        );
        let cfg = EditorConfig::default();
        let (edited, point) =
            edit_lines(&lines, &cfg, CurveFamily::SideProfile, 0, Point2D::new(-40.0, 9.0)).unwrap();
        assert_eq!(point, Point2D::new(-1.0, 4.0));
        assert_eq!(edited.side_profile[0], point);
        let family = CurveFamily::CrossSection { station: 6.0 };
        assert!(edit_lines(&lines, &cfg, family, 0, Point2D::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_init_rejects_invalid_params() {
        let out = std::env::temp_dir().join("hull-cli-invalid.json");
        let params = HullBasicParams::new(10.0, 12.0, 6.0, 4.0, 100.0);
        assert!(init_document(params, &out).is_err());
        assert!(!out.exists());
    }
}
