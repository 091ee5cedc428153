use clap::Parser;
use log::{debug, info};
use std::{fs::File, io, io::Write, path::PathBuf, time::Instant};
use xtree::{
    printer::{base_label, TreePrinter},
    samples::Sample,
    visitor::NodeCounter,
    XTreeError, XTreeResult,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print a decorated abstract syntax tree as indented text",
    long_about = "Print a decorated abstract syntax tree as indented text.\n\
                 Each line shows the node number, the node kind indented by depth,\n\
                 and any decoration, label or frame address attached to the node.\n\
                 \n\
                 Example usage:\n\
                 xtree                              # Print the factorial sample\n\
                 xtree --sample outline             # Print another sample tree\n\
                 xtree --root-label root            # Override the root line's label\n\
                 xtree -o tree.txt                  # Write to a file\n\
                 xtree --timing                     # Show tree statistics"
)]
struct Cli {
    // Which prebuilt tree to print
    #[arg(short, long, value_enum, default_value_t = Sample::Factorial)]
    sample: Sample,

    // Label for the root line (defaults to the root's kind)
    #[arg(long)]
    root_label: Option<String>,

    // Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show node statistics and print timing
    #[arg(short, long)]
    timing: bool,
}

#[derive(Debug, Default)]
struct PrintStats {
    build_time: f64,
    print_time: f64,
    lines: usize,
    counter: NodeCounter,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}

fn open_output(output: &Option<PathBuf>) -> XTreeResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                XTreeError::output_error(format!("cannot create '{}': {}", path.display(), e))
            })?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn run(args: &Cli) -> XTreeResult<PrintStats> {
    let mut stats = PrintStats::default();

    let build_start = Instant::now();
    let tree = args.sample.build()?;
    stats.build_time = build_start.elapsed().as_secs_f64();
    stats.counter = NodeCounter::count(&tree.ast, tree.root)?;
    info!(
        "built sample '{}' with {} nodes ({} in arena)",
        args.sample,
        stats.counter.nodes,
        tree.ast.len()
    );

    let root_label = match &args.root_label {
        Some(label) => label.clone(),
        None => base_label(tree.ast.kind(tree.root)?),
    };
    debug!("root label: {}", root_label);

    let print_start = Instant::now();
    let mut printer = TreePrinter::new(open_output(&args.output)?);
    printer.print(&root_label, &tree.ast, tree.root)?;
    stats.print_time = print_start.elapsed().as_secs_f64();
    stats.lines = printer.lines_written();

    Ok(stats)
}

fn print_stats(stats: &PrintStats) {
    println!("\n Tree Statistics:");
    println!("  Nodes:           {}", stats.counter.nodes);
    println!("  Lines printed:   {}", stats.lines);
    println!("  Max depth:       {}", stats.counter.max_depth);
    println!("  Decorated nodes: {}", stats.counter.decorated);
    println!("  Build time (s):  {:.6}", stats.build_time);
    println!("  Print time (s):  {:.6}", stats.print_time);
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(stats) => {
            if let Some(path) = &args.output {
                info!("tree written to: {}", path.display());
            }
            if args.timing {
                print_stats(&stats);
            }
        }
        Err(e) => fatal(&format!("Printing failed: {}", e)),
    }
}
