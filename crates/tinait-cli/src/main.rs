mod config;

use config::Config;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write as _;
use std::io::{BufRead, BufReader, Write};
use std::str::FromStr;
use tinait_graph::codec::{adjacency, edge_list, g6, list, tikz};
use tinait_graph::{Format, Graph, GraphReader, Predicate, Registry, VertexOrdering};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(tinait_graph::Error),
    Json(serde_json::Error),
    Config(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<tinait_graph::Error> for CliError {
    fn from(value: tinait_graph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Classify,
    Compute,
    Convert,
    Cones,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    G6,
    Edges,
    List,
    Adjacency,
    Tikz,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g6" | "graph6" => Ok(Self::G6),
            "edges" => Ok(Self::Edges),
            "list" => Ok(Self::List),
            "adjacency" | "adj" | "showg" => Ok(Self::Adjacency),
            "tikz" | "tex" => Ok(Self::Tikz),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    format: Option<Format>,
    types: Vec<String>,
    values: Vec<String>,
    all: bool,
    config: Option<String>,
    pretty: bool,
    verbose: bool,
    to: Option<OutputFormat>,
    labeling: Option<String>,
    out: Option<String>,
}

/// One line of `classify`/`compute` output.
#[derive(Serialize)]
struct GraphReport<'a> {
    index: usize,
    order: usize,
    size: usize,
    edges: String,
    values: &'a Map<String, Value>,
}

fn usage() -> &'static str {
    "tinait\n\
\n\
USAGE:\n\
  tinait [classify] [--format g6|list|adjacency] [--type <id>]... [--all] [--config <path>] [--pretty] [<path>|-]\n\
  tinait compute [--format g6|list|adjacency] [--value <id>]... [--all] [--config <path>] [--pretty] [<path>|-]\n\
  tinait convert [--format g6|list|adjacency] --to g6|edges|list|adjacency|tikz [--labeling closed|lexicographic] [--out <path>] [<path>|-]\n\
  tinait cones [--format g6|list|adjacency] [--out <path>] [<path>|-]\n\
\n\
PREDICATES (--type):  connected cograph euler chordal claw-free closed cone\n\
INVARIANTS (--value): clique detour degree independence girth\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - classify and compute print one JSON object per graph; without --type/--value every\n\
    capability is evaluated.\n\
  - cones prints the g6 encoding of the base of every cone in the input.\n\
  - Log verbosity follows TINAIT_LOG (default: warn, or debug with --verbose).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "classify" => args.command = Command::Classify,
            "compute" => args.command = Command::Compute,
            "convert" => args.command = Command::Convert,
            "cones" => args.command = Command::Cones,
            "--pretty" => args.pretty = true,
            "--all" => args.all = true,
            "--verbose" | "-v" => args.verbose = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = Some(fmt.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--type" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.types.push(id.clone());
            }
            "--value" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.values.push(id.clone());
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--to" => {
                let Some(to) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let to: OutputFormat = to.parse().map_err(|_| CliError::Usage(usage()))?;
                args.to = Some(to);
            }
            "--labeling" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.labeling = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.peek().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" if args.input.is_none() => args.input = Some("-".to_string()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.command == Command::Convert && args.to.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("TINAIT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>, CliError> {
    match input {
        None | Some("-") => Ok(Box::new(std::io::stdin().lock())),
        Some(path) => Ok(Box::new(BufReader::new(std::fs::File::open(path)?))),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

/// Shared state of one run: the registry plus the limits from the config file.
struct Session {
    registry: Registry,
    config: Config,
}

impl Session {
    fn within_limit(&self, exponential: bool, g: &Graph) -> bool {
        !exponential || g.order() <= self.config.max_exponential_order
    }

    /// Evaluates `predicate`, honoring the order limit and the `requires` gate. Prerequisites
    /// already in `values` are reused.
    fn predicate_value(
        &self,
        predicate: &Predicate,
        g: &Graph,
        values: &Map<String, Value>,
    ) -> Result<Value, CliError> {
        if !self.within_limit(predicate.exponential, g) {
            return Ok(Value::Null);
        }
        if self.config.gate_closed {
            for id in predicate.requires {
                let required = self.registry.predicate(id)?;
                let holds = match values.get(required.label) {
                    Some(Value::Bool(b)) => *b,
                    _ => required.evaluate(g),
                };
                if !holds {
                    tracing::debug!(
                        predicate = predicate.id,
                        failed = required.id,
                        "skipping search, prerequisite does not hold"
                    );
                    return Ok(Value::Bool(false));
                }
            }
        }
        Ok(Value::Bool(predicate.evaluate(g)))
    }

    fn has_property(&self, property: Option<&Predicate>, g: &Graph) -> Result<bool, CliError> {
        match property {
            Some(predicate) => {
                let value = self.predicate_value(predicate, g, &Map::new())?;
                Ok(value == Value::Bool(true))
            }
            None => Ok(true),
        }
    }
}

fn selected<'a, T>(
    entries: &'a [T],
    ids: &[String],
    all: bool,
    lookup: impl Fn(&str) -> tinait_graph::Result<&'a T>,
) -> Result<Vec<&'a T>, CliError> {
    if all || ids.is_empty() {
        return Ok(entries.iter().collect());
    }
    ids.iter()
        .map(|id| lookup(id).map_err(CliError::from))
        .collect()
}

/// Reads every graph of the input and hands it to `visit` with its 1-based index. A malformed
/// record ends the run; everything visited before it has already been written.
fn for_each_graph(
    args: &Args,
    format: Format,
    mut visit: impl FnMut(usize, &Graph) -> Result<(), CliError>,
) -> Result<usize, CliError> {
    let mut reader = GraphReader::new(open_input(args.input.as_deref())?, format);
    let mut g = Graph::new();
    let mut index = 0;
    loop {
        match reader.read_next(&mut g) {
            Ok(true) => {
                index += 1;
                visit(index, &g)?;
            }
            Ok(false) => break,
            Err(err) => {
                tracing::error!(
                    record = index + 1,
                    format = format.id(),
                    "unreadable record"
                );
                return Err(CliError::Graph(err));
            }
        }
    }
    tracing::debug!(graphs = index, format = format.id(), "input exhausted");
    Ok(index)
}

fn classify(args: &Args, session: &Session, format: Format) -> Result<(), CliError> {
    let predicates = selected(session.registry.predicates(), &args.types, args.all, |id| {
        session.registry.predicate(id)
    })?;
    for_each_graph(args, format, |index, g| {
        let mut values = Map::new();
        for predicate in &predicates {
            let value = session.predicate_value(predicate, g, &values)?;
            values.insert(predicate.label.to_string(), value);
        }
        write_json(&report(index, g, &values), args.pretty)
    })?;
    Ok(())
}

fn compute(args: &Args, session: &Session, format: Format) -> Result<(), CliError> {
    let invariants = selected(session.registry.invariants(), &args.values, args.all, |id| {
        session.registry.invariant(id)
    })?;
    for_each_graph(args, format, |index, g| {
        let mut values = Map::new();
        for invariant in &invariants {
            if session.within_limit(invariant.exponential, g) {
                let computed = invariant.evaluate(g);
                for (column, value) in invariant.columns.iter().zip(computed) {
                    values.insert(column.to_string(), Value::from(value));
                }
            } else {
                for column in invariant.columns {
                    values.insert(column.to_string(), Value::Null);
                }
            }
        }
        write_json(&report(index, g, &values), args.pretty)
    })?;
    Ok(())
}

fn report<'a>(index: usize, g: &Graph, values: &'a Map<String, Value>) -> GraphReport<'a> {
    GraphReport {
        index,
        order: g.order(),
        size: g.size(),
        edges: g.to_string(),
        values,
    }
}

fn convert(args: &Args, session: &Session, format: Format) -> Result<(), CliError> {
    let to = args.to.unwrap_or_default();
    let generator = match args.labeling.as_deref() {
        Some(id) => Some(session.registry.ordering(id)?),
        None => None,
    };
    // A labeling named after a predicate is only defined on graphs having that property.
    let property = match generator {
        Some(generator) => session.registry.predicate(generator.id).ok(),
        None => None,
    };

    let mut text = String::new();
    if to == OutputFormat::Tikz {
        text.push_str(tikz::preamble());
        text.push('\n');
    }
    for_each_graph(args, format, |index, g| {
        let ordering = match generator {
            Some(generator) if !session.within_limit(generator.exponential, g) => {
                eprintln!(
                    "graph {index}: skipped, order {} above the limit",
                    g.order()
                );
                return Ok(());
            }
            Some(generator) => {
                if !session.has_property(property, g)? {
                    eprintln!("graph {index}: skipped, not {}", generator.id);
                    return Ok(());
                }
                match generator.evaluate(g) {
                    Ok(ordering) => Some(ordering),
                    Err(err) => {
                        eprintln!("graph {index}: {err}");
                        return Ok(());
                    }
                }
            }
            None => None,
        };
        let encoded = match (to, &ordering) {
            (OutputFormat::Edges, Some(ordering)) => {
                format!("{}\n", edge_list::encode_with_labeling(g, ordering))
            }
            (_, Some(ordering)) => encode(to, index, &relabel(g, ordering)?),
            (_, None) => encode(to, index, g),
        };
        text.push_str(&encoded);
        Ok(())
    })?;
    write_text(&text, args.out.as_deref())
}

fn encode(to: OutputFormat, index: usize, g: &Graph) -> String {
    match to {
        OutputFormat::G6 => format!("{}\n", g6::encode(g)),
        OutputFormat::Edges => format!("{g}\n"),
        OutputFormat::List => format!("{}\n", list::encode(g)),
        OutputFormat::Adjacency => adjacency::encode(g, index),
        OutputFormat::Tikz => tikz::encode(g, &format!("Graph {index}, graphOrder: {}", g.order())),
    }
}

/// The graph with every vertex `v` renamed to its label under `ordering`.
fn relabel(g: &Graph, ordering: &VertexOrdering) -> Result<Graph, CliError> {
    let edges: Vec<(usize, usize)> = g
        .edges()
        .map(|(v, w)| (ordering.label(v), ordering.label(w)))
        .collect();
    Ok(Graph::from_edges(g.order(), &edges)?)
}

fn cones(args: &Args, format: Format) -> Result<(), CliError> {
    let mut text = String::new();
    let mut found = 0usize;
    let total = for_each_graph(args, format, |_, g| {
        if let Some(base) = g.cone_base().filter(|base| base.order() > 0) {
            found += 1;
            let _ = writeln!(text, "{}", g6::encode(&base));
        }
        Ok(())
    })?;
    tracing::info!(cones = found, graphs = total, "cone bases extracted");
    write_text(&text, args.out.as_deref())
}

fn run(args: Args) -> Result<(), CliError> {
    init_tracing(args.verbose);

    let config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let format = match args.format {
        Some(format) => format,
        None => config.input_format()?,
    };
    let session = Session {
        registry: Registry::builtin(),
        config,
    };

    match args.command {
        Command::Classify => classify(&args, &session, format),
        Command::Compute => compute(&args, &session, format),
        Command::Convert => convert(&args, &session, format),
        Command::Cones => cones(&args, format),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
