use chessboard::ChessboardConfig;
use tracing_subscriber::EnvFilter;

/// Written relative to the working directory; overwritten on every run.
const OUTPUT_PATH: &str = "chessboard.svg";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Chessboard(chessboard::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Chessboard(err) => write!(f, "{err}"),
        }
    }
}

impl From<chessboard::Error> for CliError {
    fn from(value: chessboard::Error) -> Self {
        Self::Chessboard(value)
    }
}

fn usage() -> &'static str {
    "chessboard-cli\n\
\n\
USAGE:\n\
  chessboard-cli\n\
\n\
NOTES:\n\
  - Writes an A3 (297mm x 420mm) board of 14 squares across to ./chessboard.svg.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) to adjust log output on stderr.\n\
"
}

fn check_args(argv: &[String]) -> Result<(), CliError> {
    // Everything is compiled in; any argument is either a help request or a mistake.
    match argv.get(1) {
        None => Ok(()),
        Some(_) => Err(CliError::Usage(usage())),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), CliError> {
    let config = ChessboardConfig::default();
    tracing::debug!(?config, "rendering chessboard");
    let layout = chessboard::render_to_file(&config, OUTPUT_PATH)?;

    let target = layout.calibration_target();
    tracing::info!(
        pattern_columns = target.pattern_columns,
        pattern_rows = target.pattern_rows,
        square_size_mm = target.square_size_mm,
        "calibration pattern"
    );
    Ok(())
}

fn main() {
    if let Err(err) = check_args(&std::env::args().collect::<Vec<_>>()) {
        eprintln!("{err}");
        std::process::exit(2);
    }

    init_tracing();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
