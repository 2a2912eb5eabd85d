use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use product_editor::{
    EditorResult, MemoryStore, Platform, ProductAction, ProductEditor, ProductId, ScreenExit,
    UiOptions, store::ProductLookup,
};

const DEFAULT_OWNER: &str = "u1";

#[derive(Debug, Parser)]
#[command(
    name = "product-editor",
    version,
    about = "Add or edit a product of a JSON catalog in the terminal"
)]
struct Cli {
    /// Product catalog: a JSON array of products, file path or "-" for stdin
    #[arg(short = 'c', long = "catalog", value_name = "SPEC")]
    catalog: Option<String>,

    /// Edit this product instead of creating a new one
    #[arg(short = 'p', long = "product-id", value_name = "ID")]
    product_id: Option<String>,

    /// Owner id used as the current user
    #[arg(long = "owner", value_name = "ID", default_value = DEFAULT_OWNER)]
    owner: String,

    /// Platform flavour for header icons (defaults to the host platform)
    #[arg(long = "platform", value_enum)]
    platform: Option<PlatformArg>,

    /// What to write after a successful save
    #[arg(long = "emit", value_enum, default_value_t = Emit::Catalog)]
    emit: Emit,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Leave without confirmation even when there are unsaved edits
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// The whole catalog after the change
    Catalog,
    /// Only the dispatched create/update action
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    Android,
    Ios,
}

impl From<PlatformArg> for Platform {
    fn from(value: PlatformArg) -> Self {
        match value {
            PlatformArg::Android => Platform::Android,
            PlatformArg::Ios => Platform::Ios,
        }
    }
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum OutputDestination {
    Stdout,
    File(PathBuf),
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut diagnostics = DiagnosticCollector::default();

    let platform = cli.platform.map_or_else(Platform::current, Platform::from);

    let store = load_store(&cli, &mut diagnostics);
    if cli.product_id.is_some() && cli.catalog.is_none() {
        diagnostics.push_input("product-id", "editing a product requires --catalog");
    }
    if let (Some(store), Some(id)) = (store.as_ref(), cli.product_id.as_deref())
        && store.find_user_product(&ProductId::new(id)).is_none()
    {
        diagnostics.push_input(
            "product-id",
            format!("product {id} not found for owner {}", cli.owner),
        );
    }

    let destinations = build_destinations(&cli, &mut diagnostics);

    diagnostics.into_result()?;

    if let Some(path) = cli.log_file.as_ref() {
        init_logging(path)?;
    }

    let store = store.unwrap_or_else(|| MemoryStore::new(cli.owner.clone()));
    let options = UiOptions::default()
        .with_platform(platform)
        .with_confirm_exit(!cli.no_confirm_exit);
    let mut editor = ProductEditor::new(store).with_options(options);
    if let Some(id) = cli.product_id.as_deref() {
        editor = editor.with_product_id(id);
    }

    let result = editor.run().map_err(Report::msg)?;
    let Some(action) = applied_action(&result)? else {
        eprintln!("left without saving; nothing written");
        return Ok(());
    };
    tracing::info!(?action, "product saved");

    let payload = match cli.emit {
        Emit::Catalog => result
            .store
            .to_json(!cli.no_pretty)
            .wrap_err("failed to serialize catalog")?,
        Emit::Action => {
            let serialized = if cli.no_pretty {
                serde_json::to_string(&action)
            } else {
                serde_json::to_string_pretty(&action)
            };
            serialized.wrap_err("failed to serialize action")?
        }
    };
    emit(&payload, &destinations)
}

/// The action the screen submitted, provided the store actually applied it.
fn applied_action(result: &EditorResult<MemoryStore>) -> Result<Option<ProductAction>> {
    let ScreenExit::Saved(action) = &result.exit else {
        return Ok(None);
    };
    if let Some(err) = result.store.last_rejection() {
        return Err(eyre!("product was not saved: {err}; nothing written"));
    }
    Ok(Some(action.clone()))
}

fn load_store(cli: &Cli, diagnostics: &mut DiagnosticCollector) -> Option<MemoryStore> {
    let spec = cli.catalog.as_deref()?;
    let source = match resolve_source(spec) {
        Ok(source) => source,
        Err(message) => {
            diagnostics.push_input("catalog", message);
            return None;
        }
    };
    let contents = match read_from_source(&source) {
        Ok(contents) => contents,
        Err(err) => {
            diagnostics.push_input("catalog", err.to_string());
            return None;
        }
    };
    match MemoryStore::from_json(cli.owner.clone(), &contents) {
        Ok(store) => Some(store),
        Err(err) => {
            diagnostics.push_input("catalog", err.to_string());
            None
        }
    }
}

fn resolve_source(spec: &str) -> std::result::Result<InputSource, String> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err("catalog path cannot be empty".to_string());
    }
    if spec == "-" {
        return Ok(InputSource::Stdin);
    }
    Ok(InputSource::File(PathBuf::from(spec)))
}

fn read_from_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read from stdin")?;
            Ok(buffer)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read file {}", path.display())),
    }
}

fn build_destinations(
    cli: &Cli,
    diagnostics: &mut DiagnosticCollector,
) -> Vec<OutputDestination> {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        let raw = raw.trim();
        if raw.is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        let destination = if raw == "-" {
            OutputDestination::Stdout
        } else {
            OutputDestination::File(PathBuf::from(raw))
        };
        if let OutputDestination::File(path) = &destination
            && path.exists()
            && !cli.force
        {
            diagnostics.push_output(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ));
        }
        if !destinations.contains(&destination) {
            destinations.push(destination);
        }
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }
    destinations
}

fn emit(payload: &str, destinations: &[OutputDestination]) -> Result<()> {
    for destination in destinations {
        match destination {
            OutputDestination::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{payload}").wrap_err("failed to write to stdout")?;
            }
            OutputDestination::File(path) => {
                let mut file = File::create(path)
                    .wrap_err_with(|| format!("failed to create {}", path.display()))?;
                file.write_all(payload.as_bytes())?;
                file.write_all(b"\n")?;
                file.flush()?;
            }
        }
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_editor::store::{ProductDispatch, create_product};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("product-editor").chain(args.iter().copied()))
    }

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("product-editor-{tag}-{nanos}"))
    }

    #[test]
    fn stdout_is_the_default_destination() {
        let mut diagnostics = DiagnosticCollector::default();
        let destinations = build_destinations(&cli(&[]), &mut diagnostics);
        assert_eq!(destinations, vec![OutputDestination::Stdout]);
        assert!(diagnostics.into_result().is_ok());
    }

    #[test]
    fn existing_output_requires_force() {
        let path = temp_path("existing");
        fs::write(&path, "[]").unwrap();
        let raw = path.to_string_lossy().to_string();

        let mut diagnostics = DiagnosticCollector::default();
        build_destinations(&cli(&["-o", &raw]), &mut diagnostics);
        let err = diagnostics.into_result().unwrap_err();
        assert!(err.to_string().contains("--force"));

        let mut diagnostics = DiagnosticCollector::default();
        build_destinations(&cli(&["-o", &raw, "--force"]), &mut diagnostics);
        assert!(diagnostics.into_result().is_ok());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn emit_writes_payload_to_file() {
        let path = temp_path("emit");
        emit("[]", &[OutputDestination::File(path.clone())]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn platform_flag_accepts_known_names_only() {
        assert_eq!(cli(&["--platform", "ios"]).platform, Some(PlatformArg::Ios));
        assert_eq!(Platform::from(PlatformArg::Android), Platform::Android);
        assert!(Cli::try_parse_from(["product-editor", "--platform", "web"]).is_err());
    }

    #[test]
    fn rejected_action_is_not_reported_as_saved() {
        let action = create_product("Chair", "Wooden", "http://x/2.png", ".");
        let mut store = MemoryStore::new(DEFAULT_OWNER);
        store.dispatch(action.clone());
        let result = EditorResult {
            store,
            exit: ScreenExit::Saved(action),
        };
        let err = applied_action(&result).unwrap_err();
        assert!(err.to_string().contains("not saved"));
    }

    #[test]
    fn applied_action_is_returned() {
        let action = create_product("Chair", "Wooden", "http://x/2.png", "29.99");
        let mut store = MemoryStore::new(DEFAULT_OWNER);
        store.dispatch(action.clone());
        let result = EditorResult {
            store,
            exit: ScreenExit::Saved(action.clone()),
        };
        assert_eq!(applied_action(&result).unwrap(), Some(action));

        let abandoned = EditorResult {
            store: MemoryStore::new(DEFAULT_OWNER),
            exit: ScreenExit::Abandoned,
        };
        assert_eq!(applied_action(&abandoned).unwrap(), None);
    }

    #[test]
    fn unreadable_catalog_is_reported() {
        let missing = temp_path("missing");
        let raw = missing.to_string_lossy().to_string();
        let mut diagnostics = DiagnosticCollector::default();
        assert!(load_store(&cli(&["--catalog", &raw]), &mut diagnostics).is_none());
        let err = diagnostics.into_result().unwrap_err();
        assert!(err.to_string().contains("input (catalog)"));
    }
}
