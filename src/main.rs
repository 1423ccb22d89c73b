//! Vanity Forge - vanity phone numbers from dictionary and category words
//!
//! Runs one invocation per process: search (and remember) vanity renderings
//! for a caller, or report the best one found so far.

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use vanity_forge::{
    engine::WordFilter,
    store::JsonFileStore,
    words::{create_resolver, Dictionary},
    Result, ServiceConfig, VanityError, VanityRequest, VanityService,
};

/// What the command line asked for
enum Command {
    Help,
    Request(VanityRequest),
    Event(PathBuf),
}

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = vanity_forge::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
    vanity_forge::logging::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    if let Err(e) = run(command).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Main invocation workflow
async fn run(command: Command) -> Result<()> {
    let output = match command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Request(request) => build_service()?.handle_request(request).await,
        Command::Event(path) => {
            let event = read_event(&path)?;
            build_service()?.handle(&event).await
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Wire collaborators from the environment
fn build_service() -> Result<VanityService> {
    let config = ServiceConfig::from_env()?;
    let filter = WordFilter::new(&config.matching)?;
    let dictionary = Arc::new(Dictionary::load(config.dictionary_path.as_deref(), &filter));
    let resolver = create_resolver(&config.provider)?;
    let store = Arc::new(JsonFileStore::new(&config.store_dir));

    tracing::debug!(
        provider = resolver.name(),
        store_dir = %config.store_dir.display(),
        dictionary_words = dictionary.len(),
        result_cap = config.matching.result_cap,
        "Service configured"
    );
    VanityService::new(&config.matching, dictionary, resolver, store)
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut phone: Option<String> = None;
    let mut category: Option<String> = None;
    let mut validating = false;
    let mut event: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-c" | "--category" => {
                let value = iter
                    .next()
                    .ok_or_else(|| VanityError::validation("--category needs a value"))?;
                category = Some(value.clone());
            }
            "-v" | "--validate" => validating = true,
            "-e" | "--event" => {
                let value = iter
                    .next()
                    .ok_or_else(|| VanityError::validation("--event needs a file path"))?;
                event = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') => {
                return Err(VanityError::validation(format!("Unknown option: {}", flag)));
            }
            value => {
                if phone.is_some() {
                    return Err(VanityError::validation(format!("Unexpected argument: {}", value)));
                }
                phone = Some(value.to_string());
            }
        }
    }

    match (event, phone) {
        (Some(_), Some(_)) => Err(VanityError::validation(
            "Give either a phone number or --event, not both",
        )),
        (Some(path), None) => Ok(Command::Event(path)),
        (None, Some(phone)) => Ok(Command::Request(VanityRequest::new(
            &phone,
            category.as_deref(),
            validating,
        ))),
        (None, None) => Err(VanityError::validation(
            "A phone number or --event <FILE> is required",
        )),
    }
}

fn read_event(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        VanityError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        VanityError::parse(format!("Invalid event JSON: {}", e), Some(content))
    })
}

/// Print help information
fn print_help() {
    println!("📞 Vanity Forge - vanity phone numbers");
    println!("══════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    vanity-forge <PHONE> [--category <NAME>] [--validate]");
    println!("    vanity-forge --event <FILE>");
    println!();
    println!("OPTIONS:");
    println!("    -c, --category <NAME>   Topic for related words (default: general)");
    println!("    -v, --validate          Report the best stored result without searching");
    println!("    -e, --event <FILE>      Read a contact-flow event from a JSON file");
    println!("    -h, --help              Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    vanity-forge +18009453228");
    println!("    vanity-forge \"(800) 945-7387\" --category pet");
    println!("    vanity-forge +18009453228 --validate");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    VANITY_RESULT_CAP           Matches per search pass (default: 5)");
    println!("    VANITY_MIN_WORD_LENGTH      Shortest word considered (default: 3)");
    println!("    VANITY_MAX_WORD_LENGTH      Longest word considered (default: 7)");
    println!("    VANITY_DICTIONARY_PATH      Newline-delimited fallback word list");
    println!("    VANITY_STORE_DIR            Caller record directory (default: output/callers)");
    println!("    WORD_PROVIDER               datamuse | none (default: datamuse)");
    println!("    WORD_PROVIDER_URL           Provider base URL");
    println!("    RUST_LOG, VANITY_LOG_FORMAT Logging filter and format (text | json)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_phone_and_category() {
        match parse_args(&args(&["+18009453228", "--category", "Pet"])).unwrap() {
            Command::Request(request) => {
                assert_eq!(request.phone_number, "+18009453228");
                assert_eq!(request.category, "pet");
                assert!(!request.validating);
            }
            _ => panic!("expected a request"),
        }
    }

    #[test]
    fn test_parse_validate_flag() {
        match parse_args(&args(&["-v", "8009453228"])).unwrap() {
            Command::Request(request) => assert!(request.validating),
            _ => panic!("expected a request"),
        }
    }

    #[test]
    fn test_parse_event() {
        assert!(matches!(
            parse_args(&args(&["--event", "call.json"])).unwrap(),
            Command::Event(_)
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--category"])).is_err());
        assert!(parse_args(&args(&["--bogus", "555"])).is_err());
        assert!(parse_args(&args(&["555", "666"])).is_err());
        assert!(parse_args(&args(&["555", "--event", "x.json"])).is_err());
    }

    #[test]
    fn test_help_wins() {
        assert!(matches!(parse_args(&args(&["555", "--help"])).unwrap(), Command::Help));
    }
}
