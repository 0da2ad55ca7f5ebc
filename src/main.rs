//! request-guard - Validate request bodies from the command line
//!
//! Reads one JSON body (or one secret token) on stdin and answers with the
//! response body an HTTP service would send.
//!
//! # Usage
//!
//! ```bash
//! echo '{"user":"sample","app":"gitea"}' | request-guard --request user-and-app
//!
//! # Check a session token
//! printf '%s' "$TOKEN" | request-guard --secret
//! ```

use std::env;
use std::io::{self, Read, Write};
use std::process;

use request_guard::{
    audit::AuditLogger,
    config::Config,
    input::read_request,
    output::{ResponseBody, Verdict},
    requests::RequestKind,
    rules::{self, RuleRegistry},
    validate_secret,
};

/// Print version information
fn print_version() {
    println!("request-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"request-guard - Declarative validation of HTTP request bodies

USAGE:
    request-guard --request KIND [OPTIONS] < body.json
    request-guard --secret [OPTIONS] < token

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -r, --request KIND      Request shape of the body on stdin
    -s, --secret            Check a session token on stdin instead
    -c, --config PATH       Path to config file
        --list-rules        List field validation rules
        --list-requests     List request shapes

EXIT STATUS:
    0 if the input was accepted, 1 if it was rejected, 2 on usage errors
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    secret: bool,
    list_rules: bool,
    list_requests: bool,
    request: Option<String>,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            secret: false,
            list_rules: false,
            list_requests: false,
            request: None,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-s" | "--secret" => result.secret = true,
                "--list-rules" => result.list_rules = true,
                "--list-requests" => result.list_requests = true,
                "-r" | "--request" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.request = Some(args[i].clone());
                    }
                }
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--request=") => {
                    result.request = Some(arg.trim_start_matches("--request=").to_string());
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                other => eprintln!("Warning: ignoring unknown argument {}", other),
            }
            i += 1;
        }

        result
    }
}

fn list_rules() {
    for rule in RuleRegistry::global().rules() {
        println!("{:<18} {}", rule.name, rule.description);
    }
}

fn list_requests() {
    for kind in RequestKind::ALL {
        println!("{}", kind.as_str());
    }
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    // Compile the rule table up front so a broken pattern aborts here.
    rules::init();

    if args.list_rules {
        list_rules();
        return;
    }

    if args.list_requests {
        list_requests();
        return;
    }

    let config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    let mut logger = AuditLogger::new(config.audit_path().as_deref());

    let (subject, verdict) = if args.secret {
        let mut token = String::new();
        let mut limited = io::stdin().lock().take(config.body.max_bytes as u64);
        let verdict = match limited.read_to_string(&mut token) {
            Ok(_) => {
                let token = token.trim_end_matches(|c: char| c == '\r' || c == '\n');
                Verdict::from_secret_check(validate_secret(token))
            }
            Err(_) => Verdict::from_secret_check(false),
        };
        ("secret".to_string(), verdict)
    } else {
        let kind = match args.request.as_deref().map(RequestKind::from_str) {
            Some(Some(kind)) => kind,
            Some(None) => {
                eprintln!("Error: unknown request kind (see --list-requests)");
                process::exit(2);
            }
            None => {
                eprintln!("Error: one of --request or --secret is required");
                process::exit(2);
            }
        };

        let verdict = match read_request(kind, io::stdin().lock(), config.body.max_bytes) {
            Ok(_) => Verdict::Accepted,
            Err(e) => Verdict::from_body_error(&e),
        };
        (kind.as_str().to_string(), verdict)
    };

    // The precise reason stays on the server side.
    if let Some(reason) = verdict.reason() {
        eprintln!("{}: {}", subject, reason);
    }

    if let Err(e) = logger.log_verdict(&subject, &verdict) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    let json = ResponseBody::from_verdict(&verdict).to_json();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", json);
    let _ = handle.flush();

    if !verdict.is_accepted() {
        process::exit(1);
    }
}
