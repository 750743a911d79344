//! CLI surface and command dispatch

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use url::Url;

use restbench_application::ports::{AuthGateway, SessionStore};
use restbench_application::{
    ApplicationError, ApplicationResult, BulkImporter, RequestForm, Workbench,
};
use restbench_domain::{AuthConfig, FormRow, HttpMethod, RequestRecord, WireAuth, wire_label};
use restbench_infrastructure::{BackendClient, FileSessionStore};

use crate::render;

/// API test workbench: compose, send, and record HTTP API test requests.
#[derive(Debug, Parser)]
#[command(name = "restbench", version, about)]
pub struct Cli {
    /// Base URL of the backend service.
    #[arg(long, env = "RESTBENCH_URL", default_value = "http://localhost:8081/")]
    pub base_url: Url,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session.
    Login {
        /// Account username.
        #[arg(long)]
        username: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Register a new account and store its session.
    Register {
        /// Account username.
        #[arg(long)]
        username: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session.
    Logout,
    /// Compose and send one test request.
    Send(SendArgs),
    /// Run a CSV file as one bulk test.
    Import {
        /// CSV file with a header row; `method` and `url` are required.
        file: PathBuf,
    },
    /// Saved request operations.
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Collection (folder) operations.
    Collection {
        #[command(subcommand)]
        command: CollectionCommand,
    },
}

/// Flags for `send`. With `--record`, the saved record is loaded first
/// and the remaining flags override it; the saved definition is updated
/// before the test executes.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Saved record to load, update, and execute.
    #[arg(long)]
    pub record: Option<String>,
    /// HTTP method.
    #[arg(long)]
    pub method: Option<HttpMethod>,
    /// Target URL.
    #[arg(long)]
    pub url: Option<String>,
    /// Header rows, `KEY=VALUE`, repeatable.
    #[arg(long = "header", short = 'H', value_name = "KEY=VALUE")]
    pub headers: Vec<String>,
    /// Query parameter rows, `KEY=VALUE`, repeatable.
    #[arg(long = "param", short = 'P', value_name = "KEY=VALUE")]
    pub params: Vec<String>,
    /// Raw request body.
    #[arg(long)]
    pub body: Option<String>,
    /// Folder to file the request under.
    #[arg(long)]
    pub collection: Option<String>,
    /// Auth type label, e.g. "Bearer Token" or "Inherit from Parent".
    #[arg(long)]
    pub auth: Option<String>,
    /// Bearer/OAuth token for `--auth`.
    #[arg(long)]
    pub token: Option<String>,
    /// Basic auth username for `--auth`.
    #[arg(long)]
    pub username: Option<String>,
    /// Basic auth password for `--auth`.
    #[arg(long)]
    pub password: Option<String>,
    /// API key pair for `--auth`, `KEY=VALUE`.
    #[arg(long, value_name = "KEY=VALUE")]
    pub api_key: Option<String>,
}

/// Saved request subcommands.
#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List saved requests grouped by folder.
    List,
    /// Delete a saved request.
    Delete {
        /// Record id.
        id: String,
    },
    /// Move a saved request to another folder.
    Move {
        /// Record id.
        id: String,
        /// Target collection id; omit to unfile the record.
        #[arg(long)]
        to: Option<String>,
    },
}

/// Collection subcommands.
#[derive(Debug, Subcommand)]
pub enum CollectionCommand {
    /// List collections and their default auth.
    List,
    /// Create a collection.
    Create {
        /// Folder name.
        name: String,
    },
    /// Rename a collection.
    Rename {
        /// Collection id.
        id: String,
        /// New folder name.
        name: String,
    },
    /// Delete a collection; contained requests become unclassified.
    Delete {
        /// Collection id.
        id: String,
    },
    /// Run every request in a collection as one bulk job.
    Run {
        /// Collection id.
        id: String,
    },
}

/// Executes the parsed command.
///
/// # Errors
///
/// Returns an error when the session is missing for an authenticated
/// command, or when the underlying operation fails.
pub async fn run(cli: Cli) -> ApplicationResult<()> {
    let store = FileSessionStore::new()?;
    let client = BackendClient::new(cli.base_url)?;

    match cli.command {
        Command::Login { username, password } => {
            let session = client.login(&username, &password).await?;
            println!("logged in as {}", session.user_id);
            store.store(&session).await
        }
        Command::Register { username, password } => {
            let session = client.register(&username, &password).await?;
            println!("registered as {}", session.user_id);
            store.store(&session).await
        }
        Command::Logout => {
            store.clear().await?;
            println!("logged out");
            Ok(())
        }
        Command::Send(args) => send(authed(&store, client).await?, args).await,
        Command::Import { file } => import(authed(&store, client).await?, &file).await,
        Command::History { command } => history(authed(&store, client).await?, command).await,
        Command::Collection { command } => collection(authed(&store, client).await?, command).await,
    }
}

async fn authed(
    store: &FileSessionStore,
    client: BackendClient,
) -> ApplicationResult<BackendClient> {
    let session = store.load().await?.ok_or(ApplicationError::Unauthorized)?;
    Ok(client.with_session(session))
}

async fn send(client: BackendClient, args: SendArgs) -> ApplicationResult<()> {
    let mut bench = Workbench::new(client.clone());
    bench.refresh().await?;

    let (mut form, selected) = load_form(&bench, args.record.as_deref())?;
    apply_overrides(&mut form, &args);
    acquire_oauth_token(&client, &mut form).await?;

    let row = bench.submit(&form, selected.as_ref()).await?;
    render::print_results(&[row]);
    Ok(())
}

/// Fills in an OAuth profile's access token through the backend's token
/// proxy when it has not been acquired yet.
async fn acquire_oauth_token(
    client: &BackendClient,
    form: &mut RequestForm,
) -> ApplicationResult<()> {
    if matches!(&form.auth, AuthConfig::OAuth2 { token, .. } if token.is_empty()) {
        let wire = WireAuth::from_config(&form.auth);
        let fetched = client.exchange_oauth2_token(&wire).await?;
        if let AuthConfig::OAuth2 { token, .. } = &mut form.auth {
            *token = fetched;
        }
    }
    Ok(())
}

async fn import(client: BackendClient, file: &Path) -> ApplicationResult<()> {
    let reader = std::fs::File::open(file)
        .map_err(|e| ApplicationError::NotFound(format!("{}: {e}", file.display())))?;
    let report = BulkImporter::new(&client).import(reader).await?;
    render::print_report(&report);
    Ok(())
}

async fn history(client: BackendClient, command: HistoryCommand) -> ApplicationResult<()> {
    let mut bench = Workbench::new(client);
    bench.refresh().await?;

    match command {
        HistoryCommand::List => {
            render::print_sidebar(&bench.grouped());
        }
        HistoryCommand::Delete { id } => {
            bench.delete_record(&id).await?;
            println!("deleted {id}");
        }
        HistoryCommand::Move { id, to } => {
            let moved = bench.move_record(&id, to.as_deref()).await?;
            match moved.collection_id {
                Some(target) => println!("moved {id} to {target}"),
                None => println!("moved {id} out of its folder"),
            }
        }
    }
    Ok(())
}

async fn collection(client: BackendClient, command: CollectionCommand) -> ApplicationResult<()> {
    let mut bench = Workbench::new(client);

    match command {
        CollectionCommand::List => {
            bench.refresh().await?;
            render::print_collections(bench.collections());
        }
        CollectionCommand::Create { name } => {
            let collection = bench.create_collection(&name).await?;
            println!("created {} ({})", collection.name, collection.id);
        }
        CollectionCommand::Rename { id, name } => {
            let collection = bench.rename_collection(&id, &name).await?;
            println!("renamed {} to {}", collection.id, collection.name);
        }
        CollectionCommand::Delete { id } => {
            bench.delete_collection(&id).await?;
            println!("deleted {id}; its requests are now unclassified");
        }
        CollectionCommand::Run { id } => {
            let report = bench.run_collection(&id).await?;
            render::print_report(&report);
        }
    }
    Ok(())
}

fn load_form(
    bench: &Workbench<BackendClient>,
    record: Option<&str>,
) -> ApplicationResult<(RequestForm, Option<RequestRecord>)> {
    match record {
        Some(id) => {
            let (form, selected) = bench
                .select(id)
                .ok_or_else(|| ApplicationError::NotFound(format!("record {id}")))?;
            Ok((form, Some(selected.clone())))
        }
        None => Ok((RequestForm::blank(), None)),
    }
}

fn apply_overrides(form: &mut RequestForm, args: &SendArgs) {
    if let Some(method) = args.method {
        form.method = method;
    }
    if let Some(url) = &args.url {
        form.url.clone_from(url);
    }
    if let Some(body) = &args.body {
        form.body.clone_from(body);
    }
    if let Some(collection) = &args.collection {
        form.collection_id = Some(collection.clone());
    }
    if !args.headers.is_empty() {
        form.headers = parse_rows(&args.headers);
    }
    if !args.params.is_empty() {
        form.params = parse_rows(&args.params);
    }
    if let Some(auth) = auth_from_args(args) {
        form.auth = auth;
    }
}

/// Parses repeated `KEY=VALUE` flags into rows. A flag without `=` keeps
/// the whole text as the key.
fn parse_rows(raw: &[String]) -> Vec<FormRow> {
    raw.iter()
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => FormRow::new(key, value),
            None => FormRow::new(entry.clone(), ""),
        })
        .collect()
}

/// Builds an auth profile from the send flags, accepting the label in
/// display or wire spelling. Unknown labels fall back to No Auth, the
/// same defaulting the CSV path uses.
fn auth_from_args(args: &SendArgs) -> Option<AuthConfig> {
    let label = args.auth.as_deref()?;
    let (key, value) = args
        .api_key
        .as_deref()
        .and_then(|kv| kv.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .unwrap_or_default();

    let wire = WireAuth {
        auth_type: wire_label(label),
        token: args.token.clone().unwrap_or_default(),
        username: args.username.clone().unwrap_or_default(),
        password: args.password.clone().unwrap_or_default(),
        key,
        value,
        ..WireAuth::default()
    };
    Some(wire.to_config())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn send_args() -> SendArgs {
        SendArgs {
            record: None,
            method: None,
            url: None,
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
            collection: None,
            auth: None,
            token: None,
            username: None,
            password: None,
            api_key: None,
        }
    }

    #[test]
    fn test_parse_rows() {
        let rows = parse_rows(&["Accept=application/json".to_string(), "X-Flag".to_string()]);
        assert_eq!(rows[0], FormRow::new("Accept", "application/json"));
        assert_eq!(rows[1], FormRow::new("X-Flag", ""));
    }

    #[test]
    fn test_auth_from_display_label() {
        let mut args = send_args();
        args.auth = Some("Bearer Token".to_string());
        args.token = Some("abc".to_string());
        assert_eq!(auth_from_args(&args), Some(AuthConfig::bearer("abc")));
    }

    #[test]
    fn test_auth_from_api_key_pair() {
        let mut args = send_args();
        args.auth = Some("API Key".to_string());
        args.api_key = Some("X-Api-Key=secret".to_string());
        assert_eq!(
            auth_from_args(&args),
            Some(AuthConfig::api_key("X-Api-Key", "secret"))
        );
    }

    #[test]
    fn test_unknown_auth_label_defaults_to_none() {
        let mut args = send_args();
        args.auth = Some("Hawk".to_string());
        assert_eq!(auth_from_args(&args), Some(AuthConfig::None));
    }

    #[test]
    fn test_no_auth_flag_leaves_form_untouched() {
        let mut form = RequestForm::blank();
        form.auth = AuthConfig::bearer("keep-me");
        apply_overrides(&mut form, &send_args());
        assert_eq!(form.auth, AuthConfig::bearer("keep-me"));
    }
}
