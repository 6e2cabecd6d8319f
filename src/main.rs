//! CLI entry point for graph-devmgmt, a Microsoft Graph Intune client.
//!
//! Authenticates via OAuth2 client credentials, then dispatches to the
//! `deviceManagement` request builders based on the subcommand. Results are
//! printed to stdout as pretty JSON; logs go to stderr (`RUST_LOG`).
//!
//! Exit codes:
//! - 0: success
//! - 1: runtime error (configuration, auth failure, Graph error, etc.)
//! - 2: argument validation error (clap handles this automatically)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use graph_devmgmt::config::GraphConfig;
use graph_devmgmt::error::Result;
use graph_devmgmt::query::{CollectionQueryParameters, CountQueryParameters};
use graph_devmgmt::request::RequestConfiguration;
use graph_devmgmt::service::GraphServiceClient;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file. Flags and environment variables override it.
    #[arg(long, env = "GRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Directory (tenant) ID for OAuth2 authentication.
    #[arg(long, env = "GRAPH_TENANT_ID")]
    tenant_id: Option<String>,

    /// Application (client) ID.
    #[arg(long, env = "GRAPH_CLIENT_ID")]
    client_id: Option<String>,

    /// Client secret. Prefer setting via the GRAPH_CLIENT_SECRET
    /// environment variable to avoid exposing the secret in process listings
    /// and shell history.
    #[arg(long, env = "GRAPH_CLIENT_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Graph service root, e.g. https://graph.microsoft.us/v1.0.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Managed devices.
    #[command(subcommand)]
    Devices(DevicesCommand),
    /// Device configuration profiles.
    #[command(subcommand)]
    Configs(ConfigsCommand),
    /// Device compliance policies.
    #[command(subcommand)]
    Policies(PoliciesCommand),
    /// Device categories.
    #[command(subcommand)]
    Categories(CategoriesCommand),
    /// Device counts by platform and state.
    Overview,
}

#[derive(Subcommand)]
enum DevicesCommand {
    /// List one page of managed devices.
    List(ListArgs),
    /// Show one device.
    Get {
        /// Managed device ID.
        id: String,
    },
    /// Count devices, optionally filtered.
    Count {
        /// OData $filter expression.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Ask the device to check in.
    Sync {
        /// Managed device ID.
        id: String,
    },
    /// Restart the device.
    Reboot {
        /// Managed device ID.
        id: String,
    },
    /// Remove company data from the device.
    Retire {
        /// Managed device ID.
        id: String,
    },
}

#[derive(Subcommand)]
enum ConfigsCommand {
    /// List one page of configuration profiles.
    List(ListArgs),
    /// Show one profile.
    Get {
        /// Device configuration ID.
        id: String,
    },
    /// Per-device (or per-user) deployment status of a profile.
    Statuses {
        /// Device configuration ID.
        id: String,
        /// Show per-user instead of per-device status.
        #[arg(long)]
        users: bool,
    },
    /// Aggregated deployment counts of a profile.
    Overview {
        /// Device configuration ID.
        id: String,
    },
}

#[derive(Subcommand)]
enum PoliciesCommand {
    /// List one page of compliance policies.
    List(ListArgs),
    /// Show one policy.
    Get {
        /// Device compliance policy ID.
        id: String,
    },
    /// Per-device (or per-user) compliance status of a policy.
    Statuses {
        /// Device compliance policy ID.
        id: String,
        /// Show per-user instead of per-device status.
        #[arg(long)]
        users: bool,
    },
}

#[derive(Subcommand)]
enum CategoriesCommand {
    /// List device categories.
    List(ListArgs),
}

/// Query options shared by every `list` subcommand.
#[derive(Args, Default)]
struct ListArgs {
    /// OData $filter expression.
    #[arg(long)]
    filter: Option<String>,
    /// Page size.
    #[arg(long)]
    top: Option<i32>,
    /// Comma-separated properties to return.
    #[arg(long, value_delimiter = ',')]
    select: Vec<String>,
    /// Comma-separated sort clauses, e.g. "deviceName desc".
    #[arg(long, value_delimiter = ',')]
    orderby: Vec<String>,
}

impl ListArgs {
    fn query(&self) -> Option<RequestConfiguration<CollectionQueryParameters>> {
        let mut q = CollectionQueryParameters::default();
        if let Some(filter) = &self.filter {
            q = q.filter(filter.clone());
        }
        if let Some(top) = self.top {
            q = q.top(top);
        }
        if !self.select.is_empty() {
            q = q.select(self.select.iter().cloned());
        }
        if !self.orderby.is_empty() {
            q = q.orderby(self.orderby.iter().cloned());
        }
        if q == CollectionQueryParameters::default() {
            return None;
        }
        Some(RequestConfiguration::new().query(q))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layers CLI flags and environment over the optional config file.
fn resolve_config(cli: &Cli) -> Result<GraphConfig> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };
    if let Some(tenant_id) = &cli.tenant_id {
        config.tenant_id = Some(tenant_id.clone());
    }
    if let Some(client_id) = &cli.client_id {
        config.client_id = Some(client_id.clone());
    }
    if let Some(secret) = &cli.secret {
        config.client_secret = Some(secret.clone());
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let graph: GraphServiceClient = config.service_client()?;
    let dm = graph.device_management();

    match cli.command {
        Command::Devices(cmd) => {
            let devices = dm.managed_devices();
            match cmd {
                DevicesCommand::List(args) => print_json(&devices.get(args.query()).await?)?,
                DevicesCommand::Get { id } => {
                    print_json(&devices.by_managed_device_id(&id).get(None).await?)?
                }
                DevicesCommand::Count { filter } => {
                    let config = filter.map(|f| {
                        RequestConfiguration::new().query(CountQueryParameters::default().filter(f))
                    });
                    let count = devices.count().get(config).await?.unwrap_or_default();
                    println!("{count}");
                }
                DevicesCommand::Sync { id } => {
                    devices.by_managed_device_id(&id).sync_device().post(None).await?;
                    eprintln!("sync requested for {id}");
                }
                DevicesCommand::Reboot { id } => {
                    devices.by_managed_device_id(&id).reboot_now().post(None).await?;
                    eprintln!("reboot requested for {id}");
                }
                DevicesCommand::Retire { id } => {
                    devices.by_managed_device_id(&id).retire().post(None).await?;
                    eprintln!("retire requested for {id}");
                }
            }
        }
        Command::Configs(cmd) => {
            let configs = dm.device_configurations();
            match cmd {
                ConfigsCommand::List(args) => print_json(&configs.get(args.query()).await?)?,
                ConfigsCommand::Get { id } => {
                    print_json(&configs.by_device_configuration_id(&id).get(None).await?)?
                }
                ConfigsCommand::Statuses { id, users } => {
                    let item = configs.by_device_configuration_id(&id);
                    if users {
                        print_json(&item.user_statuses().get(None).await?)?
                    } else {
                        print_json(&item.device_statuses().get(None).await?)?
                    }
                }
                ConfigsCommand::Overview { id } => print_json(
                    &configs
                        .by_device_configuration_id(&id)
                        .device_status_overview()
                        .get(None)
                        .await?,
                )?,
            }
        }
        Command::Policies(cmd) => {
            let policies = dm.device_compliance_policies();
            match cmd {
                PoliciesCommand::List(args) => print_json(&policies.get(args.query()).await?)?,
                PoliciesCommand::Get { id } => print_json(
                    &policies
                        .by_device_compliance_policy_id(&id)
                        .get(None)
                        .await?,
                )?,
                PoliciesCommand::Statuses { id, users } => {
                    let item = policies.by_device_compliance_policy_id(&id);
                    if users {
                        print_json(&item.user_statuses().get(None).await?)?
                    } else {
                        print_json(&item.device_statuses().get(None).await?)?
                    }
                }
            }
        }
        Command::Categories(CategoriesCommand::List(args)) => {
            print_json(&dm.device_categories().get(args.query()).await?)?
        }
        Command::Overview => print_json(&dm.managed_device_overview().get(None).await?)?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
