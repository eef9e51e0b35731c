//! govtool: command-line client for the GovTool submission bridge.

mod proposal_file;
mod signer;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use govtool_bridge::{poll_transaction, sign_and_submit, HttpBridge, SubmissionBridge, SubmissionRequest};
use govtool_governance::{MetadataUpdateForm, VoteForm};
use govtool_portal::PortalConfig;
use govtool_session::{BackendClient, VotingPowerSource};
use govtool_types::{DRepId, GovActionId, NetworkId, StakeKey, TxId, VoteChoice};
use govtool_utils::{format_duration, init_logging, LogFormat};
use govtool_validation::{validate_anchor, validate_anchor_url};

use crate::proposal_file::ProposalFile;
use crate::signer::StaticSigner;

#[derive(Parser)]
#[command(name = "govtool", about = "GovTool governance client")]
struct Cli {
    /// Network: "mainnet", "preview", "preprod" or "sanchonet".
    /// When a config file is provided, defaults to the file's network value.
    #[arg(long, env = "GOVTOOL_NETWORK")]
    network: Option<NetworkId>,

    /// Base URL of the transaction-building service.
    #[arg(long, env = "GOVTOOL_BRIDGE_URL")]
    bridge_url: Option<String>,

    /// Base URL of the GovTool backend.
    #[arg(long, env = "GOVTOOL_BACKEND_URL")]
    backend_url: Option<String>,

    /// Hex-encoded witness set for submissions, signed offline.
    #[arg(long, env = "GOVTOOL_WITNESS", hide_env_values = true)]
    witness: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "GOVTOOL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "GOVTOOL_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Check a metadata anchor URL, and its hash if given.
    ValidateAnchor {
        url: String,
        #[arg(long)]
        hash: Option<String>,
    },
    /// Check a proposal file and list every invalid field.
    ValidateProposal {
        #[arg(long)]
        file: PathBuf,
    },
    /// Submit a proposal file through the bridge.
    SubmitProposal {
        #[arg(long)]
        file: PathBuf,
        /// Return once the bridge accepts the tx instead of waiting for confirmation.
        #[arg(long)]
        no_wait: bool,
    },
    /// Vote on a governance action (`<tx id>#<index>`).
    Vote {
        #[arg(long)]
        action: GovActionId,
        #[arg(long)]
        choice: VoteChoice,
        /// URL of a rationale document.
        #[arg(long)]
        rationale: Option<String>,
        #[arg(long)]
        no_wait: bool,
    },
    /// Point the DRep registration at a new metadata anchor.
    UpdateMetadata {
        #[arg(long)]
        url: String,
        #[arg(long)]
        hash: String,
        #[arg(long)]
        no_wait: bool,
    },
    /// Ask the bridge for a transaction's status.
    TxStatus { tx_id: TxId },
    /// Show the voting power of a stake key, and of a DRep if given.
    VotingPower {
        stake_key: StakeKey,
        #[arg(long)]
        drep: Option<DRepId>,
    },
}

/// File config first, then flags and env on top.
fn resolve_config(cli: &Cli) -> (PortalConfig, Option<String>) {
    let mut warning = None;
    let mut config = match &cli.config {
        Some(path) => match PortalConfig::from_toml_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning = Some(format!(
                    "Failed to load config file {}: {e}, using defaults",
                    path.display()
                ));
                PortalConfig::default()
            }
        },
        None => PortalConfig::default(),
    };
    if let Some(network) = cli.network {
        config.network = network;
    }
    if let Some(url) = &cli.bridge_url {
        config.bridge_url = url.clone();
    }
    if let Some(url) = &cli.backend_url {
        config.backend_url = url.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    (config, warning)
}

async fn submit(
    config: &PortalConfig,
    witness: Option<&str>,
    request: SubmissionRequest,
    wait: bool,
) -> anyhow::Result<()> {
    let witness = witness.context("a witness is required (--witness or GOVTOOL_WITNESS)")?;
    let signer = StaticSigner::from_hex(witness)?;
    let bridge = HttpBridge::new(&config.bridge_url)?;

    let submission = sign_and_submit(&signer, &bridge, &request).await?;
    println!("{}", submission.tx_id);
    if !wait {
        return Ok(());
    }

    let started = Instant::now();
    poll_transaction(&bridge, &submission.tx_id, &config.bridge()).await?;
    tracing::info!(
        tx = %submission.tx_id,
        waited = %format_duration(started.elapsed()),
        "{} confirmed",
        request.kind()
    );
    println!("confirmed");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, warning) = resolve_config(&cli);
    init_logging(config.log_format, &config.log_level);
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    tracing::debug!(network = config.network.as_str(), bridge = %config.bridge_url, "configured");

    match cli.command {
        Command::ValidateAnchor { url, hash } => {
            match hash {
                Some(hash) => {
                    validate_anchor(&url, &hash)?;
                }
                None => validate_anchor_url(&url)?,
            }
            println!("ok");
        }
        Command::ValidateProposal { file } => {
            let proposal = ProposalFile::load(&file)?;
            let issues = proposal.issues(config.network)?;
            if issues.is_empty() {
                println!("ok");
            } else {
                for issue in &issues {
                    println!("{:?}: {}", issue.field, issue.error);
                }
                anyhow::bail!("{} invalid field(s)", issues.len());
            }
        }
        Command::SubmitProposal { file, no_wait } => {
            let payload = ProposalFile::load(&file)?.payload(config.network)?;
            submit(
                &config,
                cli.witness.as_deref(),
                SubmissionRequest::Proposal(payload),
                !no_wait,
            )
            .await?;
        }
        Command::Vote {
            action,
            choice,
            rationale,
            no_wait,
        } => {
            let mut form = VoteForm::new(action);
            form.select(choice)?;
            if let Some(url) = rationale {
                form.set_rationale(&url)?;
            }
            // Eligibility is the chain's call here; the bridge rejects ineligible voters.
            let payload = form.submit(true)?;
            submit(
                &config,
                cli.witness.as_deref(),
                SubmissionRequest::Vote(payload),
                !no_wait,
            )
            .await?;
        }
        Command::UpdateMetadata { url, hash, no_wait } => {
            let mut form = MetadataUpdateForm::new();
            form.set_url(&url);
            form.set_hash(&hash);
            let payload = form.submit()?;
            submit(
                &config,
                cli.witness.as_deref(),
                SubmissionRequest::DRepUpdate(payload),
                !no_wait,
            )
            .await?;
        }
        Command::TxStatus { tx_id } => {
            let bridge = HttpBridge::new(&config.bridge_url)?;
            let status = bridge.tx_status(&tx_id).await?;
            println!("{status:?}");
        }
        Command::VotingPower { stake_key, drep } => {
            if !stake_key.is_on(config.network) {
                anyhow::bail!("stake key is not on {}", config.network.as_str());
            }
            let backend = BackendClient::new(&config.backend_url)?;
            let power = backend.ada_holder_voting_power(&stake_key).await?;
            println!("ada holder: ₳ {}", power.to_ada_display());
            if let Some(drep_id) = drep {
                let power = backend.drep_voting_power(&drep_id).await?;
                println!("drep: ₳ {}", power.to_ada_display());
            }
        }
    }

    Ok(())
}
