//! Role driver for the THERMLINK pipeline.
//!
//! Thin glue only: loads parameters, picks the role, wires nodes to a
//! transport, and hands them to the scheduler. `run` drives the single role
//! named by the configuration against an in-process bus (broker-backed
//! transports live outside this workspace); `demo` runs both roles in one
//! process so the whole pipeline can be watched end to end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thermlink_core::{LoopbackBus, Params, Role, Scheduler};
use thermlink_library::nodes::{AggregatorNode, TemperaturePublisherNode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "thermlink_daemon")]
#[command(about = "THERMLINK - telemetry pipeline node runner")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the role named by the configuration
    Run {
        /// Path to a TOML parameter file
        #[arg(short, long)]
        config: PathBuf,

        /// Override the configured role (publisher or subscriber)
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// Run publisher and subscriber together over the loopback bus
    Demo {
        /// Optional TOML parameter file (role field is ignored)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thermlink=info,thermlink_daemon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { config, role } => {
            let mut params = Params::load(&config)?;
            if let Some(role) = role {
                params.role = role;
            }
            run_role(&params)
        }
        Commands::Demo { config } => {
            let params = match config {
                Some(path) => Params::load(&path)?,
                None => Params::for_role(Role::Publisher),
            };
            run_demo(&params)
        }
    }
}

fn run_role(params: &Params) -> anyhow::Result<()> {
    let bus = LoopbackBus::new();
    let mut scheduler = Scheduler::with_name("thermlink");

    match params.role {
        Role::Publisher => {
            tracing::info!(topic = %params.topic, id = params.publisher_id, "starting publisher");
            scheduler.add_node(
                Box::new(TemperaturePublisherNode::new(bus.endpoint(), params)),
                params.publish_rate_hz(),
            );
        }
        Role::Subscriber => {
            tracing::info!(
                topic = %params.topic,
                threshold = params.threshold,
                "starting subscriber"
            );
            scheduler.add_node(
                Box::new(AggregatorNode::new(bus.endpoint(), params)),
                params.poll_rate_hz(),
            );
        }
    }

    scheduler.run()?;
    Ok(())
}

fn run_demo(params: &Params) -> anyhow::Result<()> {
    tracing::info!(
        topic = %params.topic,
        threshold = params.threshold,
        "starting demo pipeline (publisher + subscriber)"
    );

    let bus = LoopbackBus::new();
    let mut scheduler = Scheduler::with_name("thermlink_demo");
    scheduler.add_node(
        Box::new(TemperaturePublisherNode::new(bus.endpoint(), params)),
        params.publish_rate_hz(),
    );
    scheduler.add_node(
        Box::new(AggregatorNode::new(bus.endpoint(), params)),
        params.poll_rate_hz(),
    );

    scheduler.run()?;
    Ok(())
}
