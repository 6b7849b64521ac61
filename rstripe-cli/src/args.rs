use clap::{Parser, Subcommand};
use rstripe::ListParams;

/// Offline card checks and basic Stripe API calls.
#[derive(Parser, Debug)]
#[command(name = "rstripe", version, about, long_about = None)]
pub struct Cli {
    /// Secret API key. Not needed for `card`.
    #[arg(long, env = "STRIPE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Override the API endpoint, e.g. a local mock.
    #[arg(long, env = "STRIPE_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Log request and response payloads at debug level.
    #[arg(long, global = true)]
    pub log_traffic: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the brand and checksum result of a card number. Works offline.
    Card {
        /// Card number, digits only.
        number: String,
    },
    /// Show the account the API key belongs to.
    Account,
    /// Coupon operations.
    Coupons {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Plan operations.
    Plans {
        #[command(subcommand)]
        action: ListAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListAction {
    /// List objects.
    List(PageArgs),
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Number of objects to return.
    #[arg(long, default_value_t = ListParams::DEFAULT_COUNT)]
    pub count: u32,

    /// Offset into the list.
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

impl From<PageArgs> for ListParams {
    fn from(args: PageArgs) -> Self {
        Self::new(args.count, args.offset)
    }
}
