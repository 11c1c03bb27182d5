use clap::{ArgAction, Parser, Subcommand, ValueHint};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}",
    arg_required_else_help = true
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as json
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Provide custom config file
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show whether the ACME client service is enabled
    ///
    /// Exits with status 1 when it is not.
    Status {
        /// Also require at least one enabled certificate
        #[arg(required = false, long)]
        check_certificates: bool,
    },

    /// Show a certificate and its restart actions
    #[command(arg_required_else_help = true)]
    #[clap(name = "certificate", visible_alias = "cert")]
    Certificate {
        /// Certificate id
        #[arg(required = true)]
        id: String,
    },

    /// Show a restart action
    #[command(arg_required_else_help = true)]
    Action {
        /// Action uuid
        #[arg(required = true)]
        uuid: String,
    },

    /// Check whether a plugin package is installed
    ///
    /// Exits with status 1 when it is not.
    #[command(arg_required_else_help = true)]
    Plugin {
        /// Package name, e.g. os-acme-client
        #[arg(required = true)]
        name: String,
    },

    /// List installed plugin packages
    #[clap(name = "plugins", visible_alias = "ls")]
    Plugins,

    /// Print the effective configuration
    Config,

    /// Generate default config
    #[clap(name = "defconfig")]
    DefConfig,
}
