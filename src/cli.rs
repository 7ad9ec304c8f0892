use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "muxcoder-bus",
    version,
    about = "Resolve muxcoder bus identity and file locations for the current tmux pane."
)]
pub(crate) struct Cli {
    /// Colorize stderr diagnostics: auto|always|never
    #[arg(long = "color", value_enum, global = true)]
    pub(crate) color: Option<muxcoder_agent_bus::ColorMode>,

    #[command(subcommand)]
    pub(crate) command: Cmd,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Cmd {
    /// Print the resolved session and role
    Whoami {
        /// Emit machine-readable JSON (includes where each value came from)
        #[arg(long)]
        json: bool,
    },

    /// Print bus file locations for a session/role
    Paths {
        /// Session name (default: resolved session)
        #[arg(long)]
        session: Option<String>,
        /// Role name (default: resolved role)
        #[arg(long)]
        role: Option<String>,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the tmux target of a window's agent pane (session:window.pane)
    PaneTarget {
        window: String,
        /// Session name (default: resolved session)
        #[arg(long)]
        session: Option<String>,
    },

    /// List known roles in registry order
    Roles {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Exit 0 when ROLE is a known role, 1 otherwise
    IsRole { role: String },

    /// Print whether WINDOW has a tool in its left pane (true|false)
    SplitLeft { window: String },

    /// Print the memory file path for ROLE ("shared" for the shared file)
    MemoryPath { role: String },

    /// Print resolved variables as KEY=value lines
    Env {
        /// Emit `export KEY='value'` lines suitable for eval
        #[arg(long)]
        shell: bool,
    },

    /// Expand a tmux format (e.g. "#S") for this pane; fails loudly
    Query { format: String },

    /// Show resolution sources and tmux availability
    Doctor,
}
