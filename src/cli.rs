//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// spmsetup - SPM standalone toolkit installer
///
/// Install the SPM standalone toolkit and its MATLAB Runtime into a Conda
/// environment, and wire up the environment's activation hooks.
#[derive(Parser, Debug)]
#[command(
    name = "spmsetup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer for the SPM standalone toolkit and its MATLAB Runtime",
    long_about = "spmsetup assembles the SPM standalone toolkit from its split archive parts, \
                  installs it, downloads and installs the MATLAB Runtime for the host \
                  operating system, and writes activation hooks into a Conda environment.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  spmsetup install\n    \
                  spmsetup install --spm-dir build/lib/spm\n    \
                  spmsetup download\n    \
                  spmsetup env --prefix /opt/conda/envs/lameg\n    \
                  spmsetup status\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/danclab/spmsetup"
)]
pub struct Cli {
    /// Conda environment prefix (defaults to $CONDA_PREFIX)
    #[arg(long, short = 'p', global = true)]
    pub prefix: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full installation: toolkit, runtime, environment hooks
    Install(InstallArgs),

    /// Download the MATLAB Runtime archive for this platform
    Download,

    /// Write the environment activation hooks only
    Env,

    /// Show what is installed and cached
    Status,

    /// Remove downloaded runtime archives
    Clean(CleanArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Full installation:\n    spmsetup install\n\n\
                   Toolkit build directory elsewhere:\n    spmsetup install --spm-dir out/spm\n\n\
                   Runtime and hooks only (toolkit already installed):\n    spmsetup install --skip-toolkit\n\n\
                   Non-interactive (CI):\n    spmsetup install --yes")]
pub struct InstallArgs {
    /// Toolkit build directory to assemble and install from
    #[arg(long, value_name = "PATH")]
    pub spm_dir: Option<PathBuf>,

    /// Skip toolkit assembly and installation
    #[arg(long)]
    pub skip_toolkit: bool,

    /// Skip the runtime download and installation
    #[arg(long)]
    pub skip_runtime: bool,

    /// Skip writing the environment hooks
    #[arg(long)]
    pub skip_hooks: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove cached runtime archives:\n    spmsetup clean\n\n\
                  Without confirmation:\n    spmsetup clean -y")]
pub struct CleanArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    spmsetup completions --shell bash > ~/.bash_completion.d/spmsetup\n\n\
                  Generate zsh completions:\n    spmsetup completions --shell zsh > ~/.zfunc/_spmsetup\n\n\
                  Generate fish completions:\n    spmsetup completions --shell fish > ~/.config/fish/completions/spmsetup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
