use crate::platform::Selector;
use clap::Parser;
use std::path::PathBuf;

pub mod prompt;

#[derive(Parser, Debug)]
#[command(name = "sam")]
#[command(about = "SAM - Smart Agent Manager: install the autonomous TDD agents into your project", long_about = None)]
#[command(version = env!("SAM_VERSION"))]
#[command(after_help = "\
PLATFORMS:
  claude   Claude Code slash commands (_sam/ and .claude/commands/sam/)
  cursor   Cursor rules (.cursor/rules/sam-*.mdc)
  codex    Codex skills (.codex/skills/sam-*/)
  all      Every platform above

EXAMPLES:
  sam                          Ask for a platform, install in the current directory
  sam ./myapp -p cursor        Install Cursor rules in ./myapp
  sam --platform all           Install for every platform

Existing SAM files in the target are overwritten.")]
pub struct Cli {
    /// Project directory to install into (default: current directory)
    pub target: Option<PathBuf>,

    /// Platform to install for (prompted when omitted)
    #[arg(short = 'p', long, value_enum, env = "SAM_PLATFORM")]
    pub platform: Option<Selector>,

    /// Templates directory to install from
    #[arg(long = "templates", value_name = "DIR", env = "SAM_TEMPLATES_DIR")]
    pub templates: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// List the bundled agents and exit
    #[arg(long = "list-agents")]
    pub list_agents: bool,
}
