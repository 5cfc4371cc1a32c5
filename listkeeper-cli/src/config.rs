use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "listkeeper",
    version,
    about = "Keep a list of text items from an interactive menu"
)]
pub struct Cli {
    /// Text shown in the banner printed at startup
    #[arg(long, default_value = "List Keeper")]
    pub title: String,

    /// Skip the startup banner
    #[arg(long)]
    pub no_header: bool,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// The banner text, unless the banner is disabled.
    pub fn header(&self) -> Option<&str> {
        if self.no_header {
            None
        } else {
            Some(&self.title)
        }
    }
}
