use std::ffi::OsString;

use clap::Parser;

pub const DEFAULT_FROM: &str = "Parque Explora";
pub const DEFAULT_TO: &str = "Museo de Antioquia";

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Name of the sight to start from
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_FROM)]
    from: String,

    /// Name of the sight to travel to
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_TO)]
    to: String,

    /// Print all sights and their connections before searching
    #[arg(short, long)]
    list: bool,

    /// Print search statistics after the route
    #[arg(short, long)]
    stats: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cfg {
    pub from: String,
    pub to: String,
    pub list: bool,
    pub stats: bool,
}

impl Cli {
    fn into_cfg(self) -> Cfg {
        Cfg {
            from: self.from,
            to: self.to,
            list: self.list,
            stats: self.stats,
        }
    }
}

/// Parses the process arguments, exits on invalid input.
pub fn parse() -> Cfg {
    Cli::parse().into_cfg()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cli::into_cfg)
}
