use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every short form together with the identifier it stands for
    List {
        #[arg(long, help = "Print the table as JSON instead of plain text")]
        json: bool,
    },
    /// Resolve a short form to its full identifier
    Resolve {
        #[arg(help = "Short form to resolve (case-insensitive)")]
        alias: String,
    },
    /// Print the short form of a full identifier
    AliasOf {
        #[arg(help = "Identifier, in the exact case it was supplied")]
        identifier: String,
    },
    /// Expand the short form stored under a key of a KEY=VALUE map
    Expand {
        #[arg(long, help = "Key whose value should be expanded")]
        key: String,

        #[arg(long = "set", value_name = "KEY=VALUE", help = "Map entry, may be repeated")]
        assignments: Vec<String>,

        #[arg(long, help = "Print the resulting map as JSON")]
        json: bool,
    },
}
