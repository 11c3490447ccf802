use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::catalog::SortKey;

pub mod check;
pub mod convert;
pub mod list;
pub mod provinces;
pub mod regions;
pub mod show;
pub mod transfer;

#[derive(Subcommand)]
pub enum Commands {
    /// List states, with sorting and per-column search
    List {
        /// Sort column: id, name, localized-name, owner, manpower
        /// (default from statekit.toml)
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Sort descending
        #[arg(short, long)]
        descending: bool,

        /// Search by state id
        #[arg(long)]
        id: Option<String>,

        /// Search by state name
        #[arg(long)]
        name: Option<String>,

        /// Search by localized name
        #[arg(long)]
        localized: Option<String>,

        /// Search by owner tag
        #[arg(long)]
        owner: Option<String>,

        /// Search by manpower
        #[arg(long)]
        manpower: Option<String>,

        /// Search by province id
        #[arg(long)]
        province: Option<String>,

        /// Require exact (case-normalized) matches instead of substrings
        #[arg(short, long)]
        exact: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one state in full, including its province list
    Show {
        /// State id
        id: u32,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List strategic regions
    Regions {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List provinces from the definition table with their owning state
    Provinces {
        /// Only provinces belonging to this state
        #[arg(long)]
        state: Option<u32>,

        /// Only coastal provinces
        #[arg(long)]
        coastal: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Move provinces from one state to another, updating strategic
    /// regions and rewriting the affected files
    Transfer {
        /// Source state id
        #[arg(short = 'f', long)]
        from: u32,

        /// Target state id
        #[arg(short = 't', long)]
        to: u32,

        /// Province ids to move (comma-separated or repeated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        provinces: Vec<String>,

        /// Print the plan without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Scan the mod tree and report consistency problems
    Check,

    /// TSV and template converters
    Convert {
        #[command(subcommand)]
        command: ConvertCommands,
    },
}

/// Converter commands
#[derive(Subcommand)]
pub enum ConvertCommands {
    /// TSV -> localisation .yml (TAG and TAG_DEF entries per row)
    Loc {
        /// Input TSV file (header row required)
        #[arg(short, long)]
        input: PathBuf,

        /// Output .yml file
        #[arg(short, long)]
        output: PathBuf,

        /// Localisation language (header becomes l_<language>:)
        #[arg(short, long, default_value = "english")]
        language: String,

        /// Column holding the localisation key
        #[arg(long, default_value = "cosmetic_tag")]
        tag_column: String,

        /// Column holding the display text
        #[arg(long, default_value = "localisation")]
        text_column: String,
    },

    /// TSV -> startup_cosmetic_tag script snippet
    Startup {
        /// Input TSV file (header row required)
        #[arg(short, long)]
        input: PathBuf,

        /// Output .txt file
        #[arg(short, long)]
        output: PathBuf,

        /// Column holding the country tag
        #[arg(long, default_value = "tag")]
        tag_column: String,

        /// Column holding the cosmetic tag
        #[arg(long, default_value = "cosmetic_tag")]
        cosmetic_column: String,
    },

    /// Rewrite country history files to first line + shared template
    CountryTemplate {
        /// Directory of country history files
        #[arg(short, long)]
        dir: PathBuf,

        /// Template file providing the shared body
        #[arg(short, long)]
        template: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self, config: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Commands::List {
                sort,
                descending,
                id,
                name,
                localized,
                owner,
                manpower,
                province,
                exact,
                json,
            } => list::execute(
                config,
                list::ListOptions {
                    sort: *sort,
                    descending: *descending,
                    id: id.clone(),
                    name: name.clone(),
                    localized: localized.clone(),
                    owner: owner.clone(),
                    manpower: manpower.clone(),
                    province: province.clone(),
                    exact: *exact,
                    json: *json,
                },
            ),
            Commands::Show { id, json } => show::execute(config, *id, *json),
            Commands::Regions { json } => regions::execute(config, *json),
            Commands::Provinces {
                state,
                coastal,
                json,
            } => provinces::execute(config, *state, *coastal, *json),
            Commands::Transfer {
                from,
                to,
                provinces,
                dry_run,
            } => transfer::execute(config, *from, *to, provinces, *dry_run),
            Commands::Check => check::execute(config),
            Commands::Convert { command } => command.execute(),
        }
    }
}

impl ConvertCommands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            ConvertCommands::Loc {
                input,
                output,
                language,
                tag_column,
                text_column,
            } => convert::loc(input, output, language, tag_column, text_column),
            ConvertCommands::Startup {
                input,
                output,
                tag_column,
                cosmetic_column,
            } => convert::startup(input, output, tag_column, cosmetic_column),
            ConvertCommands::CountryTemplate { dir, template } => {
                convert::country_template(dir, template)
            }
        }
    }
}
