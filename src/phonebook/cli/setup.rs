use clap::{Parser, Subcommand, ValueEnum};
use phonebook::model::ContactField;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version = get_version())]
#[command(about = "A small terminal phonebook", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Phonebook file to use (overrides PHONEBOOK_FILE and the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file to read instead of the default phonebook.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Create a new contact
    #[command(alias = "add")]
    Create {
        /// Contact name
        name: String,

        /// Phone number: 9 to 12 digits, optionally prefixed with '+'
        phone: String,

        /// Free-form comment
        #[arg(default_value = "")]
        comment: String,
    },

    /// Find contacts whose name, phone or comment contains the query
    #[command(alias = "find")]
    Search { query: String },

    /// Change one field of a contact
    Update {
        /// Contact number as shown by `list`
        index: usize,

        /// Field to change
        field: FieldArg,

        /// New value
        value: String,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Contact number as shown by `list`
        index: usize,
    },

    /// Create the phonebook file if it does not exist
    Init,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Name,
    Phone,
    Comment,
}

impl From<FieldArg> for ContactField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => ContactField::Name,
            FieldArg::Phone => ContactField::Phone,
            FieldArg::Comment => ContactField::Comment,
        }
    }
}
