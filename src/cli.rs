//! CLI struct definitions for the pathgen command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use crate::plugins::guidance::UserType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "pathgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Career guidance questionnaire: sign up, pick a course field, and save the suggested path."
)]
pub(crate) struct Cli {
    /// Config file (defaults to ./pathgen.toml when present).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    /// Output format: 'text' or 'json'.
    #[clap(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create the users and guidance tables
    Init,
    /// Accounts: signup, login, password reset
    Auth(AuthCli),
    /// Browse course fields, specializations, streams, and exams
    Catalog(CatalogCli),
    /// Fill in and review guidance records
    Guide(GuideCli),
}

#[derive(clap::Args, Debug)]
pub(crate) struct Credentials {
    #[clap(long)]
    pub username: String,
    /// Prefer `PATHGEN_PASSWORD` to keep the password out of shell history and `ps`.
    #[clap(long, env = "PATHGEN_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct AuthCli {
    #[clap(subcommand)]
    pub command: AuthCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum AuthCommand {
    /// Create a new account.
    Signup(Credentials),
    /// Check credentials and print the user id.
    Login(Credentials),
    /// Overwrite the password for an existing username.
    Reset {
        #[clap(long)]
        username: String,
        /// Falls back to `PATHGEN_NEW_PASSWORD`.
        #[clap(long, env = "PATHGEN_NEW_PASSWORD", hide_env_values = true)]
        new_password: String,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct CatalogCli {
    #[clap(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CatalogCommand {
    /// List the course fields.
    Fields,
    /// Show specializations, streams, and exams for a course field.
    Show {
        #[clap(long)]
        field: String,
        /// Also list careers for this specialization.
        #[clap(long)]
        subfield: Option<String>,
        /// Also describe this stream.
        #[clap(long)]
        stream: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct GuideCli {
    #[clap(subcommand)]
    pub command: GuideCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum GuideCommand {
    /// Log in, compose a guidance record from the catalog, and save it.
    Submit {
        #[clap(flatten)]
        credentials: Credentials,
        #[clap(long, value_enum, default_value_t = UserType::Student)]
        user_type: UserType,
        /// Current standard/class (1-12).
        #[clap(long, default_value = "")]
        standard: String,
        /// Average marks (%).
        #[clap(long, default_value = "")]
        marks: String,
        /// Desired course field (see `catalog fields`).
        #[clap(long)]
        course: String,
        #[clap(long)]
        subfield: String,
        #[clap(long)]
        stream: String,
        /// Extra information or questions.
        #[clap(long, default_value = "")]
        extra_info: String,
    },
    /// Log in and list previously saved records.
    History(Credentials),
}
