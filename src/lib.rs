//! pathgen: a local-first career guidance questionnaire.
//!
//! Users sign up and log in against a single SQLite file, answer a short
//! questionnaire whose choices cascade through a static catalog
//! (course field -> specialization and stream -> careers and entrance exams),
//! and save the result as a guidance record.
//!
//! # Architecture
//!
//! - **Credential store** (`plugins::auth`): unsalted SHA-256 digests in `users`.
//! - **Catalog** (`plugins::catalog`): immutable tables built once per process.
//! - **Guidance store** (`plugins::guidance`): append-only rows in `guidance`.
//! - **Session** (`plugins::session`): explicit logged-in state and form composition.
//!
//! Every storage call goes through `DbBroker`, which opens a connection for the
//! duration of one operation and records it in `<db-stem>.events.jsonl` beside the database.
//!
//! # Examples
//!
//! ```bash
//! pathgen init
//! pathgen auth signup --username asha --password s3cret
//! pathgen catalog show --field engineering --subfield "Computer Engineering"
//! pathgen guide submit --username asha --password s3cret \
//!     --course engineering --subfield "Computer Engineering" --stream "Science (PCM)"
//! pathgen guide history --username asha --password s3cret
//! ```

mod cli;
pub mod core;
pub mod plugins;

use crate::cli::{
    AuthCommand, CatalogCommand, Cli, Command, Credentials, GuideCommand, OutputFormat,
};
use crate::core::store::Store;
use crate::core::{config, db, error, logging, output, time};
use crate::plugins::catalog::Catalog;
use crate::plugins::session::{FormInput, Session};
use crate::plugins::{auth, guidance};

use clap::Parser;
use serde_json::json;

/// What a command produced: a text rendering and the JSON envelope fields.
struct Report {
    cmd: &'static str,
    success: bool,
    text: String,
    data: serde_json::Value,
}

impl Report {
    fn emit(&self, format: OutputFormat) {
        match format {
            OutputFormat::Text => println!("{}", self.text),
            OutputFormat::Json => {
                let status = if self.success { "ok" } else { "error" };
                let envelope = time::command_envelope(self.cmd, status, self.data.clone());
                println!(
                    "{}",
                    serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| envelope.to_string())
                );
            }
        }
    }
}

/// Parse arguments, run one command, and report whether it succeeded.
///
/// Domain failures (wrong password, taken username, ...) return `Ok(false)`;
/// `Err` is reserved for infrastructure and input errors.
pub fn run() -> Result<bool, error::PathgenError> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;
    let cfg = config::load_config(cli.config.as_deref(), &current_dir)?;
    logging::init_logging(&cfg);

    let store = cfg.store();
    let catalog = Catalog::builtin();

    let report = match cli.command {
        Command::Init => {
            db::initialize_db(&store)?;
            Report {
                cmd: "init",
                success: true,
                text: output::render_status(
                    true,
                    &format!("Database ready at {}", store.db_path.display()),
                ),
                data: json!({ "db_path": store.db_path.display().to_string() }),
            }
        }
        Command::Auth(auth_cli) => {
            db::initialize_db(&store)?;
            run_auth(&store, auth_cli.command)?
        }
        Command::Catalog(catalog_cli) => run_catalog(&catalog, catalog_cli.command)?,
        Command::Guide(guide_cli) => {
            db::initialize_db(&store)?;
            run_guide(&store, &catalog, guide_cli.command)?
        }
    };

    report.emit(cli.format);
    Ok(report.success)
}

fn run_auth(store: &Store, command: AuthCommand) -> Result<Report, error::PathgenError> {
    let report = match command {
        AuthCommand::Signup(Credentials { username, password }) => {
            let outcome = auth::signup(store, &username, &password)?;
            Report {
                cmd: "auth.signup",
                success: outcome.success,
                text: output::outcome_line(&outcome),
                data: json!({ "outcome": outcome }),
            }
        }
        AuthCommand::Login(Credentials { username, password }) => {
            let outcome = auth::login(store, &username, &password)?;
            let text = match outcome.user_id {
                Some(id) => format!(
                    "{}\nUser id: {}",
                    output::render_status(true, &outcome.message),
                    id
                ),
                None => output::render_status(false, &outcome.message),
            };
            Report {
                cmd: "auth.login",
                success: outcome.user_id.is_some(),
                text,
                data: json!({ "outcome": outcome }),
            }
        }
        AuthCommand::Reset {
            username,
            new_password,
        } => {
            let outcome = auth::reset_password(store, &username, &new_password)?;
            Report {
                cmd: "auth.reset",
                success: outcome.success,
                text: output::outcome_line(&outcome),
                data: json!({ "outcome": outcome }),
            }
        }
    };
    Ok(report)
}

fn run_catalog(catalog: &Catalog, command: CatalogCommand) -> Result<Report, error::PathgenError> {
    match command {
        CatalogCommand::Fields => Ok(Report {
            cmd: "catalog.fields",
            success: true,
            text: output::bullet_list(catalog.fields()),
            data: json!({ "fields": catalog.fields() }),
        }),
        CatalogCommand::Show {
            field,
            subfield,
            stream,
        } => {
            let view = catalog.field_view(&field)?;
            let mut text = format!(
                "Course field: {}\n\nSpecializations:\n{}\n\nRecommended streams:\n{}\n\nEntrance exams:\n{}",
                view.field,
                output::bullet_list(catalog.subfields(&field)?),
                output::bullet_list(catalog.streams(&field)?),
                output::bullet_list(catalog.exams_for_field(&field)),
            );
            let mut data = json!({ "view": view });

            if let Some(subfield) = subfield {
                let careers = catalog.careers(&subfield)?;
                text.push_str(&format!(
                    "\n\nCareer paths for {}:\n{}",
                    subfield,
                    output::bullet_list(careers)
                ));
                data["careers"] = json!(careers);
            }
            if let Some(stream) = stream {
                let description = catalog.stream_description(&stream)?;
                text.push_str(&format!("\n\n{}: {}", stream, description));
                data["stream_description"] = json!(description);
            }

            Ok(Report {
                cmd: "catalog.show",
                success: true,
                text,
                data,
            })
        }
    }
}

fn run_guide(
    store: &Store,
    catalog: &Catalog,
    command: GuideCommand,
) -> Result<Report, error::PathgenError> {
    let mut session = Session::new();

    match command {
        GuideCommand::Submit {
            credentials,
            user_type,
            standard,
            marks,
            course,
            subfield,
            stream,
            extra_info,
        } => {
            let login = session.login(store, &credentials.username, &credentials.password)?;
            if !session.is_authenticated() {
                return Ok(Report {
                    cmd: "guide.submit",
                    success: false,
                    text: output::render_status(false, &login.message),
                    data: json!({ "outcome": login }),
                });
            }

            let input = FormInput {
                user_type,
                standard,
                marks,
                desired_course: course,
                chosen_subfield: subfield,
                chosen_stream: stream,
                extra_info,
            };
            let outcome = session.submit(store, catalog, &input)?;
            Ok(Report {
                cmd: "guide.submit",
                success: outcome.success,
                text: output::outcome_line(&outcome),
                data: json!({ "outcome": outcome }),
            })
        }
        GuideCommand::History(Credentials { username, password }) => {
            let login = session.login(store, &username, &password)?;
            let Some(user_id) = session.user_id else {
                return Ok(Report {
                    cmd: "guide.history",
                    success: false,
                    text: output::render_status(false, &login.message),
                    data: json!({ "outcome": login }),
                });
            };

            let username = auth::find_user(store, user_id)?
                .map(|u| u.username)
                .unwrap_or(username);
            let records = guidance::list_for_user(store, user_id)?;
            let header = format!("Guidance history for {} ({} saved)", username, records.len());
            let body = if records.is_empty() {
                "No guidance saved yet.".to_string()
            } else {
                records
                    .iter()
                    .map(|r| {
                        format!(
                            "#{} [{}] {} / {} / {} ({})\n    careers: {}\n    exams: {}\n    notes: {}",
                            r.id,
                            r.created_at,
                            r.desired_course,
                            r.chosen_subfield,
                            r.chosen_stream,
                            r.user_type,
                            r.career_options,
                            if r.entrance_exams.is_empty() { "(none)" } else { r.entrance_exams.as_str() },
                            output::compact_line(&r.extra_info, 60),
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            Ok(Report {
                cmd: "guide.history",
                success: true,
                text: format!("{}\n{}", header, body),
                data: json!({ "user_id": user_id, "username": username, "records": records }),
            })
        }
    }
}
