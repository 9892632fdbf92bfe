mod config;

use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use campus_client::nav::{self, NavDecision};
use campus_client::types::{
    AddClassroomRequest, BuildingPageQuery, ChangePasswordRequest, ClassroomPageQuery,
    ClassroomTypePageQuery, LoginRequest, UpdateClassroomRequest, UserType,
};
use campus_client::{api, ClientConfig, ClientError, HttpClient, Session, SessionStorage};
use config::Config;

#[derive(Parser)]
#[command(name = "campusctl")]
#[command(version, about = "Campus Administration Command Line Tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Campus server URL (overrides CAMPUS_SERVER_URL and the config file)
    #[arg(long, global = true)]
    server: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        /// User role: STUDENT, TEACHER, ACADEMIC_ADMIN or SYSTEM_ADMIN
        #[arg(short = 't', long)]
        user_type: UserType,

        #[arg(short, long)]
        user_name: String,

        #[arg(short, long)]
        password: String,
    },
    /// Log out and clear the persisted session
    Logout,
    /// Change the password of the logged-in user
    ChangePassword {
        #[arg(long)]
        new_password: String,

        #[arg(long)]
        confirm_password: String,
    },
    /// Show the current session
    Whoami,
    /// Manage buildings
    Building {
        #[command(subcommand)]
        command: BuildingCommands,
    },
    /// Manage classrooms
    Classroom {
        #[command(subcommand)]
        command: ClassroomCommands,
    },
    /// Inspect classroom types
    ClassroomType {
        #[command(subcommand)]
        command: ClassroomTypeCommands,
    },
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum BuildingCommands {
    /// Page through buildings
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,

        #[arg(long, default_value_t = 10)]
        size: u64,

        /// Filter by building number
        #[arg(long)]
        num: Option<String>,

        /// Filter by building name
        #[arg(long)]
        name: Option<String>,
    },
    /// Fetch one building
    Get { building_uuid: String },
    /// Create a building
    Add {
        #[arg(long)]
        num: String,

        #[arg(long)]
        name: String,
    },
    /// Update a building
    Update {
        building_uuid: String,

        #[arg(long)]
        num: String,

        #[arg(long)]
        name: String,
    },
    /// Delete a building
    Delete { building_uuid: String },
}

#[derive(Subcommand)]
enum ClassroomCommands {
    /// Page through classrooms
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,

        #[arg(long, default_value_t = 10)]
        size: u64,

        #[arg(long)]
        building_uuid: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        capacity: Option<u32>,

        #[arg(long)]
        type_uuid: Option<String>,
    },
    /// Fetch one classroom (or the default scope when no uuid is given)
    Get { classroom_uuid: Option<String> },
    /// Create a classroom
    Add {
        #[arg(long)]
        building_uuid: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        capacity: u32,

        #[arg(long)]
        type_uuid: String,
    },
    /// Update a classroom
    Update {
        classroom_uuid: String,

        #[arg(long)]
        building_uuid: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        capacity: u32,

        #[arg(long)]
        type_uuid: String,
    },
    /// Delete a classroom
    Delete { classroom_uuid: String },
}

#[derive(Subcommand)]
enum ClassroomTypeCommands {
    /// Page through classroom types
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,

        #[arg(long, default_value_t = 10)]
        size: u64,

        /// Filter by type name
        #[arg(long)]
        name: Option<String>,
    },
    /// Fetch one classroom type
    Get { classroom_type_uuid: String },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Persist the server URL used by future invocations
    SetServer { url: String },
    /// Print the effective configuration
    Show,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load().context("Failed to load CLI config")?;

    if let Commands::Config { command } = &cli.command {
        match command {
            ConfigCommands::SetServer { url } => {
                let updated = Config {
                    server_url: Some(url.clone()),
                };
                updated.save().context("Failed to save CLI config")?;
                println!("Server URL set to {url}");
            }
            ConfigCommands::Show => {
                println!("server_url: {}", config.resolve_server_url(cli.server));
            }
        }
        return Ok(());
    }

    let server_url = config.resolve_server_url(cli.server);
    let storage = SessionStorage::new(Config::campus_dir()?);
    let client = HttpClient::new(&ClientConfig::new(server_url), storage);
    let mut session = Session::new(client);
    tracing::debug!(
        server_url = session.client().base_url(),
        logged_in = session.is_logged_in(),
        "dispatching command"
    );

    match cli.command {
        Commands::Login {
            user_type,
            user_name,
            password,
        } => {
            session
                .login(&LoginRequest {
                    user_type,
                    user_name,
                    password,
                })
                .await?;
            println!("Logged in as {}", user_type);
        }
        Commands::Logout => {
            session.logout().await;
            println!("Logged out");
        }
        Commands::ChangePassword {
            new_password,
            confirm_password,
        } => {
            api::auth::change_password(
                session.client(),
                &ChangePasswordRequest {
                    new_password,
                    confirm_password,
                },
            )
            .await?;
            println!("Password changed");
        }
        Commands::Whoami => match session.user_info() {
            Some(info) => print_json(info)?,
            None => println!("Not logged in"),
        },
        Commands::Building { command } => match command {
            BuildingCommands::List {
                page,
                size,
                num,
                name,
            } => {
                let result = api::building::get_page(
                    session.client(),
                    &BuildingPageQuery {
                        page,
                        size,
                        building_num: num,
                        building_name: name,
                    },
                )
                .await?;
                print_json(&result)?;
            }
            BuildingCommands::Get { building_uuid } => {
                let building = api::building::get(session.client(), &building_uuid).await?;
                print_json(&building)?;
            }
            BuildingCommands::Add { num, name } => {
                api::building::add(session.client(), &num, &name).await?;
                println!("Building added");
            }
            BuildingCommands::Update {
                building_uuid,
                num,
                name,
            } => {
                api::building::update(session.client(), &building_uuid, &num, &name).await?;
                println!("Building updated");
            }
            BuildingCommands::Delete { building_uuid } => {
                api::building::delete(session.client(), &building_uuid).await?;
                println!("Building deleted");
            }
        },
        Commands::Classroom { command } => match command {
            ClassroomCommands::List {
                page,
                size,
                building_uuid,
                name,
                capacity,
                type_uuid,
            } => {
                let result = api::classroom::get_page(
                    session.client(),
                    &ClassroomPageQuery {
                        page,
                        size,
                        building_uuid,
                        classroom_name: name,
                        classroom_capacity: capacity,
                        classroom_type_uuid: type_uuid,
                    },
                )
                .await?;
                print_json(&result)?;
            }
            ClassroomCommands::Get { classroom_uuid } => {
                let classroom =
                    api::classroom::get(session.client(), classroom_uuid.as_deref()).await?;
                print_json(&classroom)?;
            }
            ClassroomCommands::Add {
                building_uuid,
                name,
                capacity,
                type_uuid,
            } => {
                api::classroom::add(
                    session.client(),
                    &AddClassroomRequest {
                        building_uuid,
                        classroom_name: name,
                        capacity,
                        classroom_type_uuid: type_uuid,
                    },
                )
                .await?;
                println!("Classroom added");
            }
            ClassroomCommands::Update {
                classroom_uuid,
                building_uuid,
                name,
                capacity,
                type_uuid,
            } => {
                api::classroom::update(
                    session.client(),
                    &UpdateClassroomRequest {
                        classroom_uuid,
                        building_uuid,
                        classroom_name: name,
                        classroom_capacity: capacity,
                        classroom_type_uuid: type_uuid,
                    },
                )
                .await?;
                println!("Classroom updated");
            }
            ClassroomCommands::Delete { classroom_uuid } => {
                api::classroom::delete(session.client(), &classroom_uuid).await?;
                println!("Classroom deleted");
            }
        },
        Commands::ClassroomType { command } => match command {
            ClassroomTypeCommands::List { page, size, name } => {
                let result = api::classroom_type::get_page(
                    session.client(),
                    &ClassroomTypePageQuery {
                        page,
                        size,
                        classroom_type_name: name,
                    },
                )
                .await?;
                print_json(&result)?;
            }
            ClassroomTypeCommands::Get {
                classroom_type_uuid,
            } => {
                let classroom_type =
                    api::classroom_type::get(session.client(), &classroom_type_uuid).await?;
                print_json(&classroom_type)?;
            }
        },
        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        // The CLI owns navigation: an unauthorized API result means the
        // persisted session is already gone, so point the user at login.
        if let Some(client_err) = err.downcast_ref::<ClientError>() {
            if nav::decision_for_error(client_err) == Some(NavDecision::RedirectLogin) {
                eprintln!("Session expired or invalid. Run `campusctl login` to sign in again.");
            }
        }
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
