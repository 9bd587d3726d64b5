//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use domain::{DEFAULT_PAGE_SIZE, UserInfo};

/// User service - persistence gateway for user records
#[derive(Parser, Debug)]
#[command(name = "user-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Inspect and edit user records
    Users(UsersArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// User record actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Print the record with this primary key
    Get { id: String },

    /// Print the record carrying this user id
    Find { user_id: String },

    /// Print whether a primary key is stored
    Exists { id: String },

    /// Print all records, or one page of them
    List {
        /// Page number (1-indexed); omit to print every record
        #[arg(long)]
        page: Option<u64>,
        /// Records per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: u64,
    },

    /// Print the number of stored records
    Count,

    /// Insert or update a record
    Save(SaveArgs),

    /// Delete the record with this primary key (no-op if absent)
    Delete { id: String },
}

/// Fields of a record to save
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Primary key; generated when omitted
    #[arg(long, default_value = "")]
    pub id: String,
    #[arg(long)]
    pub user_id: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub profile_pic: Option<String>,
}

impl From<SaveArgs> for UserInfo {
    fn from(args: SaveArgs) -> Self {
        UserInfo {
            id: args.id,
            user_id: args.user_id,
            first_name: args.first_name,
            last_name: args.last_name,
            phone_number: args.phone_number,
            email: args.email,
            profile_pic: args.profile_pic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_save() {
        let cli = Cli::parse_from([
            "user-service",
            "users",
            "save",
            "--user-id",
            "alice",
            "--first-name",
            "Alice",
            "--last-name",
            "Liddell",
            "--email",
            "alice@example.com",
        ]);

        let Commands::Users(UsersArgs { action: UsersAction::Save(args) }) = cli.command else {
            panic!("expected users save");
        };
        let record = UserInfo::from(args);
        assert!(record.needs_id());
        assert_eq!(record.user_id, "alice");
        assert_eq!(record.email.as_deref(), Some("alice@example.com"));
        assert_eq!(record.phone_number, None);
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::parse_from(["user-service", "-v", "users", "list"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Users(UsersArgs { action: UsersAction::List { page, per_page } }) => {
                assert_eq!(page, None);
                assert_eq!(per_page, DEFAULT_PAGE_SIZE);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
