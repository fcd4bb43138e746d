use chrono::{DateTime, TimeZone, Utc};
use clap::{Args, Parser, Subcommand};
use shipyardapp::criteria::{Range, ShipCriteria};
use shipyardapp::model::{ShipDraft, ShipType};
use shipyardapp::page::ShipOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shipyard",
    bin_name = "shipyard",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Catalog of spaceships with derived ratings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read configuration from this TOML file
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// JSON file holding the catalog
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a ship to the catalog
    #[command(display_order = 1)]
    Create(ShipArgs),

    /// Show one ship
    #[command(display_order = 2)]
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Change some fields of a ship; the rating is recomputed
    #[command(display_order = 3)]
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i64,

        #[command(flatten)]
        fields: ShipArgs,
    },

    /// Remove a ship
    #[command(alias = "rm", display_order = 4)]
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Tell whether a ship exists
    #[command(display_order = 5)]
    Exists {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// List ships matching the criteria, one page at a time
    #[command(alias = "ls", display_order = 6)]
    List {
        #[command(flatten)]
        criteria: CriteriaArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Count ships matching the criteria
    #[command(display_order = 7)]
    Count {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },
}

/// Ship fields. All optional at parse time; `create` reports the missing ones.
#[derive(Args, Debug, Default)]
pub struct ShipArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub planet: Option<String>,

    /// TRANSPORT, MILITARY or MERCHANT
    #[arg(long, value_parser = parse_ship_type)]
    pub ship_type: Option<ShipType>,

    /// RFC 3339 timestamp or epoch milliseconds
    #[arg(long, value_parser = parse_instant)]
    pub prod_date: Option<DateTime<Utc>>,

    #[arg(long)]
    pub speed: Option<f64>,

    #[arg(long)]
    pub crew_size: Option<i32>,

    #[arg(long, value_name = "BOOL")]
    pub used: Option<bool>,
}

impl From<ShipArgs> for ShipDraft {
    fn from(args: ShipArgs) -> Self {
        ShipDraft {
            name: args.name,
            planet: args.planet,
            ship_type: args.ship_type,
            prod_date: args.prod_date,
            speed: args.speed,
            crew_size: args.crew_size,
            is_used: args.used,
        }
    }
}

#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Criteria")]
pub struct CriteriaArgs {
    /// Name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Planet contains this text
    #[arg(long)]
    pub planet: Option<String>,

    #[arg(long, value_parser = parse_ship_type)]
    pub ship_type: Option<ShipType>,

    /// Produced at or after this instant
    #[arg(long, value_parser = parse_instant)]
    pub after: Option<DateTime<Utc>>,

    /// Produced at or before this instant
    #[arg(long, value_parser = parse_instant)]
    pub before: Option<DateTime<Utc>>,

    #[arg(long, value_name = "BOOL")]
    pub used: Option<bool>,

    #[arg(long)]
    pub min_speed: Option<f64>,

    #[arg(long)]
    pub max_speed: Option<f64>,

    #[arg(long)]
    pub min_crew_size: Option<i32>,

    #[arg(long)]
    pub max_crew_size: Option<i32>,

    #[arg(long)]
    pub min_rating: Option<f64>,

    #[arg(long)]
    pub max_rating: Option<f64>,
}

impl From<CriteriaArgs> for ShipCriteria {
    fn from(args: CriteriaArgs) -> Self {
        ShipCriteria {
            name: args.name,
            planet: args.planet,
            ship_type: args.ship_type,
            prod_date: Range::new(args.after, args.before),
            is_used: args.used,
            speed: Range::new(args.min_speed, args.max_speed),
            crew_size: Range::new(args.min_crew_size, args.max_crew_size),
            rating: Range::new(args.min_rating, args.max_rating),
        }
    }
}

#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Paging")]
pub struct PageArgs {
    /// Page number, starting at 0
    #[arg(long)]
    pub page: Option<u32>,

    /// Ships per page (configured default: 3)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// id, speed, date or rating
    #[arg(long, value_parser = parse_order)]
    pub order: Option<ShipOrder>,
}

fn parse_ship_type(s: &str) -> Result<ShipType, String> {
    s.parse().map_err(|e: shipyardapp::error::ShipyardError| e.to_string())
}

fn parse_order(s: &str) -> Result<ShipOrder, String> {
    s.parse().map_err(|e: shipyardapp::error::ShipyardError| e.to_string())
}

/// Accepts an RFC 3339 timestamp or a count of milliseconds since the epoch.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let millis: i64 = s
        .parse()
        .map_err(|_| format!("'{}' is neither RFC 3339 nor epoch milliseconds", s))?;
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| format!("'{}' is out of range", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shipyard").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn instant_accepts_rfc3339_and_millis() {
        let a = parse_instant("3015-01-01T00:00:00Z").unwrap();
        assert_eq!(a.year(), 3015);

        let b = parse_instant("0").unwrap();
        assert_eq!(b, Utc.timestamp_millis_opt(0).unwrap());

        let offset = parse_instant("3000-12-31T23:30:00-02:00").unwrap();
        assert_eq!(offset.year(), 3001);

        assert!(parse_instant("yesterday").is_err());
    }

    #[test]
    fn create_args_become_a_draft() {
        let cli = parse(&[
            "create",
            "--name",
            "Orion",
            "--planet",
            "Earth",
            "--ship-type",
            "military",
            "--prod-date",
            "3015-01-01T00:00:00Z",
            "--speed",
            "0.5",
            "--crew-size",
            "10",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        let draft = ShipDraft::from(args);
        assert_eq!(draft.ship_type, Some(ShipType::Military));
        assert_eq!(draft.speed, Some(0.5));
        assert_eq!(draft.is_used, None);
    }

    #[test]
    fn list_args_become_criteria_and_page() {
        let cli = parse(&[
            "--json",
            "list",
            "--planet",
            "Mars",
            "--used",
            "false",
            "--min-speed",
            "0.2",
            "--max-rating",
            "5",
            "--page",
            "1",
            "--order",
            "rating",
        ]);
        assert!(cli.json);
        let Commands::List { criteria, page } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(page.page, Some(1));
        assert_eq!(page.page_size, None);
        assert_eq!(page.order, Some(ShipOrder::Rating));

        let criteria = ShipCriteria::from(criteria);
        assert_eq!(criteria.planet.as_deref(), Some("Mars"));
        assert_eq!(criteria.is_used, Some(false));
        assert_eq!(criteria.speed, Range::at_least(0.2));
        assert_eq!(criteria.rating, Range::at_most(5.0));
        assert!(criteria.crew_size.is_unbounded());
    }

    #[test]
    fn negative_id_parses_for_later_rejection() {
        let cli = parse(&["get", "-3"]);
        assert!(matches!(cli.command, Commands::Get { id: -3 }));
    }

    #[test]
    fn unknown_ship_type_is_a_parse_error() {
        let result = Cli::try_parse_from(["shipyard", "count", "--ship-type", "yacht"]);
        assert!(result.is_err());
    }
}
