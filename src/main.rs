use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jewelry_catalog::catalog::{CatalogGroup, CatalogItem, JewelryType, TileTemplate};
use jewelry_catalog::catalog_store::CatalogStore;
use jewelry_catalog::config::{AppConfig, CliConfig, FileConfig};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

fn parse_jewelry_type(s: &str) -> Result<JewelryType, String> {
    JewelryType::from_str(s).ok_or_else(|| format!("Unknown jewelry type \"{}\"", s))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to the JSON catalog. Defaults to the bundled sample catalog.
    #[clap(long, value_parser = parse_path)]
    pub catalog: Option<PathBuf>,

    /// Directory that item image paths are relative to.
    #[clap(long, value_parser = parse_path)]
    pub image_base: Option<PathBuf>,

    /// Fail to load a catalog that reuses a group or item id.
    #[clap(long)]
    pub strict_ids: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the catalog and print a summary.
    Check,
    /// List all groups with their top items.
    Groups,
    /// Show a group by id.
    Group { id: String },
    /// List the groups of a jewelry type.
    Type {
        #[clap(value_parser = parse_jewelry_type)]
        jewelry_type: JewelryType,
    },
    /// Show an item by id.
    Item { id: String },
    /// Print the tile template selected for an item id.
    Template { id: String },
}

fn print_group(group: &CatalogGroup) {
    println!(
        "{} [{}] \"{}\" - {} items",
        group.unique_id(),
        group.jewelry_type(),
        group.title(),
        group.items().len()
    );
    for item in group.top_items() {
        println!("  {} ({})", item.unique_id(), TileTemplate::for_item(item));
    }
    let hidden = group.items().len() - group.top_items().len();
    if hidden > 0 {
        println!("  ... and {} more", hidden);
    }
}

fn print_item(store: &CatalogStore, item: &CatalogItem) {
    println!("{} \"{}\"", item.unique_id(), item.title());
    println!("  group:    {}", item.group_id());
    println!("  subtitle: {}", item.subtitle());
    println!("  span:     {}x{}", item.col_span(), item.row_span());
    println!("  template: {}", TileTemplate::for_item(item));
    match store.image_path(item.image()) {
        Some(path) => println!("  image:    {}", path.display()),
        None => println!("  image:    none"),
    }
    if !item.description().is_empty() {
        println!("  {}", item.description());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Reading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config = CliConfig {
        catalog_path: cli_args.catalog.clone(),
        image_base: cli_args.image_base.clone(),
        strict_unique_ids: cli_args.strict_ids,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;
    let store = CatalogStore::from_config(&config);

    match cli_args.command {
        Command::Check => {
            let groups = store.get_all_groups().await?;
            println!(
                "Catalog loaded: {} groups, {} items.",
                groups.len(),
                groups.iter().map(|g| g.items().len()).sum::<usize>()
            );
        }
        Command::Groups => {
            for group in store.get_all_groups().await? {
                print_group(group);
            }
        }
        Command::Group { id } => match store.get_group(&id).await? {
            Some(group) => print_group(group),
            None => println!("Group {} not found.", id),
        },
        Command::Type { jewelry_type } => match store.get_groups_by_type(jewelry_type).await? {
            Some(groups) => {
                for group in groups {
                    print_group(group);
                }
            }
            None => println!("No groups of type {}.", jewelry_type),
        },
        Command::Item { id } => match store.get_item(&id).await? {
            Some(item) => print_item(&store, item),
            None => println!("Item {} not found.", id),
        },
        Command::Template { id } => println!("{}", TileTemplate::for_item_id(&id)),
    }

    Ok(())
}
