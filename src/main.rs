use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use smartcook::catalog::{Goal, MealType, SkillLevel};
use smartcook::collectors::{IngredientSelector, PantryShelf, ProfileSelector};
use smartcook::config::AppConfig;
use smartcook::providers::ProviderFactory;
use smartcook::server::{self, RecipeGenerator};
use smartcook::{assemble_prompt, render, CookPage, RecipeClient, RecipeView, ViewMode};
use std::io::{self, BufRead, Write};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "smartcook", version)]
#[command(about = "Turn what is in your fridge into a step-by-step recipe")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the recipe backend
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// LLM provider (openai, anthropic, google, fake)
        #[arg(long)]
        provider: Option<String>,
    },
    /// Ask the backend for a recipe
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Ingredient you have; repeat for more
    #[arg(long = "ingredient", short = 'i', required = true)]
    ingredients: Vec<String>,
    /// Only use the listed ingredients
    #[arg(long, default_value_t = false)]
    strict: bool,
    #[arg(long, default_value = "zero")]
    skill: SkillLevel,
    #[arg(long, default_value = "normal")]
    goal: Goal,
    #[arg(long, default_value = "breakfast")]
    meal: MealType,
    #[arg(long = "equipment")]
    equipment: Vec<String>,
    /// Pantry item; repeat for more. Added to the default staples.
    #[arg(long = "pantry")]
    pantry: Vec<String>,
    /// Start from an empty pantry instead of the default staples
    #[arg(long, default_value_t = false)]
    no_default_pantry: bool,
    /// Additional requirement, e.g. "no spicy food"
    #[arg(long)]
    note: Option<String>,
    /// Backend endpoint, overriding the configuration
    #[arg(long)]
    endpoint: Option<String>,
    /// Print the assembled prompt and exit without sending it
    #[arg(long, default_value_t = false)]
    print_prompt: bool,
    /// Walk through the recipe step by step
    #[arg(long, default_value_t = false)]
    cook: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    debug!(
        "Loaded config: default provider {}, endpoint {}",
        config.default_provider, config.client.endpoint
    );

    match cli.command {
        Commands::Serve {
            host,
            port,
            provider,
        } => {
            let mut server_config = config.server.clone();
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }
            let provider_name = provider.unwrap_or_else(|| config.default_provider.clone());
            let provider = ProviderFactory::by_name(&provider_name, &config)?;
            server::run(&server_config, RecipeGenerator::new(provider)).await?;
        }
        Commands::Generate(args) => generate(args, &config).await?,
    }

    Ok(())
}

async fn generate(
    args: GenerateArgs,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut profile = ProfileSelector::new();
    profile.set_skill(args.skill);
    profile.set_goal(args.goal);
    profile.set_meal_type(args.meal);
    for item in &args.equipment {
        profile.toggle_equipment(item);
    }
    if let Some(note) = &args.note {
        profile.set_requirement(note.as_str());
    }

    let mut ingredients = IngredientSelector::new();
    for item in &args.ingredients {
        ingredients.set_input(item.as_str());
        ingredients.submit_input();
    }
    ingredients.set_allow_extras(!args.strict);

    let mut pantry = if args.no_default_pantry {
        PantryShelf::with_items(Vec::<String>::new())
    } else {
        PantryShelf::new()
    };
    for item in &args.pantry {
        pantry.add(item);
    }

    println!("{} {}", "Profile:".dimmed(), profile.summary());
    println!("{} {}", "Ingredients:".dimmed(), ingredients.summary());
    println!("{} {}", "Pantry:".dimmed(), pantry.summary());

    let mut page = CookPage::with_collectors(profile, ingredients, pantry);

    if args.print_prompt {
        println!("{}", assemble_prompt(&page.fragments()));
        return Ok(());
    }

    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config.client.endpoint.clone());
    let client = RecipeClient::new(endpoint, Duration::from_secs(config.timeout))?;
    info!("Requesting recipe from {}", client.endpoint());
    println!("{}", page.generate_label().italic());

    if let Err(e) = page.generate(&client).await {
        eprintln!("{} {}", "Could not generate a recipe:".red(), e);
        return Err(e.into());
    }

    if let Some(view) = page.recipe_view_mut() {
        println!();
        print!("{}", render::overview(view));
        if args.cook {
            cook(view)?;
        }
    }

    Ok(())
}

/// Interactive overview / cooking loop on stdin
fn cook(view: &mut RecipeView) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match view.mode() {
            ViewMode::Overview => {
                print!(
                    "\n{} ",
                    "[s]tart cooking, [l]ist prep, [p N] toggle prep, [q]uit >".cyan()
                );
            }
            ViewMode::Cooking => {
                println!();
                print!("{}", render::cooking_step(view));
                print!(
                    "{} ",
                    format!(
                        "[n] {}, [b]ack, [i] {}, [p N] toggle prep, [x] exit >",
                        view.next_label(),
                        view.overlay_label()
                    )
                    .cyan()
                );
            }
        }
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let line = line.trim();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));

        match (view.mode(), command) {
            (_, "q") => return Ok(()),
            (_, "p") => match argument.trim().parse::<usize>() {
                Ok(n) if n >= 1 && n <= view.recipe().ingredients.len() => {
                    let name = view.recipe().ingredients[n - 1].name.clone();
                    view.toggle_prep(&name);
                    print!("{}", render::prep_list(view));
                }
                _ => println!("Pick an ingredient number from the prep list"),
            },
            (ViewMode::Overview, "s") => view.start_cooking(),
            (ViewMode::Overview, "l") => print!("{}", render::prep_list(view)),
            (ViewMode::Cooking, "n") => {
                view.next();
                if view.mode() == ViewMode::Overview {
                    println!("{}", "Enjoy your meal!".green().bold());
                }
            }
            (ViewMode::Cooking, "b") => view.prev(),
            (ViewMode::Cooking, "i") => view.toggle_ingredients_overlay(),
            (ViewMode::Cooking, "x") => view.exit(),
            _ => println!("Unknown command '{}'", line),
        }
    }
}
