mod cmd_args;

use anyhow::{bail, Result};

use laiks_core::Config;
use laiks_ui::render::{render_dashboard, render_search};
use laiks_ui::{AppServices, PipelineOutcome, Route};
use laiks_weather::Coordinate;

use cmd_args::{Command, CommandLineArgs};

#[tokio::main]
async fn main() -> Result<()> {
    laiks_core::init()?;

    let args = CommandLineArgs::parse();
    let (config, _) = Config::load_validated()?;
    let services = AppServices::from_config(config)?;

    tracing::info!("Laiks started");

    match args.command() {
        Command::Search { query, pick } => search(&services, query, *pick).await,
        Command::Weather { lat, lon } => {
            show(&services, &Route::Weather(Coordinate::new(*lat, *lon))).await
        }
        Command::Route { hash } => show(&services, &Route::parse(hash)).await,
        Command::Current => show(&services, &Route::CurrentLocation).await,
    }
}

async fn search(services: &AppServices, query: &str, pick: Option<usize>) -> Result<()> {
    let mut search = services.search_controller();
    search.toggle_overlay();
    search.on_input(query);

    let state = search.settle().await;
    print!("{}", render_search(state, services.locale()));

    let Some(n) = pick else {
        return Ok(());
    };

    match n.checked_sub(1).and_then(|index| search.select(index)) {
        Some(route) => {
            println!();
            show(services, &route).await
        }
        None => bail!("No search result number {}", n),
    }
}

async fn show(services: &AppServices, route: &Route) -> Result<()> {
    let router = services.router();
    let outcome = router.navigate(route).await;
    router.pipeline().location_settled().await;

    let model = router.pipeline().model();
    print!(
        "{}",
        render_dashboard(&model, services.units(), services.locale())
    );

    match outcome {
        PipelineOutcome::Failed(message) => bail!(message),
        PipelineOutcome::NotFound => bail!("No such page: {}", route),
        PipelineOutcome::Completed | PipelineOutcome::Superseded => Ok(()),
    }
}
