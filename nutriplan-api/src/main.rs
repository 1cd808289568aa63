use std::error::Error;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use nutriplan_api::{config::Config, logging, routes, SharedPlanner};
use nutriplan_planner::{MealSampler, Planner, RandomSampler, SeededSampler};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    logging::init(&config.log_config)?;

    let sampler: Box<dyn MealSampler> = match config.seed {
        Some(seed) => {
            info!("Selecting meals with fixed seed {}", seed);
            Box::new(SeededSampler::new(seed))
        }
        None => Box::new(RandomSampler),
    };
    let planner: web::Data<SharedPlanner> = web::Data::new(Planner::new(sampler));

    info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(planner.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
