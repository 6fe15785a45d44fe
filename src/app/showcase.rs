use crate::adapters::{LogPresenter, SampleProvider};
use crate::config::{Demo, Settings};
use crate::core::coordinator::Coordinator;
use crate::domain::animals::{describe_movement, Bird, Fish};
use crate::domain::shapes::{default_shapes, describe_area};
use crate::domain::workers::{lunch_break, run_shift, Eatable, Human, Robot, Workable};
use crate::utils::error::Result;

/// Run the showcase picked by `settings.demo`, or every showcase for [`Demo::All`].
pub async fn run_demo(settings: &Settings) -> Result<()> {
    match settings.demo {
        Demo::Users => run_users(settings).await,
        Demo::Shapes => {
            run_shapes();
            Ok(())
        }
        Demo::Animals => {
            run_animals();
            Ok(())
        }
        Demo::Workers => {
            run_workers();
            Ok(())
        }
        Demo::All => {
            run_users(settings).await?;
            run_shapes();
            run_animals();
            run_workers();
            Ok(())
        }
    }
}

/// Fetch and display the sample record, then save it.
pub async fn run_users(settings: &Settings) -> Result<()> {
    tracing::info!("--- users ---");
    let provider = SampleProvider::new(settings.sample.clone(), settings.delay());
    let coordinator = Coordinator::new(provider, LogPresenter);

    coordinator.initialize().await?;
    coordinator.persist(&settings.sample).await
}

pub fn run_shapes() -> Vec<String> {
    tracing::info!("--- shapes ---");
    default_shapes()
        .iter()
        .map(|shape| {
            let line = describe_area(shape.as_ref());
            tracing::info!("{}", line);
            line
        })
        .collect()
}

pub fn run_animals() -> Vec<String> {
    tracing::info!("--- animals ---");
    vec![describe_movement(&Bird), describe_movement(&Fish)]
}

pub fn run_workers() -> Vec<String> {
    tracing::info!("--- workers ---");
    let crew: [&dyn Workable; 2] = [&Human, &Robot];
    let eaters: [&dyn Eatable; 1] = [&Human];

    let mut lines = run_shift(&crew);
    lines.extend(lunch_break(&eaters));
    lines
}
