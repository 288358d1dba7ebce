use std::time::Duration;

use chrono::Utc;
use hearth_common::HearthError;
use hearth_config::HearthConfig;
use hearth_widgets::Clock;

pub async fn run(config: &HearthConfig, once: bool) -> Result<(), HearthError> {
    let clock = Clock::new(&config.clock.timezone)?;
    let print = || {
        let now = Utc::now();
        println!("{}  {}", clock.time_text(now), clock.date_text(now));
    };

    if once {
        print();
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = ticker.tick() => print(),
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}
