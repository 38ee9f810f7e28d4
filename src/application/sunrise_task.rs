use crate::application::state::SunriseSnapshot;
use crate::infrastructure::sunrise::SunriseProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub fn spawn_sunrise_enrichment<P>(
    provider: Arc<P>,
    snapshot: SunriseSnapshot,
    delay: Duration,
) -> JoinHandle<bool>
where
    P: SunriseProvider + ?Sized + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match provider.fetch().await {
            Ok(Some(info)) => {
                log::info!(
                    "sunrise data loaded: sunrise {} sunset {}",
                    info.sunrise,
                    info.sunset
                );
                snapshot.publish(info);
                true
            }
            Ok(None) => {
                log::info!("no sunrise data available");
                false
            }
            Err(error) => {
                log::warn!("sunrise enrichment failed: {error}");
                false
            }
        }
    })
}
