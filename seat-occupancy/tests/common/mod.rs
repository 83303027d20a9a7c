use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use seat_occupancy::config::Config;
use seat_occupancy::server::serve;

pub struct ServerHandle {
    pub addr: SocketAddr,
    shutdown: Arc<Notify>,
}

impl ServerHandle {
    pub async fn for_config(config: Config) -> ServerHandle {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let notify = Arc::new(Notify::new());
        let shutdown = notify.clone();

        tokio::spawn(async move {
            serve(config, listener, async move { notify.notified().await }).await
        });
        ServerHandle { addr, shutdown }
    }

    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        let client = reqwest::Client::new();
        client
            .get(format!("http://{:?}{}", self.addr, path_and_query))
            .send()
            .await
            .expect("failed to send request")
    }

    pub async fn get_occupancy(
        &self,
        flight_id: &str,
        flight_date: &str,
        cabin_class: &str,
        total_seats: i64,
    ) -> reqwest::Response {
        self.get(&format!(
            "/occupancy?flight_id={flight_id}&flight_date={flight_date}\
             &cabin_class={cabin_class}&total_seats={total_seats}"
        ))
        .await
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown.notify_one()
    }
}
