#[tokio::main]
async fn main() {
    client_pulse_be::start_server().await;
}
