#[tokio::main]
async fn main() {
    clinic::start_server().await;
}
