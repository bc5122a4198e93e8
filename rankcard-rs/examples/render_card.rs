use rankcard_rs::{Captions, CardConfig, CardRenderer, Status};

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut config = CardConfig::new();
    config
        .set_avatar("https://cdn.discordapp.com/embed/avatars/0.png")
        .unwrap()
        .set_status(Status::Idle)
        .set_rank(5, None, None)
        .set_level(10, None, None)
        .set_current_xp(250, None)
        .set_required_xp(1000, None)
        .set_username("AVeryLongUsername", Some("#f3f3f3"))
        .set_discriminator("0001", None);

    let png = CardRenderer::new()
        .render(&config, &Captions::default())
        .await
        .expect("Failed to render card");

    std::fs::write("card.png", png).expect("Failed to write card.png");
    println!("Wrote card.png");
}
