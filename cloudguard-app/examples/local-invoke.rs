use cloudguard_app::{
    cloudguard_handler,
    logging::{self, LogConfig},
    Error,
};

// Runs the handler once outside of Lambda, logging to stdout the same way the
// deployed function does.

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(&LogConfig::from_env())?;
    let result = cloudguard_handler().await;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
