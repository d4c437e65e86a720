use cloudguard_app::{
    invoke,
    logging::{self, LogConfig},
    Error,
};
use lamedh_runtime::{handler_fn, run};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(&LogConfig::from_env())?;
    run(handler_fn(invoke)).await?;
    Ok(())
}
