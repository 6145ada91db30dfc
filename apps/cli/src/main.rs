use deposit_allocator_cli::config::Config;
use deposit_allocator_cli::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let output = run(&config)?;
    println!("{}", output.trim_end());
    Ok(())
}
