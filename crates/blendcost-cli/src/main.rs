use blendcost_cli::render;
use blendcost_cli::{Cli, Command};
use blendcost_engine::PricingEngine;

fn main() -> anyhow::Result<()> {
    blendcost_core::tracing::init_tracing();
    let cli = Cli::parse_args();

    match cli.command {
        Command::Quote(args) => {
            let config = args.config.resolve()?;
            let engine = PricingEngine::from_config(&config)?;
            let input = args.input();
            let result = engine.calculate_price(&input);
            tracing::info!(
                minutes = input.minutes,
                complexity = input.complexity_factor,
                total_max = result.total_price_range.max,
                "quoted"
            );
            if args.json {
                println!("{}", render::json(&result)?);
            } else {
                print!("{}", render::summary(&input, &result));
            }
        }
        Command::Config(args) => {
            let config = args.resolve()?;
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
