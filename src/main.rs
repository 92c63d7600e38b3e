use clap::Parser;
use dotenv::dotenv;
use log::*;
use std::collections::HashMap;
use std::path::Path;
use std::process;
use anyhow::Result;

use rancher_kubeconfig::{pipeline, settings, Opts, Settings};

fn main() {
    env_logger::init();
    dotenv().ok();
    let options = Opts::parse();

    if let Err(error) = run(&options) {
        // the full chain: the failed step, followed by its cause(s).
        println!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(
    options: &Opts,
) -> Result<()>
{
    let mut changed_options: HashMap<&str, String> = HashMap::new();
    let settings = Settings::from_env(options, &mut changed_options)?;
    debug!("{:?}", settings);

    pipeline::run(&settings, options.print)?;

    settings::dotenv_writer(options.write_dotenv, changed_options, Path::new(".env"))?;
    Ok(())
}
