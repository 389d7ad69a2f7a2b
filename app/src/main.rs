use std::process;

use app::{Config, Result, TestEnclave};
use clap::Parser;
use log::{error, info};

fn run(config: &Config) -> Result<()> {
    let enclave = TestEnclave::create(&config.enclave, config.debug)?;

    let mut sum = 0;
    enclave.add_2(config.input, &mut sum)?;
    info!("[+] ECALL success!");

    println!("{} + 2 = {}", config.input, sum);
    Ok(())
}

fn main() {
    let config = Config::parse();
    env_logger::init();

    if let Err(e) = run(&config) {
        error!("[-] {}", e);
        process::exit(1);
    }
    info!("[+] Done!");
}
