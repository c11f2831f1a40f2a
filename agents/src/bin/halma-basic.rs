use anyhow::Context;

use turnwire::Harness;
use turnwire_agents::halma::BasicHalma;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut harness = Harness::new(BasicHalma, stdout.lock());
    harness
        .run(stdin.lock())
        .context("agent terminated abnormally")
}
