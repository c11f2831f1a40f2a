use anyhow::Context;

use turnwire::Harness;
use turnwire_agents::lowest_unique::RandomPick;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut harness = Harness::new(RandomPick, stdout.lock());
    harness
        .run(stdin.lock())
        .context("agent terminated abnormally")
}
