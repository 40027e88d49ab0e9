use runset::{IntSet, Interval};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // construct a subscriber that prints formatted traces to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut set = IntSet::new();
    set.add_all(Interval::new(-2, 1)?);
    set.add_all(Interval::new(-3, 2)?);
    tracing::info!(size = set.size(), runs = set.intervals().len(), "built set");

    println!("{}", set);
    for iv in set.intervals() {
        println!("{}", iv);
    }
    Ok(())
}
