use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use pico_args::Arguments;

use rope_bridge::{LineSource, Motion, Rope};

const USAGE: &str = "usage: rope_bridge [--followers N] [--render] <input-file>";

fn main() -> Result<()> {
    let mut args = Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let followers: usize = args
        .opt_value_from_str("--followers")
        .context(USAGE)?
        .unwrap_or(9);
    if followers < 1 {
        bail!("--followers must be at least 1");
    }
    let render = args.contains("--render");

    let path: PathBuf = args.free_from_str().context(USAGE)?;
    let remaining = args.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments {remaining:?}\n{USAGE}");
    }

    let source =
        LineSource::open(&path).with_context(|| format!("could not open {}", path.display()))?;

    // One line is read, parsed, and fully applied before the next is
    // touched; the first failure aborts with no count printed.
    let mut rope = Rope::new(followers);
    for line in source {
        let line = line.with_context(|| format!("could not read {}", path.display()))?;
        rope.apply(Motion::from_line(&line)?);
    }

    if render {
        eprint!("{}", rope.render());
    }
    println!("{}", rope.visited_positions());

    Ok(())
}
